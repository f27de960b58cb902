/// Operating mode of the assistant. Each mode owns one form layout and one
/// prompt shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Structured field entry rendered into labeled sections.
    Guided,
    /// Rewrite/improve a pasted draft under one instruction.
    Freeform,
    /// Pedagogical review of a draft with a fixed deliverables list.
    Didactic,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Guided, Mode::Freeform, Mode::Didactic];

    /// Stable identifier used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Guided => "guided",
            Mode::Freeform => "freeform",
            Mode::Didactic => "didactic",
        }
    }

    /// Filename prefix for exported documents of this mode.
    pub fn export_prefix(&self) -> &'static str {
        match self {
            Mode::Guided => "CRH",
            Mode::Freeform => "CRH_libre",
            Mode::Didactic => "CRH_didactique",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_prefixes_are_distinct() {
        let mut prefixes: Vec<&str> = Mode::ALL.iter().map(|m| m.export_prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), Mode::ALL.len());
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(Mode::Guided.to_string(), "guided");
        assert_eq!(Mode::Didactic.to_string(), "didactic");
    }
}
