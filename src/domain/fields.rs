//! Mode-specific field sets and their fixed French labels.

use std::str::FromStr;

/// Substitute text inserted for any blank field. The composer never leaves a
/// labeled section empty.
pub const PLACEHOLDER: &str = "non communiqué";

/// Return the trimmed field value, or the placeholder when blank.
pub fn or_placeholder(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { PLACEHOLDER } else { trimmed }
}

/// Clinical field set for guided mode. Every field is free text and may be
/// empty; substitution happens at composition time.
#[derive(Debug, Clone, Default)]
pub struct GuidedFields {
    /// Identité (Nom, Prénom, Âge, Sexe).
    pub identity: String,
    /// IPP / N° dossier.
    pub ipp: String,
    /// Service / UF.
    pub service: String,
    /// Date d'entrée.
    pub admission_date: String,
    /// Date de sortie.
    pub discharge_date: String,
    /// Médecin référent.
    pub physician: String,
    /// Diagnostic principal.
    pub main_diagnosis: String,
    /// Diagnostics associés.
    pub associated_diagnoses: String,
    /// Motif d'hospitalisation.
    pub reason: String,
    /// Histoire de la maladie (HDM).
    pub history: String,
    /// Examen clinique à l'entrée.
    pub clinical_exam: String,
    /// Examens complémentaires.
    pub investigations: String,
    /// Évolution / actes réalisés.
    pub course: String,
    /// Traitement habituel à l'entrée.
    pub admission_treatment: String,
    /// Traitement de sortie / modifications.
    pub discharge_treatment: String,
    /// Situation sociale / mode de vie.
    pub social_context: String,
    /// Recommandations / suivi post-hospitalisation.
    pub follow_up: String,
}

/// Rewrite instruction for free-form mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteInstruction {
    /// Réécrire le texte pour un style CRH pro.
    #[default]
    ProfessionalStyle,
    /// Corriger/compléter en gardant la structure.
    CorrectAndComplete,
    /// Synthétiser en une page.
    OnePageSummary,
    /// Traduire en français simple pour le patient.
    PlainLanguage,
}

impl RewriteInstruction {
    pub const ALL: [RewriteInstruction; 4] = [
        RewriteInstruction::ProfessionalStyle,
        RewriteInstruction::CorrectAndComplete,
        RewriteInstruction::OnePageSummary,
        RewriteInstruction::PlainLanguage,
    ];

    /// Objective sentence inserted into the free-form prompt.
    pub fn objective(&self) -> &'static str {
        match self {
            RewriteInstruction::ProfessionalStyle => "Réécrire le texte pour un style CRH pro",
            RewriteInstruction::CorrectAndComplete => {
                "Corriger/compléter en gardant la structure"
            }
            RewriteInstruction::OnePageSummary => "Synthétiser en une page",
            RewriteInstruction::PlainLanguage => {
                "Traduire en français simple pour le patient (plain language)"
            }
        }
    }

    /// CLI identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteInstruction::ProfessionalStyle => "pro",
            RewriteInstruction::CorrectAndComplete => "correct",
            RewriteInstruction::OnePageSummary => "summary",
            RewriteInstruction::PlainLanguage => "plain",
        }
    }
}

impl FromStr for RewriteInstruction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pro" => Ok(RewriteInstruction::ProfessionalStyle),
            "correct" => Ok(RewriteInstruction::CorrectAndComplete),
            "summary" => Ok(RewriteInstruction::OnePageSummary),
            "plain" => Ok(RewriteInstruction::PlainLanguage),
            other => Err(format!(
                "Unknown instruction '{}': expected pro, correct, summary, or plain",
                other
            )),
        }
    }
}

/// Student level for didactic mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewLevel {
    Dfasm1,
    Dfasm2,
    /// DFASM3 / Interne (default, matching the form).
    #[default]
    Resident,
}

impl ReviewLevel {
    /// Label inserted into the didactic prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewLevel::Dfasm1 => "DFASM1",
            ReviewLevel::Dfasm2 => "DFASM2",
            ReviewLevel::Resident => "DFASM3 / Interne",
        }
    }
}

impl FromStr for ReviewLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dfasm1" => Ok(ReviewLevel::Dfasm1),
            "dfasm2" => Ok(ReviewLevel::Dfasm2),
            "dfasm3" | "interne" | "resident" => Ok(ReviewLevel::Resident),
            other => Err(format!(
                "Unknown level '{}': expected dfasm1, dfasm2, dfasm3, or interne",
                other
            )),
        }
    }
}

/// Evaluation severity for didactic mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSeverity {
    Lenient,
    #[default]
    Standard,
    Demanding,
}

impl ReviewSeverity {
    /// Label inserted into the didactic prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewSeverity::Lenient => "Bienveillance",
            ReviewSeverity::Standard => "Standard",
            ReviewSeverity::Demanding => "Exigeant",
        }
    }
}

impl FromStr for ReviewSeverity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "bienveillance" | "lenient" => Ok(ReviewSeverity::Lenient),
            "standard" => Ok(ReviewSeverity::Standard),
            "exigeant" | "demanding" => Ok(ReviewSeverity::Demanding),
            other => Err(format!(
                "Unknown severity '{}': expected bienveillance, standard, or exigeant",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_substitutes_blank_and_whitespace() {
        assert_eq!(or_placeholder(""), PLACEHOLDER);
        assert_eq!(or_placeholder("   \n\t"), PLACEHOLDER);
        assert_eq!(or_placeholder("  HTA  "), "HTA");
    }

    #[test]
    fn rewrite_instruction_round_trips_through_identifier() {
        for instruction in RewriteInstruction::ALL {
            assert_eq!(instruction.as_str().parse::<RewriteInstruction>(), Ok(instruction));
        }
    }

    #[test]
    fn rewrite_instruction_rejects_unknown() {
        assert!("verbose".parse::<RewriteInstruction>().is_err());
    }

    #[test]
    fn review_defaults_match_form_defaults() {
        assert_eq!(ReviewLevel::default().label(), "DFASM3 / Interne");
        assert_eq!(ReviewSeverity::default().label(), "Standard");
    }

    #[test]
    fn review_parsing_accepts_french_and_english_spellings() {
        assert_eq!("interne".parse::<ReviewLevel>(), Ok(ReviewLevel::Resident));
        assert_eq!("Exigeant".parse::<ReviewSeverity>(), Ok(ReviewSeverity::Demanding));
        assert_eq!("lenient".parse::<ReviewSeverity>(), Ok(ReviewSeverity::Lenient));
    }
}
