//! Static reference blocks embedded at compile time.
//!
//! These are the reusable text blocks a clinician can toggle into the
//! composed prompt: the CRH style guide, a worked reference example, and the
//! HAS quality-criteria checklist.

/// Embedded reference assets.
pub mod blocks {
    /// CRH writing style rules.
    pub static STYLE_GUIDE: &str = include_str!("assets/style_guide.txt");
    /// Generic worked CRH example (editable by the user at invocation time).
    pub static WORKED_EXAMPLE: &str = include_str!("assets/worked_example.txt");
    /// HAS « Qualité du document de sortie » 12-criteria checklist.
    pub static QUALITY_CHECKLIST: &str = include_str!("assets/quality_checklist.txt");
}
