//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod denylist;
mod diversity;
mod length;

pub use denylist::denylist_section;
pub use diversity::diversity_section;
pub use length::length_section;

/// How a section adjusts the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Add points to the score.
    Award(u8),
    /// Subtract points from the score, floored at zero.
    Penalize(u8),
}

/// Outcome of a single scoring section.
/// - `adjustment` - How the section changes the score
/// - `finding` - Explanation of the decision, if the section emits one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub adjustment: Adjustment,
    pub finding: Option<String>,
}

/// Signature shared by all scoring sections.
pub type Section = fn(&str) -> SectionReport;
