//! Denylist section - penalizes common passwords, rewards novelty.

use super::{Adjustment, SectionReport};
use crate::denylist::is_denylisted;

/// Applies the common-password check.
///
/// A denylisted password loses 2 points; anything else earns 1 point with
/// no finding attached.
pub fn denylist_section(pwd: &str) -> SectionReport {
    if is_denylisted(pwd) {
        SectionReport {
            adjustment: Adjustment::Penalize(2),
            finding: Some("Password is in common passwords list - very insecure!".to_string()),
        }
    } else {
        SectionReport {
            adjustment: Adjustment::Award(1),
            finding: None,
        }
    }
}
