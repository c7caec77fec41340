//! Length section - scores the password's character count.

use super::{Adjustment, SectionReport};
use crate::criteria::{MIN_LENGTH, RECOMMENDED_LENGTH};

/// Scores password length.
///
/// Three buckets, no more: 12+ characters earn 2 points, 8-11 earn 1,
/// anything shorter earns nothing. Exactly one finding is emitted either
/// way.
pub fn length_section(pwd: &str) -> SectionReport {
    let length = pwd.chars().count();

    if length >= RECOMMENDED_LENGTH {
        SectionReport {
            adjustment: Adjustment::Award(2),
            finding: Some(format!(
                "Password length is excellent ({}+ characters)",
                RECOMMENDED_LENGTH
            )),
        }
    } else if length >= MIN_LENGTH {
        SectionReport {
            adjustment: Adjustment::Award(1),
            finding: Some(format!(
                "Password length is good but could be longer ({}+ recommended)",
                RECOMMENDED_LENGTH
            )),
        }
    } else {
        SectionReport {
            adjustment: Adjustment::Award(0),
            finding: Some(format!(
                "Password should be at least {} characters long",
                MIN_LENGTH
            )),
        }
    }
}
