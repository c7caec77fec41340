//! Diversity section - scores uppercase, lowercase, digit and special
//! character coverage.

use super::{Adjustment, SectionReport};
use crate::criteria::{has_digit, has_lowercase, has_special, has_uppercase};

/// Scores character diversity, one point per class present.
///
/// All four classes yield a single excellent-diversity finding; otherwise
/// the finding names the missing classes, comma-joined, in the fixed order
/// uppercase, lowercase, digit, special.
pub fn diversity_section(pwd: &str) -> SectionReport {
    let classes = [
        ("uppercase", has_uppercase(pwd)),
        ("lowercase", has_lowercase(pwd)),
        ("digit", has_digit(pwd)),
        ("special", has_special(pwd)),
    ];

    let satisfied = classes.iter().filter(|(_, present)| *present).count();

    let finding = if satisfied == classes.len() {
        "Excellent character diversity (uppercase, lowercase, number, special)".to_string()
    } else {
        let missing: Vec<&str> = classes
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();
        format!("Missing character types: {}", missing.join(", "))
    };

    SectionReport {
        adjustment: Adjustment::Award(satisfied as u8),
        finding: Some(finding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diversity_section_all_classes() {
        let report = diversity_section("HasAll123!");
        assert_eq!(report.adjustment, Adjustment::Award(4));
        assert_eq!(
            report.finding,
            Some(
                "Excellent character diversity (uppercase, lowercase, number, special)"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_diversity_section_missing_uppercase() {
        let report = diversity_section("lowercase123!");
        assert_eq!(report.adjustment, Adjustment::Award(3));
        assert_eq!(
            report.finding,
            Some("Missing character types: uppercase".to_string())
        );
    }

    #[test]
    fn test_diversity_section_missing_in_fixed_order() {
        let report = diversity_section("password");
        assert_eq!(report.adjustment, Adjustment::Award(1));
        assert_eq!(
            report.finding,
            Some("Missing character types: uppercase, digit, special".to_string())
        );
    }

    #[test]
    fn test_diversity_section_empty_misses_everything() {
        let report = diversity_section("");
        assert_eq!(report.adjustment, Adjustment::Award(0));
        assert_eq!(
            report.finding,
            Some("Missing character types: uppercase, lowercase, digit, special".to_string())
        );
    }

    #[test]
    fn test_diversity_section_unrecognized_punctuation() {
        // '?' is not one of the eight recognized special characters.
        let report = diversity_section("Password1?");
        assert_eq!(report.adjustment, Adjustment::Award(3));
        assert_eq!(
            report.finding,
            Some("Missing character types: special".to_string())
        );
    }
}
