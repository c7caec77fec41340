//! Core evaluation types: score, strength label, evaluation result.

use std::fmt;

use crate::criteria::CriteriaReport;

/// Numeric strength score produced by the evaluator.
///
/// Bounded to `0..=Score::MAX` by construction: the length section awards up
/// to 2 points, the diversity section up to 4, and the denylist section
/// either awards 1 or subtracts 2 with a floor of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Highest reachable score: excellent length (+2), all four character
    /// classes (+4), not on the denylist (+1).
    pub const MAX: u8 = 7;

    /// Fixed denominator used when displaying the score to a user.
    pub const DENOMINATOR: u8 = 10;

    pub fn new(value: u8) -> Self {
        Score(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Score as a fill ratio for a progress indicator, clamped to `1.0`.
    pub fn as_fraction(&self) -> f64 {
        (f64::from(self.0) / f64::from(Self::DENOMINATOR)).min(1.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::DENOMINATOR)
    }
}

/// Qualitative strength tier derived from the numeric score.
///
/// Variants are ordered weakest to strongest, so labels compare directly:
/// `StrengthLabel::Strong > StrengthLabel::Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
    ExtremelyStrong,
}

impl StrengthLabel {
    /// Maps a final score to its label.
    ///
    /// Thresholds are inclusive and checked highest-first: >= 8 Extremely
    /// Strong, >= 6 Strong, >= 4 Moderate, anything lower Weak.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            8.. => StrengthLabel::ExtremelyStrong,
            6..=7 => StrengthLabel::Strong,
            4..=5 => StrengthLabel::Moderate,
            _ => StrengthLabel::Weak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::ExtremelyStrong => "Extremely Strong",
        };
        f.write_str(name)
    }
}

/// Result of a single password evaluation.
///
/// Immutable once produced. Evaluation is a pure function of the password
/// and the static denylist, so evaluating the same input twice yields equal
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub label: StrengthLabel,
    /// Human-readable findings, one per scoring section that emitted one,
    /// in section order.
    pub findings: Vec<String>,
    /// Which individual criteria the password satisfied.
    pub criteria: CriteriaReport,
}

impl Evaluation {
    /// Whether the password clears the recommended security bar
    /// (label `Strong` or better, i.e. score >= 6).
    pub fn meets_recommended_standards(&self) -> bool {
        self.label >= StrengthLabel::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(Score::new(0)), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(Score::new(3)), StrengthLabel::Weak);
        assert_eq!(
            StrengthLabel::from_score(Score::new(4)),
            StrengthLabel::Moderate
        );
        assert_eq!(
            StrengthLabel::from_score(Score::new(5)),
            StrengthLabel::Moderate
        );
        assert_eq!(
            StrengthLabel::from_score(Score::new(6)),
            StrengthLabel::Strong
        );
        assert_eq!(
            StrengthLabel::from_score(Score::new(7)),
            StrengthLabel::Strong
        );
        assert_eq!(
            StrengthLabel::from_score(Score::new(8)),
            StrengthLabel::ExtremelyStrong
        );
    }

    #[test]
    fn test_label_ordering() {
        assert!(StrengthLabel::Weak < StrengthLabel::Moderate);
        assert!(StrengthLabel::Moderate < StrengthLabel::Strong);
        assert!(StrengthLabel::Strong < StrengthLabel::ExtremelyStrong);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
        assert_eq!(
            StrengthLabel::ExtremelyStrong.to_string(),
            "Extremely Strong"
        );
    }

    #[test]
    fn test_score_display_out_of_ten() {
        assert_eq!(Score::new(0).to_string(), "0/10");
        assert_eq!(Score::new(7).to_string(), "7/10");
    }

    #[test]
    fn test_score_fraction_clamped() {
        assert!((Score::new(7).as_fraction() - 0.7).abs() < f64::EPSILON);
        assert!((Score::new(0).as_fraction()).abs() < f64::EPSILON);
        // Out-of-range values cannot come out of the evaluator, but the
        // display contract still clamps.
        assert!((Score::new(12).as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_max_matches_section_awards() {
        assert_eq!(Score::MAX, 2 + 4 + 1);
    }
}
