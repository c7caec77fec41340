//! Password criteria
//!
//! The fixed, ordered set of boolean checks behind both the scoring
//! sections and the live checklist a UI shows while the user types.

use secrecy::{ExposeSecret, SecretString};

use crate::denylist::is_denylisted;

/// Minimum acceptable password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Recommended password length, in characters.
pub const RECOMMENDED_LENGTH: usize = 12;

/// The special characters the diversity check recognizes.
///
/// Exactly these eight; other punctuation does not count as special.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

pub(crate) fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// A single boolean check over a password.
///
/// The variant order is the fixed presentation order of the criterion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    LengthMin8,
    LengthMin12,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecial,
    NotCommon,
}

impl Criterion {
    /// Every criterion, in presentation order.
    pub const ALL: [Criterion; 7] = [
        Criterion::LengthMin8,
        Criterion::LengthMin12,
        Criterion::HasUppercase,
        Criterion::HasLowercase,
        Criterion::HasDigit,
        Criterion::HasSpecial,
        Criterion::NotCommon,
    ];

    /// The six criteria a live checklist displays: minimum length, the four
    /// character classes, and denylist membership. The recommended-length
    /// criterion only contributes to scoring.
    pub const MINIMUM_STANDARDS: [Criterion; 6] = [
        Criterion::LengthMin8,
        Criterion::HasUppercase,
        Criterion::HasLowercase,
        Criterion::HasDigit,
        Criterion::HasSpecial,
        Criterion::NotCommon,
    ];

    /// Stable identifier, usable as a key.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::LengthMin8 => "length_min8",
            Criterion::LengthMin12 => "length_min12",
            Criterion::HasUppercase => "has_uppercase",
            Criterion::HasLowercase => "has_lowercase",
            Criterion::HasDigit => "has_digit",
            Criterion::HasSpecial => "has_special",
            Criterion::NotCommon => "not_common",
        }
    }

    /// Human-readable checklist line.
    pub fn description(self) -> &'static str {
        match self {
            Criterion::LengthMin8 => "At least 8 characters",
            Criterion::LengthMin12 => "At least 12 characters",
            Criterion::HasUppercase => "Contains uppercase letter (A-Z)",
            Criterion::HasLowercase => "Contains lowercase letter (a-z)",
            Criterion::HasDigit => "Contains digit (0-9)",
            Criterion::HasSpecial => "Contains special character (!@#$%^&*)",
            Criterion::NotCommon => "Not a common password",
        }
    }
}

/// Immutable record of which criteria a password satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaReport {
    met: [bool; 7],
}

impl CriteriaReport {
    /// Inspects a password against every criterion.
    ///
    /// Cheap enough to run on each keystroke for a live checklist; the full
    /// evaluator embeds the same report in its result.
    pub fn for_password(password: &SecretString) -> Self {
        Self::from_exposed(password.expose_secret())
    }

    pub(crate) fn from_exposed(pwd: &str) -> Self {
        let length = pwd.chars().count();
        let mut report = CriteriaReport { met: [false; 7] };
        report.set(Criterion::LengthMin8, length >= MIN_LENGTH);
        report.set(Criterion::LengthMin12, length >= RECOMMENDED_LENGTH);
        report.set(Criterion::HasUppercase, has_uppercase(pwd));
        report.set(Criterion::HasLowercase, has_lowercase(pwd));
        report.set(Criterion::HasDigit, has_digit(pwd));
        report.set(Criterion::HasSpecial, has_special(pwd));
        report.set(Criterion::NotCommon, !is_denylisted(pwd));
        report
    }

    fn set(&mut self, criterion: Criterion, met: bool) {
        self.met[criterion as usize] = met;
    }

    /// Whether the given criterion was satisfied.
    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met[criterion as usize]
    }

    pub fn all_met(&self) -> bool {
        self.met.iter().all(|&m| m)
    }

    /// Criteria with their outcomes, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.is_met(c)))
    }
}
