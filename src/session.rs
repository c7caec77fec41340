//! Interactive checking session: current input, generation, check history.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use secrecy::{ExposeSecret, SecretString};

use crate::criteria::{CriteriaReport, Criterion};
use crate::evaluator::evaluate_password_strength;
use crate::generator::{GenerateError, generate_password};
use crate::types::{Evaluation, Score, StrengthLabel};

/// Display format for history timestamps, minute precision.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One past strength check. The password itself is not retained, only a
/// mask of the same character length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub checked_at: DateTime<Local>,
    pub label: StrengthLabel,
    pub score: Score,
    /// One `*` per character of the checked password.
    pub masked_password: String,
}

impl HistoryEntry {
    /// Timestamp formatted for display, e.g. `2026-08-23 14:05`.
    pub fn checked_at_display(&self) -> String {
        self.checked_at.format(TIME_FORMAT).to_string()
    }
}

/// A stateful checking session: the password being typed, the most recently
/// generated password, and a short history of past checks.
///
/// # Examples
///
/// ```
/// use pwd_guardian::Session;
/// use secrecy::SecretString;
///
/// let mut session = Session::new();
/// session.set_input(SecretString::new("Str0ng!Pass99".to_string().into()));
///
/// let evaluation = session.check_strength().expect("input is not empty");
/// assert_eq!(evaluation.score.value(), 7);
/// assert_eq!(session.history().count(), 1);
/// ```
pub struct Session {
    input: SecretString,
    last_generated: Option<SecretString>,
    history: VecDeque<HistoryEntry>,
}

impl Session {
    /// Shortest password `generate` will produce.
    pub const MIN_LENGTH: usize = 8;

    /// Longest password `generate` will produce.
    pub const MAX_LENGTH: usize = 20;

    /// Generation length when the caller has no preference.
    pub const DEFAULT_LENGTH: usize = 12;

    /// Number of past checks retained.
    pub const HISTORY_CAPACITY: usize = 5;

    pub fn new() -> Self {
        Session {
            input: SecretString::new(String::new().into()),
            last_generated: None,
            history: VecDeque::new(),
        }
    }

    /// Replaces the password under inspection.
    pub fn set_input(&mut self, password: SecretString) {
        self.input = password;
    }

    /// The password currently under inspection.
    pub fn input(&self) -> &SecretString {
        &self.input
    }

    /// Live checklist for the current input: each minimum-standard criterion
    /// with its outcome, in presentation order.
    pub fn minimum_standards(&self) -> [(Criterion, bool); 6] {
        let report = CriteriaReport::for_password(&self.input);
        Criterion::MINIMUM_STANDARDS.map(|criterion| (criterion, report.is_met(criterion)))
    }

    /// Evaluates the current input and records the outcome in the history.
    ///
    /// Returns `None` without touching the history when the input is empty:
    /// there is nothing to evaluate or record yet.
    pub fn check_strength(&mut self) -> Option<Evaluation> {
        let masked_password = {
            let pwd = self.input.expose_secret();
            if pwd.is_empty() {
                return None;
            }
            "*".repeat(pwd.chars().count())
        };

        let evaluation = evaluate_password_strength(&self.input);

        self.history.push_front(HistoryEntry {
            checked_at: Local::now(),
            label: evaluation.label,
            score: evaluation.score,
            masked_password,
        });
        self.history.truncate(Self::HISTORY_CAPACITY);

        Some(evaluation)
    }

    /// Generates a password, makes it the current input, and returns it.
    ///
    /// `length` is clamped to `MIN_LENGTH..=MAX_LENGTH` before generation,
    /// so any requested length yields a password.
    pub fn generate(&mut self, length: usize) -> Result<&SecretString, GenerateError> {
        let length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
        let password = generate_password(length)?;
        self.input = SecretString::new(password.expose_secret().to_owned().into());
        Ok(self.last_generated.insert(password))
    }

    /// The most recently generated password, if any.
    pub fn last_generated(&self) -> Option<&SecretString> {
        self.last_generated.as_ref()
    }

    /// Past checks, newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
