//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::CriteriaReport;
use crate::sections::{Adjustment, Section, denylist_section, diversity_section, length_section};
use crate::types::{Evaluation, Score, StrengthLabel};

/// Evaluates password strength and returns a detailed evaluation.
///
/// Never fails, whatever the input: an empty password simply fails the
/// length and diversity checks. Pure function of the password and the
/// static denylist, so repeated calls on the same input yield identical
/// results.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `Evaluation` with the numeric score, its label, the findings, and
/// the per-criterion outcomes.
pub fn evaluate_password_strength(password: &SecretString) -> Evaluation {
    let pwd = password.expose_secret();

    // Execute sections in sequence. The denylist section must run last so
    // its penalty applies to the points accumulated by the others.
    let sections: [Section; 3] = [length_section, diversity_section, denylist_section];

    let mut findings = Vec::new();
    let mut points: u8 = 0;

    for section in sections {
        let report = section(pwd);
        match report.adjustment {
            Adjustment::Award(n) => points += n,
            Adjustment::Penalize(n) => points = points.saturating_sub(n),
        }
        if let Some(finding) = report.finding {
            findings.push(finding);
        }
    }

    let score = Score::new(points);
    let label = StrengthLabel::from_score(score);
    let criteria = CriteriaReport::from_exposed(pwd);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password evaluated: {} ({})", score, label);

    Evaluation {
        score,
        label,
        findings,
        criteria,
    }
}
