//! Password strength evaluation and generation library
//!
//! This library scores passwords with three fixed checks (length, character
//! diversity, common-password denylist), generates random passwords that
//! satisfy every check, and offers a small session type that tracks input,
//! generation, and a masked history of past checks.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_guardian::{StrengthLabel, evaluate_password_strength, generate_password};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! // Evaluate a password
//! let password = SecretString::new("Str0ng!Pass99".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.label, StrengthLabel::Strong);
//! assert_eq!(evaluation.score.value(), 7);
//!
//! // Generate one that passes every check
//! let generated = generate_password(12).expect("12 is a valid length");
//! assert_eq!(generated.expose_secret().len(), 12);
//! ```

// Internal modules
mod criteria;
mod denylist;
mod evaluator;
mod generator;
mod sections;
mod session;
mod types;

// Public API
pub use criteria::{CriteriaReport, Criterion, MIN_LENGTH, RECOMMENDED_LENGTH, SPECIAL_CHARS};
pub use denylist::{denylist, is_denylisted};
pub use evaluator::evaluate_password_strength;
pub use generator::{GenerateError, MIN_GENERATED_LENGTH, generate_password};
pub use session::{HistoryEntry, Session};
pub use types::{Evaluation, Score, StrengthLabel};
