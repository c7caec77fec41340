//! Common-password denylist
//!
//! A fixed set of known-weak passwords penalized regardless of any other
//! criteria. Membership is case-insensitive. The set is built once on first
//! use and never changes at runtime.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The known-weak passwords, stored lowercase.
const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "12345678",
    "qwerty123",
    "letmein",
    "admin123",
    "welcome1",
    "monkey",
    "sunshine",
    "password1",
    "123456789",
];

static DENYLIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let set: HashSet<&'static str> = COMMON_PASSWORDS.into_iter().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Denylist initialized: {} passwords", set.len());

    set
});

/// Returns the full denylist.
pub fn denylist() -> &'static HashSet<&'static str> {
    &DENYLIST
}

/// Checks if a password is on the denylist.
///
/// The match is case-insensitive and against the whole password; a
/// denylisted entry appearing as a substring does not count.
pub fn is_denylisted(password: &str) -> bool {
    DENYLIST.contains(password.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denylist_has_ten_entries() {
        assert_eq!(denylist().len(), 10);
        assert!(denylist().contains("letmein"));
        assert!(denylist().contains("123456789"));
    }

    #[test]
    fn test_is_denylisted_case_insensitive() {
        assert!(is_denylisted("password"));
        assert!(is_denylisted("PASSWORD"));
        assert!(is_denylisted("QwErTy123"));
    }

    #[test]
    fn test_is_denylisted_whole_password_only() {
        assert!(!is_denylisted("xpasswordx"));
        assert!(!is_denylisted("password2"));
    }

    #[test]
    fn test_empty_string_is_not_denylisted() {
        assert!(!is_denylisted(""));
    }
}
