//! Safe SQL identifier checks.
//!
//! Values never reach the SQL text (they are bound through `:name`
//! placeholders), so identifiers are the only injection surface left. An
//! identifier is accepted when it matches `^[A-Za-z0-9_]+$`: no whitespace,
//! quotes, parentheses, semicolons or other punctuation.
//!
//! Validation is skipped when the statement runs in [`SafetyMode::Unchecked`]
//! or when the call passes its input through [`Trusted`](crate::Trusted).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{SqlError, SqlResult};

/// Returns `true` if `name` is a plain word identifier.
pub fn is_safe_name(name: &str) -> bool {
    static SAFE_NAME_RE: OnceLock<Regex> = OnceLock::new();
    SAFE_NAME_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("invalid built-in identifier regex"))
        .is_match(name)
}

/// Statement-wide identifier validation mode.
///
/// A statement starts `Checked` unless configured otherwise and can only be
/// promoted to `Unchecked`, never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SafetyMode {
    /// Reject identifiers that are not plain words.
    #[default]
    Checked,
    /// Accept any identifier.
    Unchecked,
}

impl SafetyMode {
    pub fn from_safe_by_default(safe: bool) -> Self {
        if safe { Self::Unchecked } else { Self::Checked }
    }

    pub fn is_unchecked(self) -> bool {
        self == Self::Unchecked
    }

    /// Check a single name. `names` is the full candidate list the name came
    /// from and is only used for the error.
    pub fn check_name(self, name: &str, names: &[String], bypass: bool) -> SqlResult<()> {
        if self.is_unchecked() || bypass || is_safe_name(name) {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(identifier = name, ?names, "rejected unsafe identifier");
        Err(SqlError::unsafe_identifier(name, names))
    }

    /// Check every name in order, failing on the first unsafe one.
    pub fn check_names(self, names: &[String], bypass: bool) -> SqlResult<()> {
        if self.is_unchecked() || bypass {
            #[cfg(feature = "tracing")]
            tracing::debug!(?names, mode = ?self, bypass, "identifier validation skipped");
            return Ok(());
        }
        names
            .iter()
            .try_for_each(|name| self.check_name(name, names, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_word_characters() {
        assert!(is_safe_name("users"));
        assert!(is_safe_name("user_id"));
        assert!(is_safe_name("Col2"));
        assert!(is_safe_name("1st"));
        assert!(is_safe_name("_"));
    }

    #[test]
    fn rejects_punctuation_and_space() {
        for name in [
            "",
            "a b",
            "a;b",
            "a'b",
            "a\"b",
            "a(b)",
            "a-b",
            "a.b",
            "a,b",
            "users; DROP TABLE users; --",
            "é",
        ] {
            assert!(!is_safe_name(name), "{name:?} should be unsafe");
        }
    }

    #[test]
    fn checked_mode_rejects_unsafe() {
        let names = list(&["id", "a b"]);
        let err = SafetyMode::Checked.check_names(&names, false).unwrap_err();
        assert_eq!(err, SqlError::unsafe_identifier("a b", &names));
    }

    #[test]
    fn check_is_fail_fast() {
        let names = list(&["x;", "y;"]);
        let err = SafetyMode::Checked.check_names(&names, false).unwrap_err();
        assert_eq!(err.rejected_name(), Some("x;"));
    }

    #[test]
    fn unchecked_mode_accepts_anything() {
        let names = list(&["a-b", "x; DROP"]);
        assert!(SafetyMode::Unchecked.check_names(&names, false).is_ok());
    }

    #[test]
    fn bypass_accepts_anything() {
        let names = list(&["a-b"]);
        assert!(SafetyMode::Checked.check_names(&names, true).is_ok());
        assert!(SafetyMode::Checked.check_name("a-b", &names, true).is_ok());
    }

    #[test]
    fn mode_from_config_flag() {
        assert_eq!(SafetyMode::from_safe_by_default(true), SafetyMode::Unchecked);
        assert_eq!(SafetyMode::from_safe_by_default(false), SafetyMode::Checked);
        assert_eq!(SafetyMode::default(), SafetyMode::Checked);
    }
}
