//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for statement building operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while assembling a statement.
///
/// Every error aborts only the call that raised it; the statement keeps the
/// text it had before that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Name-bearing input is not a sequence, a mapping or a comma string
    #[error("Invalid input shape: {value}")]
    InvalidInputShape { value: String },

    /// Identifier failed the safe-name check
    #[error("Unsafe identifier '{name}' in [{}]", .names.join(", "))]
    UnsafeIdentifier { name: String, names: Vec<String> },

    /// The set argument of `IN` is not a non-empty sequence
    #[error("Invalid IN set: {0}")]
    InvalidSetInput(String),

    /// A join was given a single table
    #[error("Invalid JOIN tables: {0}")]
    InvalidJoinTables(String),

    /// `SELECT` was given no columns
    #[error("Invalid SELECT columns: {0} (use select_from() for SELECT * FROM)")]
    InvalidSelectColumns(String),

    /// `VALUES` / `SET` was given no properties
    #[error("Invalid {clause} properties: {value}")]
    InvalidValues { clause: &'static str, value: String },

    /// A comparison operator was given no properties
    #[error("Invalid {op} properties: {value}")]
    InvalidOperands { op: &'static str, value: String },

    /// Builder configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create an input shape error for the offending value
    pub fn invalid_shape(value: impl Into<String>) -> Self {
        Self::InvalidInputShape {
            value: value.into(),
        }
    }

    /// Create an unsafe identifier error with the full candidate list
    pub fn unsafe_identifier(name: impl Into<String>, names: &[String]) -> Self {
        Self::UnsafeIdentifier {
            name: name.into(),
            names: names.to_vec(),
        }
    }

    /// Check if this is an unsafe identifier error
    pub fn is_unsafe_identifier(&self) -> bool {
        matches!(self, Self::UnsafeIdentifier { .. })
    }

    /// Check if this is an input shape error
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, Self::InvalidInputShape { .. })
    }

    /// The identifier that was rejected, if this is an unsafe identifier error
    pub fn rejected_name(&self) -> Option<&str> {
        match self {
            Self::UnsafeIdentifier { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SqlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_identifier_message_lists_candidates() {
        let names = vec!["id".to_string(), "a b".to_string()];
        let err = SqlError::unsafe_identifier("a b", &names);
        assert_eq!(err.to_string(), "Unsafe identifier 'a b' in [id, a b]");
        assert!(err.is_unsafe_identifier());
        assert_eq!(err.rejected_name(), Some("a b"));
    }

    #[test]
    fn shape_error_names_value() {
        let err = SqlError::invalid_shape("42");
        assert_eq!(err.to_string(), "Invalid input shape: 42");
        assert!(err.is_invalid_shape());
        assert_eq!(err.rejected_name(), None);
    }
}
