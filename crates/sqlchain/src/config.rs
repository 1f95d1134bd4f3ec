use serde::{Deserialize, Serialize};

use crate::error::SqlResult;

/// Construction-time options for a [`Statement`](crate::Statement).
///
/// By default identifier validation is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderConfig {
    /// Skip identifier validation for the whole lifetime of the statement.
    pub is_safe_by_default: bool,
}

impl BuilderConfig {
    /// Create a new configuration with defaults (validation enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat every identifier passed to the statement as trusted.
    pub fn safe_by_default(mut self, enabled: bool) -> Self {
        self.is_safe_by_default = enabled;
        self
    }

    /// Parse a configuration from JSON, e.g. `{"isSafeByDefault": true}`.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(s: &str) -> SqlResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlError;

    #[test]
    fn default_validates() {
        assert!(!BuilderConfig::new().is_safe_by_default);
    }

    #[test]
    fn parses_camel_case_key() {
        let cfg = BuilderConfig::from_json_str(r#"{"isSafeByDefault": true}"#).unwrap();
        assert!(cfg.is_safe_by_default);
    }

    #[test]
    fn missing_key_is_default() {
        let cfg = BuilderConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, BuilderConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = BuilderConfig::from_json_str("{isSafeByDefault").unwrap_err();
        assert!(matches!(err, SqlError::Config(_)));
    }

    #[test]
    fn serializes_camel_case_key() {
        let json = serde_json::to_string(&BuilderConfig::new().safe_by_default(true)).unwrap();
        assert_eq!(json, r#"{"isSafeByDefault":true}"#);
    }
}
