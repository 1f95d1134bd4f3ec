//! Identifier name extraction.
//!
//! Operations that take column or table names accept three input shapes, all
//! of which reduce to an ordered list of candidate names:
//!
//! - a sequence: `["name", "email"]`
//! - a mapping, whose keys are the names: `{"name": .., "email": ..}`
//! - a comma separated string: `"name, email"`
//!
//! Wrapping any of them in [`Trusted`] skips identifier validation for that
//! single call.
//!
//! # Example
//! ```ignore
//! use sqlchain::{extract_names, Trusted};
//!
//! assert_eq!(extract_names("a, b")?, vec!["a", "b"]);
//! assert_eq!(extract_names(["a", "b"])?, vec!["a", "b"]);
//!
//! let mut q = sqlchain::statement("");
//! q.select(Trusted("count(*) AS n"))?.from("users")?;
//! # Ok::<(), sqlchain::SqlError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{SqlError, SqlResult};

/// The accepted shapes of name-bearing input.
#[derive(Debug, Clone, PartialEq)]
pub enum NameInput {
    /// Ordered list of names, used as-is.
    Sequence(Vec<String>),
    /// Mapping whose keys are the names; values are ignored.
    Keyed(Map<String, Value>),
    /// Names separated by commas, whitespace around commas is dropped.
    CommaString(String),
}

impl NameInput {
    /// Convert a JSON value into a name input.
    ///
    /// Arrays must contain only strings.
    pub fn from_value(value: Value) -> SqlResult<Self> {
        match value {
            Value::String(s) => Ok(Self::CommaString(s)),
            Value::Object(map) => Ok(Self::Keyed(map)),
            Value::Array(items) => {
                if !items.iter().all(Value::is_string) {
                    return Err(SqlError::invalid_shape(Value::Array(items).to_string()));
                }
                let names = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                Ok(Self::Sequence(names))
            }
            other => Err(SqlError::invalid_shape(other.to_string())),
        }
    }

    /// Reduce the input to its ordered list of candidate names.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::Sequence(names) => names,
            Self::Keyed(map) => map.into_iter().map(|(k, _)| k).collect(),
            Self::CommaString(s) => split_comma_list(&s),
        }
    }

    /// Like [`into_list`](Self::into_list), without consuming the input.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::Sequence(names) => names.clone(),
            Self::Keyed(map) => map.keys().cloned().collect(),
            Self::CommaString(s) => split_comma_list(s),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl fmt::Display for NameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(names) => write!(f, "[{}]", names.join(", ")),
            Self::Keyed(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                write!(f, "{{{}}}", keys.join(", "))
            }
            Self::CommaString(s) => write!(f, "{s:?}"),
        }
    }
}

fn split_comma_list(s: &str) -> Vec<String> {
    static COMMA_RE: OnceLock<Regex> = OnceLock::new();
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }
    COMMA_RE
        .get_or_init(|| Regex::new(r"\s*,\s*").expect("invalid built-in comma regex"))
        .split(s)
        .map(str::to_string)
        .collect()
}

/// Name input together with its per-call validation bypass bit.
#[derive(Debug, Clone, PartialEq)]
pub struct NameArg {
    pub input: NameInput,
    pub trusted: bool,
}

impl NameArg {
    pub fn new(input: NameInput) -> Self {
        Self {
            input,
            trusted: false,
        }
    }
}

/// Marks input whose identifiers must not be validated.
///
/// Equivalent to an unchecked statement, but scoped to one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trusted<T>(pub T);

/// Convert an input into a [`NameArg`].
///
/// This is mainly for ergonomics in builder APIs.
pub trait IntoNames {
    fn into_names(self) -> SqlResult<NameArg>;
}

/// Reduce any accepted input shape to its ordered list of names.
pub fn extract_names<N: IntoNames>(input: N) -> SqlResult<Vec<String>> {
    Ok(input.into_names()?.input.into_list())
}

impl IntoNames for NameArg {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(self)
    }
}

impl IntoNames for NameInput {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(self))
    }
}

impl<T: IntoNames> IntoNames for Trusted<T> {
    fn into_names(self) -> SqlResult<NameArg> {
        let mut arg = self.0.into_names()?;
        arg.trusted = true;
        Ok(arg)
    }
}

impl IntoNames for &str {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(NameInput::CommaString(self.to_string())))
    }
}

impl IntoNames for String {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(NameInput::CommaString(self)))
    }
}

impl IntoNames for &String {
    fn into_names(self) -> SqlResult<NameArg> {
        self.as_str().into_names()
    }
}

impl IntoNames for Vec<String> {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(NameInput::Sequence(self)))
    }
}

impl IntoNames for Vec<&str> {
    fn into_names(self) -> SqlResult<NameArg> {
        self.as_slice().into_names()
    }
}

impl IntoNames for &[&str] {
    fn into_names(self) -> SqlResult<NameArg> {
        let names = self.iter().map(|s| s.to_string()).collect();
        Ok(NameArg::new(NameInput::Sequence(names)))
    }
}

impl IntoNames for &[String] {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(NameInput::Sequence(self.to_vec())))
    }
}

impl<const N: usize> IntoNames for [&str; N] {
    fn into_names(self) -> SqlResult<NameArg> {
        self.as_slice().into_names()
    }
}

impl IntoNames for Map<String, Value> {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(NameInput::Keyed(self)))
    }
}

impl<K, V> IntoNames for BTreeMap<K, V>
where
    K: Into<String>,
    V: Into<Value>,
{
    fn into_names(self) -> SqlResult<NameArg> {
        let map = self.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Ok(NameArg::new(NameInput::Keyed(map)))
    }
}

impl IntoNames for Value {
    fn into_names(self) -> SqlResult<NameArg> {
        Ok(NameArg::new(NameInput::from_value(self)?))
    }
}
