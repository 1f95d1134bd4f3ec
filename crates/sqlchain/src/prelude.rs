//! Convenient imports for typical `sqlchain` usage.
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, IntoNames, Joiner, SqlError, SqlResult, Statement, Trusted, statement,
    statement_with_config,
};
