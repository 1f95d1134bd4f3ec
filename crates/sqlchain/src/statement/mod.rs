//! Chainable statement builder.
//!
//! A [`Statement`] is a growable SQL buffer plus an identifier safety mode.
//! Each clause operation validates its identifiers, appends one fragment and
//! hands the same builder back for further chaining.
//!
//! # Example
//!
//! ```ignore
//! use sqlchain::{statement, Joiner};
//!
//! let mut q = statement("");
//! q.select(["id", "email"])?
//!     .from("users")?
//!     .where_("")
//!     .eq("status", Joiner::And)?
//!     .and()
//!     .gt("age", Joiner::And)?;
//!
//! // SELECT id, email FROM users WHERE (status = :status) AND (age > :age)
//! let text = q.ok();
//! # Ok::<(), sqlchain::SqlError>(())
//! ```

mod buffer;
mod builder;
mod op;


pub use buffer::StatementBuffer;
pub use builder::Statement;
pub use op::{CompareOp, JoinKind, Joiner};

use crate::config::BuilderConfig;

/// Start building a statement from an initial SQL fragment.
pub fn statement(seed: impl Into<String>) -> Statement {
    Statement::new(seed)
}

/// Start building a statement with explicit options.
pub fn statement_with_config(seed: impl Into<String>, config: BuilderConfig) -> Statement {
    Statement::with_config(seed, config)
}
