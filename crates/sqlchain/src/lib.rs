//! # sqlchain
//!
//! A chainable builder for parameterized SQL statement text.
//!
//! ## Features
//!
//! - **Named placeholders**: values are never embedded, every value position is `:name`
//! - **Identifier checks**: table and column names must be plain words unless explicitly trusted
//! - **Flexible name input**: sequences, mappings (keys) or comma separated strings
//! - **Append-only**: a failed call leaves the statement exactly as it was
//!
//! ## Example
//!
//! ```ignore
//! use sqlchain::{statement, Joiner, Trusted};
//!
//! let mut q = statement("");
//! q.insert("users")?.values(["name", "email"])?;
//! // INSERT INTO users (name, email) VALUES (:name, :email)
//!
//! let mut q = statement("");
//! q.update("users")?
//!     .set("name, email")?
//!     .where_("")
//!     .eq("id", Joiner::And)?;
//! // UPDATE users SET (name = :name , email = :email) WHERE (id = :id)
//!
//! // Per-call opt out of identifier checks
//! let mut q = statement("");
//! q.select(Trusted("count(*) AS n"))?.from("users")?;
//! # Ok::<(), sqlchain::SqlError>(())
//! ```

pub mod config;
pub mod error;
pub mod ident;
pub mod names;
pub mod prelude;
pub mod statement;

pub use config::BuilderConfig;
pub use error::{SqlError, SqlResult};
pub use ident::{SafetyMode, is_safe_name};
pub use names::{IntoNames, NameArg, NameInput, Trusted, extract_names};
pub use statement::{
    CompareOp, JoinKind, Joiner, Statement, StatementBuffer, statement, statement_with_config,
};
