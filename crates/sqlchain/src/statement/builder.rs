use std::fmt;

use super::buffer::StatementBuffer;
use super::op::{CompareOp, JoinKind, Joiner};
use crate::config::BuilderConfig;
use crate::error::{SqlError, SqlResult};
use crate::ident::SafetyMode;
use crate::names::{IntoNames, NameArg};

/// A chainable SQL statement builder.
///
/// `Statement` accumulates SQL text in place. Values never appear in the
/// text: every value position is a `:name` placeholder to be bound by the
/// execution layer. Identifiers (tables, columns) are checked against a
/// plain-word pattern unless the statement or the call opts out.
///
/// Operations that take identifiers return `SqlResult<&mut Self>`; the
/// others return `&mut Self`. A failed call leaves the text untouched.
#[must_use]
#[derive(Debug, Clone)]
pub struct Statement {
    buf: StatementBuffer,
    mode: SafetyMode,
}

impl Statement {
    /// Create a builder with an initial SQL fragment.
    pub fn new(seed: impl Into<String>) -> Self {
        Self::with_config(seed, BuilderConfig::default())
    }

    /// Create an empty builder.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Create a builder with an initial SQL fragment and explicit options.
    pub fn with_config(seed: impl Into<String>, config: BuilderConfig) -> Self {
        Self {
            buf: StatementBuffer::new(seed),
            mode: SafetyMode::from_safe_by_default(config.is_safe_by_default),
        }
    }

    pub fn safety_mode(&self) -> SafetyMode {
        self.mode
    }

    /// Stop validating identifiers for the rest of this statement's life.
    ///
    /// There is no way back: once unchecked, always unchecked.
    pub fn allow_unsafe_identifiers(&mut self) -> &mut Self {
        self.mode = SafetyMode::Unchecked;
        self
    }

    // ==================== Terminal reads ====================

    /// The statement text, verbatim.
    pub fn as_str(&self) -> &str {
        self.buf.read()
    }

    /// Alias of [`as_str`](Self::as_str).
    pub fn ok(&self) -> &str {
        self.as_str()
    }

    /// Alias of [`as_str`](Self::as_str).
    pub fn end(&self) -> &str {
        self.as_str()
    }

    /// Owned copy of the statement text.
    pub fn to_sql(&self) -> String {
        self.as_str().to_string()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    // ==================== Raw text ====================

    /// Append raw SQL. No validation is done: this is the escape hatch.
    pub fn raw(&mut self, sql: &str) -> &mut Self {
        self.buf.append(sql);
        self
    }

    /// `(`
    pub fn open(&mut self) -> &mut Self {
        self.raw("(")
    }

    /// Short alias of [`open`](Self::open).
    pub fn o(&mut self) -> &mut Self {
        self.open()
    }

    /// `)`
    pub fn close(&mut self) -> &mut Self {
        self.raw(")")
    }

    /// Short alias of [`close`](Self::close).
    pub fn c(&mut self) -> &mut Self {
        self.close()
    }

    pub fn and(&mut self) -> &mut Self {
        self.raw("AND")
    }

    pub fn or(&mut self) -> &mut Self {
        self.raw("OR")
    }

    pub fn not(&mut self) -> &mut Self {
        self.raw("NOT")
    }

    /// `WHERE <text>`. Pass `""` for a bare `WHERE` followed by operators.
    pub fn where_(&mut self, text: &str) -> &mut Self {
        self.keyword("WHERE", text)
    }

    /// `GROUP BY <text>`
    pub fn group_by(&mut self, text: &str) -> &mut Self {
        self.keyword("GROUP BY", text)
    }

    /// `HAVING <text>`
    pub fn having(&mut self, text: &str) -> &mut Self {
        self.keyword("HAVING", text)
    }

    /// `LIMIT <text>`
    pub fn limit(&mut self, text: &str) -> &mut Self {
        self.keyword("LIMIT", text)
    }

    /// `; <text>`: terminate the current statement and optionally start the
    /// next one in the same buffer.
    pub fn next_statement(&mut self, text: &str) -> &mut Self {
        self.keyword(";", text)
    }

    fn keyword(&mut self, keyword: &str, text: &str) -> &mut Self {
        if text.is_empty() {
            self.raw(keyword)
        } else {
            self.raw(&format!("{keyword} {text}"))
        }
    }

    // ==================== Tables ====================

    /// `UPDATE <table>`
    pub fn update(&mut self, table: impl IntoNames) -> SqlResult<&mut Self> {
        self.table_clause("UPDATE", table)
    }

    /// `INSERT INTO <table>`
    pub fn insert(&mut self, table: impl IntoNames) -> SqlResult<&mut Self> {
        self.table_clause("INSERT INTO", table)
    }

    /// `SELECT * FROM <table>`
    pub fn select_from(&mut self, table: impl IntoNames) -> SqlResult<&mut Self> {
        self.table_clause("SELECT * FROM", table)
    }

    /// `FROM <table>`. Pass `""` for a bare `FROM` followed by a join.
    pub fn from(&mut self, table: impl IntoNames) -> SqlResult<&mut Self> {
        self.table_clause("FROM", table)
    }

    /// `DELETE FROM <table>`
    pub fn delete_from(&mut self, table: impl IntoNames) -> SqlResult<&mut Self> {
        self.table_clause("DELETE FROM", table)
    }

    fn table_clause(&mut self, keyword: &str, tables: impl IntoNames) -> SqlResult<&mut Self> {
        let (_, tables) = self.checked_names(tables)?;
        if tables.is_empty() {
            return Ok(self.raw(keyword));
        }
        Ok(self.raw(&format!("{keyword} {}", tables.join(", "))))
    }

    // ==================== Columns ====================

    /// `SELECT <columns>`
    ///
    /// # Example
    /// ```ignore
    /// let mut q = sqlchain::statement("");
    /// q.select(["id", "name"])?.from("users")?;
    /// ```
    pub fn select(&mut self, columns: impl IntoNames) -> SqlResult<&mut Self> {
        let (arg, columns) = self.checked_names(columns)?;
        if columns.is_empty() {
            return Err(SqlError::InvalidSelectColumns(arg.input.to_string()));
        }
        Ok(self.raw(&format!("SELECT {}", columns.join(", "))))
    }

    /// `(<names>) VALUES (:<names>)`, one placeholder per name.
    ///
    /// # Example
    /// ```ignore
    /// let mut q = sqlchain::statement("");
    /// q.insert("users")?.values(["name", "email"])?;
    /// // INSERT INTO users (name, email) VALUES (:name, :email)
    /// ```
    pub fn values(&mut self, props: impl IntoNames) -> SqlResult<&mut Self> {
        let (arg, names) = self.checked_names(props)?;
        if names.is_empty() {
            return Err(SqlError::InvalidValues {
                clause: "VALUES",
                value: arg.input.to_string(),
            });
        }
        let placeholders: Vec<String> = names.iter().map(|n| format!(":{n}")).collect();
        Ok(self.raw(&format!(
            "({}) VALUES ({})",
            names.join(", "),
            placeholders.join(", ")
        )))
    }

    /// `SET (<name> = :<name> , ...)`
    pub fn set(&mut self, props: impl IntoNames) -> SqlResult<&mut Self> {
        let (arg, names) = self.checked_names(props)?;
        if names.is_empty() {
            return Err(SqlError::InvalidValues {
                clause: "SET",
                value: arg.input.to_string(),
            });
        }
        let fragment = render_comparisons(CompareOp::Eq, &names, Joiner::Comma);
        Ok(self.raw(&format!("SET {fragment}")))
    }

    // ==================== Joins ====================

    /// `(<a> JOIN <b> ...)`. With no tables, a bare `JOIN` is appended so the
    /// join can be written by hand: `.join("")?.open()...close()`.
    pub fn join(&mut self, tables: impl IntoNames) -> SqlResult<&mut Self> {
        self.join_clause(JoinKind::Inner, tables)
    }

    /// Alias of [`join`](Self::join).
    pub fn inner(&mut self, tables: impl IntoNames) -> SqlResult<&mut Self> {
        self.join(tables)
    }

    /// `(<a> LEFT JOIN <b> ...)`
    pub fn left(&mut self, tables: impl IntoNames) -> SqlResult<&mut Self> {
        self.join_clause(JoinKind::Left, tables)
    }

    /// `(<a> RIGHT JOIN <b> ...)`
    pub fn right(&mut self, tables: impl IntoNames) -> SqlResult<&mut Self> {
        self.join_clause(JoinKind::Right, tables)
    }

    /// `(<a> FULL OUTER JOIN <b> ...)`
    pub fn outer(&mut self, tables: impl IntoNames) -> SqlResult<&mut Self> {
        self.join_clause(JoinKind::FullOuter, tables)
    }

    fn join_clause(&mut self, kind: JoinKind, tables: impl IntoNames) -> SqlResult<&mut Self> {
        let (arg, tables) = self.checked_names(tables)?;
        match tables.len() {
            0 => Ok(self.raw(kind.keyword())),
            1 => Err(SqlError::InvalidJoinTables(arg.input.to_string())),
            _ => {
                let sep = format!(" {} ", kind.keyword());
                Ok(self.raw(&format!("({})", tables.join(&sep))))
            }
        }
    }

    // ==================== Comparisons ====================

    /// `(<name> = :<name> <joiner> ...)`
    ///
    /// # Example
    /// ```ignore
    /// let mut q = sqlchain::statement("");
    /// q.select_from("users")?.where_("").eq("id, tenant_id", Joiner::And)?;
    /// // SELECT * FROM users WHERE (id = :id AND tenant_id = :tenant_id)
    /// ```
    pub fn eq(&mut self, props: impl IntoNames, joiner: Joiner) -> SqlResult<&mut Self> {
        self.compare(CompareOp::Eq, props, joiner)
    }

    /// `(<name> <> :<name> <joiner> ...)`
    pub fn ne(&mut self, props: impl IntoNames, joiner: Joiner) -> SqlResult<&mut Self> {
        self.compare(CompareOp::Ne, props, joiner)
    }

    /// `(<name> < :<name> <joiner> ...)`
    pub fn lt(&mut self, props: impl IntoNames, joiner: Joiner) -> SqlResult<&mut Self> {
        self.compare(CompareOp::Lt, props, joiner)
    }

    /// `(<name> <= :<name> <joiner> ...)`
    pub fn le(&mut self, props: impl IntoNames, joiner: Joiner) -> SqlResult<&mut Self> {
        self.compare(CompareOp::Le, props, joiner)
    }

    /// `(<name> > :<name> <joiner> ...)`
    pub fn gt(&mut self, props: impl IntoNames, joiner: Joiner) -> SqlResult<&mut Self> {
        self.compare(CompareOp::Gt, props, joiner)
    }

    /// `(<name> >= :<name> <joiner> ...)`
    pub fn ge(&mut self, props: impl IntoNames, joiner: Joiner) -> SqlResult<&mut Self> {
        self.compare(CompareOp::Ge, props, joiner)
    }

    fn compare(
        &mut self,
        op: CompareOp,
        props: impl IntoNames,
        joiner: Joiner,
    ) -> SqlResult<&mut Self> {
        let (arg, names) = self.checked_names(props)?;
        if names.is_empty() {
            return Err(SqlError::InvalidOperands {
                op: op.as_sql(),
                value: arg.input.to_string(),
            });
        }
        Ok(self.raw(&render_comparisons(op, &names, joiner)))
    }

    /// `(<el> IN (<set>))`
    ///
    /// `el` must be a single name and `set` a non-empty sequence. Wrapping
    /// either argument in [`Trusted`](crate::Trusted) skips validation for
    /// the whole call.
    pub fn in_(&mut self, el: impl IntoNames, set: impl IntoNames) -> SqlResult<&mut Self> {
        let el = el.into_names()?;
        let set = set.into_names()?;
        let bypass = el.trusted || set.trusted;

        let el_names = el.input.to_list();
        let [name] = el_names.as_slice() else {
            return Err(SqlError::invalid_shape(el.input.to_string()));
        };
        if !set.input.is_sequence() {
            return Err(SqlError::InvalidSetInput(set.input.to_string()));
        }
        let members = set.input.to_list();
        if members.is_empty() {
            return Err(SqlError::InvalidSetInput(set.input.to_string()));
        }

        self.mode.check_names(&el_names, bypass)?;
        self.mode.check_names(&members, bypass)?;
        Ok(self.raw(&format!("({name} IN ({}))", members.join(", "))))
    }

    /// Extract names from `input` and validate them against the safety mode.
    fn checked_names(&self, input: impl IntoNames) -> SqlResult<(NameArg, Vec<String>)> {
        let arg = input.into_names()?;
        let names = arg.input.to_list();
        self.mode.check_names(&names, arg.trusted)?;
        Ok((arg, names))
    }
}

fn render_comparisons(op: CompareOp, names: &[String], joiner: Joiner) -> String {
    let sep = format!(" {joiner} ");
    let parts: Vec<String> = names
        .iter()
        .map(|n| format!("{n} {} :{n}", op.as_sql()))
        .collect();
    format!("({})", parts.join(&sep))
}

impl Default for Statement {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Statement> for String {
    fn from(stmt: Statement) -> Self {
        stmt.buf.read().to_string()
    }
}
