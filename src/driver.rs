//! Collaborator traits the executor dispatches statements to.
//!
//! A [`ReadHandle`] runs queries; a [`Transaction`] additionally runs
//! statements that modify data. Handles are passed explicitly to every
//! executor operation, so the caller decides which connection or transaction
//! a statement runs on.
//!
//! Statements arrive with `?` placeholders and positional arguments.
//! Implementations for drivers that number their parameters rewrite them
//! with [`crate::dialect::rebind`].

use sea_query::Value;

use crate::error::DbError;

/// One result row: column names and values in select-list order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Row::default()
    }

    /// Append a column
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push((column.into(), value));
    }

    /// Builder form of [`push`](Self::push)
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.push(column, value);
        self
    }

    /// Value of the first column named `column`
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Outcome of a data-modifying statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Rows inserted, updated or deleted
    pub rows_affected: u64,
    /// Id generated by the statement, for drivers that report one
    pub last_insert_id: Option<i64>,
}

/// Runs read-only queries
pub trait ReadHandle {
    /// Run `sql` and return its first row, if any
    ///
    /// # Errors
    ///
    /// Returns the driver's error unchanged.
    fn query_one(&self, sql: &str, args: &[Value]) -> Result<Option<Row>, DbError>;

    /// Run `sql` and return all rows
    ///
    /// # Errors
    ///
    /// Returns the driver's error unchanged.
    fn query_all(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>, DbError>;
}

/// Runs statements inside a transaction
pub trait Transaction: ReadHandle {
    /// Run a data-modifying statement
    ///
    /// # Errors
    ///
    /// Returns the driver's error unchanged.
    fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult, DbError>;
}

impl<H: ReadHandle + ?Sized> ReadHandle for &H {
    fn query_one(&self, sql: &str, args: &[Value]) -> Result<Option<Row>, DbError> {
        (**self).query_one(sql, args)
    }

    fn query_all(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>, DbError> {
        (**self).query_all(sql, args)
    }
}

impl<H: Transaction + ?Sized> Transaction for &H {
    fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult, DbError> {
        (**self).execute(sql, args)
    }
}
