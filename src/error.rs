//! Error types
//!
//! Two families, split by when they can happen:
//! - [`SchemaError`]: configuration mistakes found while registering an entity
//!   schema. They describe programmer errors and abort startup.
//! - [`DbError`]: failures while building or running a statement, including
//!   driver errors passed through unchanged.

use thiserror::Error;

use crate::value::ValueExtractionError;

/// Configuration error raised during schema registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A declared field carries no `#[column_name]` tag, or an empty one
    #[error("missing column name of field '{field}' in type '{entity}'")]
    MissingColumnName {
        field: &'static str,
        entity: &'static str,
    },
    /// Two declared fields resolved to the same identity token
    #[error("fields '{first}' and '{second}' share the same identity in type '{entity}'")]
    DuplicateIdentity {
        first: &'static str,
        second: &'static str,
        entity: &'static str,
    },
    /// Two declared fields carry the same column name
    #[error("fields '{first}' and '{second}' map to the same column '{column}' in type '{entity}'")]
    DuplicateColumn {
        first: &'static str,
        second: &'static str,
        column: &'static str,
        entity: &'static str,
    },
    /// A field key that does not belong to the entity being registered
    #[error("field '{field}' does not belong to type '{entity}'")]
    UnknownField {
        field: &'static str,
        entity: &'static str,
    },
    /// The field was classified twice
    #[error("field '{field}' already specified in type '{entity}'")]
    AlreadySpecified {
        field: &'static str,
        entity: &'static str,
    },
    /// Primary key declarations of different kinds, or two single-column keys
    #[error("conflicting primary key definition on field '{field}' in type '{entity}'")]
    ConflictingPrimaryKey {
        field: &'static str,
        entity: &'static str,
    },
    /// No field was declared as (part of) the primary key
    #[error("missing primary key definition in type '{entity}'")]
    MissingPrimaryKey { entity: &'static str },
    /// A declared field was never classified by the definition callback
    #[error("missing column spec of field '{field}' in type '{entity}'")]
    UnclassifiedField {
        field: &'static str,
        entity: &'static str,
    },
}

/// Error returned by executor operations
#[derive(Debug, Error)]
pub enum DbError {
    /// `PostgreSQL` error from `may_postgres`, unchanged
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] may_postgres::Error),
    /// Error from any other driver implementing the handle traits, unchanged
    #[error("driver error: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A connection string neither in URI nor key-value form
    #[error("invalid connection string: {0}")]
    InvalidConnectionString(String),
    /// `DeleteCond` was called with a predicate that added no condition
    #[error("delete where condition must not be empty")]
    EmptyDeleteCondition,
    /// A result column could not be decoded into its entity field
    #[error("failed to decode column '{column}': {source}")]
    Decode {
        column: String,
        #[source]
        source: ValueExtractionError,
    },
    /// A result column that no registered field maps to
    #[error("unknown column '{0}' in result row")]
    UnknownColumn(String),
    /// An auto-increment insert completed without a generated id
    #[error("driver did not report a generated id for table '{0}'")]
    MissingGeneratedId(&'static str),
    /// A key value with the wrong number of columns for the primary key
    #[error("primary key of table '{table}' has {expected} columns, got {actual} values")]
    KeyArity {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    /// An argument the driver cannot bind
    #[error("unsupported argument value: {0}")]
    UnsupportedValue(String),
}

impl DbError {
    /// Wrap an arbitrary driver error
    pub fn driver<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DbError::Driver(Box::new(err))
    }
}
