//! # dbc
//!
//! Typed query construction for relational tables.
//!
//! An entity is a plain struct deriving [`Table`]. Its fields are registered
//! once into a [`Schema`], then referenced through typed field keys rather
//! than column strings when building predicates and statements:
//!
//! ```rust
//! use std::sync::Arc;
//! use dbc::{CondBuilder, Dialect, Schema, Table};
//!
//! #[derive(Debug, Default, Table)]
//! #[table_name = "users"]
//! pub struct User {
//!     #[column_name = "id"]
//!     pub id: i64,
//!     #[column_name = "role_id"]
//!     pub role_id: i64,
//!     #[column_name = "username"]
//!     pub username: String,
//! }
//!
//! let schema = Arc::new(Schema::<User>::register(|s, t| {
//!     s.id_auto_inc(t.id);
//!     s.constant(t.role_id);
//!     s.editable(t.username);
//! }));
//!
//! let (mut b, t) = CondBuilder::new(schema, Dialect::Mysql);
//! b.equal(t.role_id, 21);
//! assert_eq!(b.where_clause().0, "`role_id` = ?");
//! ```
//!
//! Statements are run by an [`Executor`] against a [`ReadHandle`] or
//! [`Transaction`]; [`PostgresHandle`] provides both over `may_postgres`.

extern crate self as dbc;

pub mod cond;
pub mod config;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod executor;
pub mod field;
pub mod metrics;
pub mod postgres;
pub mod schema;
pub mod value;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(test)]
mod tests_cfg;

pub use cond::CondBuilder;
pub use config::DatabaseConfig;
pub use dialect::{quote_ident, Dialect};
pub use driver::{ExecResult, ReadHandle, Row, Transaction};
pub use error::{DbError, SchemaError};
pub use executor::{Executor, StatementKind};
pub use field::{Field, FieldLocator, FieldMeta, FieldToken, Table};
pub use postgres::{connect, PgTransaction, PostgresHandle};
pub use schema::{
    AutoIncrement, Classification, FieldDescriptor, PrimaryKeyKind, Schema, SchemaDefinition,
};
pub use value::{IntoKeyValues, ValueExtractionError, ValueType};

pub use sea_query::Value;

/// Derive [`Table`] for a struct with named fields.
///
/// `#[table_name = "..."]` sets the table (default: the struct name in
/// snake_case); `#[column_name = "..."]` tags each field with its column.
pub use dbc_derive::Table;
