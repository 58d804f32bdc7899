//! Condition builder
//!
//! Assembles a `WHERE` predicate from typed field keys. Each operation
//! resolves its key to the registered column, quotes it for the dialect and
//! appends one fragment plus its bound arguments:
//!
//! ```ignore
//! let (mut b, t) = CondBuilder::new(Arc::clone(&schema), Dialect::Mysql);
//! b.equal(t.role_id, RoleId(21)).is_not_null(t.username);
//! let (sql, args) = b.where_clause();
//! // sql  == "`role_id` = ? AND `username` IS NOT NULL"
//! // args == [21]
//! ```
//!
//! A builder lives for one query and is consumed by the executor.

use std::sync::Arc;

use sea_query::Value;

use crate::dialect::{quote_ident, Dialect};
use crate::field::{Field, Table};
use crate::schema::Schema;
use crate::value::ValueType;

/// Accumulates predicate fragments for entity `T`
pub struct CondBuilder<T> {
    schema: Arc<Schema<T>>,
    dialect: Dialect,
    fragments: Vec<String>,
    args: Vec<Value>,
}

impl<T: Table> CondBuilder<T> {
    /// Create an empty builder and the template its field keys come from
    pub fn new(schema: Arc<Schema<T>>, dialect: Dialect) -> (Self, T::Fields) {
        let builder = CondBuilder {
            schema,
            dialect,
            fragments: Vec::new(),
            args: Vec::new(),
        };
        (builder, T::fields())
    }

    /// `<col> = ?`
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a declared field of `T`.
    pub fn equal<F: ValueType>(&mut self, field: Field<T, F>, value: F) -> &mut Self {
        let column = self.quoted(field);
        self.fragments.push(format!("{column} = ?"));
        self.args.push(value.into_value());
        self
    }

    /// Arbitrary expression over one column.
    ///
    /// `render` receives the quoted column and returns the fragment; `args`
    /// are appended in order and must match the placeholders it contains.
    ///
    /// ```ignore
    /// b.column_expr(t.username, |col| format!("LOWER({col}) = ?"), ["user01".into_value()]);
    /// ```
    pub fn column_expr<F, R, I>(&mut self, field: Field<T, F>, render: R, args: I) -> &mut Self
    where
        R: FnOnce(&str) -> String,
        I: IntoIterator<Item = Value>,
    {
        let column = self.quoted(field);
        self.fragments.push(render(&column));
        self.args.extend(args);
        self
    }

    /// `<col> IS NULL`
    pub fn is_null<F>(&mut self, field: Field<T, F>) -> &mut Self {
        let column = self.quoted(field);
        self.fragments.push(format!("{column} IS NULL"));
        self
    }

    /// `<col> IS NOT NULL`
    pub fn is_not_null<F>(&mut self, field: Field<T, F>) -> &mut Self {
        let column = self.quoted(field);
        self.fragments.push(format!("{column} IS NOT NULL"));
        self
    }

    /// Fragments joined with `AND`, and the arguments in call order.
    ///
    /// An empty builder yields an empty string and no arguments.
    pub fn where_clause(&self) -> (String, Vec<Value>) {
        (self.fragments.join(" AND "), self.args.clone())
    }

    /// Consuming form of [`where_clause`](Self::where_clause)
    pub fn into_where_clause(self) -> (String, Vec<Value>) {
        (self.fragments.join(" AND "), self.args)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn quoted<F>(&self, field: Field<T, F>) -> String {
        quote_ident(self.dialect, self.schema.column_of(field))
    }
}
