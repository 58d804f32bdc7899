//! Procedural macros for dbc
//!
//! This crate provides the `Table` derive, which describes an entity struct's
//! layout to the `dbc` runtime: table name, per-field identity tokens, column
//! tags, value accessors and the typed field-key template.

mod attributes;
mod macros;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for `Table` - generates the `dbc::Table` implementation
///
/// This macro generates:
/// - `impl dbc::Table` with the table name, entity name and field metadata
/// - `{Struct}Fields` struct (one `dbc::Field` key per declared field)
///
/// Field identity tokens are the fields' byte offsets (`core::mem::offset_of!`),
/// so they are unique per field and stable across instances.
///
/// # Example
///
/// ```ignore
/// use dbc::Table;
///
/// #[derive(Default, Table)]
/// #[table_name = "users"]
/// pub struct User {
///     #[column_name = "id"]
///     pub id: i64,
///     #[column_name = "username"]
///     pub username: String,
/// }
///
/// let fields = User::fields();
/// let _key: dbc::Field<User, String> = fields.username;
/// ```
///
/// A field without `#[column_name]` still compiles; schema registration
/// rejects it with a configuration error naming the field.
#[proc_macro_derive(Table, attributes(table_name, column_name))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    macros::derive_table(input)
}
