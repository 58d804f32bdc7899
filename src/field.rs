//! Field identity: tokens, typed field keys and the field locator.
//!
//! Every field of an entity gets a [`FieldToken`], the byte offset of the
//! field's storage inside the entity. Offsets are computed once per type with
//! `core::mem::offset_of!` by the `Table` derive, which makes them unique per
//! non-zero-sized field and identical for every instance of the type.
//!
//! Callers never handle tokens directly. They pick fields through a template,
//! `T::Fields`, a struct holding one [`Field`] key per declared field:
//!
//! ```ignore
//! let t = User::fields();
//! schema_definition.editable(t.username);
//! cond_builder.equal(t.role_id, RoleId(21));
//! ```
//!
//! A key is typed by its entity and field type, so a key of one entity cannot
//! be passed where another entity is expected, and comparison values must
//! match the field's type.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use sea_query::Value;

use crate::error::SchemaError;
use crate::value::ValueExtractionError;

/// Opaque identity of one field, derived from its position in the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldToken(usize);

impl FieldToken {
    /// Token of the field stored `offset` bytes after the start of the entity.
    pub const fn from_offset(offset: usize) -> Self {
        FieldToken(offset)
    }

    /// Byte offset of the field inside the entity.
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl fmt::Display for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// Typed key of one field of entity `T` holding a value of type `F`.
///
/// Obtained from the template returned by [`Table::fields`].
pub struct Field<T, F> {
    token: FieldToken,
    name: &'static str,
    _marker: PhantomData<fn() -> (T, F)>,
}

impl<T, F> Field<T, F> {
    /// Build a key for the field at `offset`. Used by the `Table` derive.
    #[doc(hidden)]
    pub const fn new(offset: usize, name: &'static str) -> Self {
        Field {
            token: FieldToken::from_offset(offset),
            name,
            _marker: PhantomData,
        }
    }

    /// Identity token of the field.
    pub fn token(&self) -> FieldToken {
        self.token
    }

    /// Declared Rust name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T, F> Clone for Field<T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F> Copy for Field<T, F> {}

impl<T, F> fmt::Debug for Field<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("token", &self.token)
            .finish()
    }
}

/// Layout metadata of one declared field, as produced by the `Table` derive.
pub struct FieldMeta<T> {
    token: FieldToken,
    name: &'static str,
    column: Option<&'static str>,
    read: fn(&T) -> Value,
    write: fn(&mut T, Value) -> Result<(), ValueExtractionError>,
}

impl<T> FieldMeta<T> {
    /// Describe the field at `offset`. Used by the `Table` derive.
    #[doc(hidden)]
    pub fn new(
        offset: usize,
        name: &'static str,
        column: Option<&'static str>,
        read: fn(&T) -> Value,
        write: fn(&mut T, Value) -> Result<(), ValueExtractionError>,
    ) -> Self {
        FieldMeta {
            token: FieldToken::from_offset(offset),
            name,
            column,
            read,
            write,
        }
    }

    pub fn token(&self) -> FieldToken {
        self.token
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Column tag declared with `#[column_name]`, if any.
    pub fn column(&self) -> Option<&'static str> {
        self.column
    }

    /// Read the field of `entity` as a bound argument.
    pub fn read(&self, entity: &T) -> Value {
        (self.read)(entity)
    }

    /// Overwrite the field of `entity` with a decoded value.
    pub fn write(&self, entity: &mut T, value: Value) -> Result<(), ValueExtractionError> {
        (self.write)(entity, value)
    }
}

impl<T> fmt::Debug for FieldMeta<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMeta")
            .field("token", &self.token)
            .field("name", &self.name)
            .field("column", &self.column)
            .finish()
    }
}

/// An entity type mapped to one table.
///
/// Implemented with `#[derive(Table)]`; see the `dbc-derive` crate.
pub trait Table: Default + Sized + 'static {
    /// Template of typed field keys, one per declared field.
    type Fields: Copy;

    /// Bare (unquoted) table name.
    fn table_name() -> &'static str;

    /// Rust name of the entity type, used in error messages.
    fn entity_name() -> &'static str;

    /// A fresh template of field keys.
    fn fields() -> Self::Fields;

    /// Metadata for every declared field, in declaration order.
    fn describe_fields() -> Vec<FieldMeta<Self>>;
}

/// Resolves field keys and tokens of one entity type to their metadata.
///
/// Built once per schema from [`Table::describe_fields`].
pub struct FieldLocator<T> {
    fields: Vec<FieldMeta<T>>,
    index: HashMap<FieldToken, usize>,
}

impl<T: Table> FieldLocator<T> {
    /// Describe `T`, rejecting layouts where two fields share a token.
    pub fn new() -> Result<Self, SchemaError> {
        let fields = T::describe_fields();
        let mut index = HashMap::with_capacity(fields.len());
        for (position, meta) in fields.iter().enumerate() {
            if let Some(previous) = index.insert(meta.token, position) {
                return Err(SchemaError::DuplicateIdentity {
                    first: fields[previous].name,
                    second: meta.name,
                    entity: T::entity_name(),
                });
            }
        }
        Ok(FieldLocator { fields, index })
    }

    /// Identity token of `field`.
    ///
    /// # Panics
    ///
    /// Panics if the key does not name a declared field of `T`. Such a key can
    /// only be built by hand, and resolving it to any other column would
    /// silently corrupt the statement.
    pub fn identity_of<F>(&self, field: Field<T, F>) -> FieldToken {
        self.position_of(field);
        field.token
    }

    /// Declaration index of `field`; panics like [`identity_of`](Self::identity_of).
    pub fn position_of<F>(&self, field: Field<T, F>) -> usize {
        match self.index.get(&field.token) {
            Some(position) => *position,
            None => panic!(
                "field '{}' ({}) does not belong to type '{}'",
                field.name,
                field.token,
                T::entity_name()
            ),
        }
    }

    /// Declaration index of `token`, if it belongs to `T`.
    pub fn find(&self, token: FieldToken) -> Option<usize> {
        self.index.get(&token).copied()
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[FieldMeta<T>] {
        &self.fields
    }

    pub fn get(&self, position: usize) -> Option<&FieldMeta<T>> {
        self.fields.get(position)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for FieldLocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldLocator")
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_cfg::{TableTest03, TableTest04, TableTestZst};
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_injective() {
        let locator = FieldLocator::<TableTest03>::new().unwrap();
        let tokens: HashSet<FieldToken> = locator.fields().iter().map(|m| m.token()).collect();
        assert_eq!(tokens.len(), locator.len());

        let locator = FieldLocator::<TableTest04>::new().unwrap();
        let tokens: HashSet<FieldToken> = locator.fields().iter().map(|m| m.token()).collect();
        assert_eq!(tokens.len(), locator.len());
    }

    #[test]
    fn test_tokens_are_byte_offsets() {
        let t = TableTest03::fields();
        assert_eq!(t.id.token().offset(), std::mem::offset_of!(TableTest03, id));
        assert_eq!(
            t.username.token().offset(),
            std::mem::offset_of!(TableTest03, username)
        );
    }

    #[test]
    fn test_describe_fields_in_declaration_order() {
        let locator = FieldLocator::<TableTest03>::new().unwrap();
        let names: Vec<&str> = locator.fields().iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec!["id", "role_id", "username", "age", "created_at", "updated_at"]
        );
        let columns: Vec<Option<&str>> = locator.fields().iter().map(|m| m.column()).collect();
        assert_eq!(columns[1], Some("role_id"));
    }

    #[test]
    fn test_identity_of_template_keys() {
        let locator = FieldLocator::<TableTest03>::new().unwrap();
        let t = TableTest03::fields();
        assert_eq!(locator.identity_of(t.age), t.age.token());
        assert_eq!(locator.position_of(t.age), 3);
        assert_eq!(locator.position_of(t.id), 0);
    }

    #[test]
    #[should_panic(expected = "does not belong to type 'TableTest03'")]
    fn test_identity_of_foreign_key_panics() {
        let locator = FieldLocator::<TableTest03>::new().unwrap();
        let bogus: Field<TableTest03, i64> = Field::new(10_000, "bogus");
        locator.identity_of(bogus);
    }

    #[test]
    fn test_zero_sized_fields_collide() {
        let err = FieldLocator::<TableTestZst>::new().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateIdentity { .. }));
    }

    #[test]
    fn test_read_and_write_through_meta() {
        let locator = FieldLocator::<TableTest03>::new().unwrap();
        let mut entity = TableTest03 {
            username: "user01".to_string(),
            ..Default::default()
        };
        let meta = locator.get(2).unwrap();
        assert_eq!(meta.read(&entity), Value::String(Some("user01".to_string())));

        meta.write(&mut entity, Value::String(Some("user02".to_string())))
            .unwrap();
        assert_eq!(entity.username, "user02");
    }
}
