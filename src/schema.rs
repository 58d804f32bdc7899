//! Entity schemas.
//!
//! A [`Schema`] records, for every field of an entity, its column name, how
//! it takes part in generated statements ([`Classification`]) and its role in
//! the primary key. It is built once through a definition callback and is
//! read-only afterwards:
//!
//! ```ignore
//! let schema = Schema::<User>::register(|s, t| {
//!     s.id_auto_inc(t.id);
//!     s.constant(t.role_id);
//!     s.editable(t.username);
//!     s.editable(t.age);
//!     s.ignore(t.created_at);
//! });
//! ```
//!
//! Registration is strict: every declared field must be classified exactly
//! once, every field must carry a column name, and a primary key is required.

use std::collections::HashMap;
use std::fmt;

use sea_query::Value;

use crate::error::SchemaError;
use crate::field::{Field, FieldLocator, FieldToken, Table};
use crate::value::{ValueExtractionError, ValueType};

/// How a field takes part in generated statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Selected, inserted and updated
    Editable,
    /// Selected and inserted, never updated
    Constant,
    /// Never selected, inserted or updated
    Ignored,
}

impl Classification {
    /// Whether the field appears in SELECT and INSERT column lists
    pub fn is_visible(self) -> bool {
        matches!(self, Classification::Editable | Classification::Constant)
    }
}

/// Shape of an entity's primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyKind {
    /// One column whose value the database generates
    SingleAutoKey,
    /// One column whose value the caller provides
    SingleManualKey,
    /// One or more columns forming a composite key
    CompositeKey,
}

/// Field types allowed as auto-increment primary keys.
///
/// The generated id reported by the driver is written back through
/// [`ValueType::try_from_value`], so any integer-like type works.
pub trait AutoIncrement: ValueType {}

impl AutoIncrement for i32 {}
impl AutoIncrement for i64 {}
impl AutoIncrement for u32 {}
impl AutoIncrement for u64 {}

/// Registered metadata of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    token: FieldToken,
    name: &'static str,
    column: &'static str,
    classification: Classification,
    primary_key: bool,
    auto_increment: bool,
}

impl FieldDescriptor {
    pub fn token(&self) -> FieldToken {
        self.token
    }

    /// Declared Rust name of the field
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bare (unquoted) column name
    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn is_visible(&self) -> bool {
        self.classification.is_visible()
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    classification: Classification,
    primary_key: bool,
    auto_increment: bool,
}

/// Registered, immutable schema of entity `T`
pub struct Schema<T> {
    locator: FieldLocator<T>,
    descriptors: Vec<FieldDescriptor>,
    by_column: HashMap<&'static str, usize>,
    primary_keys: Vec<FieldToken>,
    primary_key_kind: PrimaryKeyKind,
}

impl<T: Table> Schema<T> {
    /// Register the schema of `T`, panicking on any configuration error.
    ///
    /// Configuration errors are programmer mistakes; registering at startup
    /// with this function makes them abort the process immediately. Use
    /// [`try_register`](Self::try_register) to handle the error instead.
    ///
    /// # Panics
    ///
    /// Panics with the [`SchemaError`] message when registration fails.
    pub fn register<D>(definition: D) -> Self
    where
        D: FnOnce(&mut SchemaDefinition<T>, &T::Fields),
    {
        match Self::try_register(definition) {
            Ok(schema) => schema,
            Err(err) => panic!("{err}"),
        }
    }

    /// Register the schema of `T`.
    ///
    /// `definition` receives the definition under construction and a template
    /// of field keys, and must classify every declared field exactly once.
    pub fn try_register<D>(definition: D) -> Result<Self, SchemaError>
    where
        D: FnOnce(&mut SchemaDefinition<T>, &T::Fields),
    {
        let locator = FieldLocator::<T>::new()?;

        let mut columns = Vec::with_capacity(locator.len());
        let mut by_column = HashMap::with_capacity(locator.len());
        for (position, meta) in locator.fields().iter().enumerate() {
            let column = match meta.column() {
                Some(column) if !column.is_empty() => column,
                _ => {
                    return Err(SchemaError::MissingColumnName {
                        field: meta.name(),
                        entity: T::entity_name(),
                    })
                }
            };
            if let Some(previous) = by_column.insert(column, position) {
                return Err(SchemaError::DuplicateColumn {
                    first: locator.fields()[previous].name(),
                    second: meta.name(),
                    column,
                    entity: T::entity_name(),
                });
            }
            columns.push(column);
        }

        let mut def = SchemaDefinition {
            specs: vec![None; locator.len()],
            locator,
            primary_keys: Vec::new(),
            primary_key_kind: None,
            error: None,
        };

        let template = T::fields();
        definition(&mut def, &template);

        if let Some(err) = def.error {
            return Err(err);
        }

        let Some(primary_key_kind) = def.primary_key_kind else {
            return Err(SchemaError::MissingPrimaryKey {
                entity: T::entity_name(),
            });
        };

        let mut descriptors = Vec::with_capacity(def.specs.len());
        for (position, spec) in def.specs.iter().enumerate() {
            let meta = &def.locator.fields()[position];
            let Some(spec) = spec else {
                return Err(SchemaError::UnclassifiedField {
                    field: meta.name(),
                    entity: T::entity_name(),
                });
            };
            descriptors.push(FieldDescriptor {
                token: meta.token(),
                name: meta.name(),
                column: columns[position],
                classification: spec.classification,
                primary_key: spec.primary_key,
                auto_increment: spec.auto_increment,
            });
        }

        log::debug!(
            "registered schema for {} (table {}, {} fields, {:?})",
            T::entity_name(),
            T::table_name(),
            descriptors.len(),
            primary_key_kind
        );

        Ok(Schema {
            locator: def.locator,
            descriptors,
            by_column,
            primary_keys: def.primary_keys,
            primary_key_kind,
        })
    }

    /// Bare (unquoted) table name
    pub fn table_name(&self) -> &'static str {
        T::table_name()
    }

    pub fn entity_name(&self) -> &'static str {
        T::entity_name()
    }

    /// Descriptors of all fields, in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Identity tokens of all fields, in declaration order
    pub fn field_tokens(&self) -> impl Iterator<Item = FieldToken> + '_ {
        self.descriptors.iter().map(FieldDescriptor::token)
    }

    /// Descriptor of the field identified by `token`
    pub fn descriptor(&self, token: FieldToken) -> Option<&FieldDescriptor> {
        self.locator
            .find(token)
            .map(|position| &self.descriptors[position])
    }

    /// Descriptor of `field`.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a declared field of `T`.
    pub fn descriptor_of<F>(&self, field: Field<T, F>) -> &FieldDescriptor {
        &self.descriptors[self.locator.position_of(field)]
    }

    /// Bare column name of `field`; panics like [`descriptor_of`](Self::descriptor_of).
    pub fn column_of<F>(&self, field: Field<T, F>) -> &'static str {
        self.descriptor_of(field).column
    }

    pub fn primary_key_kind(&self) -> PrimaryKeyKind {
        self.primary_key_kind
    }

    /// Primary key tokens in the order they were registered
    pub fn primary_key_tokens(&self) -> &[FieldToken] {
        &self.primary_keys
    }

    /// Bare names of the columns that appear in SELECT and INSERT lists
    pub fn visible_columns(&self) -> Vec<&'static str> {
        self.descriptors
            .iter()
            .filter(|d| d.is_visible())
            .map(FieldDescriptor::column)
            .collect()
    }

    /// The field locator the schema was built from
    pub fn locator(&self) -> &FieldLocator<T> {
        &self.locator
    }

    /// Position of the visible field mapped to `column`
    pub(crate) fn position_of_column(&self, column: &str) -> Option<usize> {
        self.by_column
            .get(column)
            .copied()
            .filter(|&position| self.descriptors[position].is_visible())
    }

    pub(crate) fn read(&self, position: usize, entity: &T) -> Value {
        self.locator.fields()[position].read(entity)
    }

    pub(crate) fn write(
        &self,
        position: usize,
        entity: &mut T,
        value: Value,
    ) -> Result<(), ValueExtractionError> {
        self.locator.fields()[position].write(entity, value)
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("descriptors", &self.descriptors)
            .field("primary_keys", &self.primary_keys)
            .field("primary_key_kind", &self.primary_key_kind)
            .finish()
    }
}

/// Schema under construction, handed to the definition callback.
///
/// Operations never fail in place: the first error is recorded, later
/// operations are ignored, and [`Schema::try_register`] returns it once the
/// callback finishes.
pub struct SchemaDefinition<T> {
    locator: FieldLocator<T>,
    specs: Vec<Option<FieldSpec>>,
    primary_keys: Vec<FieldToken>,
    primary_key_kind: Option<PrimaryKeyKind>,
    error: Option<SchemaError>,
}

impl<T: Table> SchemaDefinition<T> {
    /// Mark `field` as the single-column auto-increment primary key
    pub fn id_auto_inc<F: AutoIncrement>(&mut self, field: Field<T, F>) -> &mut Self {
        self.primary_key(field, PrimaryKeyKind::SingleAutoKey)
    }

    /// Mark `field` as the single-column primary key, provided by the caller
    pub fn id<F>(&mut self, field: Field<T, F>) -> &mut Self {
        self.primary_key(field, PrimaryKeyKind::SingleManualKey)
    }

    /// Mark `field` as the next component of a composite primary key
    pub fn composite_id<F>(&mut self, field: Field<T, F>) -> &mut Self {
        self.primary_key(field, PrimaryKeyKind::CompositeKey)
    }

    /// Mark `field` as editable: selected, inserted and updated
    pub fn editable<F>(&mut self, field: Field<T, F>) -> &mut Self {
        self.classify(field, Classification::Editable);
        self
    }

    /// Mark `field` as constant: selected and inserted, never updated
    pub fn constant<F>(&mut self, field: Field<T, F>) -> &mut Self {
        self.classify(field, Classification::Constant);
        self
    }

    /// Mark `field` as ignored by every generated statement
    pub fn ignore<F>(&mut self, field: Field<T, F>) -> &mut Self {
        self.classify(field, Classification::Ignored);
        self
    }

    fn primary_key<F>(&mut self, field: Field<T, F>, kind: PrimaryKeyKind) -> &mut Self {
        let Some(position) = self.vacant_slot(field) else {
            return self;
        };

        let conflicting = match (self.primary_key_kind, kind) {
            (None, _) => false,
            (Some(PrimaryKeyKind::CompositeKey), PrimaryKeyKind::CompositeKey) => false,
            (Some(_), _) => true,
        };
        if conflicting {
            self.error = Some(SchemaError::ConflictingPrimaryKey {
                field: field.name(),
                entity: T::entity_name(),
            });
            return self;
        }

        self.specs[position] = Some(FieldSpec {
            classification: Classification::Constant,
            primary_key: true,
            auto_increment: kind == PrimaryKeyKind::SingleAutoKey,
        });
        self.primary_key_kind = Some(kind);
        self.primary_keys.push(field.token());
        self
    }

    fn classify<F>(&mut self, field: Field<T, F>, classification: Classification) {
        if let Some(position) = self.vacant_slot(field) {
            self.specs[position] = Some(FieldSpec {
                classification,
                primary_key: false,
                auto_increment: false,
            });
        }
    }

    /// Position of `field` if it is declared and not yet classified.
    ///
    /// Records `UnknownField` or `AlreadySpecified` otherwise.
    fn vacant_slot<F>(&mut self, field: Field<T, F>) -> Option<usize> {
        if self.error.is_some() {
            return None;
        }

        let Some(position) = self.locator.find(field.token()) else {
            self.error = Some(SchemaError::UnknownField {
                field: field.name(),
                entity: T::entity_name(),
            });
            return None;
        };

        if self.specs[position].is_some() {
            self.error = Some(SchemaError::AlreadySpecified {
                field: field.name(),
                entity: T::entity_name(),
            });
            return None;
        }
        Some(position)
    }
}
