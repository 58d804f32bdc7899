//! Primary key arguments
//!
//! Executor lookups take a key value: a single [`ValueType`] for one-column
//! keys, or a tuple for composite keys, with one element per key column in
//! field declaration order.
//!
//! ```rust
//! use dbc::{IntoKeyValues, Value};
//!
//! assert_eq!(11i64.into_key_values(), vec![Value::BigInt(Some(11))]);
//!
//! let key = (21i64, "a".to_string()).into_key_values();
//! assert_eq!(key.len(), 2);
//! ```

use sea_query::Value;

use crate::value::ValueType;

/// Conversion of a primary key into its column values
pub trait IntoKeyValues {
    /// Column values of the key, one per primary key column
    fn into_key_values(self) -> Vec<Value>;
}

impl<V: ValueType> IntoKeyValues for V {
    fn into_key_values(self) -> Vec<Value> {
        vec![self.into_value()]
    }
}

macro_rules! impl_tuple_key {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: ValueType),+> IntoKeyValues for ($($name,)+) {
            fn into_key_values(self) -> Vec<Value> {
                vec![$(self.$idx.into_value()),+]
            }
        }
    };
}

impl_tuple_key!(A: 0, B: 1);
impl_tuple_key!(A: 0, B: 1, C: 2);
impl_tuple_key!(A: 0, B: 1, C: 2, D: 3);
impl_tuple_key!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple_key!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

impl IntoKeyValues for Vec<Value> {
    fn into_key_values(self) -> Vec<Value> {
        self
    }
}
