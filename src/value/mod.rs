//! Value conversions between entity field types and bound arguments
//!
//! Arguments and result columns travel as `sea_query::Value`. `ValueType`
//! maps a Rust field type onto that enum and back, so the executor can read
//! any registered field into an argument list and decode rows into entities
//! without knowing concrete field types.

pub mod key;
pub mod types;

pub use key::IntoKeyValues;
pub use types::{ValueExtractionError, ValueType};
