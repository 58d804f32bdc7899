//! `ValueType` implementations for the field types entities are built from.
//!
//! Integers decode from any integer variant as long as the number fits, which
//! lets an `i32` column receive a driver-reported `i64` generated id and lets
//! drivers report narrower widths than the entity declares.

use sea_query::Value;
use thiserror::Error;

/// Error type for value extraction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueExtractionError {
    /// The value is null (None variant)
    #[error("Value is null")]
    NullValue,
    /// The value type doesn't match the expected type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
    /// Value conversion failed (e.g. overflow)
    #[error("Conversion error: {0}")]
    ConversionError(String),
}

/// Trait for mapping Rust types to and from `sea_query::Value`.
///
/// Every field of a `Table` entity implements it: the executor reads fields
/// through `into_value` when binding arguments, and writes them back through
/// `try_from_value` when decoding rows or storing a generated id.
///
/// ## Example
///
/// ```rust
/// use dbc::{Value, ValueType};
///
/// let value = ValueType::into_value(42i32);
/// assert_eq!(value, Value::Int(Some(42)));
///
/// let back: i64 = ValueType::try_from_value(value).unwrap();
/// assert_eq!(back, 42);
///
/// let missing: Option<i32> = ValueType::try_from_value(Value::Int(None)).unwrap();
/// assert_eq!(missing, None);
/// ```
///
/// Newtypes implement it by delegating to the wrapped type:
///
/// ```rust
/// use dbc::{Value, ValueExtractionError, ValueType};
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq)]
/// struct RoleId(i64);
///
/// impl ValueType for RoleId {
///     fn into_value(self) -> Value {
///         self.0.into_value()
///     }
///
///     fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
///         i64::try_from_value(value).map(RoleId)
///     }
///
///     fn null_value() -> Value {
///         i64::null_value()
///     }
/// }
/// ```
pub trait ValueType: Sized {
    /// Convert this value into a `sea_query::Value`.
    fn into_value(self) -> Value;

    /// Convert a `sea_query::Value` into this type.
    ///
    /// Returns `ValueExtractionError::NullValue` for a null of any variant the
    /// type understands, so `Option<T>` can map it to `None`.
    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError>;

    /// Return the null variant for this type, used by `Option<T>` for `None`.
    fn null_value() -> Value;
}

fn mismatch(expected: &str, actual: &Value) -> ValueExtractionError {
    ValueExtractionError::TypeMismatch {
        expected: expected.to_string(),
        actual: format!("{actual:?}"),
    }
}

macro_rules! impl_integer_value_type {
    ($type:ty, $variant:ident) => {
        impl ValueType for $type {
            fn into_value(self) -> Value {
                Value::$variant(Some(self))
            }

            fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
                let wide: i128 = match value {
                    Value::TinyInt(Some(v)) => v.into(),
                    Value::SmallInt(Some(v)) => v.into(),
                    Value::Int(Some(v)) => v.into(),
                    Value::BigInt(Some(v)) => v.into(),
                    Value::TinyUnsigned(Some(v)) => v.into(),
                    Value::SmallUnsigned(Some(v)) => v.into(),
                    Value::Unsigned(Some(v)) => v.into(),
                    Value::BigUnsigned(Some(v)) => v.into(),
                    Value::TinyInt(None)
                    | Value::SmallInt(None)
                    | Value::Int(None)
                    | Value::BigInt(None)
                    | Value::TinyUnsigned(None)
                    | Value::SmallUnsigned(None)
                    | Value::Unsigned(None)
                    | Value::BigUnsigned(None) => return Err(ValueExtractionError::NullValue),
                    other => return Err(mismatch(stringify!($variant), &other)),
                };
                <$type>::try_from(wide).map_err(|_| {
                    ValueExtractionError::ConversionError(format!(
                        "{wide} is out of range for {}",
                        stringify!($type)
                    ))
                })
            }

            fn null_value() -> Value {
                Value::$variant(None)
            }
        }
    };
}

impl_integer_value_type!(i8, TinyInt);
impl_integer_value_type!(i16, SmallInt);
impl_integer_value_type!(i32, Int);
impl_integer_value_type!(i64, BigInt);
impl_integer_value_type!(u8, TinyUnsigned);
impl_integer_value_type!(u16, SmallUnsigned);
impl_integer_value_type!(u32, Unsigned);
impl_integer_value_type!(u64, BigUnsigned);

impl ValueType for f32 {
    fn into_value(self) -> Value {
        Value::Float(Some(self))
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::Float(Some(v)) => Ok(v),
            Value::Float(None) => Err(ValueExtractionError::NullValue),
            other => Err(mismatch("Float", &other)),
        }
    }

    fn null_value() -> Value {
        Value::Float(None)
    }
}

impl ValueType for f64 {
    fn into_value(self) -> Value {
        Value::Double(Some(self))
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::Double(Some(v)) => Ok(v),
            Value::Float(Some(v)) => Ok(f64::from(v)),
            Value::Double(None) | Value::Float(None) => Err(ValueExtractionError::NullValue),
            other => Err(mismatch("Double", &other)),
        }
    }

    fn null_value() -> Value {
        Value::Double(None)
    }
}

impl ValueType for bool {
    fn into_value(self) -> Value {
        Value::Bool(Some(self))
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::Bool(Some(v)) => Ok(v),
            // MySQL reports BOOLEAN columns as TINYINT(1)
            Value::TinyInt(Some(v)) => Ok(v != 0),
            Value::Bool(None) | Value::TinyInt(None) => Err(ValueExtractionError::NullValue),
            other => Err(mismatch("Bool", &other)),
        }
    }

    fn null_value() -> Value {
        Value::Bool(None)
    }
}

impl ValueType for String {
    fn into_value(self) -> Value {
        Value::String(Some(self))
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::String(Some(v)) => Ok(v),
            Value::String(None) => Err(ValueExtractionError::NullValue),
            other => Err(mismatch("String", &other)),
        }
    }

    fn null_value() -> Value {
        Value::String(None)
    }
}

impl ValueType for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Bytes(Some(self))
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::Bytes(Some(v)) => Ok(v),
            Value::Bytes(None) => Err(ValueExtractionError::NullValue),
            other => Err(mismatch("Bytes", &other)),
        }
    }

    fn null_value() -> Value {
        Value::Bytes(None)
    }
}

impl ValueType for serde_json::Value {
    fn into_value(self) -> Value {
        Value::Json(Some(Box::new(self)))
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match value {
            Value::Json(Some(v)) => Ok(*v),
            Value::Json(None) => Err(ValueExtractionError::NullValue),
            other => Err(mismatch("Json", &other)),
        }
    }

    fn null_value() -> Value {
        Value::Json(None)
    }
}

impl<T: ValueType> ValueType for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => T::null_value(),
        }
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        match T::try_from_value(value) {
            Ok(v) => Ok(Some(v)),
            Err(ValueExtractionError::NullValue) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn null_value() -> Value {
        T::null_value()
    }
}
