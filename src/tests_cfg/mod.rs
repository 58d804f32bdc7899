//! Entities shared by the unit tests.

use crate::{Table, Value, ValueExtractionError, ValueType};

// ------------------------------

#[derive(Debug, Default, Table)]
#[table_name = "table_test01"]
pub struct TableTest01 {}

// ------------------------------

#[derive(Debug, Default, Table)]
#[table_name = "table_test02"]
pub struct TableTest02 {
    #[column_name = "id"]
    pub id: i64,
    pub username: String,
}

// ------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestRoleId(pub i64);

impl ValueType for TestRoleId {
    fn into_value(self) -> Value {
        self.0.into_value()
    }

    fn try_from_value(value: Value) -> Result<Self, ValueExtractionError> {
        i64::try_from_value(value).map(TestRoleId)
    }

    fn null_value() -> Value {
        i64::null_value()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Table)]
#[table_name = "table_test03"]
pub struct TableTest03 {
    #[column_name = "id"]
    pub id: i64,
    #[column_name = "role_id"]
    pub role_id: TestRoleId,
    #[column_name = "username"]
    pub username: String,
    #[column_name = "age"]
    pub age: i32,
    #[column_name = "created_at"]
    pub created_at: i64,
    #[column_name = "updated_at"]
    pub updated_at: i64,
}

// ------------------------------

#[derive(Debug, Clone, Default, PartialEq, Table)]
#[table_name = "table_test04"]
pub struct TableTest04 {
    #[column_name = "role_id"]
    pub role_id: TestRoleId,
    #[column_name = "username"]
    pub username: String,
    #[column_name = "age"]
    pub age: i32,
    #[column_name = "desc"]
    pub desc: String,
    #[column_name = "created_at"]
    pub created_at: i64,
}

// ------------------------------

#[derive(Debug, Clone, Default, PartialEq, Table)]
#[table_name = "table_test05"]
pub struct TableTest05 {
    #[column_name = "id"]
    pub id: i64,
    #[column_name = "role_id"]
    pub role_id: Option<TestRoleId>,
}

// ------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct Marker;

impl ValueType for Marker {
    fn into_value(self) -> Value {
        Value::Bool(None)
    }

    fn try_from_value(_value: Value) -> Result<Self, ValueExtractionError> {
        Ok(Marker)
    }

    fn null_value() -> Value {
        Value::Bool(None)
    }
}

#[derive(Debug, Default, Table)]
#[table_name = "table_test_zst"]
pub struct TableTestZst {
    #[column_name = "a"]
    pub a: Marker,
    #[column_name = "b"]
    pub b: Marker,
}
