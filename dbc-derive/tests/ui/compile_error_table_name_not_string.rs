#![allow(dead_code)]

use dbc::Table;

#[derive(Table)]
#[table_name = 5]
pub struct Order {
    #[column_name = "id"]
    pub id: i64,
}

fn main() {}
