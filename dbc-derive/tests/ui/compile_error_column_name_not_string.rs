#![allow(dead_code)]

use dbc::Table;

#[derive(Table)]
pub struct Order {
    #[column_name = 1]
    pub id: i64,
}

fn main() {}
