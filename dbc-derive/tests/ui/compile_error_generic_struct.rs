#![allow(dead_code)]

use dbc::Table;

#[derive(Table)]
pub struct Wrapper<T> {
    #[column_name = "value"]
    pub value: T,
}

fn main() {}
