#![allow(dead_code)]

use dbc::Table;

#[derive(Table)]
pub enum Status {
    Active,
    Archived,
}

fn main() {}
