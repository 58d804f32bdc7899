#![allow(dead_code)]

use dbc::Table;

#[derive(Table)]
pub struct Pair(pub i64, pub String);

fn main() {}
