#![allow(dead_code)]

use dbc::Table;

#[derive(Table)]
pub union Bits {
    pub int: u32,
    pub float: f32,
}

fn main() {}
