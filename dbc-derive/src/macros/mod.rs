//! Macro implementations

pub mod table;

pub use table::derive_table;
