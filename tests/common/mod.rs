#![allow(dead_code)]
//! Shared fixtures for integration tests.

use std::cell::RefCell;

use dbc::{DbError, ExecResult, ReadHandle, Row, Transaction, Value};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A driver stub that logs statements and answers from a fixed row set.
#[derive(Default)]
pub struct StubDriver {
    pub statements: RefCell<Vec<(String, Vec<Value>)>>,
    pub rows: Vec<Row>,
    pub next_id: i64,
}

impl StubDriver {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        StubDriver {
            rows,
            ..Default::default()
        }
    }

    pub fn last(&self) -> (String, Vec<Value>) {
        self.statements
            .borrow()
            .last()
            .cloned()
            .expect("no statement recorded")
    }

    pub fn count(&self) -> usize {
        self.statements.borrow().len()
    }

    fn record(&self, sql: &str, args: &[Value]) {
        self.statements
            .borrow_mut()
            .push((sql.to_string(), args.to_vec()));
    }
}

impl ReadHandle for StubDriver {
    fn query_one(&self, sql: &str, args: &[Value]) -> Result<Option<Row>, DbError> {
        self.record(sql, args);
        Ok(self.rows.first().cloned())
    }

    fn query_all(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>, DbError> {
        self.record(sql, args);
        Ok(self.rows.clone())
    }
}

impl Transaction for StubDriver {
    fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult, DbError> {
        self.record(sql, args);
        Ok(ExecResult {
            rows_affected: 1,
            last_insert_id: Some(self.next_id),
        })
    }
}
