//! In-memory handle for exercising executors without a database.
//!
//! Available to this crate's tests and, with the `test-helpers` feature, to
//! downstream tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use sea_query::Value;

use crate::driver::{ExecResult, ReadHandle, Row, Transaction};
use crate::error::DbError;

/// Records every statement and replays queued result sets.
///
/// Each `query_one`/`query_all` call consumes the next result set pushed
/// with [`push_rows`](Self::push_rows), or sees no rows when the queue is
/// empty. Each `execute` reports the configured row count and, unless
/// disabled, the next id of an incrementing sequence.
#[derive(Debug)]
pub struct RecordingTransaction {
    queries: RefCell<Vec<String>>,
    args: RefCell<Vec<Vec<Value>>>,
    results: RefCell<VecDeque<Vec<Row>>>,
    last_insert_id: Cell<Option<i64>>,
    rows_affected: Cell<u64>,
    failure: RefCell<Option<String>>,
}

impl Default for RecordingTransaction {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTransaction {
    /// Generated ids start at 1
    pub fn new() -> Self {
        Self::with_last_insert_id(0)
    }

    /// Generated ids start right after `last`
    pub fn with_last_insert_id(last: i64) -> Self {
        RecordingTransaction {
            queries: RefCell::new(Vec::new()),
            args: RefCell::new(Vec::new()),
            results: RefCell::new(VecDeque::new()),
            last_insert_id: Cell::new(Some(last)),
            rows_affected: Cell::new(1),
            failure: RefCell::new(None),
        }
    }

    /// A handle whose `execute` never reports a generated id
    pub fn without_insert_ids() -> Self {
        let tx = Self::new();
        tx.last_insert_id.set(None);
        tx
    }

    /// Queue the result set for the next query
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.results.borrow_mut().push_back(rows);
    }

    /// Row count reported by every following `execute`
    pub fn set_rows_affected(&self, rows: u64) {
        self.rows_affected.set(rows);
    }

    /// Make the next call fail with a driver error carrying `message`
    pub fn fail_next(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    /// Statements seen so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    /// Arguments of each statement seen so far
    pub fn args(&self) -> Vec<Vec<Value>> {
        self.args.borrow().clone()
    }

    fn record(&self, sql: &str, args: &[Value]) -> Result<(), DbError> {
        self.queries.borrow_mut().push(sql.to_string());
        self.args.borrow_mut().push(args.to_vec());
        match self.failure.borrow_mut().take() {
            Some(message) => Err(DbError::driver(std::io::Error::other(message))),
            None => Ok(()),
        }
    }

    fn next_rows(&self) -> Vec<Row> {
        self.results.borrow_mut().pop_front().unwrap_or_default()
    }
}

impl ReadHandle for RecordingTransaction {
    fn query_one(&self, sql: &str, args: &[Value]) -> Result<Option<Row>, DbError> {
        self.record(sql, args)?;
        Ok(self.next_rows().into_iter().next())
    }

    fn query_all(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>, DbError> {
        self.record(sql, args)?;
        Ok(self.next_rows())
    }
}

impl Transaction for RecordingTransaction {
    fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult, DbError> {
        self.record(sql, args)?;

        let last_insert_id = self.last_insert_id.get().map(|last| last + 1);
        if last_insert_id.is_some() {
            self.last_insert_id.set(last_insert_id);
        }

        Ok(ExecResult {
            rows_affected: self.rows_affected.get(),
            last_insert_id,
        })
    }
}
