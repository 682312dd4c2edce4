use crate::logging_driver::DriverOp;
use sqlbatch_core::{
    driver::{
        operation::{ExecSql, Transaction},
        Operation,
    },
    Result,
};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Check if any operation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.operation))
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    pub fn has_rollback(&self) -> bool {
        self.any(|op| matches!(op, Operation::Transaction(Transaction::Rollback(_))))
    }

    pub fn has_commit(&self) -> bool {
        self.any(|op| matches!(op, Operation::Transaction(Transaction::Commit(_))))
    }

    /// SQL text of every executed statement, transaction control excluded
    pub fn sql(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| op.operation.as_exec_sql())
            .map(|op| op.sql.clone())
            .collect()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<(Operation, Result<u64>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((
                driver_op.operation,
                driver_op.response.map(|response| response.count),
            ))
        }
    }

    /// Remove the first operation, which must be an `ExecSql`
    pub fn pop_sql(&mut self) -> ExecSql {
        match self.pop() {
            Some((Operation::ExecSql(op), _)) => op,
            other => panic!("expected ExecSql, got {other:?}"),
        }
    }

    /// Remove the first operation, which must be transaction control, and
    /// return its SQL
    pub fn pop_transaction(&mut self) -> String {
        match self.pop() {
            Some((Operation::Transaction(op), _)) => op.sql().to_string(),
            other => panic!("expected Transaction, got {other:?}"),
        }
    }
}
