use crate::{Db, Record, Result};

use sqlbatch_sql::Statement;

/// Buffers statements across calls and commits them as one transaction.
///
/// The session borrows the [`Db`] for as long as it lives. Dropping it
/// without calling [`Batch::commit`] discards the buffer.
#[derive(Debug)]
pub struct Batch<'a> {
    db: &'a mut Db,
    statements: Vec<Statement>,
}

impl<'a> Batch<'a> {
    pub(crate) fn new(db: &'a mut Db) -> Self {
        Self {
            db,
            statements: vec![],
        }
    }

    pub fn insert<R: Record>(&mut self, records: &[R]) -> Result<&mut Self> {
        if let Some(stmt) = self.db.build_insert(records, false)? {
            self.statements.push(stmt.into());
        }
        Ok(self)
    }

    pub fn insert_with_key<R: Record>(&mut self, records: &[R]) -> Result<&mut Self> {
        if let Some(stmt) = self.db.build_insert(records, true)? {
            self.statements.push(stmt.into());
        }
        Ok(self)
    }

    pub fn update<R: Record>(&mut self, records: &[R]) -> Result<&mut Self> {
        let stmts = self.db.build_update(records)?;
        self.statements.extend(stmts);
        Ok(self)
    }

    pub fn delete<R: Record>(&mut self, records: &[R]) -> Result<&mut Self> {
        if let Some(stmt) = self.db.build_delete(records)? {
            self.statements.push(stmt.into());
        }
        Ok(self)
    }

    /// Number of buffered statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Executes every buffered statement in one transaction and empties the
    /// buffer, whether or not the transaction succeeds.
    ///
    /// Committing an empty buffer does not touch the database.
    pub async fn commit(&mut self) -> Result<u64> {
        let statements = std::mem::take(&mut self.statements);
        tracing::debug!(statements = statements.len(), "committing batch");

        let stmts = self.db.lower(&statements);
        self.db.execute_in_transaction(stmts).await
    }

    /// Discards the buffer without touching the database.
    pub fn rollback(self) {
        if !self.statements.is_empty() {
            tracing::debug!(statements = self.statements.len(), "batch discarded");
        }
    }
}
