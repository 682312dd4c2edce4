use super::{operation::Transaction, Flavor};

use std::borrow::Cow;

/// Tracks whether the connection has an open transaction and produces the
/// matching begin, `COMMIT`, and `ROLLBACK` operations.
///
/// The executor embeds one of these per connection and hands the returned
/// operations to the driver. A transaction that is still open when the next
/// call starts was abandoned mid-flight, and the connection must not be
/// reused.
#[derive(Debug)]
pub struct TransactionManager {
    open: bool,
    begin_stmt: &'static str,
}

impl TransactionManager {
    fn with_begin(begin_stmt: &'static str) -> Self {
        Self {
            open: false,
            begin_stmt,
        }
    }

    /// `BEGIN` / `COMMIT` / `ROLLBACK`.
    pub fn sqlite() -> Self {
        Self::with_begin("BEGIN")
    }

    /// `START TRANSACTION` / `COMMIT` / `ROLLBACK`.
    pub fn mysql() -> Self {
        Self::with_begin("START TRANSACTION")
    }

    pub fn for_flavor(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Mysql => Self::mysql(),
            Flavor::Sqlite => Self::sqlite(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn start(&mut self) -> Transaction {
        self.open = true;
        Transaction::Start(Cow::Borrowed(self.begin_stmt))
    }

    pub fn commit(&mut self) -> Transaction {
        self.open = false;
        Transaction::Commit(Cow::Borrowed("COMMIT"))
    }

    pub fn rollback(&mut self) -> Transaction {
        self.open = false;
        Transaction::Rollback(Cow::Borrowed("ROLLBACK"))
    }

    /// Forgets the open transaction without producing an operation. Used when
    /// the connection it ran on is dropped.
    pub fn reset(&mut self) {
        self.open = false;
    }
}
