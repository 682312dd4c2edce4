use super::Operation;

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Start a transaction
    Start(Cow<'static, str>),

    /// Commit the open transaction
    Commit(Cow<'static, str>),

    /// Roll back the open transaction
    Rollback(Cow<'static, str>),
}

impl Transaction {
    /// The SQL the driver runs for this operation.
    pub fn sql(&self) -> &str {
        match self {
            Transaction::Start(sql) | Transaction::Commit(sql) | Transaction::Rollback(sql) => sql,
        }
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Operation {
        Operation::Transaction(value)
    }
}
