mod exec_sql;
pub use exec_sql::ExecSql;

mod transaction;
pub use transaction::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute statement text, optionally with bound parameters
    ExecSql(ExecSql),

    /// Transaction control
    Transaction(Transaction),
}

impl Operation {
    pub fn is_exec_sql(&self) -> bool {
        matches!(self, Self::ExecSql(_))
    }

    pub fn as_exec_sql(&self) -> Option<&ExecSql> {
        match self {
            Self::ExecSql(op) => Some(op),
            _ => None,
        }
    }
}
