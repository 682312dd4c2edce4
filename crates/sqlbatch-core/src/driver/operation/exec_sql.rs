use super::Operation;

use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ExecSql {
    /// The SQL text to execute. May hold several `;`-terminated statements
    /// when `params` is empty.
    pub sql: String,

    /// Values bound to the placeholders in `sql`, in placeholder order
    pub params: Vec<Value>,
}

impl ExecSql {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: vec![],
        }
    }

    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

impl From<ExecSql> for Operation {
    fn from(value: ExecSql) -> Self {
        Self::ExecSql(value)
    }
}

impl From<&str> for ExecSql {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ExecSql {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
