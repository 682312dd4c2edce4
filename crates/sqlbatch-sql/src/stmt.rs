mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod update;
pub use update::{Assignment, Update};

use sqlbatch_core::{stmt::Value, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Update(Update),
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

/// Values must have a SQL literal form before they reach the serializer.
fn check_value(value: Value, column: &str) -> Result<Value> {
    match value {
        Value::F64(v) if !v.is_finite() => Err(Error::invalid_value(format!(
            "column `{column}` holds {v}, which has no SQL literal form"
        ))),
        value => Ok(value),
    }
}
