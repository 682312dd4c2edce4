use super::check_value;

use sqlbatch_core::{
    schema::TableMapping,
    stmt::{extract, Record, Value},
    Error, Result,
};

/// `column = value` within an UPDATE's SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

/// `UPDATE <table> SET ... WHERE <key> = <value>;` for a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// Every non-key column, in mapping order
    pub assignments: Vec<Assignment>,

    /// The primary-key column
    pub key_column: String,

    /// Key of the record being updated
    pub key: Value,
}

impl Update {
    /// Builds one update per record, in input order. The mapping must have a
    /// single primary-key column and at least one other column.
    pub fn from_records<R: Record>(mapping: &TableMapping, records: &[R]) -> Result<Vec<Update>> {
        if records.is_empty() {
            return Ok(vec![]);
        }

        mapping.verify()?;
        let key_column = mapping.primary_key()?.name.as_str();

        let columns: Vec<&str> = mapping
            .update_columns()
            .map(|column| column.name.as_str())
            .collect();

        if columns.is_empty() {
            return Err(Error::schema_constraint(
                &mapping.table_name,
                "no columns to update besides the primary key",
            ));
        }

        records
            .iter()
            .map(|record| -> Result<Update> {
                let assignments = columns
                    .iter()
                    .map(|column| -> Result<Assignment> {
                        Ok(Assignment {
                            column: column.to_string(),
                            value: check_value(extract(record, column)?, column)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Update {
                    table: mapping.table_name.clone(),
                    assignments,
                    key_column: key_column.to_string(),
                    key: check_value(extract(record, key_column)?, key_column)?,
                })
            })
            .collect()
    }
}
