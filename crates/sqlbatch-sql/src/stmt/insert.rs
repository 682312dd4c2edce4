use super::check_value;

use sqlbatch_core::{
    schema::TableMapping,
    stmt::{extract, Record, Value},
    Error, Result,
};

/// A multi-row `INSERT INTO <table> (<columns>) VALUES (...),(...);`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Column names, in the order values appear in each row
    pub columns: Vec<String>,

    /// One value tuple per record, in input order
    pub rows: Vec<Vec<Value>>,
}

impl Insert {
    /// Builds an insert covering every record in `records`.
    ///
    /// Primary-key columns are left out unless `include_key` is set. Returns
    /// `Ok(None)` when `records` is empty.
    pub fn from_records<R: Record>(
        mapping: &TableMapping,
        records: &[R],
        include_key: bool,
    ) -> Result<Option<Insert>> {
        if records.is_empty() {
            return Ok(None);
        }

        mapping.verify()?;

        let columns: Vec<String> = mapping
            .insert_columns(include_key)
            .map(|column| column.name.clone())
            .collect();

        if columns.is_empty() {
            return Err(Error::schema_constraint(
                &mapping.table_name,
                "no columns left to insert once the primary key is excluded",
            ));
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| check_value(extract(record, column)?, column))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Insert {
            table: mapping.table_name.clone(),
            columns,
            rows,
        }))
    }

    /// Splits the insert so that no part binds more than `max_params`
    /// values. Rows keep their order across the parts.
    pub fn split(self, max_params: usize) -> Vec<Insert> {
        let max_rows = (max_params / self.columns.len().max(1)).max(1);
        if self.rows.len() <= max_rows {
            return vec![self];
        }

        self.rows
            .chunks(max_rows)
            .map(|rows| Insert {
                table: self.table.clone(),
                columns: self.columns.clone(),
                rows: rows.to_vec(),
            })
            .collect()
    }
}
