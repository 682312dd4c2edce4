use super::check_value;

use sqlbatch_core::{
    schema::TableMapping,
    stmt::{extract, Record, Value},
    Result,
};

/// `DELETE FROM <table> WHERE <key> IN ( ... );`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    /// The primary-key column
    pub key_column: String,

    /// Key of each record to delete, in input order
    pub keys: Vec<Value>,
}

impl Delete {
    /// Builds a delete for every record in `records`. The mapping must have a
    /// single primary-key column. Returns `Ok(None)` when `records` is empty.
    pub fn from_records<R: Record>(mapping: &TableMapping, records: &[R]) -> Result<Option<Delete>> {
        if records.is_empty() {
            return Ok(None);
        }

        mapping.verify()?;
        let key_column = mapping.primary_key()?.name.clone();

        let keys = records
            .iter()
            .map(|record| check_value(extract(record, &key_column)?, &key_column))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Delete {
            table: mapping.table_name.clone(),
            key_column,
            keys,
        }))
    }

    /// Splits the key list so that no part binds more than `max_params`
    /// values.
    pub fn split(self, max_params: usize) -> Vec<Delete> {
        let max_keys = max_params.max(1);
        if self.keys.len() <= max_keys {
            return vec![self];
        }

        self.keys
            .chunks(max_keys)
            .map(|keys| Delete {
                table: self.table.clone(),
                key_column: self.key_column.clone(),
                keys: keys.to_vec(),
            })
            .collect()
    }
}
