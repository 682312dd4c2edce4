use super::ColumnMapping;
use crate::{Error, Result};

use std::collections::HashSet;

/// Maximum identifier length accepted by MySQL.
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Correspondence between a record type and its backing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMapping {
    /// Name of the table
    pub table_name: String,

    /// The mapped columns, in the order they are written
    pub columns: Vec<ColumnMapping>,
}

impl TableMapping {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnMapping>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnMapping> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    /// Returns the table's single primary-key column.
    ///
    /// UPDATE and DELETE identify rows by this column, so a mapping without a
    /// primary key, or with a composite one, is rejected.
    pub fn primary_key(&self) -> Result<&ColumnMapping> {
        let mut columns = self.primary_key_columns();

        match (columns.next(), columns.next()) {
            (Some(column), None) => Ok(column),
            (None, _) => Err(Error::schema_constraint(
                &self.table_name,
                "no column is flagged as primary key",
            )),
            (Some(_), Some(_)) => Err(Error::schema_constraint(
                &self.table_name,
                "composite primary keys are not supported",
            )),
        }
    }

    /// The columns written by an INSERT. Primary-key columns are skipped
    /// unless `include_key` is set.
    pub fn insert_columns(&self, include_key: bool) -> impl Iterator<Item = &ColumnMapping> + '_ {
        self.columns
            .iter()
            .filter(move |column| include_key || !column.primary_key)
    }

    /// The columns assigned by an UPDATE: every column except the primary key.
    pub fn update_columns(&self) -> impl Iterator<Item = &ColumnMapping> + '_ {
        self.columns.iter().filter(|column| !column.primary_key)
    }

    /// Returns a copy of the mapping with `prefix` prepended to the table name.
    pub fn with_table_prefix(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.table_name = format!("{prefix}{}", self.table_name);
        }
        self
    }

    /// Checks the mapping can be turned into SQL.
    pub fn verify(&self) -> Result<()> {
        verify_identifier(&self.table_name)?;

        if self.columns.is_empty() {
            return Err(Error::invalid_mapping(format!(
                "table `{}` has no columns",
                self.table_name
            )));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            verify_identifier(&column.name)?;

            if !seen.insert(column.name.as_str()) {
                return Err(Error::invalid_mapping(format!(
                    "column `{}` is mapped more than once on table `{}`",
                    column.name, self.table_name
                )));
            }
        }

        Ok(())
    }
}

/// Rejects identifiers that cannot be safely quoted: empty names, names with
/// NUL bytes, and names longer than [`MAX_IDENTIFIER_LEN`].
pub fn verify_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_mapping("identifier cannot be empty"));
    }

    if name.contains('\0') {
        return Err(Error::invalid_mapping(format!(
            "identifier contains a NUL byte: {name:?}"
        )));
    }

    if name.len() > MAX_IDENTIFIER_LEN {
        return Err(Error::invalid_mapping(format!(
            "identifier exceeds {MAX_IDENTIFIER_LEN} bytes: {name:?}"
        )));
    }

    Ok(())
}
