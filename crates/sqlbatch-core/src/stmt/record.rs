use super::Value;
use crate::{schema::TableMapping, Error, Result};

/// A typed entity that can be written to a table.
///
/// Implementations are usually generated with `#[derive(Record)]`, which
/// produces a `match` over the mapped column names. Lookup is by exact,
/// case-sensitive column name; there is no runtime reflection.
pub trait Record: Send + Sync + 'static {
    /// The table mapping this record type is registered with.
    fn mapping() -> TableMapping
    where
        Self: Sized;

    /// Returns the value stored for `column`, or `None` when the record has no
    /// field mapped to that column.
    fn field(&self, column: &str) -> Option<Value>;

    /// Name used in error messages.
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// Extracts the value of `column` from `record`, failing with
/// `FieldNotFound` when the record does not expose that column.
pub fn extract<R: Record>(record: &R, column: &str) -> Result<Value> {
    record
        .field(column)
        .ok_or_else(|| Error::field_not_found(R::type_name(), column))
}
