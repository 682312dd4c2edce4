use super::Error;

/// Error when a record has no accessor for a mapped column.
#[derive(Debug)]
pub(super) struct FieldNotFoundError {
    record: Box<str>,
    column: Box<str>,
}

impl std::error::Error for FieldNotFoundError {}

impl core::fmt::Display for FieldNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "record type `{}` has no field for column `{}`",
            self.record, self.column
        )
    }
}

impl Error {
    pub fn field_not_found(record: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFoundError {
            record: record.into().into(),
            column: column.into().into(),
        }))
    }

    pub fn is_field_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldNotFound(_))
    }
}
