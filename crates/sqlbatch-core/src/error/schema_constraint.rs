use super::Error;

/// Error when an operation needs something the mapping does not provide,
/// such as a single primary-key column for UPDATE and DELETE.
#[derive(Debug)]
pub(super) struct SchemaConstraintError {
    table: Box<str>,
    message: Box<str>,
}

impl std::error::Error for SchemaConstraintError {}

impl core::fmt::Display for SchemaConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "schema constraint violated on table `{}`: {}",
            self.table, self.message
        )
    }
}

impl Error {
    pub fn schema_constraint(table: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaConstraint(SchemaConstraintError {
            table: table.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_schema_constraint(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaConstraint(_))
    }
}
