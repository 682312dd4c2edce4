use super::Error;

/// Error when no table mapping was registered for a record type.
#[derive(Debug)]
pub(super) struct MappingNotFoundError {
    record: Box<str>,
}

impl std::error::Error for MappingNotFoundError {}

impl core::fmt::Display for MappingNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no table mapping registered for record type `{}`",
            self.record
        )
    }
}

impl Error {
    pub fn mapping_not_found(record: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingNotFound(MappingNotFoundError {
            record: record.into().into(),
        }))
    }

    pub fn is_mapping_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingNotFound(_))
    }
}
