use super::Error;

/// Error when a table mapping cannot be used to generate SQL (bad identifiers,
/// duplicate columns, empty column list).
#[derive(Debug)]
pub(super) struct InvalidMappingError {
    message: Box<str>,
}

impl std::error::Error for InvalidMappingError {}

impl core::fmt::Display for InvalidMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid table mapping: {}", self.message)
    }
}

impl Error {
    pub fn invalid_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMapping(InvalidMappingError {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMapping(_))
    }
}
