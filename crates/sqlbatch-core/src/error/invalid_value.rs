use super::Error;

/// Error when a value has no valid SQL literal form.
#[derive(Debug)]
pub(super) struct InvalidValueError {
    message: Box<str>,
}

impl std::error::Error for InvalidValueError {}

impl core::fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid value: {}", self.message)
    }
}

impl Error {
    pub fn invalid_value(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidValue(InvalidValueError {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidValue(_))
    }
}
