use super::Error;

/// Error returned by the database while executing a statement.
#[derive(Debug)]
pub(super) struct ExecutionError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("statement execution failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver error.
    ///
    /// Drivers convert their client errors (rusqlite, mysql_async, ...) through
    /// this constructor so callers can match on [`Error::is_execution`].
    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Execution(ExecutionError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is an execution error.
    pub fn is_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Execution(_))
    }
}
