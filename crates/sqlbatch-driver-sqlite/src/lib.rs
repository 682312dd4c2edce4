mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use sqlbatch_core::{
    async_trait,
    driver::{
        operation::{ExecSql, Operation},
        Capability, Driver, Response,
    },
    Error, Result,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL.
    ///
    /// `sqlite::memory:` opens an in-memory database; any other path is
    /// treated as a file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn sqlbatch_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::execution)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::execution)?;
        Ok(Self { connection })
    }

    /// Direct access to the underlying connection, e.g. to create tables.
    pub fn inner(&self) -> &RusqliteConnection {
        &self.connection
    }

    /// Runs each `;`-terminated statement in `sql` and sums the rows changed.
    fn exec_batch(&self, sql: &str) -> Result<u64> {
        let mut batch = rusqlite::Batch::new(&self.connection, sql);
        let mut count = 0;

        while let Some(mut stmt) = batch.next().map_err(Error::execution)? {
            count += stmt.execute([]).map_err(Error::execution)? as u64;
        }

        Ok(count)
    }

    fn exec_with_params(&self, op: &ExecSql) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::execution)?;

        let params = op.params.iter().map(Value::from);
        let count = stmt
            .execute(rusqlite::params_from_iter(params))
            .map_err(Error::execution)?;

        Ok(count as u64)
    }
}

#[async_trait]
impl sqlbatch_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::ExecSql(op) if op.params.is_empty() => {
                let count = self.exec_batch(&op.sql)?;
                tracing::trace!(count, "sqlite batch executed");
                Ok(Response::count(count))
            }
            Operation::ExecSql(op) => Ok(Response::count(self.exec_with_params(&op)?)),
            Operation::Transaction(op) => {
                self.connection
                    .execute_batch(op.sql())
                    .map_err(Error::execution)?;
                Ok(Response::empty())
            }
        }
    }
}
