mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Params, Pool,
};
use sqlbatch_core::{
    async_trait,
    driver::{operation::ExecSql, Capability, Driver, Operation, Response},
    Error, Result,
};
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    pool: Pool,
}

/// Run on every new connection so string literals use backslash escapes.
const CLEAR_NO_BACKSLASH_ESCAPES: &str =
    "SET SESSION sql_mode = REPLACE(@@SESSION.sql_mode, 'NO_BACKSLASH_ESCAPES', '')";

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let pool = Pool::new(opts(&url.into())?);
        Ok(Self { pool })
    }
}

fn opts(url_str: &str) -> Result<mysql_async::Opts> {
    let url = Url::parse(url_str)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

    if url.scheme() != "mysql" {
        return Err(Error::invalid_connection_url(format!(
            "connection URL does not have a `mysql` scheme; url={url}"
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::invalid_connection_url(format!(
            "missing host in connection URL; url={url}"
        )));
    }

    if url.path().trim_start_matches('/').is_empty() {
        return Err(Error::invalid_connection_url(format!(
            "no database specified - missing path in connection URL; url={url}"
        )));
    }

    let opts = mysql_async::Opts::from_url(url.as_ref())
        .map_err(|err| Error::invalid_connection_url(err.to_string()))?;
    // Report matched rows for UPDATE, not only the rows whose values changed.
    let opts = mysql_async::OptsBuilder::from_opts(opts)
        .client_found_rows(true)
        .setup(vec![CLEAR_NO_BACKSLASH_ESCAPES]);

    Ok(opts.into())
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Driver for MySQL {
    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
    }

    async fn connect(&self) -> Result<Box<dyn sqlbatch_core::driver::Connection>> {
        let conn = self.pool.get_conn().await.map_err(Error::execution)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    async fn exec_sql(&mut self, op: ExecSql) -> Result<u64> {
        if op.params.is_empty() {
            self.conn
                .query_drop(&op.sql)
                .await
                .map_err(Error::execution)?;
        } else {
            let params = op
                .params
                .iter()
                .map(|value| Value::from(value).to_value())
                .collect::<Vec<_>>();

            self.conn
                .exec_drop(&op.sql, Params::Positional(params))
                .await
                .map_err(Error::execution)?;
        }

        Ok(self.conn.affected_rows())
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl sqlbatch_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::ExecSql(op) => {
                let count = self.exec_sql(op).await?;
                tracing::trace!(count, "mysql statement executed");
                Ok(Response::count(count))
            }
            Operation::Transaction(op) => {
                self.conn
                    .query_drop(op.sql())
                    .await
                    .map_err(Error::execution)?;
                Ok(Response::empty())
            }
        }
    }
}
