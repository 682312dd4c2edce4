use crate::{Error, Result};

use sqlbatch_core::driver::Driver;

use std::sync::Arc;
use url::Url;

/// Picks the driver for `url` by its scheme.
pub(super) fn driver(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "mysql" => connect_mysql(url),
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "mysql")]
fn connect_mysql(url: &str) -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(sqlbatch_driver_mysql::MySQL::new(url)?))
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Driver>> {
    Ok(Arc::new(sqlbatch_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
