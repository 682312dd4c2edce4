pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{ColumnMapping, MappingProvider, Mappings, TableMapping};

pub mod stmt;
pub use stmt::{Record, Value};

/// A Result type alias that uses sqlbatch's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
