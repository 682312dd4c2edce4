mod capability;
pub use capability::{Capability, Flavor};

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::Response;

mod transaction_manager;
pub use transaction_manager::TransactionManager;

use crate::{async_trait, Result};

use std::fmt::Debug;

/// Opens connections to a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the SQL flavor spoken by connections from this driver.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single, exclusively owned database connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
