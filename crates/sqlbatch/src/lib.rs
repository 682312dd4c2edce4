mod batch;
pub use batch::Batch;

pub mod db;
pub use db::Db;

pub mod driver {
    pub use sqlbatch_core::driver::*;
}

pub mod schema {
    pub use sqlbatch_core::schema::*;
}

pub use sqlbatch_core::{bail, err, stmt::Value, Error, Record, Result};
pub use sqlbatch_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use sqlbatch_core::{
        schema::{ColumnMapping, TableMapping},
        stmt::{Record, Value},
    };
}
