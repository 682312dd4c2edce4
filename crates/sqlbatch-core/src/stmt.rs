mod record;
pub use record::{extract, Record};

mod value;
pub use value::Value;
