pub mod serializer;
pub use serializer::{Inline, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::{Assignment, Delete, Insert, Statement, Update};
