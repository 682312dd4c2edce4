use super::{Formatter, ToSql};

use sqlbatch_core::{driver::Flavor, stmt::Value};

/// Collects values bound to placeholders while serializing.
pub trait Params {
    /// Stores `value` and returns its placeholder, or returns `None` when the
    /// value should be written inline as a literal.
    fn push(&mut self, value: &Value) -> Option<Placeholder>;
}

/// 1-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// Renders every value inline as a SQL literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inline;

impl Params for Inline {
    fn push(&mut self, _: &Value) -> Option<Placeholder> {
        None
    }
}

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Option<Placeholder> {
        self.push(value.clone());
        Some(Placeholder(self.len()))
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Sqlite => {
                f.dst.push('?');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}
