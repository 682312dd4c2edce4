#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{Inline, Params, Placeholder};

// Fragment serializers
mod statement;
mod value;

use crate::stmt::Statement;

use sqlbatch_core::driver::{Capability, Flavor};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences in placeholder syntax
    /// between dialects.
    flavor: Flavor,

    /// Escape backslashes inside string literals.
    backslash_escapes: bool,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(capability: &Capability) -> Serializer {
        Serializer {
            flavor: capability.flavor,
            backslash_escapes: capability.backslash_escapes,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer::new(&Capability::MYSQL)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(&Capability::SQLITE)
    }

    /// Serializes a single statement, terminated by `;`.
    ///
    /// Values are either pushed to `params` and replaced by a placeholder, or
    /// rendered inline as literals when `params` is [`Inline`].
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serializes several statements into one batch, separated by a single
    /// space.
    pub fn serialize_batch<'s>(
        &self,
        stmts: impl IntoIterator<Item = &'s Statement>,
        params: &mut impl Params,
    ) -> String {
        let mut ret = String::new();

        for stmt in stmts {
            if !ret.is_empty() {
                ret.push(' ');
            }
            ret.push_str(&self.serialize(stmt, params));
        }

        ret
    }
}
