use super::TableMapping;
use crate::{stmt::Record, Result};

use std::{any::TypeId, fmt, sync::Arc};

/// Identifies a record type when resolving its mapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
}

impl RecordType {
    pub fn of<R: Record>() -> Self {
        Self {
            id: TypeId::of::<R>(),
            name: R::type_name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RecordType({})", self.name)
    }
}

/// Resolves record types to their table mapping.
///
/// Resolution must be deterministic for a given type. Implementations that
/// cache mappings must be safe for concurrent reads.
pub trait MappingProvider: fmt::Debug + Send + Sync {
    fn resolve(&self, ty: RecordType) -> Result<Arc<TableMapping>>;
}

impl<P: MappingProvider + ?Sized> MappingProvider for Arc<P> {
    fn resolve(&self, ty: RecordType) -> Result<Arc<TableMapping>> {
        (**self).resolve(ty)
    }
}
