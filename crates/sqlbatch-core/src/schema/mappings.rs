use super::{MappingProvider, RecordType, TableMapping};
use crate::{stmt::Record, Error, Result};

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// Registry of table mappings, keyed by record type.
///
/// Mappings are verified and cached on registration; lookups only take a
/// read lock.
#[derive(Debug, Default)]
pub struct Mappings {
    table_name_prefix: String,
    by_type: RwLock<HashMap<RecordType, Arc<TableMapping>>>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that prepends `prefix` to every registered table name.
    pub fn with_table_name_prefix(prefix: impl Into<String>) -> Self {
        Self {
            table_name_prefix: prefix.into(),
            by_type: RwLock::default(),
        }
    }

    /// Registers `R` using the mapping it declares.
    pub fn register<R: Record>(&self) -> Result<Arc<TableMapping>> {
        self.insert(RecordType::of::<R>(), R::mapping())
    }

    /// Registers an explicit mapping for `ty`, replacing any earlier one.
    pub fn insert(&self, ty: RecordType, mapping: TableMapping) -> Result<Arc<TableMapping>> {
        let mapping = mapping.with_table_prefix(&self.table_name_prefix);
        mapping
            .verify()
            .map_err(|err| err.context(crate::err!("registering `{}`", ty.name())))?;

        let mapping = Arc::new(mapping);
        self.by_type
            .write()
            .map_err(|_| crate::err!("mapping registry lock poisoned"))?
            .insert(ty, mapping.clone());
        Ok(mapping)
    }

    pub fn len(&self) -> usize {
        self.by_type.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MappingProvider for Mappings {
    fn resolve(&self, ty: RecordType) -> Result<Arc<TableMapping>> {
        self.by_type
            .read()
            .map_err(|_| crate::err!("mapping registry lock poisoned"))?
            .get(&ty)
            .cloned()
            .ok_or_else(|| Error::mapping_not_found(ty.name()))
    }
}
