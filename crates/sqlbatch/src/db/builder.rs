use super::{connect, Db};
use crate::Result;

use sqlbatch_core::{
    driver::Driver,
    schema::{MappingProvider, Mappings, RecordType, TableMapping},
    stmt::Record,
};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Record types registered with their declared mapping
    records: Vec<(RecordType, fn() -> TableMapping)>,

    /// Prepended to every registered table name
    table_name_prefix: Option<String>,

    /// Replaces the built-in registry
    provider: Option<Arc<dyn MappingProvider>>,

    /// Bind values as parameters instead of inlining literals
    placeholders: bool,
}

impl Builder {
    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.records.push((RecordType::of::<R>(), R::mapping));
        self
    }

    /// Set the table name prefix for all registered tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Resolve mappings through `provider` instead of registered types.
    pub fn mapping_provider(&mut self, provider: impl MappingProvider + 'static) -> &mut Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Send values as bound parameters (`?` / `?N`) rather than inline
    /// literals.
    ///
    /// A statement may bind at most [`Capability::max_params`] values
    /// (32766 for SQLite, 65535 for MySQL). Inserts and deletes over that
    /// limit are split into several statements sent in one transaction.
    ///
    /// [`Capability::max_params`]: sqlbatch_core::driver::Capability::max_params
    pub fn placeholders(&mut self, enabled: bool) -> &mut Self {
        self.placeholders = enabled;
        self
    }

    /// Creates a handle for the database at `url`. The connection itself is
    /// opened on first use.
    pub fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = connect::driver(url)?;
        self.finish(driver)
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.finish(Arc::new(driver))
    }

    fn finish(&mut self, driver: Arc<dyn Driver>) -> Result<Db> {
        let mappings = self.build_mappings()?;
        Ok(Db::new(driver, mappings, self.placeholders))
    }

    fn build_mappings(&self) -> Result<Arc<dyn MappingProvider>> {
        if let Some(provider) = &self.provider {
            if !self.records.is_empty() || self.table_name_prefix.is_some() {
                crate::bail!(
                    "a custom mapping provider cannot be combined with registered record types or a table name prefix"
                );
            }
            return Ok(provider.clone());
        }

        let mappings = match &self.table_name_prefix {
            Some(prefix) => Mappings::with_table_name_prefix(prefix.as_str()),
            None => Mappings::new(),
        };

        for (ty, mapping) in &self.records {
            mappings.insert(*ty, mapping())?;
        }

        Ok(Arc::new(mappings))
    }
}
