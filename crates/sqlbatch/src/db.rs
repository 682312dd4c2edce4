mod builder;
pub use builder::Builder;

mod connect;

use crate::Batch;

use sqlbatch_core::{
    driver::{operation::ExecSql, Capability, Connection, Driver, Operation, TransactionManager},
    schema::{MappingProvider, RecordType, TableMapping},
    stmt::Record,
    Error, Result,
};
use sqlbatch_sql::{Delete, Inline, Insert, Serializer, Statement, Update};

use std::sync::Arc;

/// A database handle.
///
/// The handle owns a single connection, opened on first use and kept until
/// [`Db::close`] is called or the handle is dropped. Every method takes
/// `&mut self`, so the connection is never shared between calls.
#[derive(Debug)]
pub struct Db {
    driver: Arc<dyn Driver>,
    connection: Option<Box<dyn Connection>>,
    transactions: TransactionManager,
    mappings: Arc<dyn MappingProvider>,
    serializer: Serializer,
    capability: &'static Capability,
    placeholders: bool,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(
        driver: Arc<dyn Driver>,
        mappings: Arc<dyn MappingProvider>,
        placeholders: bool,
    ) -> Db {
        let capability = driver.capability();

        Db {
            driver,
            connection: None,
            transactions: TransactionManager::for_flavor(capability.flavor),
            mappings,
            serializer: Serializer::new(capability),
            capability,
            placeholders,
        }
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }

    pub fn mappings(&self) -> &dyn MappingProvider {
        &*self.mappings
    }

    /// Returns the mapping registered for `R`.
    pub fn mapping<R: Record>(&self) -> Result<Arc<TableMapping>> {
        self.mappings.resolve(RecordType::of::<R>())
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Lazily open the connection.
    async fn connection(&mut self) -> Result<&mut Box<dyn Connection>> {
        if self.connection.is_none() {
            let connection = self.driver.connect().await?;
            tracing::info!(flavor = ?self.capability.flavor, "connection opened");
            self.connection = Some(connection);
        }

        self.connection
            .as_mut()
            .ok_or_else(|| crate::err!("connection unavailable"))
    }

    async fn exec(&mut self, op: Operation) -> Result<u64> {
        let connection = self.connection().await?;
        Ok(connection.exec(op).await?.count)
    }

    /// Drops the connection and forgets its transaction. Closing the
    /// connection makes the server abort whatever transaction is still open
    /// on it.
    fn discard_connection(&mut self) {
        self.connection = None;
        self.transactions.reset();
    }

    /// A transaction still open when a call starts belongs to a future that
    /// was dropped mid-flight.
    fn discard_abandoned_transaction(&mut self) {
        if self.transactions.is_open() {
            tracing::warn!("discarding connection with an abandoned transaction");
            self.discard_connection();
        }
    }

    /// Executes SQL outside of an explicit transaction and returns the
    /// number of affected rows.
    pub async fn execute(&mut self, stmt: impl Into<ExecSql>) -> Result<u64> {
        self.discard_abandoned_transaction();

        let stmt = stmt.into();
        tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "execute");
        self.exec(stmt.into()).await
    }

    /// Executes `stmts` in one transaction.
    ///
    /// On failure the transaction is rolled back and the error that caused
    /// the failure is returned. Nothing is executed when `stmts` is empty.
    pub async fn execute_in_transaction(
        &mut self,
        stmts: impl IntoIterator<Item = ExecSql>,
    ) -> Result<u64> {
        let mut stmts = stmts.into_iter().peekable();
        if stmts.peek().is_none() {
            return Ok(0);
        }

        self.discard_abandoned_transaction();

        let start = self.transactions.start();
        if let Err(err) = self.exec(start.into()).await {
            self.discard_connection();
            return Err(err);
        }

        let mut count = 0;
        for stmt in stmts {
            tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "execute in transaction");
            match self.exec(stmt.into()).await {
                Ok(n) => count += n,
                Err(err) => return Err(self.rollback(err).await),
            }
        }

        let commit = self.transactions.commit();
        if let Err(err) = self.exec(commit.into()).await {
            return Err(self.rollback(err).await);
        }

        Ok(count)
    }

    /// Rolls back the open transaction after `err` and hands `err` back
    /// unchanged.
    ///
    /// When `ROLLBACK` itself fails the connection is dropped, so the next
    /// call starts on a fresh one.
    async fn rollback(&mut self, err: Error) -> Error {
        tracing::warn!(error = %err, "rolling back transaction");

        let rollback = self.transactions.rollback();
        if let Err(rollback_err) = self.exec(rollback.into()).await {
            tracing::warn!(error = %rollback_err, "rollback failed; dropping connection");
            self.discard_connection();
        }
        err
    }

    /// Inserts `records` with one multi-row INSERT, leaving out the
    /// primary-key column.
    ///
    /// With placeholders an insert binding more values than the driver
    /// accepts is split into several statements run in one transaction.
    pub async fn insert<R: Record>(&mut self, records: &[R]) -> Result<u64> {
        self.insert_records(records, false).await
    }

    /// Inserts `records` with one multi-row INSERT, primary-key column
    /// included.
    pub async fn insert_with_key<R: Record>(&mut self, records: &[R]) -> Result<u64> {
        self.insert_records(records, true).await
    }

    async fn insert_records<R: Record>(&mut self, records: &[R], include_key: bool) -> Result<u64> {
        let Some(stmt) = self.build_insert(records, include_key)? else {
            return Ok(0);
        };

        let mut stmts = self.lower(&[stmt.into()]);
        if stmts.len() == 1 {
            let stmt = stmts.remove(0);
            self.execute(stmt).await
        } else {
            self.execute_in_transaction(stmts).await
        }
    }

    /// Updates every record by primary key, in one transaction.
    pub async fn update<R: Record>(&mut self, records: &[R]) -> Result<u64> {
        let stmts = self.build_update(records)?;
        let stmts = self.lower(&stmts);
        self.execute_in_transaction(stmts).await
    }

    /// Deletes every record by primary key with one `IN` list, in a
    /// transaction.
    pub async fn delete<R: Record>(&mut self, records: &[R]) -> Result<u64> {
        let Some(stmt) = self.build_delete(records)? else {
            return Ok(0);
        };

        let stmts = self.lower(&[stmt.into()]);
        self.execute_in_transaction(stmts).await
    }

    /// Starts a batch session that buffers statements until
    /// [`Batch::commit`].
    pub fn batch(&mut self) -> Batch<'_> {
        Batch::new(self)
    }

    /// Releases the connection. The next operation opens a new one.
    pub fn close(&mut self) {
        if self.connection.take().is_some() {
            tracing::info!("connection closed");
        }
        self.transactions.reset();
    }

    pub(crate) fn build_insert<R: Record>(
        &self,
        records: &[R],
        include_key: bool,
    ) -> Result<Option<Insert>> {
        if records.is_empty() {
            return Ok(None);
        }

        let mapping = self.mapping::<R>()?;
        let stmt = Insert::from_records(&mapping, records, include_key)?;
        if let Some(stmt) = &stmt {
            tracing::debug!(table = %stmt.table, rows = stmt.rows.len(), include_key, "insert");
        }
        Ok(stmt)
    }

    pub(crate) fn build_update<R: Record>(&self, records: &[R]) -> Result<Vec<Statement>> {
        if records.is_empty() {
            return Ok(vec![]);
        }

        let mapping = self.mapping::<R>()?;
        let stmts = Update::from_records(&mapping, records)?;
        tracing::debug!(table = %mapping.table_name, rows = stmts.len(), "update");
        Ok(stmts.into_iter().map(Statement::from).collect())
    }

    pub(crate) fn build_delete<R: Record>(&self, records: &[R]) -> Result<Option<Delete>> {
        if records.is_empty() {
            return Ok(None);
        }

        let mapping = self.mapping::<R>()?;
        let stmt = Delete::from_records(&mapping, records)?;
        if let Some(stmt) = &stmt {
            tracing::debug!(table = %stmt.table, rows = stmt.keys.len(), "delete");
        }
        Ok(stmt)
    }

    /// Serializes statements into the operations sent to the driver.
    ///
    /// With placeholders every statement becomes its own operation carrying
    /// its bound values, and inserts and deletes are split so that no
    /// operation binds more than [`Capability::max_params`] values. Inline
    /// statements are joined into a single text command when the driver
    /// accepts several statements at once.
    pub(crate) fn lower(&self, stmts: &[Statement]) -> Vec<ExecSql> {
        if stmts.is_empty() {
            return vec![];
        }

        if self.placeholders {
            let max_params = self.capability.max_params;
            stmts
                .iter()
                .flat_map(|stmt| -> Vec<Statement> {
                    match stmt {
                        Statement::Insert(stmt) => stmt
                            .clone()
                            .split(max_params)
                            .into_iter()
                            .map(Statement::from)
                            .collect(),
                        Statement::Delete(stmt) => stmt
                            .clone()
                            .split(max_params)
                            .into_iter()
                            .map(Statement::from)
                            .collect(),
                        Statement::Update(_) => vec![stmt.clone()],
                    }
                })
                .map(|stmt| {
                    let mut params = vec![];
                    let sql = self.serializer.serialize(&stmt, &mut params);
                    ExecSql::with_params(sql, params)
                })
                .collect()
        } else if self.capability.multi_statement {
            vec![ExecSql::new(
                self.serializer.serialize_batch(stmts, &mut Inline),
            )]
        } else {
            stmts
                .iter()
                .map(|stmt| ExecSql::new(self.serializer.serialize(stmt, &mut Inline)))
                .collect()
        }
    }
}
