//! The adapter's connection: statement execution, transaction tracking and
//! result bookkeeping on top of a [`NativeDriver`].

mod fetch;
mod table_info;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::classify::LexicalClassifier;
use crate::error::{IfxRsError, Result};
use crate::error_map;
use crate::traits::{NativeDriver, StatementClassifier};
use crate::transaction::TransactionState;
use crate::types::{
    ConnId, ConnectParams, Execution, Features, LimitSupport, Options, QueryResult,
};

pub(crate) const BEGIN_WORK: &str = "BEGIN WORK";
pub(crate) const COMMIT_WORK: &str = "COMMIT WORK";
pub(crate) const ROLLBACK_WORK: &str = "ROLLBACK WORK";

const TABLES_QUERY: &str = "select tabname from systables where tabid >= 100";

/// An open session on the native database.
///
/// Every state-changing operation takes `&mut self`: one connection runs one
/// statement at a time. Separate connections share nothing.
pub struct Connection {
    driver: Arc<dyn NativeDriver>,
    classifier: Arc<dyn StatementClassifier>,
    handle: Option<ConnId>,
    persistent: bool,
    options: Options,
    transaction: TransactionState,
    last_query: Option<String>,
    affected: Option<u64>,
}

impl Connection {
    /// Opens a connection with default options.
    ///
    /// # Example
    /// ```ignore
    /// let params = ConnectParams::new("stores").host("ol_srv").credentials("informix", "secret");
    /// let mut conn = Connection::open(driver, &params, false).await?;
    /// ```
    pub async fn open(
        driver: Arc<dyn NativeDriver>,
        params: &ConnectParams,
        persistent: bool,
    ) -> Result<Self> {
        Self::open_with_options(driver, params, persistent, Options::default()).await
    }

    pub async fn open_with_options(
        driver: Arc<dyn NativeDriver>,
        params: &ConnectParams,
        persistent: bool,
        options: Options,
    ) -> Result<Self> {
        if !driver.is_available() {
            return Err(IfxRsError::ExtensionNotFound);
        }
        let handle = match driver.connect(params, persistent).await {
            Some(handle) => handle,
            None => {
                return Err(IfxRsError::ConnectFailed {
                    native: native_diagnostic(driver.as_ref()),
                })
            }
        };
        debug!(
            database = %params.database_spec(),
            persistent,
            "connected"
        );
        Ok(Self {
            driver,
            classifier: Arc::new(LexicalClassifier),
            handle: Some(handle),
            persistent,
            options,
            transaction: TransactionState::new(),
            last_query: None,
            affected: None,
        })
    }

    /// Replaces the statement classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn StatementClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Closes the native connection. Returns the native close result, or
    /// `false` if the connection was already closed.
    pub async fn close(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let closed = self.driver.close(handle).await;
                debug!(closed, "disconnected");
                closed
            }
            None => false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Text of the last statement passed to [`Connection::execute`].
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Runs a statement.
    ///
    /// Read statements run with a scroll cursor and hand their live result
    /// back. Everything else runs without scrolling and has its native result
    /// released before returning. With autocommit off, a manipulation
    /// statement opens a transaction with `BEGIN WORK` if none is open and is
    /// counted against it.
    pub async fn execute(&mut self, sql: &str) -> Result<Execution> {
        let conn = self.handle()?;
        let kind = self.classifier.classify(sql);
        debug!(sql, ?kind, "executing statement");
        self.last_query = Some(sql.to_string());
        self.affected = None;

        if kind.is_manipulation() && self.transaction.tracks_manipulation() {
            if self.transaction.needs_begin() {
                self.run_control(conn, BEGIN_WORK).await?;
            }
            self.transaction.record_manipulation();
        }

        let id = self
            .driver
            .query(conn, sql, kind.is_read())
            .await
            .ok_or_else(|| self.native_error())?;
        self.affected = Some(self.driver.affected_rows(id).await);

        if kind.is_read() {
            return Ok(Execution::Rows(QueryResult::new(id, conn, true)));
        }

        // Non-read results pin native resources until freed.
        if !self.driver.free_result(id).await {
            warn!(result = id.0, "failed to release statement result");
        }
        Ok(Execution::Done)
    }

    /// Rows affected by the last statement, or 0 if it was not a data
    /// manipulation statement.
    pub fn affected_rows(&self) -> u64 {
        match &self.last_query {
            Some(sql) if self.classifier.is_manip(sql) => self.affected.unwrap_or(0),
            _ => 0,
        }
    }

    /// Row counting is not available from this backend.
    pub fn num_rows(&self, _result: &QueryResult) -> Result<usize> {
        self.handle()?;
        Err(IfxRsError::NotCapable {
            operation: "num_rows",
        })
    }

    /// Multiple result sets are not supported.
    pub fn next_result(&self, _result: &QueryResult) -> bool {
        false
    }

    pub async fn num_cols(&self, result: &QueryResult) -> Result<usize> {
        self.check_result(result)?;
        match self.driver.num_fields(result.id()).await {
            Some(count) if count > 0 => Ok(count),
            _ => Err(self.native_error()),
        }
    }

    /// Releases a live result. Returns `false` if it was already released,
    /// belongs to another connection, or the native release failed.
    pub async fn free_result(&self, result: &mut QueryResult) -> bool {
        if self.check_result(result).is_err() {
            return false;
        }
        result.mark_released();
        self.driver.free_result(result.id()).await
    }

    pub fn autocommit(&self) -> bool {
        self.transaction.autocommit()
    }

    /// Manipulation statements counted since the open transaction began.
    pub fn transaction_opcount(&self) -> usize {
        self.transaction.opcount()
    }

    /// Flips the autocommit flag. Never sends anything to the database, so
    /// turning autocommit on leaves an open transaction open.
    pub fn set_autocommit(&mut self, on: bool) -> Result<()> {
        self.handle()?;
        let was = self.transaction.set_autocommit(on);
        if on && !was && self.transaction.is_open() {
            warn!(
                opcount = self.transaction.opcount(),
                "autocommit enabled with an open transaction"
            );
        }
        Ok(())
    }

    pub async fn commit(&mut self) -> Result<()> {
        self.end_transaction(COMMIT_WORK).await
    }

    pub async fn rollback(&mut self) -> Result<()> {
        self.end_transaction(ROLLBACK_WORK).await
    }

    /// No-op without an open transaction. The counter is reset before the
    /// native call and stays reset if that call fails.
    async fn end_transaction(&mut self, statement: &'static str) -> Result<()> {
        let conn = self.handle()?;
        if !self.transaction.close() {
            return Ok(());
        }
        self.run_control(conn, statement).await
    }

    /// Sends a transaction control statement and releases its result.
    async fn run_control(&self, conn: ConnId, statement: &'static str) -> Result<()> {
        debug!(statement, "transaction control");
        let id = self
            .driver
            .query(conn, statement, false)
            .await
            .ok_or_else(|| self.native_error())?;
        self.driver.free_result(id).await;
        Ok(())
    }

    /// Native code and message of the last native failure.
    pub fn error_native(&self) -> String {
        native_diagnostic(self.driver.as_ref())
    }

    /// Static capabilities of this backend.
    pub fn features() -> Features {
        Features {
            limit: LimitSupport::Emulate,
            persistent_connect: true,
            prepare: false,
            ssl: false,
            transactions: true,
        }
    }

    /// Catalog query for a kind of backend information. Only `"tables"` is known.
    pub fn special_query(kind: &str) -> Option<&'static str> {
        match kind {
            "tables" => Some(TABLES_QUERY),
            _ => None,
        }
    }

    fn handle(&self) -> Result<ConnId> {
        self.handle.ok_or(IfxRsError::NotConnected)
    }

    fn check_result(&self, result: &QueryResult) -> Result<ConnId> {
        let conn = self.handle()?;
        if result.is_released() {
            return Err(IfxRsError::ResultReleased);
        }
        if result.connection() != conn {
            return Err(IfxRsError::ForeignResult);
        }
        Ok(conn)
    }

    /// Translates the driver's last failure.
    fn native_error(&self) -> IfxRsError {
        IfxRsError::Native {
            kind: error_map::translate(&self.driver.last_error()),
            native: self.error_native(),
        }
    }
}

fn native_diagnostic(driver: &dyn NativeDriver) -> String {
    format!("{} {}", driver.last_error(), driver.last_error_message())
}
