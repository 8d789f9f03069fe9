use async_trait::async_trait;

use crate::types::{ConnId, ConnectParams, FetchPosition, NativeRow, ResultId};

/// The resource-oriented native client API the adapter drives.
///
/// Failures are signalled only by the return value; the diagnostic for the
/// most recent failure is read back through [`NativeDriver::last_error`] and
/// [`NativeDriver::last_error_message`].
#[async_trait]
pub trait NativeDriver: Send + Sync {
    /// Whether the native client library is loaded at all.
    fn is_available(&self) -> bool {
        true
    }

    async fn connect(&self, params: &ConnectParams, persistent: bool) -> Option<ConnId>;

    async fn close(&self, conn: ConnId) -> bool;

    /// Runs a statement. `scroll` opens a scroll cursor so rows can later be
    /// fetched by absolute position.
    async fn query(&self, conn: ConnId, sql: &str, scroll: bool) -> Option<ResultId>;

    async fn fetch_row(&self, result: ResultId, position: FetchPosition) -> Option<NativeRow>;

    async fn affected_rows(&self, result: ResultId) -> u64;

    async fn num_fields(&self, result: ResultId) -> Option<usize>;

    async fn free_result(&self, result: ResultId) -> bool;

    /// Field name to `type;length;precision;scale;nullable` property string,
    /// in column order. Keyed by name, so duplicate names collapse.
    async fn field_properties(&self, result: ResultId) -> Option<Vec<(String, String)>>;

    /// Diagnostic carrying the native code, e.g. `E [SQLSTATE=42000 SQLCODE=-201]`.
    fn last_error(&self) -> String;

    fn last_error_message(&self) -> String;
}
