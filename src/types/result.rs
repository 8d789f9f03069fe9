use crate::types::{ConnId, ResultId};

/// Live handle to a native result set.
///
/// Owned by the caller from [`crate::Connection::execute`] until it is passed
/// to [`crate::Connection::free_result`]. Nothing releases it implicitly.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryResult {
    id: ResultId,
    connection: ConnId,
    scroll: bool,
    released: bool,
}

impl QueryResult {
    pub(crate) fn new(id: ResultId, connection: ConnId, scroll: bool) -> Self {
        Self {
            id,
            connection,
            scroll,
            released: false,
        }
    }

    pub fn id(&self) -> ResultId {
        self.id
    }

    /// The connection that issued this result.
    pub fn connection(&self) -> ConnId {
        self.connection
    }

    /// Whether the result was opened with a scroll cursor.
    pub fn is_scrollable(&self) -> bool {
        self.scroll
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub(crate) fn mark_released(&mut self) {
        self.released = true;
    }
}

/// Outcome of [`crate::Connection::execute`].
#[derive(Debug, PartialEq, Eq)]
pub enum Execution {
    /// A read statement; the caller now owns the live result.
    Rows(QueryResult),
    /// Any other statement; its native result has already been released.
    Done,
}

impl Execution {
    pub fn into_result(self) -> Option<QueryResult> {
        match self {
            Execution::Rows(result) => Some(result),
            Execution::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Execution::Done)
    }
}
