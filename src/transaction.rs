//! Local transaction bookkeeping.

/// Autocommit flag and the count of manipulation statements issued since
/// the last `BEGIN WORK`.
///
/// The count is non-zero exactly while a transaction is logically open. It
/// only ever returns to zero through [`TransactionState::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionState {
    autocommit: bool,
    opcount: usize,
}

impl TransactionState {
    pub fn new() -> Self {
        Self {
            autocommit: true,
            opcount: 0,
        }
    }

    pub fn autocommit(&self) -> bool {
        self.autocommit
    }

    /// Flips the flag only. Returns the previous value.
    pub fn set_autocommit(&mut self, on: bool) -> bool {
        std::mem::replace(&mut self.autocommit, on)
    }

    pub fn opcount(&self) -> usize {
        self.opcount
    }

    pub fn is_open(&self) -> bool {
        self.opcount > 0
    }

    /// Whether a manipulation statement must go through transaction tracking.
    pub fn tracks_manipulation(&self) -> bool {
        !self.autocommit
    }

    /// Whether `BEGIN WORK` must precede the next tracked statement.
    pub fn needs_begin(&self) -> bool {
        self.tracks_manipulation() && self.opcount == 0
    }

    pub fn record_manipulation(&mut self) {
        self.opcount += 1;
    }

    /// Resets the counter. Returns whether a transaction was open, i.e.
    /// whether a native COMMIT/ROLLBACK has to be sent.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.opcount) > 0
    }
}

impl Default for TransactionState {
    fn default() -> Self {
        Self::new()
    }
}
