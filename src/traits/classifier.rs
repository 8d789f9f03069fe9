/// Execution path a statement takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Runs with a scroll cursor; the live result goes back to the caller.
    Read,
    /// Data manipulation; counted against the open transaction when
    /// autocommit is off.
    Manipulation,
    /// DDL and control statements; neither read nor counted.
    Other,
}

impl StatementKind {
    pub fn is_read(&self) -> bool {
        matches!(self, StatementKind::Read)
    }

    pub fn is_manipulation(&self) -> bool {
        matches!(self, StatementKind::Manipulation)
    }
}

/// Decides how a statement is executed without parsing it.
pub trait StatementClassifier: Send + Sync {
    /// Whether the statement returns rows to the caller.
    fn is_read(&self, sql: &str) -> bool;

    /// Whether the statement manipulates data.
    fn is_manip(&self, sql: &str) -> bool;

    /// Read wins over manipulation.
    fn classify(&self, sql: &str) -> StatementKind {
        if self.is_read(sql) {
            StatementKind::Read
        } else if self.is_manip(sql) {
            StatementKind::Manipulation
        } else {
            StatementKind::Other
        }
    }
}
