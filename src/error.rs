use std::fmt;

use thiserror::Error;

/// Portable error taxonomy shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unmapped database error.
    Generic,
    ExtensionNotFound,
    ConnectFailed,
    NotConnected,
    Syntax,
    NoSuchTable,
    NoSuchField,
    Constraint,
    ConstraintNotNull,
    AlreadyExists,
    NoDbSelected,
    InvalidDate,
    InvalidNumber,
    NotCapable,
    NeedMoreData,
    /// Result metadata that cannot be trusted, e.g. duplicate field names.
    Integrity,
}

impl ErrorKind {
    /// Portable message text for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::Generic => "unknown error",
            ErrorKind::ExtensionNotFound => "extension not found",
            ErrorKind::ConnectFailed => "connect failed",
            ErrorKind::NotConnected => "not connected",
            ErrorKind::Syntax => "syntax error",
            ErrorKind::NoSuchTable => "no such table",
            ErrorKind::NoSuchField => "no such field",
            ErrorKind::Constraint => "constraint violation",
            ErrorKind::ConstraintNotNull => "null value violates not-null constraint",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::NoDbSelected => "no database selected",
            ErrorKind::InvalidDate => "invalid date or time",
            ErrorKind::InvalidNumber => "invalid number",
            ErrorKind::NotCapable => "DB backend not capable",
            ErrorKind::NeedMoreData => "insufficient data supplied",
            ErrorKind::Integrity => "integrity error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error type for ifxrs operations
#[derive(Debug, Error)]
pub enum IfxRsError {
    #[error("Native driver extension not found")]
    ExtensionNotFound,

    #[error("Connect failed: {native}")]
    ConnectFailed { native: String },

    #[error("Not connected")]
    NotConnected,

    /// A native failure translated into the portable taxonomy.
    #[error("{kind}: {native}")]
    Native { kind: ErrorKind, native: String },

    #[error("Operation not supported by this backend: {operation}")]
    NotCapable { operation: &'static str },

    #[error("Can't distinguish duplicate field names: {properties} field properties for {columns} columns")]
    DuplicateFieldNames { properties: usize, columns: usize },

    #[error("Malformed field properties for `{field}`: {properties:?}")]
    FieldProperties { field: String, properties: String },

    #[error("Result has already been released")]
    ResultReleased,

    #[error("Result was issued by a different connection")]
    ForeignResult,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

impl IfxRsError {
    /// The portable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IfxRsError::ExtensionNotFound => ErrorKind::ExtensionNotFound,
            IfxRsError::ConnectFailed { .. } => ErrorKind::ConnectFailed,
            IfxRsError::NotConnected => ErrorKind::NotConnected,
            IfxRsError::Native { kind, .. } => *kind,
            IfxRsError::NotCapable { .. } => ErrorKind::NotCapable,
            IfxRsError::DuplicateFieldNames { .. } => ErrorKind::Integrity,
            IfxRsError::FieldProperties { .. } => ErrorKind::Generic,
            IfxRsError::ResultReleased | IfxRsError::ForeignResult => ErrorKind::NeedMoreData,
            IfxRsError::ColumnNotFound(_) => ErrorKind::NoSuchField,
        }
    }

    /// Raw native diagnostic text, when the error came from the native layer.
    pub fn native(&self) -> Option<&str> {
        match self {
            IfxRsError::ConnectFailed { native } | IfxRsError::Native { native, .. } => {
                Some(native)
            }
            _ => None,
        }
    }
}

/// Result type alias for ifxrs operations
pub type Result<T> = std::result::Result<T, IfxRsError>;
