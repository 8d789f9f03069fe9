use serde::{Deserialize, Serialize};

/// Portability normalizations applied to fetched rows and described fields.
///
/// Each flag is independent; when several are enabled, fetched rows are
/// normalized in the order lowercase keys, right-trim, null-to-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portability {
    /// Lower-case field names (associative rows) and table/field names (metadata).
    pub lowercase: bool,
    /// Right-trim string values.
    pub rtrim: bool,
    /// Replace NULL values with empty strings.
    pub null_to_empty: bool,
}

impl Portability {
    pub const NONE: Portability = Portability {
        lowercase: false,
        rtrim: false,
        null_to_empty: false,
    };

    pub const ALL: Portability = Portability {
        lowercase: true,
        rtrim: true,
        null_to_empty: true,
    };

    /// Applies the lowercase flag to a table or field name.
    pub(crate) fn fold_case(&self, name: &str) -> String {
        if self.lowercase {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }
}

/// Per-connection adapter options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub portability: Portability,
}

impl Options {
    pub fn with_portability(portability: Portability) -> Self {
        Self { portability }
    }
}

/// How fetched rows are shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Values in column order, names discarded.
    #[default]
    Ordered,
    /// Values keyed by field name.
    Assoc,
}

/// Static capabilities of this backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// LIMIT is emulated by fetching rows by absolute number.
    pub limit: LimitSupport,
    pub persistent_connect: bool,
    pub prepare: bool,
    pub ssl: bool,
    pub transactions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSupport {
    /// Fetch rows by number.
    Emulate,
    /// Rewrite the query.
    Alter,
    /// Skip rows.
    Skip,
}
