//! Translation of native diagnostics into portable error kinds.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ErrorKind;

/// Native error code to portable kind. Codes are kept as the exact strings
/// embedded in native diagnostics.
static ERROR_CODE_MAP: Lazy<HashMap<&'static str, ErrorKind>> = Lazy::new(|| {
    HashMap::from([
        ("-201", ErrorKind::Syntax),
        ("-206", ErrorKind::NoSuchTable),
        ("-217", ErrorKind::NoSuchField),
        ("-239", ErrorKind::Constraint),
        ("-253", ErrorKind::Syntax),
        ("-292", ErrorKind::ConstraintNotNull),
        ("-310", ErrorKind::AlreadyExists),
        ("-329", ErrorKind::NoDbSelected),
        ("-346", ErrorKind::Constraint),
        ("-386", ErrorKind::ConstraintNotNull),
        ("-391", ErrorKind::ConstraintNotNull),
        ("-554", ErrorKind::Syntax),
        ("-691", ErrorKind::Constraint),
        ("-703", ErrorKind::ConstraintNotNull),
        ("-1204", ErrorKind::InvalidDate),
        ("-1205", ErrorKind::InvalidDate),
        ("-1206", ErrorKind::InvalidDate),
        ("-1209", ErrorKind::InvalidDate),
        ("-1210", ErrorKind::InvalidDate),
        ("-1212", ErrorKind::InvalidDate),
        ("-1213", ErrorKind::InvalidNumber),
    ])
});

// Greedy up to the last `]`, matching how the native driver's diagnostics
// have always been parsed.
static SQLCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SQLCODE=(.*)\]").expect("valid SQLCODE pattern"));

/// The read-only code table.
pub fn error_code_map() -> &'static HashMap<&'static str, ErrorKind> {
    &ERROR_CODE_MAP
}

/// Pulls the `SQLCODE=<code>]` code out of a native diagnostic.
pub fn extract_code(native: &str) -> Option<&str> {
    SQLCODE_PATTERN
        .captures(native)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Maps a native diagnostic to a portable error kind.
///
/// Unknown codes and diagnostics without an embedded code both translate to
/// [`ErrorKind::Generic`].
pub fn translate(native: &str) -> ErrorKind {
    extract_code(native)
        .and_then(|code| ERROR_CODE_MAP.get(code).copied())
        .unwrap_or(ErrorKind::Generic)
}
