//! Default lexical statement classifier.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::traits::StatementClassifier;

static READ_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)SELECT").expect("valid read pattern"));

static MANIP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*"?(INSERT|UPDATE|DELETE|REPLACE|LOAD|COPY)\s+"#)
        .expect("valid manipulation pattern")
});

/// Substring/keyword classifier.
///
/// A statement is a read if `SELECT` appears anywhere in it, in any case.
/// That also catches `INSERT ... SELECT` and identifiers containing the
/// word; callers needing more precision supply their own
/// [`StatementClassifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalClassifier;

impl StatementClassifier for LexicalClassifier {
    fn is_read(&self, sql: &str) -> bool {
        READ_PATTERN.is_match(sql)
    }

    fn is_manip(&self, sql: &str) -> bool {
        MANIP_PATTERN.is_match(sql)
    }
}
