use crate::error::{IfxRsError, Result};
use crate::types::{FetchMode, NativeRow, Portability, SqlValue};

/// A single fetched row, shaped according to the requested [`FetchMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Values in column order.
    Ordered(Vec<SqlValue>),
    /// Field name and value pairs in column order.
    Assoc(Vec<(String, SqlValue)>),
}

impl Row {
    /// Shapes a native row and applies the enabled portability normalizations
    /// in the order: key case, right-trim, null-to-empty.
    pub(crate) fn from_native(native: NativeRow, mode: FetchMode, portability: Portability) -> Self {
        let mut row = match mode {
            FetchMode::Ordered => Row::Ordered(native.into_iter().map(|(_, v)| v).collect()),
            FetchMode::Assoc if portability.lowercase => Row::Assoc(lowercase_keys(native)),
            FetchMode::Assoc => Row::Assoc(native),
        };
        if portability.rtrim {
            row.values_mut().for_each(SqlValue::rtrim);
        }
        if portability.null_to_empty {
            row.values_mut().for_each(SqlValue::null_to_empty);
        }
        row
    }

    /// Gets a value by field name. Ordered rows carry no names.
    pub fn get(&self, name: &str) -> Result<&SqlValue> {
        let value = match self {
            Row::Assoc(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            Row::Ordered(_) => None,
        };
        value.ok_or_else(|| IfxRsError::ColumnNotFound(name.to_string()))
    }

    /// Gets a value by column position.
    pub fn get_index(&self, index: usize) -> Result<&SqlValue> {
        let value = match self {
            Row::Ordered(values) => values.get(index),
            Row::Assoc(fields) => fields.get(index).map(|(_, value)| value),
        };
        value.ok_or_else(|| IfxRsError::ColumnNotFound(format!("#{index}")))
    }

    /// Field names, empty for ordered rows.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Row::Assoc(fields) => fields.iter().map(|(name, _)| name.as_str()).collect(),
            Row::Ordered(_) => Vec::new(),
        }
    }

    pub fn values(&self) -> Vec<&SqlValue> {
        match self {
            Row::Ordered(values) => values.iter().collect(),
            Row::Assoc(fields) => fields.iter().map(|(_, value)| value).collect(),
        }
    }

    fn values_mut(&mut self) -> Box<dyn Iterator<Item = &mut SqlValue> + '_> {
        match self {
            Row::Ordered(values) => Box::new(values.iter_mut()),
            Row::Assoc(fields) => Box::new(fields.iter_mut().map(|(_, value)| value)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Row::Ordered(values) => values.len(),
            Row::Assoc(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lower-cases keys. Keys that collide after folding keep the first
/// position and the last value.
fn lowercase_keys(native: NativeRow) -> Vec<(String, SqlValue)> {
    let mut folded: Vec<(String, SqlValue)> = Vec::with_capacity(native.len());
    for (name, value) in native {
        let name = name.to_lowercase();
        match folded.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => folded.push((name, value)),
        }
    }
    folded
}

/// Outcome of a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Row(Row),
    /// No row at the requested position. The native layer reports
    /// exhaustion and fetch failure identically, so both end up here.
    End,
}

impl Fetched {
    pub fn into_row(self) -> Option<Row> {
        match self {
            Fetched::Row(row) => Some(row),
            Fetched::End => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Fetched::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> NativeRow {
        vec![
            ("Name".to_string(), SqlValue::from("Bob  ")),
            ("Age".to_string(), SqlValue::Null),
        ]
    }

    #[test]
    fn test_all_normalizations_on_assoc_row() {
        let row = Row::from_native(bob(), FetchMode::Assoc, Portability::ALL);
        assert_eq!(
            row,
            Row::Assoc(vec![
                ("name".to_string(), SqlValue::from("Bob")),
                ("age".to_string(), SqlValue::from("")),
            ])
        );
    }

    #[test]
    fn test_no_normalization_keeps_native_row() {
        let row = Row::from_native(bob(), FetchMode::Assoc, Portability::NONE);
        assert_eq!(row.get("Name").unwrap(), &SqlValue::from("Bob  "));
        assert!(row.get("Age").unwrap().is_null());
        assert!(row.get("name").is_err());
    }

    #[test]
    fn test_ordered_row_discards_names() {
        let row = Row::from_native(bob(), FetchMode::Ordered, Portability::ALL);
        assert_eq!(
            row,
            Row::Ordered(vec![SqlValue::from("Bob"), SqlValue::from("")])
        );
        assert!(row.columns().is_empty());
        assert!(row.get("name").is_err());
        assert_eq!(row.get_index(0).unwrap(), &SqlValue::from("Bob"));
    }

    #[test]
    fn test_flags_are_independent() {
        let rtrim_only = Portability {
            rtrim: true,
            ..Portability::NONE
        };
        let row = Row::from_native(bob(), FetchMode::Assoc, rtrim_only);
        assert_eq!(row.get("Name").unwrap(), &SqlValue::from("Bob"));
        assert!(row.get("Age").unwrap().is_null());
    }

    #[test]
    fn test_lowercase_collision_keeps_last_value() {
        let native = vec![
            ("ID".to_string(), SqlValue::Int32(1)),
            ("id".to_string(), SqlValue::Int32(2)),
        ];
        let lowercase = Portability {
            lowercase: true,
            ..Portability::NONE
        };
        let row = Row::from_native(native, FetchMode::Assoc, lowercase);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("id").unwrap(), &SqlValue::Int32(2));
    }
}
