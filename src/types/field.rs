use std::collections::HashMap;

use crate::types::QueryResult;

/// Metadata for a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Owning table; only set when a table name was described.
    pub table: String,
    pub name: String,
    /// Native type tag, e.g. `SQLCHAR`.
    pub type_name: String,
    pub len: u32,
    pub not_null: bool,
}

impl FieldDescriptor {
    /// Flag string in the `not_null` / empty convention.
    pub fn flags(&self) -> &'static str {
        if self.not_null {
            "not_null"
        } else {
            ""
        }
    }
}

/// Which extra indices [`crate::Connection::table_info`] builds.
///
/// Setting either index selects full mode, which also reports the field count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableInfoMode {
    pub order: bool,
    pub order_table: bool,
}

impl TableInfoMode {
    pub const BASIC: TableInfoMode = TableInfoMode {
        order: false,
        order_table: false,
    };
    pub const ORDER: TableInfoMode = TableInfoMode {
        order: true,
        order_table: false,
    };
    pub const ORDER_TABLE: TableInfoMode = TableInfoMode {
        order: false,
        order_table: true,
    };
    pub const FULL: TableInfoMode = TableInfoMode {
        order: true,
        order_table: true,
    };

    pub fn is_full(&self) -> bool {
        self.order || self.order_table
    }
}

/// Described fields plus the indices requested by the [`TableInfoMode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableInfo {
    pub fields: Vec<FieldDescriptor>,
    /// Set in full mode.
    pub num_fields: Option<usize>,
    /// Field name to position.
    pub order: Option<HashMap<String, usize>>,
    /// Table name to field name to position.
    pub order_table: Option<HashMap<String, HashMap<String, usize>>>,
}

impl TableInfo {
    pub(crate) fn build(fields: Vec<FieldDescriptor>, mode: TableInfoMode) -> Self {
        let order = mode.order.then(|| {
            fields
                .iter()
                .enumerate()
                .map(|(i, f)| (f.name.clone(), i))
                .collect()
        });
        let order_table = mode.order_table.then(|| {
            let mut by_table: HashMap<String, HashMap<String, usize>> = HashMap::new();
            for (i, f) in fields.iter().enumerate() {
                by_table
                    .entry(f.table.clone())
                    .or_default()
                    .insert(f.name.clone(), i);
            }
            by_table
        });
        Self {
            num_fields: mode.is_full().then_some(fields.len()),
            fields,
            order,
            order_table,
        }
    }
}

/// What to describe. A table name is probed with a throwaway query whose
/// result the introspector releases; a live result stays with the caller.
#[derive(Debug, Clone, Copy)]
pub enum DescribeSource<'a> {
    Table(&'a str),
    Result(&'a QueryResult),
}

impl<'a> DescribeSource<'a> {
    /// Whether describing this source allocates a native result that must be released.
    pub fn owns_result(&self) -> bool {
        matches!(self, DescribeSource::Table(_))
    }
}

impl<'a> From<&'a str> for DescribeSource<'a> {
    fn from(table: &'a str) -> Self {
        DescribeSource::Table(table)
    }
}

impl<'a> From<&'a QueryResult> for DescribeSource<'a> {
    fn from(result: &'a QueryResult) -> Self {
        DescribeSource::Result(result)
    }
}
