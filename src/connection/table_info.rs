use tracing::warn;

use super::Connection;
use crate::error::{IfxRsError, Result};
use crate::types::{DescribeSource, FieldDescriptor, ResultId, TableInfo, TableInfoMode};

/// Position of the nullability flag in a native field property string.
const NULLABLE_PROPERTY: usize = 4;

fn probe_query(table: &str) -> String {
    format!("SELECT * FROM {table} WHERE 1=0")
}

impl Connection {
    /// Describes the columns of a table or of a live result.
    ///
    /// A table name is probed with a zero-row query whose result is released
    /// on every exit path, and the (case-folded) table name is set on every
    /// descriptor. A live result is left to its owner and descriptors carry
    /// no table name.
    pub async fn table_info<'a>(
        &self,
        source: impl Into<DescribeSource<'a>>,
        mode: TableInfoMode,
    ) -> Result<TableInfo> {
        let source = source.into();
        let conn = self.handle()?;
        let (id, table) = match source {
            DescribeSource::Table(name) => {
                let id = self
                    .driver
                    .query(conn, &probe_query(name), false)
                    .await
                    .ok_or_else(|| self.native_error())?;
                (id, self.options.portability.fold_case(name))
            }
            DescribeSource::Result(result) => {
                self.check_result(result)?;
                (result.id(), String::new())
            }
        };

        let described = self.describe(id, &table, mode).await;
        if source.owns_result() && !self.driver.free_result(id).await {
            warn!(result = id.0, table = %table, "failed to release probe result");
        }
        described
    }

    async fn describe(&self, id: ResultId, table: &str, mode: TableInfoMode) -> Result<TableInfo> {
        let properties = self
            .driver
            .field_properties(id)
            .await
            .ok_or_else(|| self.native_error())?;
        let columns = self
            .driver
            .num_fields(id)
            .await
            .ok_or_else(|| self.native_error())?;
        if properties.len() != columns {
            return Err(IfxRsError::DuplicateFieldNames {
                properties: properties.len(),
                columns,
            });
        }

        let portability = self.options.portability;
        let fields = properties
            .into_iter()
            .map(|(name, props)| parse_field(table, portability.fold_case(&name), &props))
            .collect::<Result<Vec<_>>>()?;
        Ok(TableInfo::build(fields, mode))
    }
}

/// Parses `type;length;precision;scale;nullable`. Only type and length are
/// required; a missing nullability flag means nullable.
fn parse_field(table: &str, name: String, properties: &str) -> Result<FieldDescriptor> {
    let parts: Vec<&str> = properties.split(';').collect();
    let malformed = || IfxRsError::FieldProperties {
        field: name.clone(),
        properties: properties.to_string(),
    };
    if parts.len() < 2 || parts[0].is_empty() {
        return Err(malformed());
    }
    let len = parts[1].trim().parse::<u32>().map_err(|_| malformed())?;
    let not_null = parts.get(NULLABLE_PROPERTY).map(|flag| flag.trim()) == Some("N");
    Ok(FieldDescriptor {
        table: table.to_string(),
        type_name: parts[0].to_string(),
        len,
        not_null,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_probe_query() {
        assert_eq!(probe_query("orders"), "SELECT * FROM orders WHERE 1=0");
    }

    #[test]
    fn test_parse_field() {
        let field = parse_field("orders", "id".to_string(), "SQLSERIAL;4;10;0;N").unwrap();
        assert_eq!(field.table, "orders");
        assert_eq!(field.name, "id");
        assert_eq!(field.type_name, "SQLSERIAL");
        assert_eq!(field.len, 4);
        assert!(field.not_null);

        let nullable = parse_field("", "note".to_string(), "SQLVCHAR;255;0;0;Y").unwrap();
        assert!(!nullable.not_null);
        assert_eq!(nullable.flags(), "");
    }

    #[test]
    fn test_parse_field_without_nullability() {
        let field = parse_field("", "n".to_string(), "SQLINT;4").unwrap();
        assert!(!field.not_null);
    }

    #[test]
    fn test_parse_field_malformed() {
        let err = parse_field("", "n".to_string(), "SQLINT").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert!(parse_field("", "n".to_string(), "SQLINT;wide;0;0;N").is_err());
        assert!(parse_field("", "n".to_string(), ";4;0;0;N").is_err());
    }
}
