use crate::types::SqlValue;

/// Native connection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnId(pub u64);

/// Native result handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultId(pub u64);

/// Cursor positioning for a native fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPosition {
    /// Whatever row follows the current cursor position.
    Next,
    /// 1-based absolute row number.
    Absolute(u64),
}

/// A row as returned by the native layer: field name and value pairs in
/// column order.
pub type NativeRow = Vec<(String, SqlValue)>;

/// Connection parameters, already split out of whatever DSN the caller used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectParams {
    pub database: Option<String>,
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ConnectParams {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            ..Self::default()
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Database spec in native form: `database@host`, `database`, or empty
    /// when no database was given.
    pub fn database_spec(&self) -> String {
        match (non_empty(&self.database), non_empty(&self.host)) {
            (Some(db), Some(host)) => format!("{db}@{host}"),
            (Some(db), None) => db.to_string(),
            (None, _) => String::new(),
        }
    }

    pub fn username_or_empty(&self) -> &str {
        non_empty(&self.username).unwrap_or("")
    }

    pub fn password_or_empty(&self) -> &str {
        non_empty(&self.password).unwrap_or("")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_spec() {
        assert_eq!(ConnectParams::new("stores").database_spec(), "stores");
        assert_eq!(
            ConnectParams::new("stores").host("ol_srv").database_spec(),
            "stores@ol_srv"
        );
        let hostless = ConnectParams {
            host: Some("ol_srv".to_string()),
            ..ConnectParams::default()
        };
        assert_eq!(hostless.database_spec(), "");
    }

    #[test]
    fn test_credentials_default_to_empty() {
        let params = ConnectParams::new("stores");
        assert_eq!(params.username_or_empty(), "");
        assert_eq!(params.password_or_empty(), "");

        let params = params.credentials("informix", "secret");
        assert_eq!(params.username_or_empty(), "informix");
        assert_eq!(params.password_or_empty(), "secret");
    }
}
