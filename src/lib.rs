//! ifxrs - a portable query/transaction/metadata adapter over a
//! resource-oriented Informix-style native client API
//!
//! # Example
//! ```ignore
//! use ifxrs::{Connection, ConnectParams, Execution, FetchMode, Fetched};
//!
//! let params = ConnectParams::new("stores").host("ol_srv");
//! let mut conn = Connection::open(driver, &params, false).await?;
//!
//! conn.set_autocommit(false)?;
//! conn.execute("insert into customer (name) values ('Bob')").await?;
//! conn.commit().await?;
//!
//! if let Execution::Rows(mut result) = conn.execute("select * from customer").await? {
//!     while let Fetched::Row(row) = conn.fetch_row(&result, FetchMode::Assoc, None).await? {
//!         println!("{:?}", row.get("name")?);
//!     }
//!     conn.free_result(&mut result).await;
//! }
//! ```

pub mod classify;
pub mod drivers;
pub mod error;
pub mod error_map;
pub mod traits;
pub mod transaction;
pub mod types;

mod connection;

// Re-export main types for convenient access
pub use classify::LexicalClassifier;
pub use connection::Connection;
pub use error::{ErrorKind, IfxRsError, Result};
pub use traits::{NativeDriver, StatementClassifier, StatementKind};
pub use types::{
    ConnectParams, DescribeSource, Execution, FetchMode, Fetched, FieldDescriptor, Options,
    Portability, QueryResult, Row, SqlValue, TableInfo, TableInfoMode,
};
