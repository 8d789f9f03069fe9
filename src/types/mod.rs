mod field;
mod native;
mod options;
mod result;
mod row;
mod sql_value;

pub use field::{DescribeSource, FieldDescriptor, TableInfo, TableInfoMode};
pub use native::{ConnId, ConnectParams, FetchPosition, NativeRow, ResultId};
pub use options::{FetchMode, Features, LimitSupport, Options, Portability};
pub use result::{Execution, QueryResult};
pub use row::{Fetched, Row};
pub use sql_value::SqlValue;
