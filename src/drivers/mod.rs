
pub use self::in_memory_test::{
    ColumnSpec, InMemoryTestDriver, InMemoryTestResponseBuilder, NativeFailure, RawResultSet,
    RecordedConnect, RecordedFetch, RecordedQuery,
};
