use tracing::trace;

use super::Connection;
use crate::error::Result;
use crate::types::{FetchMode, FetchPosition, Fetched, QueryResult, Row};

impl Connection {
    /// Fetches one row from a live result.
    ///
    /// `row` is 0-based; `None` asks the native cursor for the next row
    /// instead of computing a position, since some native drivers do not
    /// advance reliably otherwise. A negative `row` is end of results without
    /// touching the native layer.
    ///
    /// The native layer answers "no row" both at the end of the result and on
    /// a failed fetch; both come back as [`Fetched::End`].
    pub async fn fetch_row(
        &self,
        result: &QueryResult,
        mode: FetchMode,
        row: Option<i64>,
    ) -> Result<Fetched> {
        self.check_result(result)?;
        let position = match row {
            None => FetchPosition::Next,
            Some(n) if n < 0 => return Ok(Fetched::End),
            // Native rows are numbered from 1.
            Some(n) => FetchPosition::Absolute(n as u64 + 1),
        };
        trace!(result = result.id().0, ?position, "fetching row");

        Ok(match self.driver.fetch_row(result.id(), position).await {
            Some(native) => Fetched::Row(Row::from_native(
                native,
                mode,
                self.options.portability,
            )),
            None => Fetched::End,
        })
    }

    /// Fetches every remaining row using next-row positioning.
    pub async fn fetch_all(&self, result: &QueryResult, mode: FetchMode) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        while let Fetched::Row(row) = self.fetch_row(result, mode, None).await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Emulates `LIMIT count OFFSET offset` by fetching rows by absolute number.
    pub async fn fetch_range(
        &self,
        result: &QueryResult,
        mode: FetchMode,
        offset: u64,
        count: u64,
    ) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        for index in offset..offset.saturating_add(count) {
            let index = i64::try_from(index).unwrap_or(i64::MAX);
            match self.fetch_row(result, mode, Some(index)).await? {
                Fetched::Row(row) => rows.push(row),
                Fetched::End => break,
            }
        }
        Ok(rows)
    }
}
