use crate::{
    async_trait,
    schema::{RemoteColumn, RemoteRow, TableMeta, ValueFormat},
    RequestContext, Result, TableRef,
};

use std::fmt::Debug;

/// A remote document/table API that tables are loaded from.
///
/// Implementations perform no retries. Any failure is reported as a
/// [`remote fetch`](crate::Error::remote_fetch) error and the caller decides
/// whether to repeat the whole request.
#[async_trait]
pub trait Source: Debug + Send + Sync + 'static {
    /// Fetch lightweight metadata for a table, including its row count.
    async fn table(&self, cx: &RequestContext, table: &TableRef) -> Result<TableMeta>;

    /// Fetch the table's column definitions, in display order.
    async fn columns(&self, cx: &RequestContext, table: &TableRef) -> Result<Vec<RemoteColumn>>;

    /// Fetch every row of the table, following pagination cursors to the end.
    ///
    /// Rows are returned in the source's order. With [`ValueFormat::Rich`]
    /// the structured values land in [`RemoteRow::values`].
    async fn rows(
        &self,
        cx: &RequestContext,
        table: &TableRef,
        format: ValueFormat,
    ) -> Result<Vec<RemoteRow>>;
}
