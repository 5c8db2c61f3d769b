mod builder;
pub use builder::Builder;

use crate::{
    driver::Driver,
    engine,
    output::{self, Output, SyncPage, SyncSchema},
    source::Source,
    Config, OutputShape, QueryRequest, RequestContext, Result, ResultSet, Value,
};

use std::sync::Arc;

/// Shared state between all `Docql` clones.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) driver: Box<dyn Driver>,
    pub(crate) source: Box<dyn Source>,
    pub(crate) config: Config,
}

/// Handle for running SQL over remote tables.
///
/// Cloning is cheap. Requests are independent: each one loads its tables into
/// its own scratch database, which is dropped when the request finishes.
#[derive(Debug, Clone)]
pub struct Docql {
    shared: Arc<Shared>,
}

impl Docql {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    /// Load the request's tables and run its query, returning the raw rows.
    pub async fn execute(&self, cx: &RequestContext, request: &QueryRequest) -> Result<ResultSet> {
        engine::exec(&self.shared, cx, request).await
    }

    /// Run a request and shape its result.
    pub async fn run(
        &self,
        cx: &RequestContext,
        request: &QueryRequest,
        shape: OutputShape,
    ) -> Result<Output> {
        let res = self.execute(cx, request).await?;
        Output::from_result_set(shape, &res)
    }

    /// First column of the first row, `Null` when the query returns nothing.
    pub async fn query_scalar(&self, cx: &RequestContext, request: &QueryRequest) -> Result<Value> {
        let res = self.execute(cx, request).await?;
        Ok(output::scalar(&res))
    }

    pub async fn query_grid(
        &self,
        cx: &RequestContext,
        request: &QueryRequest,
    ) -> Result<Vec<Vec<String>>> {
        let res = self.execute(cx, request).await?;
        Ok(output::grid(&res))
    }

    /// Result rows as a JSON array of objects.
    pub async fn query_json(&self, cx: &RequestContext, request: &QueryRequest) -> Result<String> {
        let res = self.execute(cx, request).await?;
        output::json_records(&res)
    }

    pub async fn sync_table(&self, cx: &RequestContext, request: &QueryRequest) -> Result<SyncPage> {
        let res = self.execute(cx, request).await?;
        Ok(SyncPage::from_result_set(&res))
    }

    /// Schema of the table [`sync_table`](Self::sync_table) would produce.
    ///
    /// Only table metadata and columns are fetched.
    pub async fn sync_schema(
        &self,
        cx: &RequestContext,
        request: &QueryRequest,
    ) -> Result<SyncSchema> {
        let columns = engine::describe(&self.shared, cx, request).await?;
        Ok(SyncSchema::new(columns))
    }
}
