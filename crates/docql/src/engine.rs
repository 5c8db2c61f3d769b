//! The load-then-query pipeline.
//!
//! Every request gets a fresh scratch database from the driver. Remote
//! metadata is fetched first so that the row ceiling is enforced before any
//! table is created or any row is requested. The query is validated against
//! the empty schema before rows are fetched, so a malformed query costs no
//! row traffic.

mod load;
mod materialize;

mod plan;
pub(crate) use plan::TablePlan;

mod query;

use crate::{coerce::Options, db::Shared, QueryRequest, RequestContext, Result, ResultSet};

use tracing::{debug, info};

/// Load the request's tables and run its query.
pub(crate) async fn exec(
    shared: &Shared,
    cx: &RequestContext,
    request: &QueryRequest,
) -> Result<ResultSet> {
    let options = Options {
        use_row_ids: request.use_row_ids,
    };
    let max_rows = shared.config.max_rows;

    let tables = plan::resolve(cx, request.load_specs()?)?;
    let metas = plan::fetch_meta(&*shared.source, cx, &tables).await?;
    load::check_row_budget(metas.iter().map(|meta| meta.row_count), max_rows)?;

    let tables = plan::fetch_columns(&*shared.source, cx, tables, metas).await?;
    debug!(
        tables = ?tables.iter().map(TablePlan::destination).collect::<Vec<_>>(),
        "planned tables"
    );

    let mut conn = shared.driver.connect()?;
    materialize::create_tables(&mut *conn, &tables)?;

    let params = query::params(&request.values);
    query::validate(&mut *conn, &request.query, &params)?;

    let rows = load::fetch_rows(&*shared.source, cx, &tables, options).await?;

    // Tables may have grown since their metadata was read.
    load::check_row_budget(rows.iter().map(|rows| rows.len() as u64), max_rows)?;

    let loaded = load::insert_rows(&mut *conn, &tables, rows, options)?;
    let res = query::execute(&mut *conn, &request.query, &params)?;

    info!(
        tables = tables.len(),
        rows_loaded = loaded,
        rows_returned = res.len(),
        "query complete"
    );

    Ok(res)
}

/// Result column names of the request's query, computed against the empty
/// schema. No rows are fetched and the row ceiling does not apply.
pub(crate) async fn describe(
    shared: &Shared,
    cx: &RequestContext,
    request: &QueryRequest,
) -> Result<Vec<String>> {
    let tables = plan::resolve(cx, request.load_specs()?)?;
    let metas = plan::fetch_meta(&*shared.source, cx, &tables).await?;
    let tables = plan::fetch_columns(&*shared.source, cx, tables, metas).await?;

    let mut conn = shared.driver.connect()?;
    materialize::create_tables(&mut *conn, &tables)?;

    query::validate(&mut *conn, &request.query, &query::params(&request.values))
}
