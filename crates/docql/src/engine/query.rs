use crate::{driver::Connection, Error, Result, ResultSet, Value};

use tracing::debug;

/// Check that `query` prepares, binds `params` and steps against the current
/// schema. Returns the query's result column names.
pub(crate) fn validate(
    conn: &mut dyn Connection,
    query: &str,
    params: &[Value],
) -> Result<Vec<String>> {
    ensure_not_blank(query)?;

    let columns = conn
        .prepare(query, params)
        .map_err(|err| err.context(Error::query_syntax(query)))?;

    debug!(columns = ?columns, "validated query");
    Ok(columns)
}

/// Run `query` to completion.
pub(crate) fn execute(
    conn: &mut dyn Connection,
    query: &str,
    params: &[Value],
) -> Result<ResultSet> {
    ensure_not_blank(query)?;

    conn.query(query, params)
        .map_err(|err| err.context(Error::query_syntax(query)))
}

fn ensure_not_blank(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(crate::err!("query is empty").context(Error::query_syntax(query)));
    }
    Ok(())
}

/// Bound values are always bound as text.
pub(crate) fn params(values: &[String]) -> Vec<Value> {
    values.iter().map(|value| Value::from(value.as_str())).collect()
}
