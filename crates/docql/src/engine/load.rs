use super::TablePlan;
use crate::{
    coerce::{self, Options},
    driver::Connection,
    Error, RequestContext, Result, Value,
};

use docql_core::{
    schema::{RemoteRow, ValueFormat},
    Source,
};
use docql_sql::Serializer;
use futures_util::future::try_join_all;
use indexmap::IndexMap;
use tracing::debug;

/// Fail when the tables hold more rows in total than `limit`.
pub(crate) fn check_row_budget(row_counts: impl IntoIterator<Item = u64>, limit: u64) -> Result<()> {
    let requested = row_counts
        .into_iter()
        .fold(0u64, |total, count| total.saturating_add(count));

    if requested > limit {
        return Err(Error::resource_limit_exceeded(requested, limit));
    }

    Ok(())
}

/// Fetch every table's rows concurrently. The result lines up with `tables`.
pub(crate) async fn fetch_rows(
    source: &dyn Source,
    cx: &RequestContext,
    tables: &[TablePlan],
    options: Options,
) -> Result<Vec<Vec<RemoteRow>>> {
    try_join_all(
        tables
            .iter()
            .map(|table| fetch_table_rows(source, cx, table, options)),
    )
    .await
}

async fn fetch_table_rows(
    source: &dyn Source,
    cx: &RequestContext,
    table: &TablePlan,
    options: Options,
) -> Result<Vec<RemoteRow>> {
    let rows = if options.use_row_ids {
        let (mut rows, rich) = tokio::try_join!(
            source.rows(cx, &table.table, ValueFormat::Simple),
            source.rows(cx, &table.table, ValueFormat::Rich),
        )?;
        attach_rich_values(&mut rows, rich);
        rows
    } else {
        source.rows(cx, &table.table, ValueFormat::Simple).await?
    };

    debug!(table = %table.table, rows = rows.len(), "fetched rows");
    Ok(rows)
}

/// Join rich rows onto simple rows by row ID.
fn attach_rich_values(rows: &mut [RemoteRow], rich: Vec<RemoteRow>) {
    let mut rich: IndexMap<String, _> = rich.into_iter().map(|row| (row.id, row.values)).collect();

    for row in rows {
        row.rich_values = rich.swap_remove(&row.id);
    }
}

/// Insert fetched rows in fetch order, one table at a time.
pub(crate) fn insert_rows(
    conn: &mut dyn Connection,
    tables: &[TablePlan],
    rows: Vec<Vec<RemoteRow>>,
    options: Options,
) -> Result<u64> {
    let serializer = Serializer::sqlite();
    let mut inserted = 0;

    for (table, rows) in tables.iter().zip(rows) {
        let sql = serializer.serialize(&table.insert());
        let mut params = Vec::with_capacity(table.width());

        for row in &rows {
            params.clear();
            params.extend(table.columns.iter().map(|column| {
                coerce::coerce(
                    column,
                    row.value(&column.id),
                    row.rich_value(&column.id),
                    options,
                )
            }));
            params.push(Value::from(row.id.as_str()));
            params.push(Value::from(row.name.as_str()));

            conn.insert(&sql, &params).map_err(|err| {
                err.context(crate::err!(
                    "failed to load row `{}` into `{}`",
                    row.id,
                    table.destination()
                ))
            })?;
        }

        debug!(
            destination = table.destination(),
            rows = rows.len(),
            "inserted rows"
        );
        inserted += rows.len() as u64;
    }

    Ok(inserted)
}
