use crate::{coerce, LoadSpec, RequestContext, Result, TableRef};

use docql_core::{
    schema::{ColumnType, RemoteColumn, TableMeta},
    Source,
};
use docql_sql::{stmt::ColumnDef, Statement};
use futures_util::future::try_join_all;

/// Column holding the remote row ID
pub(crate) const ROW_ID_COLUMN: &str = "_id";

/// Column holding the remote row's display name
pub(crate) const DISPLAY_COLUMN: &str = "_display";

/// A specifier paired with the remote table it resolves to.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedTable {
    pub(crate) spec: LoadSpec,
    pub(crate) table: TableRef,
}

/// Everything known about one table before its rows are fetched.
#[derive(Debug, Clone)]
pub(crate) struct TablePlan {
    pub(crate) spec: LoadSpec,
    pub(crate) table: TableRef,
    pub(crate) meta: TableMeta,
    pub(crate) columns: Vec<RemoteColumn>,
}

impl TablePlan {
    /// Name of the local table: the explicit destination, or the remote
    /// table's display name.
    pub(crate) fn destination(&self) -> &str {
        self.spec
            .destination
            .as_deref()
            .unwrap_or(&self.meta.name)
    }

    /// Remote columns plus the row ID and display name columns
    pub(crate) fn width(&self) -> usize {
        self.columns.len() + 2
    }

    pub(crate) fn create_table(&self) -> Statement {
        let columns = self
            .columns
            .iter()
            .map(|column| ColumnDef::new(&column.name, coerce::column_type(column)))
            .chain([
                ColumnDef::primary_key(ROW_ID_COLUMN, ColumnType::Text),
                ColumnDef::new(DISPLAY_COLUMN, ColumnType::Text),
            ]);

        Statement::create_table(self.destination(), columns)
    }

    pub(crate) fn insert(&self) -> Statement {
        Statement::insert(self.destination(), self.width())
    }
}

pub(crate) fn resolve(cx: &RequestContext, specs: Vec<LoadSpec>) -> Result<Vec<ResolvedTable>> {
    specs
        .into_iter()
        .map(|spec| {
            let table = spec.table_ref(cx)?;
            Ok(ResolvedTable { spec, table })
        })
        .collect()
}

/// Fetch table metadata for every table concurrently, in input order.
pub(crate) async fn fetch_meta(
    source: &dyn Source,
    cx: &RequestContext,
    tables: &[ResolvedTable],
) -> Result<Vec<TableMeta>> {
    try_join_all(tables.iter().map(|t| source.table(cx, &t.table))).await
}

/// Fetch column definitions for every table concurrently and build the
/// plans.
pub(crate) async fn fetch_columns(
    source: &dyn Source,
    cx: &RequestContext,
    tables: Vec<ResolvedTable>,
    metas: Vec<TableMeta>,
) -> Result<Vec<TablePlan>> {
    let columns = try_join_all(tables.iter().map(|t| source.columns(cx, &t.table))).await?;

    Ok(tables
        .into_iter()
        .zip(metas)
        .zip(columns)
        .map(|((ResolvedTable { spec, table }, meta), columns)| TablePlan {
            spec,
            table,
            meta,
            columns,
        })
        .collect())
}
