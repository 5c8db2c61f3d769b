//! Response bodies of the Coda REST API

use docql_core::schema::{FormatType, RemoteColumn, RemoteRow, TableMeta};
use indexmap::IndexMap;
use serde::Deserialize;

/// One page of a list endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,

    #[serde(default)]
    pub(crate) next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Table {
    id: String,
    name: String,
    #[serde(default)]
    row_count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Column {
    id: String,
    name: String,
    #[serde(default)]
    format: Option<ColumnFormat>,
}

#[derive(Debug, Deserialize)]
struct ColumnFormat {
    #[serde(rename = "type")]
    ty: FormatType,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Row {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    values: IndexMap<String, serde_json::Value>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) status_message: Option<String>,

    #[serde(default)]
    pub(crate) message: Option<String>,
}

impl From<Table> for TableMeta {
    fn from(table: Table) -> Self {
        TableMeta {
            id: table.id,
            name: table.name,
            row_count: table.row_count,
        }
    }
}

impl From<Column> for RemoteColumn {
    fn from(column: Column) -> Self {
        RemoteColumn {
            id: column.id,
            name: column.name,
            // Columns without a declared format hold plain text
            format: column.format.map_or(FormatType::Text, |format| format.ty),
        }
    }
}

impl From<Row> for RemoteRow {
    fn from(row: Row) -> Self {
        RemoteRow {
            id: row.id,
            name: row.name,
            values: row.values,
            rich_values: None,
        }
    }
}
