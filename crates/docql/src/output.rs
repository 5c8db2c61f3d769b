//! Reshaping query results into the caller-facing output forms.

mod sync;
pub use sync::{SyncPage, SyncSchema, INDEX_PROPERTY};

use crate::{OutputShape, Result, ResultSet, Value};

use serde::Serialize;

/// A query result in one of the output shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Scalar(Value),
    Grid(Vec<Vec<String>>),
    Json(String),
    Sync(SyncPage),
}

impl Output {
    pub fn from_result_set(shape: OutputShape, res: &ResultSet) -> Result<Output> {
        Ok(match shape {
            OutputShape::Scalar => Output::Scalar(scalar(res)),
            OutputShape::Grid => Output::Grid(grid(res)),
            OutputShape::Json => Output::Json(json_records(res)?),
            OutputShape::Sync => Output::Sync(SyncPage::from_result_set(res)),
        })
    }
}

/// First column of the first row, or `Null` for an empty result.
pub fn scalar(res: &ResultSet) -> Value {
    res.rows()
        .next()
        .and_then(|row| row.first())
        .cloned()
        .unwrap_or_default()
}

/// Every cell rendered as a string. The header row is not included.
pub fn grid(res: &ResultSet) -> Vec<Vec<String>> {
    res.rows()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect()
}

/// A JSON array holding one object per row, keyed by column name.
pub fn json_records(res: &ResultSet) -> Result<String> {
    let records: Vec<_> = res.records().collect();
    Ok(serde_json::to_string(&records)?)
}
