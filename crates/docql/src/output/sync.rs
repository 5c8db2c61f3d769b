use crate::{ResultSet, Value};

use indexmap::IndexMap;
use serde::Serialize;

/// Synthetic property holding each synced row's 1-based position.
pub const INDEX_PROPERTY: &str = "$index";

/// One page of a synced table.
///
/// Queries run once per sync, so a page never carries a continuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncPage {
    pub rows: Vec<IndexMap<String, Value>>,
    pub continuation: Option<String>,
}

/// Shape of a synced table, derived from the query's result columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSchema {
    pub id_property: String,
    pub properties: Vec<String>,
}

impl SyncPage {
    pub fn from_result_set(res: &ResultSet) -> SyncPage {
        let rows = res
            .records()
            .enumerate()
            .map(|(i, mut record)| {
                record.insert(INDEX_PROPERTY.to_string(), Value::Integer(i as i64 + 1));
                record
            })
            .collect();

        SyncPage {
            rows,
            continuation: None,
        }
    }
}

impl SyncSchema {
    pub fn new(columns: Vec<String>) -> SyncSchema {
        let mut properties = columns;
        if !properties.iter().any(|name| name == INDEX_PROPERTY) {
            properties.push(INDEX_PROPERTY.to_string());
        }

        SyncSchema {
            id_property: INDEX_PROPERTY.to_string(),
            properties,
        }
    }
}
