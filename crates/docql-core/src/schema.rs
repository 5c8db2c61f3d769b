//! Remote table shapes as the source reports them, and the storage types they
//! map onto in the scratch database.

use indexmap::IndexMap;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Lightweight table metadata, fetched before anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    /// Stable table ID
    pub id: String,

    /// Display name. Used as the destination table name when the specifier
    /// does not rename it.
    pub name: String,

    /// Number of rows the table currently holds
    pub row_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteColumn {
    /// Column ID, the key of this column in [`RemoteRow::values`]
    pub id: String,

    /// Column display name, used as the SQL column name
    pub name: String,

    /// Declared format of the column's cells
    pub format: FormatType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRow {
    /// Row ID
    pub id: String,

    /// Display label of the row
    pub name: String,

    /// Simple serialized cell values, keyed by column ID
    pub values: IndexMap<String, serde_json::Value>,

    /// Structured cell values, keyed by column ID. Only populated when rows
    /// were fetched for row id resolution.
    pub rich_values: Option<IndexMap<String, serde_json::Value>>,
}

impl RemoteRow {
    pub fn value(&self, column: &str) -> Option<&serde_json::Value> {
        self.values.get(column)
    }

    pub fn rich_value(&self, column: &str) -> Option<&serde_json::Value> {
        self.rich_values.as_ref()?.get(column)
    }
}

/// How a source serializes cell values in a row listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    /// Plain JSON scalars, lookups rendered as display strings
    Simple,

    /// Structured values, lookups rendered as row references
    Rich,
}

impl ValueFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueFormat::Simple => "simple",
            ValueFormat::Rich => "rich",
        }
    }
}

/// The declared semantic type of a remote column.
///
/// Unknown format strings decode to [`FormatType::Other`] so that a source
/// adding a format never breaks loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatType {
    Text,
    Person,
    Lookup,
    Number,
    Percent,
    Currency,
    Date,
    DateTime,
    Time,
    Duration,
    Email,
    Link,
    Slider,
    Scale,
    Image,
    ImageReference,
    Attachments,
    Button,
    Checkbox,
    Select,
    PackObject,
    Reaction,
    Canvas,
    #[serde(other)]
    Other,
}

impl FormatType {
    pub fn as_str(self) -> &'static str {
        use FormatType::*;

        match self {
            Text => "text",
            Person => "person",
            Lookup => "lookup",
            Number => "number",
            Percent => "percent",
            Currency => "currency",
            Date => "date",
            DateTime => "dateTime",
            Time => "time",
            Duration => "duration",
            Email => "email",
            Link => "link",
            Slider => "slider",
            Scale => "scale",
            Image => "image",
            ImageReference => "imageReference",
            Attachments => "attachments",
            Button => "button",
            Checkbox => "checkbox",
            Select => "select",
            PackObject => "packObject",
            Reaction => "reaction",
            Canvas => "canvas",
            Other => "other",
        }
    }
}

impl FromStr for FormatType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_value(serde_json::Value::String(s.to_string()))
            .unwrap_or(FormatType::Other))
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage type of a materialized column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Numeric,
    Text,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Numeric => "NUMERIC",
            ColumnType::Text => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
