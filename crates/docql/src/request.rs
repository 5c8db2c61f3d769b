use crate::{LoadSpec, Result};

use serde::Deserialize;
use std::{fmt, str::FromStr};

/// One query over a set of remote tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRequest {
    /// Table specifiers, see [`LoadSpec::parse`]
    pub load: Vec<String>,

    /// SQL to run once the tables are loaded
    pub query: String,

    /// Values bound to the query's placeholders, in order
    pub values: Vec<String>,

    /// Load lookup columns as referenced row IDs instead of display strings
    pub use_row_ids: bool,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Add a table specifier
    pub fn load(mut self, spec: impl Into<String>) -> Self {
        self.load.push(spec.into());
        self
    }

    /// Add a bound value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn use_row_ids(mut self, use_row_ids: bool) -> Self {
        self.use_row_ids = use_row_ids;
        self
    }

    /// Parse every specifier, failing on the first invalid one.
    pub fn load_specs(&self) -> Result<Vec<LoadSpec>> {
        self.load.iter().map(|spec| LoadSpec::parse(spec)).collect()
    }
}

/// The form a query result is returned in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputShape {
    /// First column of the first row
    Scalar,

    /// Rows of stringified cells
    #[default]
    Grid,

    /// JSON array of records
    Json,

    /// Records carrying a 1-based `$index`
    Sync,
}

impl OutputShape {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputShape::Scalar => "scalar",
            OutputShape::Grid => "grid",
            OutputShape::Json => "json",
            OutputShape::Sync => "sync",
        }
    }
}

impl FromStr for OutputShape {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scalar" => Ok(OutputShape::Scalar),
            "grid" => Ok(OutputShape::Grid),
            "json" => Ok(OutputShape::Json),
            "sync" => Ok(OutputShape::Sync),
            _ => Err(crate::err!("unknown output shape `{s}`")),
        }
    }
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
