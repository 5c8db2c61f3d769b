use super::{Name, Statement};

/// A single-row `INSERT` with every column bound as a parameter.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Target table
    pub table: Name,

    /// Number of values per row
    pub width: usize,
}

impl Statement {
    pub fn insert(table: impl Into<Name>, width: usize) -> Self {
        Insert {
            table: table.into(),
            width,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
