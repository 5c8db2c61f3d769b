use super::{ColumnDef, Name, Statement};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions, in declaration order
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(
        name: impl Into<Name>,
        columns: impl IntoIterator<Item = ColumnDef>,
    ) -> Self {
        CreateTable {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
