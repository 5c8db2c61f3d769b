use super::{ColumnType, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Name of the column
    pub name: Name,

    /// Declared storage type
    pub ty: ColumnType,

    /// True when the column is the table's primary key
    pub primary_key: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<Name>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: false,
        }
    }

    pub fn primary_key(name: impl Into<Name>, ty: ColumnType) -> Self {
        Self {
            primary_key: true,
            ..Self::new(name, ty)
        }
    }
}
