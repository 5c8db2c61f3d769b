mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

pub use docql_core::schema::ColumnType;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Insert(Insert),
}

impl Statement {
    /// Number of parameters the serialized statement binds.
    pub fn num_params(&self) -> usize {
        match self {
            Statement::CreateTable(_) => 0,
            Statement::Insert(insert) => insert.width,
        }
    }
}
