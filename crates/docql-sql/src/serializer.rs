#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;

mod params;
pub use params::Placeholder;

// Fragment serializers
mod column_def;
mod create_table;
mod insert;
mod ty;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _p: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// A serializer producing SQLite-compatible SQL.
    pub fn sqlite() -> Serializer {
        Serializer::default()
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serialize several statements into one batch, one statement per line.
    pub fn serialize_batch<'s>(&self, stmts: impl IntoIterator<Item = &'s Statement>) -> String {
        stmts
            .into_iter()
            .map(|stmt| self.serialize(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
        }
    }
}
