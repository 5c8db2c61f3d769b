use super::{Comma, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE ", &self.name, " (", columns, ")");
    }
}
