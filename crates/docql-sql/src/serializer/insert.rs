use super::{Comma, Formatter, Placeholder, ToSql};

use crate::stmt;

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let values = Comma((1..=self.width).map(Placeholder));

        fmt!(f, "INSERT INTO ", &self.table, " VALUES (", values, ")");
    }
}
