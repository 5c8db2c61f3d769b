use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.name, " ", self.ty);

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");
        }
    }
}
