use super::{Formatter, ToSql};

use crate::stmt::ColumnType;

impl ToSql for ColumnType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.as_str());
    }
}
