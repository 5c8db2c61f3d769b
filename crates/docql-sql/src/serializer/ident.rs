use super::{Formatter, ToSql};

use crate::stmt::Name;

/// A double-quoted identifier. Embedded quotes are doubled, so any remote
/// table or column name is accepted.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        f.dst.reserve(name.len() + 2);
        f.dst.push('"');
        for ch in name.chars() {
            if ch == '"' {
                f.dst.push('"');
            }
            f.dst.push(ch);
        }
        f.dst.push('"');
    }
}

impl ToSql for &Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        Ident(&self.0).to_sql(f)
    }
}
