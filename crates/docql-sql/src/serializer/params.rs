use super::{Formatter, ToSql};

/// A numbered positional parameter, rendered as `?N` (1-based).
pub struct Placeholder(pub usize);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        write!(f.dst, "?{}", self.0).unwrap();
    }
}
