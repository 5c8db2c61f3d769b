use super::TablePlan;
use crate::{driver::Connection, Error, Result};

use docql_sql::Serializer;
use std::collections::HashSet;
use tracing::debug;

/// Create one empty local table per plan.
///
/// Destinations are compared the way the engine compares identifiers, ASCII
/// case-insensitively, and must all differ.
pub(crate) fn create_tables(conn: &mut dyn Connection, tables: &[TablePlan]) -> Result<()> {
    let mut seen = HashSet::new();

    for table in tables {
        let destination = table.destination();
        if !seen.insert(destination.to_ascii_lowercase()) {
            return Err(Error::schema(format!(
                "table `{destination}` is loaded more than once; give each load a distinct `=> destination`"
            )));
        }
    }

    if tables.is_empty() {
        return Ok(());
    }

    let stmts: Vec<_> = tables.iter().map(TablePlan::create_table).collect();
    let sql = Serializer::sqlite().serialize_batch(&stmts);

    debug!(tables = tables.len(), "creating tables");

    conn.execute_batch(&sql)
        .map_err(|err| err.context(Error::schema("failed to create tables")))
}
