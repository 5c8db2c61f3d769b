mod value;
pub(crate) use value::Value;

use docql_core::{
    driver::{Driver, ResultSet},
    Error, Result, Value as CoreValue,
};
use rusqlite::{Batch, Connection as RusqliteConnection, Statement};

/// SQLite driver handing out private in-memory databases.
///
/// Every call to [`Driver::connect`] opens a new `:memory:` database, so two
/// requests never observe each other's tables.
#[derive(Debug, Default)]
pub struct Sqlite {
    _p: (),
}

impl Sqlite {
    /// Create an in-memory SQLite driver
    pub fn in_memory() -> Self {
        Self::default()
    }
}

impl Driver for Sqlite {
    fn connect(&self) -> Result<Box<dyn docql_core::Connection>> {
        Ok(Box::new(Connection::in_memory()?))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;

        Ok(Self { connection })
    }
}

impl docql_core::Connection for Connection {
    fn execute_batch(&mut self, sql: &str) -> Result<()> {
        tracing::trace!(sql, "execute batch");

        self.connection.execute_batch(sql).map_err(Error::driver)
    }

    fn insert(&mut self, sql: &str, params: &[CoreValue]) -> Result<usize> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        stmt.execute(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver)
    }

    fn prepare(&mut self, sql: &str, params: &[CoreValue]) -> Result<Vec<String>> {
        tracing::trace!(sql, params = params.len(), "prepare");

        // Whatever the statement changes is rolled back, so the check leaves
        // the database as it found it.
        self.connection
            .execute_batch("SAVEPOINT validate")
            .map_err(Error::driver)?;

        let res = step_once(&self.connection, sql, params);

        self.connection
            .execute_batch("ROLLBACK TO validate; RELEASE validate")
            .map_err(Error::driver)?;

        res
    }

    fn query(&mut self, sql: &str, params: &[CoreValue]) -> Result<ResultSet> {
        tracing::trace!(sql, params = params.len(), "query");

        let mut stmt = prepare_single(&self.connection, sql)?;
        let columns = column_names(&stmt);
        let width = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        items.push(Value::from_sql(row, index).map_err(Error::driver)?);
                    }

                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver(err)),
            }
        }

        Ok(ResultSet::new(columns, ret))
    }
}

/// Prepare the only statement in `sql`. Trailing `;` and whitespace are
/// fine, a second statement is an error.
fn prepare_single<'c>(connection: &'c RusqliteConnection, sql: &str) -> Result<Statement<'c>> {
    let mut batch = Batch::new(connection, sql);

    let Some(stmt) = batch.next().map_err(Error::driver)? else {
        docql_core::bail!("query contains no statement");
    };

    if batch.next().map_err(Error::driver)?.is_some() {
        return Err(Error::driver(rusqlite::Error::MultipleStatement));
    }

    Ok(stmt)
}

fn step_once(
    connection: &RusqliteConnection,
    sql: &str,
    params: &[CoreValue],
) -> Result<Vec<String>> {
    let mut stmt = prepare_single(connection, sql)?;
    let columns = column_names(&stmt);

    // Stepping once surfaces errors that only show up at execution time,
    // such as a wrong number of bound values.
    let mut rows = stmt
        .query(rusqlite::params_from_iter(params.iter().map(Value::from)))
        .map_err(Error::driver)?;
    rows.next().map_err(Error::driver)?;

    Ok(columns)
}

fn column_names(stmt: &Statement<'_>) -> Vec<String> {
    stmt.column_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
