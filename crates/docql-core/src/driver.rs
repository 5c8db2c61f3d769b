mod result_set;
pub use result_set::ResultSet;

use crate::{Result, Value};

use std::fmt::Debug;

/// An embedded SQL engine able to open request-scoped scratch databases.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a fresh, empty database. Nothing is shared between the
    /// connections a driver hands out.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A scratch database owned by a single request.
///
/// This is the whole surface the pipeline needs from the engine: run a batch
/// of DDL, insert a row through a parameterized statement, validate a query
/// and run a query.
pub trait Connection: Debug + Send {
    /// Execute one or more `;` separated statements that take no parameters.
    fn execute_batch(&mut self, sql: &str) -> Result<()>;

    /// Execute a parameterized statement, returning the number of rows changed.
    ///
    /// Implementations should cache the prepared statement, as the same
    /// statement is executed once per loaded row.
    fn insert(&mut self, sql: &str, params: &[Value]) -> Result<usize>;

    /// Prepare `sql`, bind `params` and step it once, then undo whatever the
    /// step changed.
    ///
    /// `sql` must hold exactly one statement. Returns the result column names.
    /// Any failure along the way is returned as an error carrying the
    /// engine's message.
    fn prepare(&mut self, sql: &str, params: &[Value]) -> Result<Vec<String>>;

    /// Run the single statement in `sql` with `params` bound at positions
    /// `1..=params.len()`, stepping it to completion.
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<ResultSet>;
}
