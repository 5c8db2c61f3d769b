pub use docql_core::driver::{Connection, Driver, ResultSet};

#[cfg(feature = "sqlite")]
pub use docql_driver_sqlite::Sqlite;
