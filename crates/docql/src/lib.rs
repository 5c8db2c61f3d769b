mod coerce;

mod config;
pub use config::{Config, DEFAULT_MAX_ROWS};

pub mod db;
pub use db::Docql;

pub mod driver;

mod engine;

pub mod output;
pub use output::{Output, SyncPage, SyncSchema};

mod request;
pub use request::{OutputShape, QueryRequest};

pub mod source;

pub use docql_core::{
    bail, driver::ResultSet, err, Error, LoadSpec, RequestContext, Result, TableRef, Value,
};
