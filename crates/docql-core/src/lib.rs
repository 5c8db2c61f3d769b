pub mod context;
pub use context::RequestContext;

pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

pub mod load_spec;
pub use load_spec::{LoadSpec, TableRef};

pub mod schema;

pub mod source;
pub use source::Source;

pub mod value;
pub use value::Value;

/// A Result type alias that uses docql's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
