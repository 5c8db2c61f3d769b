pub use docql_core::{
    schema::{FormatType, RemoteColumn, RemoteRow, TableMeta, ValueFormat},
    Source,
};

#[cfg(feature = "coda")]
pub use docql_source_coda::{Coda, CodaConfig};
