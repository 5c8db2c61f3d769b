//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{
    cx, fixture, people, setup, setup_with_max_rows, tasks, FetchLog, FetchOp, LoggingSource,
    MemorySource, MemoryTable, DOC, OTHER_DOC,
};

pub use docql::{Docql, Output, OutputShape, QueryRequest, RequestContext, Value};
pub use docql_core::schema::{FormatType, ValueFormat};
pub use serde_json::json;
