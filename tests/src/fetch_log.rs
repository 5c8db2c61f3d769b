use crate::FetchOp;

use docql_core::schema::ValueFormat;
use std::sync::{Arc, Mutex};

/// A wrapper around the fetch log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct FetchLog {
    ops: Arc<Mutex<Vec<FetchOp>>>,
}

impl FetchLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<FetchOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged fetches
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count fetches matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&FetchOp) -> bool,
    {
        self.ops.lock().unwrap().iter().filter(|op| predicate(op)).count()
    }

    pub fn table_fetches(&self) -> usize {
        self.count(|op| matches!(op, FetchOp::Table(_)))
    }

    pub fn column_fetches(&self) -> usize {
        self.count(|op| matches!(op, FetchOp::Columns(_)))
    }

    /// Row listings of either value format
    pub fn row_fetches(&self) -> usize {
        self.count(|op| matches!(op, FetchOp::Rows(..)))
    }

    pub fn rich_row_fetches(&self) -> usize {
        self.count(|op| matches!(op, FetchOp::Rows(_, ValueFormat::Rich)))
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Snapshot of every fetch, in call order
    pub fn ops(&self) -> Vec<FetchOp> {
        self.ops.lock().unwrap().clone()
    }
}
