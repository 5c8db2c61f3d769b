/// Default ceiling on the total number of rows one request may load.
pub const DEFAULT_MAX_ROWS: u64 = 10_000;

/// Per-handle settings applied to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum sum of row counts across all tables named by one request
    pub max_rows: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}
