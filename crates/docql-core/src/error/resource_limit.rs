use super::Error;

/// Error when a request would load more rows than allowed.
#[derive(Debug)]
pub(super) struct ResourceLimitError {
    requested: u64,
    limit: u64,
}

impl std::error::Error for ResourceLimitError {}

impl core::fmt::Display for ResourceLimitError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "resource limit exceeded: {} rows requested, at most {} may be loaded",
            self.requested, self.limit
        )
    }
}

impl Error {
    /// Creates a resource limit error for a request that totals `requested`
    /// rows against a ceiling of `limit`.
    pub fn resource_limit_exceeded(requested: u64, limit: u64) -> Error {
        Error::from(super::ErrorKind::ResourceLimit(ResourceLimitError {
            requested,
            limit,
        }))
    }

    /// Returns `true` if this error is a resource limit error.
    pub fn is_resource_limit_exceeded(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ResourceLimit(_))
    }
}
