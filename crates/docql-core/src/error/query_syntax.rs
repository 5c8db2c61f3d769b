use super::Error;

/// Error when the caller's query fails to prepare or fails on its first step.
///
/// The engine's own message is carried as the cause.
#[derive(Debug)]
pub(super) struct QuerySyntaxError {
    query: Box<str>,
}

impl std::error::Error for QuerySyntaxError {}

impl core::fmt::Display for QuerySyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query `{}`", self.query)
    }
}

impl Error {
    /// Creates a query syntax error for `query`.
    pub fn query_syntax(query: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QuerySyntax(QuerySyntaxError {
            query: query.into().into(),
        }))
    }

    /// Returns `true` if this error is a query syntax error.
    pub fn is_query_syntax(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QuerySyntax(_))
    }
}
