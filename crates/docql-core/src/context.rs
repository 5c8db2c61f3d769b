/// Per-request invocation context.
///
/// Everything the pipeline would otherwise read from ambient state travels
/// here, and is handed explicitly to every source and pipeline call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// The invoking document. Specifiers without `@doc` load from here.
    pub doc_id: String,

    /// IANA timezone of the caller, forwarded to sources that render dates.
    pub timezone: Option<String>,
}

impl RequestContext {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            timezone: None,
        }
    }

    /// Set the caller's timezone
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}
