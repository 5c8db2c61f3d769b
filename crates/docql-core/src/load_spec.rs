//! Table specifiers: `<table>[ @ <doc>][ => <destination>]`.

use crate::{Error, RequestContext, Result};

use std::{fmt, str::FromStr};
use url::Url;

const DOC_DELIM: char = '@';
const DESTINATION_DELIM: &str = "=>";

/// One remote table to load, as named by a specifier string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadSpec {
    /// Remote table name, ID or URL
    pub table: String,

    /// Parent document, when different from the invoking one
    pub doc: Option<String>,

    /// Local table name, when different from the remote display name
    pub destination: Option<String>,
}

/// A fully resolved remote table address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub doc: String,
    pub table: String,
}

impl LoadSpec {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            doc: None,
            destination: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Parse a specifier string.
    ///
    /// The input is trimmed and whitespace around both delimiters is ignored.
    /// `<table>` is anything not consumed by the delimiters, so table URLs
    /// are accepted as-is.
    pub fn parse(spec: &str) -> Result<LoadSpec> {
        let invalid = |reason: &str| Error::invalid_specifier(spec, reason);

        let (rest, destination) = match spec.split_once(DESTINATION_DELIM) {
            Some((rest, destination)) => {
                let destination = destination.trim();
                if destination.is_empty() {
                    return Err(invalid("missing destination after `=>`"));
                }
                if destination.contains(DESTINATION_DELIM) {
                    return Err(invalid("more than one `=>`"));
                }
                (rest, Some(destination.to_string()))
            }
            None => (spec, None),
        };

        let (table, doc) = match rest.split_once(DOC_DELIM) {
            Some((table, doc)) => {
                let doc = doc.trim();
                if doc.is_empty() {
                    return Err(invalid("missing document after `@`"));
                }
                if doc.contains(DOC_DELIM) {
                    return Err(invalid("more than one `@`"));
                }
                (table, Some(doc.to_string()))
            }
            None => (rest, None),
        };

        let table = table.trim();
        if table.is_empty() {
            return Err(invalid("missing table"));
        }

        Ok(LoadSpec {
            table: table.to_string(),
            doc,
            destination,
        })
    }

    /// Resolve the remote address of this table.
    ///
    /// A table URL carries its own document; an explicit `@doc` still takes
    /// precedence over it. Otherwise the invoking document is used.
    pub fn table_ref(&self, cx: &RequestContext) -> Result<TableRef> {
        if let Some(url) = parse_table_url(&self.table) {
            let (url_doc, table) = url.ok_or_else(|| {
                Error::invalid_specifier(&self.table, "URL does not point at a table")
            })?;

            return Ok(TableRef {
                doc: self.doc.clone().unwrap_or(url_doc),
                table,
            });
        }

        Ok(TableRef {
            doc: self.doc.clone().unwrap_or_else(|| cx.doc_id.clone()),
            table: self.table.clone(),
        })
    }
}

/// Returns `None` when `table` is not a URL at all, `Some(None)` when it is a
/// URL without a recognizable doc and table.
///
/// Table URLs look like `https://coda.io/d/<Title>_d<docId>/<Page>#<Table>_tu<tableId>`.
fn parse_table_url(table: &str) -> Option<Option<(String, String)>> {
    let url = Url::parse(table).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    Some(doc_and_table(&url))
}

fn doc_and_table(url: &Url) -> Option<(String, String)> {
    let mut segments = url.path_segments()?;
    segments.find(|segment| *segment == "d")?;
    let doc_segment = segments.next()?;
    let (_, doc) = doc_segment.rsplit_once("_d")?;

    let (_, table) = url.fragment()?.rsplit_once("_tu")?;

    if doc.is_empty() || table.is_empty() {
        return None;
    }

    Some((doc.to_string(), format!("grid-{table}")))
}

impl FromStr for LoadSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LoadSpec::parse(s)
    }
}

impl fmt::Display for LoadSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table)?;
        if let Some(doc) = &self.doc {
            write!(f, "@{doc}")?;
        }
        if let Some(destination) = &self.destination {
            write!(f, "=>{destination}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.table, self.doc)
    }
}
