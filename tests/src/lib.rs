mod fetch_log;
pub use fetch_log::FetchLog;

pub use logging_source::{FetchOp, LoggingSource};

pub use memory_source::{MemorySource, MemoryTable};

pub mod prelude;

use docql::{Docql, RequestContext};
use docql_core::schema::FormatType;
use serde_json::json;

/// Doc the test requests are invoked from
pub const DOC: &str = "doc-main";

/// Second doc, for cross-doc loads
pub const OTHER_DOC: &str = "doc-people";

pub fn cx() -> RequestContext {
    RequestContext::new(DOC)
}

/// Build a handle over `source` with the given row ceiling, wrapped so every
/// fetch is logged.
pub fn setup_with_max_rows(source: MemorySource, max_rows: u64) -> (Docql, FetchLog) {
    let source = LoggingSource::new(source);
    let log = source.log();

    let db = Docql::builder()
        .source(source)
        .max_rows(max_rows)
        .build()
        .unwrap();

    (db, log)
}

pub fn setup(source: MemorySource) -> (Docql, FetchLog) {
    setup_with_max_rows(source, docql::DEFAULT_MAX_ROWS)
}

/// The standard fixture: `Tasks` in [`DOC`] and `People` in [`OTHER_DOC`].
pub fn fixture() -> MemorySource {
    MemorySource::new()
        .table(DOC, tasks())
        .table(OTHER_DOC, people())
}

/// Five tasks covering every coerced format.
pub fn tasks() -> MemoryTable {
    let owner = |id: &str, name: &str| {
        json!({
            "@context": "http://schema.org/",
            "@type": "StructuredValue",
            "additionalType": "row",
            "name": name,
            "rowId": id,
            "tableId": "grid-people",
            "tableUrl": "https://coda.io/d/_ddoc-people#_tugrid-people",
        })
    };

    MemoryTable::new("grid-tasks", "Tasks")
        .column("c-name", "Name", FormatType::Text)
        .column("c-done", "Done", FormatType::Checkbox)
        .column("c-progress", "Progress", FormatType::Percent)
        .column("c-budget", "Budget", FormatType::Currency)
        .column("c-owner", "Owner", FormatType::Lookup)
        .column("c-due", "Due", FormatType::Date)
        .rich_row(
            "i-1",
            "Write docs",
            json!({
                "c-name": "Write docs", "c-done": true, "c-progress": "42.5%",
                "c-budget": "$1,200.00", "c-owner": "Ada", "c-due": "2024-03-01",
            }),
            json!({ "c-owner": owner("p-1", "Ada") }),
        )
        .rich_row(
            "i-2",
            "Fix build",
            json!({
                "c-name": "Fix build", "c-done": false, "c-progress": "100%",
                "c-budget": "$80", "c-owner": "Grace", "c-due": "2024-03-02",
            }),
            json!({ "c-owner": owner("p-2", "Grace") }),
        )
        .rich_row(
            "i-3",
            "Ship release",
            json!({
                "c-name": "Ship release", "c-done": null, "c-progress": "",
                "c-budget": "", "c-owner": "Ada,Grace", "c-due": "",
            }),
            json!({ "c-owner": [owner("p-1", "Ada"), owner("p-2", "Grace")] }),
        )
        .row(
            "i-4",
            "Triage",
            json!({
                "c-name": "Triage", "c-done": true, "c-progress": "5%",
                "c-budget": "$0.50", "c-owner": "", "c-due": "2024-04-15",
            }),
        )
        .row(
            "i-5",
            "Plan Q3",
            json!({ "c-name": "Plan Q3", "c-done": false }),
        )
}

pub fn people() -> MemoryTable {
    MemoryTable::new("grid-people", "People")
        .column("c-pname", "Name", FormatType::Text)
        .column("c-team", "Team", FormatType::Select)
        .column("c-age", "Age", FormatType::Number)
        .row(
            "p-1",
            "Ada",
            json!({ "c-pname": "Ada", "c-team": "Platform", "c-age": 36 }),
        )
        .row(
            "p-2",
            "Grace",
            json!({ "c-pname": "Grace", "c-team": "Compilers", "c-age": 45 }),
        )
}
