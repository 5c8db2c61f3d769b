//! Format type coercion.
//!
//! The table in [`coercion`] decides, for every remote format type, both the
//! declared SQL type of the materialized column and how each raw cell is
//! turned into a SQL value. Table creation and row loading both go through
//! it.

use docql_core::{
    schema::{ColumnType, FormatType, RemoteColumn},
    Value,
};

use serde_json::Value as Json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coercion {
    pub(crate) ty: ColumnType,
    pub(crate) transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transform {
    /// Bind the JSON scalar as-is and let column affinity apply
    PassThrough,

    /// Keep digits and `.`, then divide by 100
    Percent,

    /// Keep digits and `.`
    Currency,

    /// `true`/`false` as `1`/`0`
    Boolean,

    /// Referenced row id or display string, depending on `use_row_ids`
    Lookup,

    /// Render as a string
    Text,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Options {
    /// Resolve lookups to referenced row ids instead of display strings
    pub(crate) use_row_ids: bool,
}

pub(crate) fn coercion(format: FormatType) -> Coercion {
    use FormatType::*;

    let (ty, transform) = match format {
        Number | Slider | Scale => (ColumnType::Numeric, Transform::PassThrough),
        Percent => (ColumnType::Numeric, Transform::Percent),
        Currency => (ColumnType::Numeric, Transform::Currency),
        Checkbox => (ColumnType::Numeric, Transform::Boolean),
        Lookup => (ColumnType::Text, Transform::Lookup),
        Text | Person | Date | DateTime | Time | Duration | Email | Link | Image
        | ImageReference | Attachments | Button | Select | PackObject | Reaction | Canvas
        | Other => (ColumnType::Text, Transform::Text),
    };

    Coercion { ty, transform }
}

pub(crate) fn column_type(column: &RemoteColumn) -> ColumnType {
    coercion(column.format).ty
}

/// Coerce one cell. `raw` is the simple value, `rich` the structured one
/// (only present when rows were fetched for row id resolution).
pub(crate) fn coerce(
    column: &RemoteColumn,
    raw: Option<&Json>,
    rich: Option<&Json>,
    options: Options,
) -> Value {
    let raw = match raw {
        None | Some(Json::Null) => return Value::Null,
        Some(raw) => raw,
    };

    match coercion(column.format).transform {
        Transform::PassThrough => pass_through(raw),
        Transform::Percent => parse_number(raw).map_or(Value::Null, |n| Value::Real(n / 100.0)),
        Transform::Currency => parse_number(raw).map_or(Value::Null, Value::Real),
        Transform::Boolean => match raw {
            Json::Bool(b) => Value::from(*b),
            Json::String(s) if s == "true" => Value::Integer(1),
            Json::String(s) if s == "false" => Value::Integer(0),
            other => pass_through(other),
        },
        Transform::Lookup if options.use_row_ids => rich.map_or(Value::Null, row_ids),
        Transform::Lookup | Transform::Text => Value::Text(display(raw)),
    }
}

fn pass_through(raw: &Json) -> Value {
    match raw {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::from(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Real),
        },
        Json::String(s) => Value::Text(s.clone()),
        Json::Array(_) | Json::Object(_) => Value::Text(raw.to_string()),
    }
}

/// Drops every character that is not an ASCII digit or `.` and parses the rest.
///
/// `None` when nothing numeric is left, e.g. for an empty cell.
fn parse_number(raw: &Json) -> Option<f64> {
    let digits: String = display(raw)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse().ok()
}

fn display(raw: &Json) -> String {
    match raw {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The referenced row id of a rich lookup value. Multi-row references join
/// their ids with `,`.
fn row_ids(rich: &Json) -> Value {
    fn row_id(reference: &Json) -> Option<&str> {
        reference.get("rowId")?.as_str()
    }

    match rich {
        Json::Array(references) => {
            let ids: Vec<&str> = references.iter().filter_map(row_id).collect();
            if ids.is_empty() {
                Value::Null
            } else {
                Value::Text(ids.join(","))
            }
        }
        reference => row_id(reference).map_or(Value::Null, Value::from),
    }
}
