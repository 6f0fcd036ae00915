//! Per-field formatting rules shared by every section renderer.
//!
//! Absent, empty, non-finite or unparseable values all render as
//! [`NOT_RECORDED`]; formatting never fails.

use crate::model::PatientStatus;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

/// Placeholder for missing values.
pub const NOT_RECORDED: &str = "Not recorded";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

lazy_static! {
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").expect("valid regex");
}

/// Format a calendar day as "Mar 15, 2024".
pub fn format_day(date: NaiveDate) -> String {
    format!("{} {}, {}", MONTHS[date.month0() as usize], date.day(), date.year())
}

/// Format an optional date, or "Not recorded".
pub fn format_date(value: Option<&NaiveDateTime>) -> String {
    value
        .map(|dt| format_day(dt.date()))
        .unwrap_or_else(|| NOT_RECORDED.to_string())
}

/// Format a number the way it was recorded ("80", "31.2").
pub fn format_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        NOT_RECORDED.to_string()
    }
}

/// A field value that can be printed on a summary line.
pub trait FieldDisplay {
    /// Text for the value, or "Not recorded".
    fn display_value(&self) -> String;
}

impl FieldDisplay for str {
    fn display_value(&self) -> String {
        if self.trim().is_empty() {
            NOT_RECORDED.to_string()
        } else {
            self.to_string()
        }
    }
}

impl FieldDisplay for String {
    fn display_value(&self) -> String {
        self.as_str().display_value()
    }
}

impl FieldDisplay for f64 {
    fn display_value(&self) -> String {
        format_number(*self)
    }
}

impl FieldDisplay for i64 {
    fn display_value(&self) -> String {
        self.to_string()
    }
}

impl FieldDisplay for NaiveDateTime {
    fn display_value(&self) -> String {
        format_day(self.date())
    }
}

impl FieldDisplay for PatientStatus {
    fn display_value(&self) -> String {
        self.as_str().to_string()
    }
}

impl FieldDisplay for Value {
    fn display_value(&self) -> String {
        match self {
            Value::Null => NOT_RECORDED.to_string(),
            Value::String(s) => s.display_value(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match n.as_i64() {
                Some(i) => i.to_string(),
                None => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
            },
            Value::Array(_) | Value::Object(_) => {
                serde_json::to_string(self).unwrap_or_else(|_| NOT_RECORDED.to_string())
            },
        }
    }
}

impl<T: FieldDisplay + ?Sized> FieldDisplay for &T {
    fn display_value(&self) -> String {
        (**self).display_value()
    }
}

impl<T: FieldDisplay> FieldDisplay for Option<T> {
    fn display_value(&self) -> String {
        match self {
            Some(value) => value.display_value(),
            None => NOT_RECORDED.to_string(),
        }
    }
}

/// Shorthand for [`FieldDisplay::display_value`].
pub fn fmt<T: FieldDisplay + ?Sized>(value: &T) -> String {
    value.display_value()
}

/// Whether an optional text field has content worth an extra line.
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Turn a JSON key into a label: "liverSize" and "liver_size" both become
/// "Liver size"/"Liver Size" style words with a capital first letter.
pub fn humanize_key(key: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(key, "$1 $2").replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Value half of a `Label: value` line.
fn structured_value(value: &Value) -> String {
    match value {
        Value::Array(items) if items.iter().all(is_scalar) => {
            let joined = items
                .iter()
                .map(FieldDisplay::display_value)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                NOT_RECORDED.to_string()
            } else {
                joined
            }
        },
        other => other.display_value(),
    }
}

/// `Label: value` lines for a JSON object, in document order.
pub fn object_lines(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .map(|(key, value)| format!("{}: {}", humanize_key(key), structured_value(value)))
        .collect()
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn raw_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lines for free text that may carry JSON.
///
/// Best effort: the whole text is tried as a JSON object first, then the
/// substring between the first `{` and the last `}` with the surrounding prose
/// kept above and below. Anything that does not parse is passed through as
/// written.
pub fn embedded_json_lines(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        if let Some(map) = parse_object(trimmed) {
            return object_lines(&map);
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Some(map) = parse_object(&trimmed[start..=end]) {
                let mut lines = raw_lines(&trimmed[..start]);
                lines.extend(object_lines(&map));
                lines.extend(raw_lines(&trimmed[end + 1..]));
                return lines;
            }
        }
    }

    raw_lines(trimmed)
}

/// Lines for a semi-structured field such as an imaging report or lab results.
pub fn structured_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(text) => embedded_json_lines(text),
        Value::Object(map) => object_lines(map),
        other => vec![structured_value(other)],
    }
}
