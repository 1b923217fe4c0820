// src/domain/normalize.rs

//! Coercion of list-like stored fields into `Vec<String>`.
//!
//! Tags, image URLs, features and partner specialties have been written to
//! the store in several encodings over time: native JSON arrays, JSON text,
//! Postgres array literals (`{a,"b c"}`), comma separated text, or a single
//! bare value. Every reader goes through [`normalize_list`], which is total:
//! whatever the input, the output is a list of strings.

use serde_json::{Map, Value};

/// Strings produced by careless stringification upstream. They never carry
/// meaning, so they are dropped rather than shown.
const SENTINELS: [&str; 3] = ["null", "undefined", "[object Object]"];

/// The encoding a stored value was recognised as.
#[derive(Debug, PartialEq)]
enum Shape<'a> {
    Missing,
    List(&'a [Value]),
    Object(&'a Map<String, Value>),
    Parsed(Value),
    PgArray(&'a str),
    Delimited(&'a str),
    Bare(&'a str),
    Scalar(&'a Value),
}

fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Null => Shape::Missing,
        Value::Array(items) => Shape::List(items),
        Value::Object(map) => Shape::Object(map),
        Value::String(s) => classify_text(s),
        other => Shape::Scalar(other),
    }
}

fn classify_text(s: &str) -> Shape<'_> {
    let t = s.trim();
    if t.is_empty() {
        return Shape::Missing;
    }
    if t.starts_with('[') || t.starts_with('{') {
        if let Ok(parsed) = serde_json::from_str::<Value>(t) {
            return Shape::Parsed(parsed);
        }
    }
    if is_pg_array(t) {
        Shape::PgArray(t)
    } else if t.contains(',') {
        Shape::Delimited(t)
    } else {
        Shape::Bare(t)
    }
}

/// Normalize any stored value into a list of strings. Never fails.
pub fn normalize_list(value: &Value) -> Vec<String> {
    match classify(value) {
        Shape::Missing => Vec::new(),
        Shape::List(items) => strings_of(items.iter()),
        Shape::Object(map) => strings_of(map.values()),
        Shape::Parsed(Value::Array(items)) => strings_of(items.iter()),
        Shape::Parsed(Value::Object(map)) => strings_of(map.values()),
        Shape::Parsed(Value::String(s)) => vec![s],
        Shape::Parsed(_) => Vec::new(),
        Shape::PgArray(text) => split_pg_array(text),
        Shape::Delimited(text) => split_delimited(text),
        Shape::Bare(text) => vec![text.to_string()],
        Shape::Scalar(v) => coerce_scalar(v),
    }
}

/// Same as [`normalize_list`] for a column that may be absent entirely.
pub fn normalize_opt(value: Option<&Value>) -> Vec<String> {
    value.map(normalize_list).unwrap_or_default()
}

fn strings_of<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<String> {
    values
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn is_pg_array(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('{') && text.ends_with('}')
}

fn split_pg_array(text: &str) -> Vec<String> {
    let inner = &text[1..text.len() - 1];
    inner
        .split(',')
        .map(|item| strip_quotes(item.trim()).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn strip_quotes(item: &str) -> &str {
    item.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(item)
}

fn split_delimited(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn coerce_scalar(value: &Value) -> Vec<String> {
    let s = match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Vec::new(),
    };
    if s.is_empty() || SENTINELS.contains(&s.as_str()) {
        Vec::new()
    } else {
        vec![s]
    }
}

/// Converts a raw SQLite column value into JSON so it can be normalized.
/// Blobs are accepted when they hold UTF-8 text.
pub fn from_sql(value: rusqlite::types::Value) -> Value {
    use rusqlite::types::Value as Sql;
    match value {
        Sql::Null => Value::Null,
        Sql::Integer(i) => Value::from(i),
        Sql::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Sql::Text(s) => Value::String(s),
        Sql::Blob(bytes) => String::from_utf8(bytes)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}
