//! Tolerant column readers.
//!
//! The hosted store never enforced column types, so a `price` can arrive as
//! text and a `published` flag as `"true"`. Readers here accept any storage
//! class and only fail when the column itself is missing.

use crate::domain::normalize::{from_sql, normalize_list};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rusqlite::types::Value as SqlValue;
use rusqlite::Row;

fn raw(row: &Row, col: &str) -> rusqlite::Result<SqlValue> {
    row.get::<_, SqlValue>(col)
}

/// A list-like column run through the normalizer.
pub fn list(row: &Row, col: &str) -> rusqlite::Result<Vec<String>> {
    Ok(normalize_list(&from_sql(raw(row, col)?)))
}

/// Non-blank text. Numbers are rendered as text.
pub fn text(row: &Row, col: &str) -> rusqlite::Result<Option<String>> {
    let s = match raw(row, col)? {
        SqlValue::Null => return Ok(None),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::Real(f) => f.to_string(),
        SqlValue::Text(s) => s,
        SqlValue::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    };
    let trimmed = s.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

pub fn text_or_empty(row: &Row, col: &str) -> rusqlite::Result<String> {
    Ok(text(row, col)?.unwrap_or_default())
}

pub fn int(row: &Row, col: &str) -> rusqlite::Result<Option<i64>> {
    Ok(match raw(row, col)? {
        SqlValue::Integer(i) => Some(i),
        SqlValue::Real(f) => Some(f.round() as i64),
        SqlValue::Text(s) => parse_number(&s),
        SqlValue::Null | SqlValue::Blob(_) => None,
    })
}

fn parse_number(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
}

/// Decimal figures such as yields, which may be stored as text like `"5.2"` or `"5,2"`.
pub fn real(row: &Row, col: &str) -> rusqlite::Result<Option<f64>> {
    Ok(match raw(row, col)? {
        SqlValue::Integer(i) => Some(i as f64),
        SqlValue::Real(f) => Some(f),
        SqlValue::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        SqlValue::Null | SqlValue::Blob(_) => None,
    }
    .filter(|f| f.is_finite()))
}

pub fn flag(row: &Row, col: &str) -> rusqlite::Result<bool> {
    Ok(match raw(row, col)? {
        SqlValue::Integer(i) => i != 0,
        SqlValue::Real(f) => f != 0.0,
        SqlValue::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true" | "yes"),
        SqlValue::Null | SqlValue::Blob(_) => false,
    })
}

/// Accepts SQLite `datetime()` output, ISO-8601 with or without offset, or a bare date.
pub fn timestamp(row: &Row, col: &str) -> rusqlite::Result<Option<NaiveDateTime>> {
    Ok(text(row, col)?.and_then(|s| parse_timestamp(&s)))
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
