//! Field-level validation primitives.
//!
//! Validators push into a shared violation list instead of returning early,
//! so a response can report every broken field at once. String values are
//! trimmed before any length check and the trimmed form is what gets stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One violated rule, surfaced to the caller as `{message, path}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub message: String,
    pub path: String,
}

impl FieldViolation {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self { message: message.into(), path: path.into() }
    }

    pub fn required(path: &str) -> Self {
        Self::new("Required", path)
    }
}

fn bounded(out: &mut Vec<FieldViolation>, path: &str, raw: String, min: usize, max: usize) -> Option<String> {
    let value = raw.trim().to_string();
    let len = value.chars().count();
    if len < min {
        out.push(FieldViolation::new(
            format!("must contain at least {min} character(s)"),
            path,
        ));
        return None;
    }
    if len > max {
        out.push(FieldViolation::new(
            format!("must contain at most {max} character(s)"),
            path,
        ));
        return None;
    }
    Some(value)
}

/// Required string field: absent reports `Required`, present values are
/// trimmed and bounds-checked.
pub fn required_string(
    out: &mut Vec<FieldViolation>,
    path: &str,
    value: Option<String>,
    min: usize,
    max: usize,
) -> Option<String> {
    match value {
        None => {
            out.push(FieldViolation::required(path));
            None
        }
        Some(raw) => bounded(out, path, raw, min, max),
    }
}

/// Optional string field: absent is fine, present values are trimmed and
/// bounds-checked.
pub fn optional_string(
    out: &mut Vec<FieldViolation>,
    path: &str,
    value: Option<String>,
    min: usize,
    max: usize,
) -> Option<String> {
    value.and_then(|raw| bounded(out, path, raw, min, max))
}

/// Minimal address-shape check; the unique index and mail delivery decide
/// the rest.
pub fn check_email(out: &mut Vec<FieldViolation>, path: &str, value: String) -> Option<String> {
    let ok = value.contains('@') && !value.starts_with('@') && !value.ends_with('@');
    if ok {
        Some(value)
    } else {
        out.push(FieldViolation::new("Invalid email", path));
        None
    }
}

/// Reference identifiers must be well-formed UUIDs; a malformed one is a
/// validation failure, not a lookup miss.
pub fn parse_uuid(out: &mut Vec<FieldViolation>, path: &str, value: &str) -> Option<Uuid> {
    match Uuid::parse_str(value) {
        Ok(id) => Some(id),
        Err(_) => {
            out.push(FieldViolation::new("must be a valid UUID", path));
            None
        }
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(out: &mut Vec<FieldViolation>, path: &str, raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    out.push(FieldViolation::new("Invalid date", path));
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_string_trims_and_checks_bounds() {
        let mut out = Vec::new();
        assert_eq!(required_string(&mut out, "name", Some("  Alice  ".into()), 1, 100), Some("Alice".into()));
        assert!(out.is_empty());

        assert_eq!(required_string(&mut out, "name", Some("   ".into()), 1, 100), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "name");
    }

    #[test]
    fn missing_required_field_reports_required() {
        let mut out = Vec::new();
        assert_eq!(required_string(&mut out, "cnpj", None, 1, 20), None);
        assert_eq!(out[0], FieldViolation::required("cnpj"));
    }

    #[test]
    fn optional_string_skips_absent_values() {
        let mut out = Vec::new();
        assert_eq!(optional_string(&mut out, "sector", None, 1, 100), None);
        assert!(out.is_empty());
    }

    #[test]
    fn email_shape_is_checked() {
        let mut out = Vec::new();
        assert!(check_email(&mut out, "email", "a@b.com".into()).is_some());
        assert!(check_email(&mut out, "email", "not-an-email".into()).is_none());
        assert!(check_email(&mut out, "email", "@b.com".into()).is_none());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn uuid_failures_are_violations() {
        let mut out = Vec::new();
        assert!(parse_uuid(&mut out, "companyId", "12345").is_none());
        assert_eq!(out[0].path, "companyId");
        assert!(parse_uuid(&mut out, "companyId", "8f7d3a52-9f7b-4e0e-9c2a-0a9a64f2b1aa").is_some());
    }

    #[test]
    fn timestamps_accept_rfc3339_and_dates() {
        let mut out = Vec::new();
        assert!(parse_timestamp(&mut out, "terminationDate", "2024-06-01T12:00:00Z").is_some());
        assert!(parse_timestamp(&mut out, "terminationDate", "2024-06-01").is_some());
        assert!(parse_timestamp(&mut out, "terminationDate", "tomorrow").is_none());
        assert_eq!(out.len(), 1);
    }
}
