//! Pagination utilities for the service layer.
//!
//! Converts untrusted page/limit query input into safe skip/limit values.
//! Sanitizes toward defaults, never errors.

use serde::Deserialize;

const MAX_LIMIT: u64 = 100;
const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Normalized offset pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

/// Raw query parameters as they arrive on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn paginate(&self) -> Pagination {
        paginate(self.page.as_deref(), self.limit.as_deref())
    }
}

fn parse_or(value: Option<&str>, default: u64) -> u64 {
    match value.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(n) if n >= 1 => n as u64,
        _ => default,
    }
}

/// Missing, non-numeric or sub-1 values fall back to defaults (page 1,
/// limit 10); limit is capped at 100.
pub fn paginate(page: Option<&str>, limit: Option<&str>) -> Pagination {
    let page = parse_or(page, DEFAULT_PAGE);
    let mut limit = parse_or(limit, DEFAULT_LIMIT);
    if limit > MAX_LIMIT {
        limit = MAX_LIMIT;
    }
    Pagination { skip: (page - 1).saturating_mul(limit), limit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_use_defaults() {
        assert_eq!(paginate(None, None), Pagination { skip: 0, limit: 10 });
    }

    #[test]
    fn numeric_strings_are_accepted() {
        assert_eq!(paginate(Some("3"), Some("20")), Pagination { skip: 40, limit: 20 });
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(paginate(Some("abc"), Some("-5")), Pagination { skip: 0, limit: 10 });
        assert_eq!(paginate(Some("0"), Some("0")), Pagination { skip: 0, limit: 10 });
        assert_eq!(paginate(Some(""), Some("1.5")), Pagination { skip: 0, limit: 10 });
    }

    #[test]
    fn limit_is_clamped_to_max() {
        let p = paginate(Some("2"), Some("1000"));
        assert_eq!(p.limit, 100);
        assert_eq!(p.skip, 100);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = paginate(Some(&i64::MAX.to_string()), Some("100"));
        assert_eq!(p.limit, 100);
        assert!(p.skip >= p.limit);
    }
}
