//! Pagination utilities for list endpoints.
//!
//! Lists accept either `limit` + `offset` or `limit` + `page`. When `page`
//! is present it wins over `offset`. `limit` is clamped to 1..=100 and
//! defaults to 10.
//!
//! ```ignore
//! // GET /api/jobs?limit=20&page=3
//! let params = PaginationParams { limit: Some(20), offset: None, page: Some(3) };
//! assert_eq!(params.offset(), 40);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::serde::deserialize_optional_i64;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Metadata about a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Maximum items per page (the limit that was applied)
    pub limit: i64,
    /// Number of items skipped (only present if offset-based pagination was used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Current page number (only present if page-based pagination was used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let limit = params.limit();
        let offset = params.offset();
        let page = params.page();

        Self {
            total,
            limit,
            offset: if page.is_none() { Some(offset) } else { None },
            page,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}

/// Query parameters for pagination.
#[derive(Debug, Clone, Default, Hash, Deserialize, ToSchema, IntoParams)]
pub struct PaginationParams {
    /// Maximum number of items to return (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0, ignored if `page` is set)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    /// Page number (1-indexed)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl PaginationParams {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        if let Some(page) = self.page {
            (page.max(1) - 1).saturating_mul(self.limit())
        } else {
            self.offset.unwrap_or(0).max(0)
        }
    }

    #[must_use]
    pub fn page(&self) -> Option<i64> {
        self.page.map(|p| p.max(1))
    }

    /// Slices an in-memory, already ordered result set.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.offset() as usize)
            .take(self.limit() as usize)
            .cloned()
            .collect()
    }
}

/// One page of records plus the unpaginated total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<i64>, offset: Option<i64>, page: Option<i64>) -> PaginationParams {
        PaginationParams {
            limit,
            offset,
            page,
        }
    }

    #[test]
    fn test_limit_defaults_and_clamps() {
        assert_eq!(params(None, None, None).limit(), 10);
        assert_eq!(params(Some(0), None, None).limit(), 1);
        assert_eq!(params(Some(150), None, None).limit(), 100);
    }

    #[test]
    fn test_offset_from_page_takes_precedence() {
        assert_eq!(params(Some(20), Some(5), Some(3)).offset(), 40);
        assert_eq!(params(Some(10), None, Some(0)).offset(), 0);
        assert_eq!(params(None, Some(-5), None).offset(), 0);
    }

    #[test]
    fn test_meta_has_more() {
        let p = params(Some(10), Some(0), None);
        let meta = PaginationMeta::new(&p, 25);
        assert!(meta.has_more);
        assert_eq!(meta.offset, Some(0));
        assert_eq!(meta.page, None);

        let p = params(Some(10), None, Some(3));
        let meta = PaginationMeta::new(&p, 25);
        assert!(!meta.has_more);
        assert_eq!(meta.page, Some(3));
        assert_eq!(meta.offset, None);
    }

    #[test]
    fn test_apply_slices_items() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(params(Some(10), None, Some(3)).apply(&items), (21..=25).collect::<Vec<_>>());
        assert!(params(Some(10), Some(30), None).apply(&items).is_empty());
    }

    #[test]
    fn test_huge_page_or_offset_saturates() {
        let p = params(Some(100), None, Some(i64::MAX));
        assert_eq!(p.offset(), i64::MAX);
        let meta = PaginationMeta::new(&p, 25);
        assert!(!meta.has_more);

        let p: PaginationParams =
            serde_json::from_str(r#"{"offset": "9223372036854775807"}"#).unwrap();
        assert_eq!(p.offset(), i64::MAX);
        assert!(!PaginationMeta::new(&p, 25).has_more);

        let items: Vec<i32> = (1..=25).collect();
        assert!(p.apply(&items).is_empty());
    }

    #[test]
    fn test_deserialize_from_query_strings() {
        let json = r#"{"limit": "20", "offset": "", "page": "2"}"#;
        let p: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.limit, Some(20));
        assert_eq!(p.offset, None);
        assert_eq!(p.page, Some(2));
    }
}
