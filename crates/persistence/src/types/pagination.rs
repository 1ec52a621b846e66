//! Pagination types for record listings.

use serde::{Deserialize, Serialize};

/// One page of an offset-paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Size of the full collection the page was cut from.
    pub total: usize,

    /// Number of items skipped before this page.
    pub skip: usize,

    /// Requested page size.
    pub limit: usize,

    /// The items on this page (at most `limit`).
    #[serde(rename = "data")]
    pub page: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }

    /// Maps every item on the page, keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total: self.total,
            skip: self.skip,
            limit: self.limit,
            page: self.page.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_page_as_data() {
        let page = Page {
            total: 10,
            skip: 8,
            limit: 10,
            page: vec![9, 10],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["data"], serde_json::json!([9, 10]));
        assert_eq!(json["total"], 10);
        assert!(json.get("page").is_none());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page {
            total: 3,
            skip: 1,
            limit: 2,
            page: vec![2, 3],
        }
        .map(|n| n * 10);
        assert_eq!(page.page, vec![20, 30]);
        assert_eq!(page.total, 3);
        assert_eq!(page.skip, 1);
    }
}
