//! Request and response types around a `Page`

use super::page::Page;
use serde::{Deserialize, Serialize};

/// Pagination parameters as they arrive with a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Token of the requested page
    #[serde(default)]
    pub page_token: Option<String>,

    /// Requested rows per page
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageRequest {
    /// Create an empty request (first page, default size)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.page_size = Some(size);
        self
    }
}

/// Pagination section of a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Token of the current page
    pub token: String,

    /// Effective rows per page
    pub size: u64,

    /// Rows skipped before the current page
    pub offset: u64,

    /// Token of the following page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Total rows across all pages, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    /// Number of pages, if the total count is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_count: Option<u64>,
}

impl PageInfo {
    /// Summarize a page
    ///
    /// Without an observed row count the query has not run yet, so no next
    /// token is computed.
    pub fn from_page(page: &Page, observed_row_count: Option<u64>) -> Self {
        Self {
            token: page.token(),
            size: page.size(),
            offset: page.offset(),
            next_token: observed_row_count.and_then(|rows| page.next_token(rows)),
            total_count: page.total_count(),
            pages_count: page.total_count().map(|_| page.pages_count()),
        }
    }

    /// Check if another page can be requested
    pub fn has_next(&self) -> bool {
        self.next_token.is_some()
    }
}
