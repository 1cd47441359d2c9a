//! Page value object
//!
//! A `Page` is built once per request from the client's page token and page
//! size. It hands out the offset for a `LIMIT/OFFSET` query and, once the
//! caller has reported the total row count, decides whether a next-page token
//! should be returned.

use super::types::{PageInfo, PageRequest};
use crate::config::PageConfig;
use crate::error::{Error, Result};

/// One page of an offset-paginated query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page index
    number: u64,
    /// Rows per page, in `1..=max_size`
    size: u64,
    /// Total rows across all pages, 0 while unknown
    total_count: u64,
}

impl Page {
    /// Build a page from raw size limits
    ///
    /// `default_size` and `max_size` are validated as a [`PageConfig`] first.
    pub fn create(
        token: Option<&str>,
        size: Option<i64>,
        default_size: u64,
        max_size: u64,
    ) -> Result<Self> {
        let config = PageConfig::new(default_size, max_size)?;
        Self::new(token, size, &config)
    }

    /// Build a page from a token and size
    ///
    /// A missing token means page 1, a missing size means the configured
    /// default. Sizes above the maximum are clamped rather than rejected.
    pub fn new(token: Option<&str>, size: Option<i64>, config: &PageConfig) -> Result<Self> {
        let number = match token {
            Some(token) => parse_token(token)?,
            None => 1,
        };

        let size = match size {
            None => config.default_size(),
            Some(size) if size < 1 => {
                return Err(Error::validation("page size must be positive"));
            }
            Some(size) if size as u64 > config.max_size() => {
                tracing::debug!(
                    "Clamping page size {} to max {}",
                    size,
                    config.max_size()
                );
                config.max_size()
            }
            Some(size) => size as u64,
        };

        Ok(Self {
            number,
            size,
            total_count: 0,
        })
    }

    /// Build a page from request parameters
    pub fn from_request(request: &PageRequest, config: &PageConfig) -> Result<Self> {
        Self::new(request.page_token.as_deref(), request.page_size, config)
    }

    /// Decimal token for this page
    pub fn token(&self) -> String {
        self.number.to_string()
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rows to skip before this page starts
    pub fn offset(&self) -> u64 {
        (self.number - 1).saturating_mul(self.size)
    }

    /// `LIMIT` and `OFFSET` for this page, ready to append to a query
    pub fn limit_offset_clause(&self) -> String {
        format!("LIMIT {} OFFSET {}", self.size, self.offset())
    }

    /// Record the total row count and return the page
    #[must_use]
    pub fn with_total_count(mut self, total_count: u64) -> Self {
        self.set_total_count(total_count);
        self
    }

    /// Record the total row count
    ///
    /// The count can only be set once; later calls with a different value
    /// are ignored. Zero leaves the count unknown.
    pub fn set_total_count(&mut self, total_count: u64) {
        if total_count == 0 || total_count == self.total_count {
            return;
        }
        if self.total_count != 0 {
            tracing::warn!(
                "Ignoring total count {} for page {}, already set to {}",
                total_count,
                self.number,
                self.total_count
            );
            return;
        }
        self.total_count = total_count;
    }

    /// Total row count, if it has been reported
    pub fn total_count(&self) -> Option<u64> {
        (self.total_count != 0).then_some(self.total_count)
    }

    /// Token of the following page, if there is one
    ///
    /// A short page (fewer rows than `size`) is always the last. Otherwise the
    /// next page exists when the total count is unknown or exceeds the rows
    /// covered up to the end of this page.
    pub fn next_token(&self, observed_row_count: u64) -> Option<String> {
        if observed_row_count < self.size {
            return None;
        }
        if self.total_count == 0 || self.total_count > self.number.saturating_mul(self.size) {
            return Some((self.number + 1).to_string());
        }
        None
    }

    /// Number of pages needed for the total count, 0 while unknown
    pub fn pages_count(&self) -> u64 {
        if self.total_count == 0 {
            return 0;
        }
        let mut pages = self.total_count / self.size;
        if self.total_count % self.size > 0 {
            pages += 1;
        }
        pages
    }

    /// Pagination summary for a response, after `observed_row_count` rows
    pub fn page_info(&self, observed_row_count: u64) -> PageInfo {
        PageInfo::from_page(self, Some(observed_row_count))
    }
}

/// Parse a page token into a page number
fn parse_token(token: &str) -> Result<u64> {
    let number: i64 = token
        .parse()
        .map_err(|e| Error::invalid_token(token, e))?;

    if number < 1 {
        return Err(Error::validation("page number must be positive"));
    }

    Ok(number as u64)
}
