use serde::{Deserialize, Serialize};

use crate::shared::hierarchy_filter::FilterError;

/// Page size used when reading reference tables (branches, categories)
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Query parameters for one page of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

/// One page of rows together with the size of the whole result set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub offset: usize,
}

/// Assembles a full result set from sequential pages.
///
/// Filters only ever receive complete collections, so consumers call
/// [`finish`](Self::finish) once [`next_request`](Self::next_request) returns
/// `None`.
#[derive(Debug, Clone)]
pub struct PageCollector<T> {
    page_size: usize,
    items: Vec<T>,
    total_count: Option<usize>,
}

impl<T> PageCollector<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            items: Vec::new(),
            total_count: None,
        }
    }

    /// Next page to fetch, or `None` when everything has been received
    pub fn next_request(&self) -> Option<PageRequest> {
        if self.is_complete() {
            return None;
        }
        Some(PageRequest {
            limit: self.page_size,
            offset: self.items.len(),
        })
    }

    pub fn push(&mut self, page: Page<T>) -> Result<(), FilterError> {
        if page.offset != self.items.len() {
            return Err(FilterError::PageOutOfOrder {
                expected: self.items.len(),
                actual: page.offset,
            });
        }

        let received = page.items.len();
        self.items.extend(page.items);
        // A short page ends the set even if the reported total was larger
        self.total_count = if received < self.page_size {
            Some(self.items.len())
        } else {
            Some(page.total_count)
        };
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.total_count
            .is_some_and(|total| self.items.len() >= total)
    }

    pub fn received(&self) -> usize {
        self.items.len()
    }

    /// The assembled rows, if every page has arrived
    pub fn finish(self) -> Option<Vec<T>> {
        if self.is_complete() {
            Some(self.items)
        } else {
            None
        }
    }
}

impl<T> Default for PageCollector<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
