use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_BULK_SIZE: usize = 1000;

/// How a list screen obtains its working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// One oversized request, then search/filter/paging happen on the client.
    Bulk { size: usize },
    /// One backend page per request; filters travel as query parameters.
    ServerPaged,
    /// Pages are appended as the user scrolls.
    InfiniteScroll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub params: Vec<(String, String)>,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            params: Vec::new(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        pairs.extend(self.params.iter().cloned());
        pairs
    }
}

/// Page envelope returned by the backend for every collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<R> {
    pub content: Option<Vec<R>>,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub last: bool,
}

impl<R> PageEnvelope<R> {
    pub fn new(content: Vec<R>, total_elements: usize, page_size: usize, number: usize) -> Self {
        let total_pages = total_elements.div_ceil(page_size.max(1));
        Self {
            content: Some(content),
            total_elements,
            total_pages,
            number,
            last: number + 1 >= total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page shown by bulk and server-paged screens. In infinite scroll it is
    /// the next page to fetch, so it reaches `total_pages` once the stream ends.
    pub current_page: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 0,
            page_size: page_size.max(1),
            total_elements: 0,
            total_pages: 0,
            has_more: true,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
