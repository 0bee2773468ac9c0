use std::ops::Range;

use crate::domain::entities::page::Pagination;
use crate::domain::entities::query::QueryState;

pub fn total_pages(total_elements: usize, page_size: usize) -> usize {
    total_elements.div_ceil(page_size.max(1))
}

/// Recomputes client-side totals and pulls `current_page` back into range.
pub fn recount(pagination: &mut Pagination, total_elements: usize) {
    pagination.total_elements = total_elements;
    pagination.total_pages = total_pages(total_elements, pagination.page_size);
    if pagination.total_pages == 0 {
        pagination.current_page = 0;
    } else if pagination.current_page >= pagination.total_pages {
        pagination.current_page = pagination.total_pages - 1;
    }
}

pub fn page_range(pagination: &Pagination, len: usize) -> Range<usize> {
    let start = pagination
        .current_page
        .saturating_mul(pagination.page_size)
        .min(len);
    let end = start.saturating_add(pagination.page_size).min(len);
    start..end
}

pub fn slice_page<R: Clone>(filtered: &[R], pagination: &Pagination) -> Vec<R> {
    filtered[page_range(pagination, filtered.len())].to_vec()
}

/// Infinite scroll asks for more only when the sentinel is on screen, the backend
/// has not reported the end and nothing is in flight.
pub fn should_load_more(pagination: &Pagination, sentinel_visible: bool, in_flight: bool) -> bool {
    sentinel_visible && pagination.has_more && !in_flight
}

/// `has_more` for an appended page: a short page or `last` ends the stream.
pub fn page_has_more(returned: usize, requested: usize, last: bool) -> bool {
    returned == requested && !last
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryChange {
    Initial,
    Unchanged,
    Changed,
}

/// Remembers the last evaluated query so the first evaluation after mount does not
/// reset a deep-linked page.
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    previous: Option<QueryState>,
}

impl QueryTracker {
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn observe(&mut self, query: &QueryState) -> QueryChange {
        match &self.previous {
            None => {
                self.previous = Some(query.clone());
                QueryChange::Initial
            }
            Some(previous) if previous == query => QueryChange::Unchanged,
            Some(_) => {
                self.previous = Some(query.clone());
                QueryChange::Changed
            }
        }
    }
}

/// One-based page numbers for a pager, `None` marking a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Zero-based page window around `pagination.current_page`.
pub fn page_window(pagination: &Pagination) -> Vec<Option<usize>> {
    get_pages(
        pagination.total_pages,
        pagination.current_page + 1,
        1,
        2,
        2,
        1,
    )
    .into_iter()
    .map(|page| page.map(|p| p - 1))
    .collect()
}
