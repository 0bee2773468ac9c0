use std::cell::RefCell;

use async_trait::async_trait;

use crate::domain::entities::page::{PageEnvelope, PageRequest};
use crate::domain::entities::query::{QueryState, Selector};
use crate::domain::entities::record::{find_range_filter, Record};
use crate::usecase::ports::source::{FetchError, RecordSource};
use crate::usecase::services::reducer::apply_query;

/// Serves a fixed record list the way the backend pages a collection, applying
/// `search`, `status` and the record's range filters when they are present.
pub struct MemorySource<R> {
    records: Vec<R>,
    failure: RefCell<Option<FetchError>>,
    requests: RefCell<Vec<PageRequest>>,
}

impl<R: Record> MemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            failure: RefCell::new(None),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Makes the next fetch fail with `err`.
    pub fn fail_next(&self, err: FetchError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }
}

fn query_from_params<R: Record>(params: &[(String, String)]) -> QueryState {
    let mut query = QueryState::default();
    for (key, value) in params {
        match key.as_str() {
            "search" => query.search_term = value.clone(),
            "status" => query.status = Selector::from_option(value),
            name if find_range_filter::<R>(name).is_some() => {
                query.set_filter(name, value.parse::<f64>().ok());
            }
            _ => {}
        }
    }
    query
}

#[async_trait(?Send)]
impl<R: Record> RecordSource<R> for MemorySource<R> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageEnvelope<R>, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(err) = self.failure.borrow_mut().take() {
            return Err(err);
        }

        let matching = apply_query(&self.records, &query_from_params::<R>(&request.params));
        let size = request.size.max(1);
        let start = request.page.saturating_mul(size).min(matching.len());
        let end = start.saturating_add(size).min(matching.len());

        Ok(PageEnvelope::new(
            matching[start..end].to_vec(),
            matching.len(),
            size,
            request.page,
        ))
    }
}
