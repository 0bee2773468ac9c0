use tracing::{debug, info, warn};

use crate::domain::entities::page::{FetchMode, Pagination};
use crate::domain::entities::query::{QueryState, Selector};
use crate::domain::entities::record::Record;
use crate::usecase::ports::source::FetchError;
use crate::usecase::services::fetcher::{
    envelope_records, plan_request, FetchRequest, FetchResponse, Ticket,
};
use crate::usecase::services::projector::{
    page_has_more, recount, should_load_more, slice_page, QueryChange, QueryTracker,
};
use crate::usecase::services::reducer::apply_query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
    /// The requested server page lies past the end; the caller must run the request
    /// for the last existing page.
    Refetch(FetchRequest),
}

/// State of one list screen: working set, query, pagination and the fetch lifecycle.
///
/// The controller performs no I/O. Operations that need data return a
/// [`FetchRequest`]; the caller runs it against a source and hands the response
/// back to [`ListQueryController::complete`]. Only the response to the most
/// recently issued request is applied.
#[derive(Debug, Clone)]
pub struct ListQueryController<R: Record> {
    mode: FetchMode,
    phase: Phase,
    query: QueryState,
    pagination: Pagination,
    working_set: Vec<R>,
    filtered: Vec<R>,
    tracker: QueryTracker,
    scope: Vec<(String, String)>,
    last_ticket: Ticket,
    in_flight: Option<FetchRequest>,
    loaded_once: bool,
    error: Option<FetchError>,
}

impl<R: Record> ListQueryController<R> {
    pub fn new(mode: FetchMode, page_size: usize) -> Self {
        Self {
            mode,
            phase: Phase::Idle,
            query: QueryState::default(),
            pagination: Pagination::new(page_size),
            working_set: Vec::new(),
            filtered: Vec::new(),
            tracker: QueryTracker::default(),
            scope: Vec::new(),
            last_ticket: 0,
            in_flight: None,
            loaded_once: false,
            error: None,
        }
    }

    /// Adds a fixed query parameter sent with every request, e.g. `landlordId`.
    pub fn with_scope(mut self, key: &str, value: impl ToString) -> Self {
        self.scope.push((key.to_string(), value.to_string()));
        self
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn working_set(&self) -> &[R] {
        &self.working_set
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Records to render: the current page in bulk mode, everything otherwise.
    pub fn displayed(&self) -> Vec<R> {
        match self.mode {
            FetchMode::Bulk { .. } => slice_page(&self.filtered, &self.pagination),
            FetchMode::ServerPaged | FetchMode::InfiniteScroll => self.filtered.clone(),
        }
    }

    /// Resets the screen and issues its first request. `deep_link_page` survives the
    /// initial filter evaluation; infinite scroll always starts from page 0.
    pub fn mount(&mut self, deep_link_page: Option<usize>) -> FetchRequest {
        self.query = QueryState::default();
        self.tracker.reset();
        self.working_set.clear();
        self.filtered.clear();
        self.loaded_once = false;
        self.error = None;
        self.pagination = Pagination::new(self.pagination.page_size);
        self.pagination.current_page = match self.mode {
            FetchMode::InfiniteScroll => 0,
            FetchMode::Bulk { .. } | FetchMode::ServerPaged => deep_link_page.unwrap_or(0),
        };
        self.evaluate_query();
        self.issue(false)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> Option<FetchRequest> {
        self.query.search_term = term.into();
        self.evaluate_query()
    }

    pub fn set_filter(&mut self, name: &str, value: Option<f64>) -> Option<FetchRequest> {
        self.query.set_filter(name, value);
        self.evaluate_query()
    }

    pub fn set_status(&mut self, status: Selector) -> Option<FetchRequest> {
        self.query.status = status;
        self.evaluate_query()
    }

    pub fn clear_filters(&mut self) -> Option<FetchRequest> {
        self.query = QueryState::default();
        self.evaluate_query()
    }

    /// Moves to `page`. Bulk mode re-slices what it already holds; server paging
    /// fetches the page; infinite scroll has no pages to move to.
    pub fn set_page(&mut self, page: usize) -> Option<FetchRequest> {
        match self.mode {
            FetchMode::Bulk { .. } => {
                self.pagination.current_page = page;
                recount(&mut self.pagination, self.filtered.len());
                None
            }
            FetchMode::ServerPaged => {
                let page = match self.pagination.total_pages {
                    0 => page,
                    total => page.min(total - 1),
                };
                if page == self.pagination.current_page && self.phase == Phase::Ready {
                    return None;
                }
                self.pagination.current_page = page;
                Some(self.issue(false))
            }
            FetchMode::InfiniteScroll => None,
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Option<FetchRequest> {
        let page_size = page_size.max(1);
        if page_size == self.pagination.page_size {
            return None;
        }
        self.pagination.page_size = page_size;
        self.pagination.current_page = 0;
        match self.mode {
            FetchMode::Bulk { .. } => {
                recount(&mut self.pagination, self.filtered.len());
                None
            }
            FetchMode::ServerPaged => Some(self.issue(false)),
            FetchMode::InfiniteScroll => Some(self.restart()),
        }
    }

    /// Requests the next infinite-scroll page when the sentinel became visible.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.mode != FetchMode::InfiniteScroll {
            return None;
        }
        if !self.loaded_once || !should_load_more(&self.pagination, true, self.is_loading()) {
            return None;
        }
        Some(self.issue(true))
    }

    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.phase != Phase::Error {
            return None;
        }
        let append = self.mode == FetchMode::InfiniteScroll && self.loaded_once;
        self.pagination.has_more = true;
        Some(self.issue(append))
    }

    /// Refetches after the backend data changed, keeping the query state.
    pub fn refresh(&mut self) -> FetchRequest {
        match self.mode {
            FetchMode::InfiniteScroll => self.restart(),
            FetchMode::Bulk { .. } | FetchMode::ServerPaged => self.issue(false),
        }
    }

    /// Applies a response. Responses to anything but the latest request are dropped.
    pub fn complete(&mut self, response: FetchResponse<R>) -> Completion {
        let request = match &self.in_flight {
            Some(request) if request.ticket == response.ticket => request.clone(),
            _ => {
                debug!(
                    collection = R::COLLECTION,
                    ticket = response.ticket,
                    latest = self.last_ticket,
                    "dropping stale response"
                );
                return Completion::Stale;
            }
        };
        self.in_flight = None;

        let mut out_of_range = false;
        match response.result {
            Ok(mut envelope) => {
                let records = envelope_records(&mut envelope);
                let returned = records.len();
                match self.mode {
                    FetchMode::Bulk { .. } => {
                        self.working_set = records;
                        self.pagination.has_more = false;
                    }
                    FetchMode::ServerPaged => {
                        self.working_set = records;
                        self.pagination.total_elements = envelope.total_elements;
                        self.pagination.total_pages = envelope.total_pages;
                        self.pagination.has_more = !envelope.last;
                        let total_pages = self.pagination.total_pages;
                        if total_pages > 0 && self.pagination.current_page >= total_pages {
                            self.pagination.current_page = total_pages - 1;
                            out_of_range = true;
                        }
                    }
                    FetchMode::InfiniteScroll => {
                        if request.append {
                            self.working_set.extend(records);
                        } else {
                            self.working_set = records;
                        }
                        self.pagination.has_more =
                            page_has_more(returned, request.page.size, envelope.last);
                        if returned > 0 {
                            self.pagination.current_page = request.page.page + 1;
                        }
                        self.pagination.total_elements =
                            envelope.total_elements.max(self.working_set.len());
                        self.pagination.total_pages = envelope.total_pages;
                    }
                }
                self.loaded_once = true;
                self.error = None;
                self.phase = Phase::Ready;
                self.refilter();
                info!(
                    collection = R::COLLECTION,
                    page = request.page.page,
                    returned,
                    working_set = self.working_set.len(),
                    has_more = self.pagination.has_more,
                    "page applied"
                );
                if out_of_range {
                    warn!(
                        collection = R::COLLECTION,
                        requested = request.page.page,
                        page = self.pagination.current_page,
                        "requested page is past the end, loading last page"
                    );
                    return Completion::Refetch(self.issue(false));
                }
            }
            Err(err) => {
                warn!(
                    collection = R::COLLECTION,
                    page = request.page.page,
                    error = %err,
                    "list fetch failed"
                );
                if !self.loaded_once {
                    self.working_set.clear();
                }
                self.pagination.has_more = false;
                self.error = Some(err);
                self.phase = Phase::Error;
                self.refilter();
            }
        }
        Completion::Applied
    }

    fn issue(&mut self, append: bool) -> FetchRequest {
        self.last_ticket += 1;
        let request = FetchRequest {
            ticket: self.last_ticket,
            page: plan_request(self.mode, &self.pagination, &self.query, &self.scope),
            append,
        };
        self.in_flight = Some(request.clone());
        self.phase = Phase::Loading;
        request
    }

    fn restart(&mut self) -> FetchRequest {
        self.pagination.current_page = 0;
        self.pagination.has_more = true;
        self.issue(false)
    }

    fn evaluate_query(&mut self) -> Option<FetchRequest> {
        match self.tracker.observe(&self.query) {
            QueryChange::Initial => {
                self.refilter();
                None
            }
            QueryChange::Unchanged => None,
            QueryChange::Changed => match self.mode {
                FetchMode::Bulk { .. } => {
                    self.pagination.current_page = 0;
                    self.refilter();
                    None
                }
                FetchMode::ServerPaged => {
                    self.pagination.current_page = 0;
                    Some(self.issue(false))
                }
                // The page cursor of an accumulation is not a view position.
                FetchMode::InfiniteScroll => {
                    self.refilter();
                    None
                }
            },
        }
    }

    fn refilter(&mut self) {
        match self.mode {
            FetchMode::Bulk { .. } => {
                self.filtered = apply_query(&self.working_set, &self.query);
                if self.loaded_once {
                    recount(&mut self.pagination, self.filtered.len());
                }
            }
            // The backend already applied the query parameters.
            FetchMode::ServerPaged => self.filtered = self.working_set.clone(),
            FetchMode::InfiniteScroll => {
                self.filtered = apply_query(&self.working_set, &self.query);
            }
        }
    }
}
