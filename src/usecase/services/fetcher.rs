use tracing::{debug, warn};

use crate::domain::entities::page::{FetchMode, PageEnvelope, PageRequest, Pagination};
use crate::domain::entities::query::QueryState;
use crate::domain::entities::record::Record;
use crate::usecase::ports::source::{FetchError, RecordSource};

/// Sequence number handed out with every request a controller issues.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub page: PageRequest,
    /// Results are appended to the working set instead of replacing it.
    pub append: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse<R> {
    pub ticket: Ticket,
    pub result: Result<PageEnvelope<R>, FetchError>,
}

/// Builds the backend request for the next fetch of a list screen.
pub fn plan_request(
    mode: FetchMode,
    pagination: &Pagination,
    query: &QueryState,
    scope: &[(String, String)],
) -> PageRequest {
    let mut request = match mode {
        FetchMode::Bulk { size } => PageRequest::new(0, size.max(1)),
        FetchMode::ServerPaged => {
            let mut request = PageRequest::new(pagination.current_page, pagination.page_size);
            request.params.extend(query.to_params());
            request
        }
        FetchMode::InfiniteScroll => {
            PageRequest::new(pagination.current_page, pagination.page_size)
        }
    };
    request.params.extend(scope.iter().cloned());
    request
}

/// Runs one request against the source, tagging the outcome with its ticket.
pub async fn run_fetch<R, S>(source: &S, request: &FetchRequest) -> FetchResponse<R>
where
    R: Record,
    S: RecordSource<R> + ?Sized,
{
    debug!(
        collection = R::COLLECTION,
        ticket = request.ticket,
        page = request.page.page,
        size = request.page.size,
        "fetching page"
    );
    let result = source.fetch_page(&request.page).await;
    if let Err(err) = &result {
        warn!(
            collection = R::COLLECTION,
            ticket = request.ticket,
            error = %err,
            "page fetch failed"
        );
    }
    FetchResponse {
        ticket: request.ticket,
        result,
    }
}

/// Records carried by an envelope. A body without `content` counts as empty.
pub fn envelope_records<R: Record>(envelope: &mut PageEnvelope<R>) -> Vec<R> {
    match envelope.content.take() {
        Some(content) => content,
        None => {
            warn!(
                collection = R::COLLECTION,
                "response has no content field, treating as empty"
            );
            Vec::new()
        }
    }
}
