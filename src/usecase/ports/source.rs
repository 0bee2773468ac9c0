use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::page::{PageEnvelope, PageRequest};
use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// Backend collection that serves records one page at a time.
#[async_trait(?Send)]
pub trait RecordSource<R: Record> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageEnvelope<R>, FetchError>;
}
