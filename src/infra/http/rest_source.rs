use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::page::{PageEnvelope, PageRequest};
use crate::domain::entities::record::Record;
use crate::usecase::ports::source::{FetchError, RecordSource};

/// Reads a backend collection over HTTP: `GET <base>/<collection>?page=&size=&...`.
pub struct RestSource<R> {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RestSource<R> {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: None,
            _record: PhantomData,
        }
    }

    /// Bearer token issued by the auth layer, attached to every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), R::COLLECTION)
    }
}

#[async_trait(?Send)]
impl<R> RecordSource<R> for RestSource<R>
where
    R: Record + DeserializeOwned,
{
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageEnvelope<R>, FetchError> {
        let url = self.collection_url();
        let mut builder = self.client.get(&url).query(&request.query_pairs());
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "collection response");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        serde_json::from_str::<PageEnvelope<R>>(&body)
            .map_err(|err| FetchError::Malformed(err.to_string()))
    }
}
