//! Coda source for pulling tables out of Coda docs
//!
//! Talks to the Coda REST API (v1): table metadata, column listings and row
//! listings, following `nextPageToken` cursors until a listing is complete.
//! Requests are never retried here.

mod config;
pub use config::{CodaConfig, API_URL_ENV, TOKEN_ENV};

mod wire;


use docql_core::{
    async_trait, err,
    schema::{RemoteColumn, RemoteRow, TableMeta, ValueFormat},
    Error, RequestContext, Result, Source, TableRef,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Header asking the API to serve the latest doc version
const DOC_VERSION_HEADER: &str = "X-Coda-Doc-Version";

/// Coda API client
#[derive(Debug)]
pub struct Coda {
    api_url: Url,
    token: Option<String>,
    page_size: u32,
    consistent_reads: bool,
    client: reqwest::Client,
}

impl Coda {
    /// Create a new Coda source with the given configuration
    ///
    /// # Errors
    ///
    /// Returns error if the API URL does not parse or the HTTP client cannot
    /// be created (e.g., TLS misconfiguration)
    pub fn new(config: CodaConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(err!("Coda API URL cannot be a base: {}", config.api_url));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("docql/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(Error::remote_fetch)?;

        Ok(Self {
            api_url,
            token: config.token,
            page_size: config.page_size.max(1),
            consistent_reads: config.consistent_reads,
            client,
        })
    }

    /// Create a Coda source from `CODA_API_TOKEN` / `CODA_API_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(CodaConfig::from_env())
    }

    /// `{api}/docs/{doc}/tables/{table}/{tail..}`, each segment percent-encoded
    fn table_url(&self, table: &TableRef, tail: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .expect("checked in Coda::new")
            .pop_if_empty()
            .extend(["docs", table.doc.as_str(), "tables", table.table.as_str()])
            .extend(tail);
        url
    }

    /// Build a request with optional auth
    fn build_request(&self, url: Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        if self.consistent_reads {
            request = request.header(DOC_VERSION_HEADER, "latest");
        }
        request
    }

    /// Fetch one resource (single attempt, no retry)
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .build_request(url.clone())
            .send()
            .await
            .map_err(Error::remote_fetch)?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_error_status(response, &url).await);
        }

        response.json().await.map_err(Error::remote_fetch)
    }

    /// Handle common HTTP response errors
    async fn handle_error_status(&self, response: reqwest::Response, url: &Url) -> Error {
        let status = response.status();
        // The body is informational only; fall back to the status text.
        let body = response.text().await.unwrap_or_default();
        let api_error = serde_json::from_str::<wire::ApiError>(&body).unwrap_or_default();

        let message = api_error
            .message
            .or(api_error.status_message)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());

        warn!(
            source = "coda",
            status = status.as_u16(),
            url = %url,
            message = %message,
            "request failed"
        );

        Error::remote_status(status.as_u16(), message)
    }

    /// Fetch every page of a list endpoint, in order.
    async fn paginate<T, U>(&self, url: Url, query: &[(&str, &str)]) -> Result<Vec<U>>
    where
        T: DeserializeOwned,
        U: From<T>,
    {
        let mut items = vec![];
        let mut page_token: Option<String> = None;
        let limit = self.page_size.to_string();

        loop {
            let mut page_url = url.clone();
            {
                let mut pairs = page_url.query_pairs_mut();
                pairs.extend_pairs(query.iter().copied());
                pairs.append_pair("limit", &limit);
                if let Some(token) = &page_token {
                    pairs.append_pair("pageToken", token);
                }
            }

            let page: wire::Page<T> = self.get(page_url).await?;
            debug!(
                source = "coda",
                url = %url,
                items = page.items.len(),
                more = page.next_page_token.is_some(),
                "fetched page"
            );

            items.extend(page.items.into_iter().map(U::from));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl Source for Coda {
    async fn table(&self, _cx: &RequestContext, table: &TableRef) -> Result<TableMeta> {
        let meta: wire::Table = self.get(self.table_url(table, &[])).await?;
        Ok(meta.into())
    }

    async fn columns(&self, _cx: &RequestContext, table: &TableRef) -> Result<Vec<RemoteColumn>> {
        self.paginate::<wire::Column, _>(self.table_url(table, &["columns"]), &[])
            .await
    }

    async fn rows(
        &self,
        _cx: &RequestContext,
        table: &TableRef,
        format: ValueFormat,
    ) -> Result<Vec<RemoteRow>> {
        self.paginate::<wire::Row, _>(
            self.table_url(table, &["rows"]),
            &[("valueFormat", format.as_str())],
        )
        .await
    }
}
