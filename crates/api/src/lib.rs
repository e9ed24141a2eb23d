//! JSON endpoint client for the pagekit fillers.
//!
//! This crate provides:
//!
//! - The [`Fetch`] trait, the seam between fillers and the network. Fillers
//!   are written against the trait so they can be exercised without a live
//!   endpoint.
//! - [`FetchClient`], a thin wrapper around a configured `reqwest::Client`
//!   with sensible defaults: a JSON Accept header, a 30 second timeout, and a
//!   consistent User-Agent.
//!
//! Endpoints are expected to return a list of records. A top-level JSON array
//! is used directly; an object payload wrapping a single array field is
//! unwrapped. Anything else is an error.

use std::time::Duration;

use async_trait::async_trait;
use pagekit_types::Record;
use reqwest::{Client, Url, header};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors produced while fetching records from an endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("endpoint payload is not a record list")]
    UnexpectedShape,
}

/// Fetches a list of records from a caller-supplied URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issue a single GET-style JSON request with optional query parameters.
    async fn fetch_records(&self, url: &str, parameters: &[(String, String)]) -> anyhow::Result<Vec<Record>>;
}

/// HTTP-backed [`Fetch`] implementation.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    user_agent: String,
}

impl FetchClient {
    /// Construct a client with default headers and timeout.
    pub fn new() -> Result<Self, FetchError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            user_agent: format!("pagekit/{}; {}", env!("CARGO_PKG_VERSION"), std::env::consts::OS),
        })
    }

    async fn get_records(&self, url: &str, parameters: &[(String, String)]) -> Result<Vec<Record>, FetchError> {
        let url = compose_url(url, parameters)?;
        debug!(%url, "fetching records");

        let response = self
            .http
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let payload: Value = response.json().await?;
        records_from_payload(payload).ok_or(FetchError::UnexpectedShape)
    }
}

#[async_trait]
impl Fetch for FetchClient {
    async fn fetch_records(&self, url: &str, parameters: &[(String, String)]) -> anyhow::Result<Vec<Record>> {
        Ok(self.get_records(url, parameters).await?)
    }
}

/// Compose the request URL, appending parameters to any existing query.
pub fn compose_url(url: &str, parameters: &[(String, String)]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(url)?;
    if !parameters.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in parameters {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}

/// Extract the record list from an endpoint payload.
///
/// Accepts a top-level array, or an object wrapping exactly one array field.
/// Non-object items in the list are skipped rather than rejected; the fillers
/// are agnostic to all other response fields.
pub fn records_from_payload(payload: Value) -> Option<Vec<Record>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut arrays = map.into_iter().filter_map(|(_, value)| match value {
                Value::Array(items) => Some(items),
                _ => None,
            });
            let first = arrays.next()?;
            if arrays.next().is_some() {
                return None;
            }
            first
        }
        _ => return None,
    };

    Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect(),
    )
}
