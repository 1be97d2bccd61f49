//! HTTP client for the suggestion search service
//!
//! Issues a GET per search term against the configured URL template and
//! normalizes the response into a `ResultPage`. A service-reported error
//! payload is surfaced as `LookupError::Upstream` even when the HTTP status
//! is 2xx.

use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use serde::Deserialize;

use super::{LookupError, ResultPage, ResultRecord};
use crate::config::SearchConfig;

/// Issues a single asynchronous search request for a term
///
/// The property to search is bound at construction and is not re-validated
/// per call. Implementations perform no retries and mutate no shared state.
#[allow(async_fn_in_trait)]
pub trait SearchClient {
    async fn request(&self, term: &str) -> Result<ResultPage, LookupError>;
}

/// Search client backed by the configured HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    url_template: String,
    property: String,
}

impl HttpSearchClient {
    /// Create a client for one property, with the configured request timeout.
    pub fn new(config: &SearchConfig, property: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(HttpSearchClient {
            client,
            url_template: config.url.clone(),
            property: property.to_string(),
        })
    }

    /// Substitute the property and term into the URL template, percent-encoded.
    fn build_url(&self, term: &str) -> String {
        self.url_template
            .replace(
                "%PROPERTY%",
                &utf8_percent_encode(&self.property, NON_ALPHANUMERIC).to_string(),
            )
            .replace(
                "%QUERY%",
                &utf8_percent_encode(term, NON_ALPHANUMERIC).to_string(),
            )
    }
}

impl SearchClient for HttpSearchClient {
    async fn request(&self, term: &str) -> Result<ResultPage, LookupError> {
        let url = self.build_url(term);
        log::debug!("searching {} for {:?}", self.property, term);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Network(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        decode_response(term, &body)
    }
}

/// Wire shape of a search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ResultRecord>,
    #[serde(default)]
    continuation: Option<String>,
    #[serde(default)]
    error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    info: String,
}

/// Decode a response body into a `ResultPage` for `term`.
fn decode_response(term: &str, body: &str) -> Result<ResultPage, LookupError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(LookupError::Upstream(error.info));
    }

    Ok(ResultPage {
        term: term.to_string(),
        records: response.results,
        continuation: response.continuation,
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
