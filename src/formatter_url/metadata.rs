//! Metadata service client for formatter URL statements
//!
//! Fetches a property entity restricted to its claims projection and
//! extracts the first value of the formatter URL statement.

use reqwest::Client;

use super::MetadataError;
use crate::config::MetadataConfig;

/// Property holding the formatter URL statement on the metadata service
const FORMATTER_URL_PROPERTY: &str = "P1630";

/// Fetches the formatter URL template declared for a property
#[allow(async_fn_in_trait)]
pub trait MetadataClient {
    async fn formatter_url(&self, property_id: &str) -> Result<String, MetadataError>;
}

/// Metadata client backed by the wbgetentities API
#[derive(Debug, Clone)]
pub struct HttpMetadataClient {
    client: Client,
    api_url: String,
}

impl HttpMetadataClient {
    pub fn new(config: &MetadataConfig) -> Self {
        HttpMetadataClient {
            client: Client::new(),
            api_url: config.api_url.clone(),
        }
    }
}

impl MetadataClient for HttpMetadataClient {
    async fn formatter_url(&self, property_id: &str) -> Result<String, MetadataError> {
        log::debug!("resolving formatter url for {}", property_id);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "wbgetentities"),
                ("ids", property_id),
                ("props", "claims"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| MetadataError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetadataError::Request(format!(
                "http status {}",
                response.status().as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MetadataError::Parse(e.to_string()))?;

        extract_formatter_url(property_id, &body)
    }
}

/// Pull the first formatter URL value out of a claims projection.
///
/// Any missing step along the path means the property declares no usable
/// formatter URL.
fn extract_formatter_url(
    property_id: &str,
    body: &serde_json::Value,
) -> Result<String, MetadataError> {
    body.get("entities")
        .and_then(|entities| entities.get(property_id))
        .and_then(|entity| entity.get("claims"))
        .and_then(|claims| claims.get(FORMATTER_URL_PROPERTY))
        .and_then(|statements| statements.get(0))
        .and_then(|statement| statement.get("mainsnak"))
        .and_then(|snak| snak.get("datavalue"))
        .and_then(|datavalue| datavalue.get("value"))
        .and_then(|value| value.as_str())
        .map(|url| url.to_string())
        .ok_or_else(|| MetadataError::MissingFormatterUrl(property_id.to_string()))
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod metadata_tests;
