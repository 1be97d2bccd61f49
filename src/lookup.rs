//! Suggestion lookup against the external search service
//!
//! Defines the result data model, the lookup error type, and the client that
//! performs one search request per term. The property to search is bound at
//! client construction; each call returns one page of candidate records plus
//! an optional continuation marker when the upstream has more results.

mod client;

pub use client::{HttpSearchClient, SearchClient};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a suggestion lookup
///
/// Calls are not retried automatically; the next keystroke issues a fresh
/// attempt. Each variant renders as a short machine reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The request did not complete within the configured timeout
    #[error("timeout")]
    Timeout,

    /// Transport-level failure (connection, TLS, body read)
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("http status {0}")]
    Status(u16),

    /// The service reported an error in its response payload
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Parse(String),
}

/// One candidate record returned by the search service
///
/// Immutable once produced; only `id` is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub aliases: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResultRecord {
    /// Primary display text: the label (falling back to the raw id), with
    /// aliases appended in parentheses.
    pub fn display_text(&self) -> String {
        let mut text = self
            .label
            .clone()
            .unwrap_or_else(|| self.id.clone());
        if let Some(aliases) = &self.aliases {
            text.push_str(&format!(" ({})", aliases));
        }
        text
    }
}

/// One page of results for a search term
///
/// `continuation == None` means no further pages exist for this term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub term: String,
    pub records: Vec<ResultRecord>,
    pub continuation: Option<String>,
}
