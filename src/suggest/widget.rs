//! Widget-facing suggestion adapter
//!
//! Owns the search lifecycle for one input field: the attach flow (property
//! allow-list check and formatter URL resolution), issuing lookups, dropping
//! responses that a newer search has superseded, and building deep links for
//! accepted identifiers. Rendering and event wiring stay with the caller.

use crate::config::SearchConfig;
use crate::error::SuggestError;
use crate::formatter_url::{self, FormatterUrlResolver, MetadataClient};
use crate::lookup::{LookupError, ResultPage, ResultRecord, SearchClient};

use super::SuggestionCache;

/// Identifies one issued search request
///
/// Responses are accepted only for the most recently issued ticket; anything
/// older is stale and is dropped before it reaches the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

/// Autocomplete suggester for a single external-id input field
#[derive(Debug)]
pub struct Suggester<C> {
    client: C,
    property: String,
    url_format: Option<String>,
    cache: SuggestionCache,
    last_issued: u64,
}

impl<C: SearchClient> Suggester<C> {
    /// Attach a suggester to an input field editing `property`.
    ///
    /// Properties outside the configured allow-list are not activated. A
    /// failed formatter URL resolution disables link generation for this
    /// property but does not block the widget; the resolver does not cache
    /// failures, so a later instantiation retries.
    pub async fn attach<M: MetadataClient>(
        client: C,
        config: &SearchConfig,
        resolver: &FormatterUrlResolver<M>,
        property: &str,
    ) -> Result<Self, SuggestError> {
        if !config.properties.iter().any(|p| p == property) {
            return Err(SuggestError::UnsupportedProperty(property.to_string()));
        }

        let url_format = match resolver.get(property).await {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("no formatter url for {}: {}", property, e);
                None
            }
        };

        Ok(Self::new(client, property, url_format))
    }

    /// Construct directly with an already-resolved formatter URL template.
    pub fn new(client: C, property: &str, url_format: Option<String>) -> Self {
        Suggester {
            client,
            property: property.to_string(),
            url_format,
            cache: SuggestionCache::new(),
            last_issued: 0,
        }
    }

    /// Record that the input changed and a new lookup is being issued.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_issued += 1;
        SearchTicket {
            seq: self.last_issued,
        }
    }

    /// Feed a resolved result page back to the cache.
    ///
    /// Returns `None` without touching the cache when the ticket does not
    /// belong to the most recently issued request.
    pub fn apply_response(
        &mut self,
        ticket: &SearchTicket,
        page: ResultPage,
    ) -> Option<&[ResultRecord]> {
        if ticket.seq != self.last_issued {
            log::debug!(
                "dropping response for superseded request {} (latest is {})",
                ticket.seq,
                self.last_issued
            );
            return None;
        }
        Some(self.cache.merge(page))
    }

    /// Issue one lookup for `term` and consolidate its result.
    ///
    /// A lookup failure is returned before the cache is touched; an empty
    /// page is a valid result, not a failure.
    pub async fn search(&mut self, term: &str) -> Result<&[ResultRecord], LookupError> {
        let ticket = self.begin_search();
        let page = self.client.request(term).await?;
        self.apply_response(&ticket, page);
        Ok(self.cache.records())
    }

    /// Records for the term currently in the cache.
    pub fn current_records(&self) -> &[ResultRecord] {
        self.cache.records()
    }

    /// True when the latest search for `input` came back empty.
    pub fn not_found(&self, input: &str) -> bool {
        self.cache.not_found(input)
    }

    /// Deep link to the canonical record for `identifier`, when the property
    /// declares a formatter URL.
    pub fn link_to(&self, identifier: &str) -> Option<String> {
        self.url_format
            .as_deref()
            .map(|template| formatter_url::substitute(template, identifier))
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// Tear down widget state; the cached suggestions are discarded wholesale.
    pub fn destroy(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod widget_tests;
