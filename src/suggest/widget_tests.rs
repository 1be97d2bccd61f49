//! Tests for the widget adapter

use super::*;
use crate::config::SearchConfig;
use crate::formatter_url::MetadataError;
use crate::lookup::{LookupError, ResultPage, ResultRecord, SearchClient};

fn record(id: &str) -> ResultRecord {
    ResultRecord {
        id: id.to_string(),
        label: None,
        aliases: None,
        description: None,
    }
}

fn page(term: &str, ids: &[&str], continuation: Option<&str>) -> ResultPage {
    ResultPage {
        term: term.to_string(),
        records: ids.iter().map(|id| record(id)).collect(),
        continuation: continuation.map(|c| c.to_string()),
    }
}

/// Search client that answers every request with a fixed record list.
struct FixedClient {
    ids: Vec<String>,
}

impl FixedClient {
    fn new(ids: &[&str]) -> Self {
        FixedClient {
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl SearchClient for FixedClient {
    async fn request(&self, term: &str) -> Result<ResultPage, LookupError> {
        let refs: Vec<&str> = self.ids.iter().map(|id| id.as_str()).collect();
        Ok(page(term, &refs, None))
    }
}

/// Search client that always fails with an upstream error.
struct FailingClient;

impl SearchClient for FailingClient {
    async fn request(&self, _term: &str) -> Result<ResultPage, LookupError> {
        Err(LookupError::Upstream("service down".to_string()))
    }
}

/// Metadata client that answers every property with a fixed outcome.
struct FixedMetadata(Result<String, MetadataError>);

impl crate::formatter_url::MetadataClient for FixedMetadata {
    async fn formatter_url(&self, _property_id: &str) -> Result<String, MetadataError> {
        self.0.clone()
    }
}

#[tokio::test]
async fn test_attach_rejects_property_outside_allow_list() {
    let resolver = FormatterUrlResolver::new(FixedMetadata(Ok("https://viaf.org/viaf/$1".into())));

    let result = Suggester::attach(
        FixedClient::new(&[]),
        &SearchConfig::default(),
        &resolver,
        "P9999",
    )
    .await;

    assert_eq!(
        result.err(),
        Some(SuggestError::UnsupportedProperty("P9999".to_string()))
    );
}

#[tokio::test]
async fn test_attach_resolves_formatter_url_for_links() {
    let resolver = FormatterUrlResolver::new(FixedMetadata(Ok("https://viaf.org/viaf/$1".into())));

    let suggester = Suggester::attach(
        FixedClient::new(&[]),
        &SearchConfig::default(),
        &resolver,
        "P214",
    )
    .await
    .unwrap();

    assert_eq!(suggester.property(), "P214");
    assert_eq!(
        suggester.link_to("12345").as_deref(),
        Some("https://viaf.org/viaf/12345")
    );
}

#[tokio::test]
async fn test_attach_without_formatter_url_disables_links_only() {
    let resolver = FormatterUrlResolver::new(FixedMetadata(Err(
        MetadataError::MissingFormatterUrl("P214".to_string()),
    )));

    let suggester = Suggester::attach(
        FixedClient::new(&[]),
        &SearchConfig::default(),
        &resolver,
        "P214",
    )
    .await
    .unwrap();

    assert_eq!(suggester.link_to("12345"), None);
}

#[tokio::test]
async fn test_search_consolidates_and_exposes_records() {
    let mut suggester = Suggester::new(FixedClient::new(&["r1", "r2"]), "P214", None);

    let records = suggester.search("smith").await.unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(suggester.current_records().len(), 2);
    assert!(!suggester.not_found("smith"));
}

#[tokio::test]
async fn test_search_failure_leaves_cache_untouched() {
    let mut suggester = Suggester::new(FailingClient, "P214", None);

    let result = suggester.search("smith").await;

    assert_eq!(
        result.err(),
        Some(LookupError::Upstream("service down".to_string()))
    );
    // A failure is not an empty result: nothing was cached, so the
    // "not found" affordance stays off
    assert!(suggester.current_records().is_empty());
    assert!(!suggester.not_found("smith"));
}

#[tokio::test]
async fn test_empty_result_sets_not_found() {
    let mut suggester = Suggester::new(FixedClient::new(&[]), "P214", None);

    let records = suggester.search("smith").await.unwrap();

    assert!(records.is_empty());
    assert!(suggester.not_found("smith"));
}

#[test]
fn test_superseded_response_is_dropped() {
    let mut suggester = Suggester::new(FixedClient::new(&[]), "P214", None);

    let first = suggester.begin_search();
    let second = suggester.begin_search();

    // The response for the older request arrives after a newer one was issued
    assert!(
        suggester
            .apply_response(&first, page("smi", &["stale"], None))
            .is_none()
    );
    assert!(suggester.current_records().is_empty());

    let records = suggester
        .apply_response(&second, page("smith", &["r1"], None))
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_latest_ticket_still_merges_continuations() {
    let mut suggester = Suggester::new(FixedClient::new(&[]), "P214", None);

    let ticket = suggester.begin_search();
    suggester.apply_response(&ticket, page("smith", &["r1", "r2"], Some("tok1")));

    let ticket = suggester.begin_search();
    let records = suggester
        .apply_response(&ticket, page("smith", &["r3"], None))
        .unwrap();

    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_destroy_clears_cached_suggestions() {
    let mut suggester = Suggester::new(FixedClient::new(&["r1"]), "P214", None);
    suggester.search("smith").await.unwrap();

    suggester.destroy();

    assert!(suggester.current_records().is_empty());
    assert!(!suggester.not_found("smith"));
}
