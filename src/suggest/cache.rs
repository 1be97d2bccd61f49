//! Per-widget suggestion cache
//!
//! Decides whether a newly arrived result page extends the search currently
//! in flight or starts a new one, and keeps the consolidated record list for
//! the current term.

use crate::lookup::{ResultPage, ResultRecord};

#[derive(Debug, Clone)]
struct CacheEntry {
    term: String,
    records: Vec<ResultRecord>,
    continuation: Option<String>,
}

/// Cached suggestions for a single input field
///
/// Owned exclusively by one widget instance. No entry exists until the first
/// result page arrives; records are append-only for the lifetime of a single
/// term and discarded entirely when the term changes.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    entry: Option<CacheEntry>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consolidate a newly arrived result page and return the current records.
    ///
    /// The page extends the cached records only when its term matches the
    /// cached term and the previous page declared a continuation. Anything
    /// else, including a matching term whose previous page had no open
    /// continuation (a stale or duplicate response), replaces the entry
    /// wholesale.
    pub fn merge(&mut self, page: ResultPage) -> &[ResultRecord] {
        match &mut self.entry {
            Some(entry) if entry.term == page.term && entry.continuation.is_some() => {
                log::debug!(
                    "extending {:?} with {} more records",
                    entry.term,
                    page.records.len()
                );
                entry.records.extend(page.records);
                entry.continuation = page.continuation;
            }
            _ => {
                self.entry = Some(CacheEntry {
                    term: page.term,
                    records: page.records,
                    continuation: page.continuation,
                });
            }
        }
        self.records()
    }

    /// Records cached for the current term, in arrival order.
    ///
    /// Callers must treat the slice as read-only; it is replaced or extended
    /// only through `merge`.
    pub fn records(&self) -> &[ResultRecord] {
        self.entry
            .as_ref()
            .map_or(&[], |entry| entry.records.as_slice())
    }

    /// The term the cached records belong to, if any page has arrived.
    pub fn term(&self) -> Option<&str> {
        self.entry.as_ref().map(|entry| entry.term.as_str())
    }

    /// Whether the last page for the current term announced more results.
    pub fn has_continuation(&self) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| entry.continuation.is_some())
    }

    /// True when a search completed with no matches for a non-empty input.
    ///
    /// Callers use this to show a "not found" affordance; it is never true
    /// before the first page arrives or for whitespace-only input.
    pub fn not_found(&self, input: &str) -> bool {
        let searched_empty = self
            .entry
            .as_ref()
            .is_some_and(|entry| entry.records.is_empty());
        searched_empty && !input.trim().is_empty()
    }

    /// Drop the cached entry wholesale (widget teardown).
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
