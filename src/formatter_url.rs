//! Formatter URL resolution
//!
//! Maps a property id to its display-URL template (a single `$1`
//! placeholder) by fetching the property's claims from the metadata service
//! and taking the first declared formatter URL value. Resolution is memoized
//! process-wide: each property is looked up at most once for the lifetime of
//! the process, and concurrent callers for the same uncached property share
//! one in-flight lookup.

mod metadata;
mod resolver;

pub use metadata::{HttpMetadataClient, MetadataClient};
pub use resolver::FormatterUrlResolver;

use thiserror::Error;

/// Errors that can occur while resolving a formatter URL
///
/// A failure is delivered to every coalesced waiter and is never cached, so
/// a later call retries the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MetadataError {
    /// The metadata request itself failed (transport or non-2xx status)
    #[error("metadata request failed: {0}")]
    Request(String),

    /// The entity exists but declares no formatter URL statement
    #[error("no formatter url declared for {0}")]
    MissingFormatterUrl(String),

    /// The metadata response body could not be decoded
    #[error("malformed metadata response: {0}")]
    Parse(String),

    /// The in-flight lookup was dropped before it completed
    #[error("lookup abandoned")]
    Abandoned,
}

/// Substitute `identifier` into a formatter URL template.
///
/// The template carries a single `$1` placeholder.
pub fn substitute(template: &str, identifier: &str) -> String {
    template.replace("$1", identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_viaf_identifier() {
        assert_eq!(
            substitute("https://viaf.org/viaf/$1", "12345"),
            "https://viaf.org/viaf/12345"
        );
    }

    #[test]
    fn test_substitute_without_placeholder_is_identity() {
        assert_eq!(
            substitute("https://example.org/fixed", "12345"),
            "https://example.org/fixed"
        );
    }
}
