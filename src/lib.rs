//! extid-suggest library - autocomplete suggestions for external-id statements
//!
//! This library exposes the suggestion cache, the search and metadata
//! clients, and the formatter URL resolver for testing and embedding.

pub mod config;
pub mod error;
pub mod formatter_url;
pub mod lookup;
pub mod suggest;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::SuggestError;
pub use formatter_url::FormatterUrlResolver;
pub use lookup::{LookupError, ResultPage, ResultRecord};
pub use suggest::{Suggester, SuggestionCache};
