//! Suggestion caching and the widget-facing adapter
//!
//! `SuggestionCache` consolidates result pages for the term currently being
//! searched; `Suggester` wraps it with the per-field lifecycle: the attach
//! flow, issuing lookups, dropping superseded responses, and building deep
//! links for accepted identifiers.

mod cache;
mod widget;

pub use cache::SuggestionCache;
pub use widget::{SearchTicket, Suggester};
