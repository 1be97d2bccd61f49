//! Memoized single-flight formatter URL resolver
//!
//! One resolver is constructed at startup and shared by reference across all
//! widget instances. The first caller for an uncached property performs the
//! metadata lookup; concurrent callers for the same property park on an
//! explicit in-flight table and are fulfilled from that single call's
//! outcome, success or failure alike. Successes are cached write-once for
//! the process lifetime; failures are not cached, so a later call retries.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::oneshot;

use super::{MetadataClient, MetadataError};

type Waiter = oneshot::Sender<Result<String, MetadataError>>;

#[derive(Debug, Default)]
struct ResolverState {
    /// Resolved templates, write-once per property id
    cache: HashMap<String, String>,
    /// Pending waiters per property id with a lookup in flight
    in_flight: HashMap<String, Vec<Waiter>>,
}

/// Process-wide formatter URL cache
#[derive(Debug)]
pub struct FormatterUrlResolver<M> {
    client: M,
    state: Mutex<ResolverState>,
}

impl<M: MetadataClient> FormatterUrlResolver<M> {
    pub fn new(client: M) -> Self {
        FormatterUrlResolver {
            client,
            state: Mutex::new(ResolverState::default()),
        }
    }

    /// Resolve the formatter URL template for `property_id`.
    ///
    /// A cached property resolves immediately without I/O. An uncached one
    /// triggers exactly one metadata lookup even under concurrent callers:
    /// whoever finds neither a cache entry nor an in-flight lookup becomes
    /// the leader, everyone else awaits the leader's outcome.
    pub async fn get(&self, property_id: &str) -> Result<String, MetadataError> {
        let waiter = {
            let mut state = self.state.lock().expect("resolver state poisoned");

            if let Some(url) = state.cache.get(property_id) {
                return Ok(url.clone());
            }

            match state.in_flight.get_mut(property_id) {
                Some(waiters) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    Some(rx)
                }
                None => {
                    state.in_flight.insert(property_id.to_string(), Vec::new());
                    None
                }
            }
        };

        if let Some(rx) = waiter {
            log::debug!("awaiting in-flight lookup for {}", property_id);
            return rx.await.unwrap_or(Err(MetadataError::Abandoned));
        }

        // Leader path: the lock is not held across the lookup
        let result = self.client.formatter_url(property_id).await;

        let waiters = {
            let mut state = self.state.lock().expect("resolver state poisoned");
            if let Ok(url) = &result {
                state.cache.insert(property_id.to_string(), url.clone());
            }
            state.in_flight.remove(property_id).unwrap_or_default()
        };

        for waiter in waiters {
            let _ = waiter.send(result.clone());
        }

        result
    }

    /// Whether `property_id` already has a resolved template (no I/O).
    pub fn is_cached(&self, property_id: &str) -> bool {
        self.state
            .lock()
            .expect("resolver state poisoned")
            .cache
            .contains_key(property_id)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
