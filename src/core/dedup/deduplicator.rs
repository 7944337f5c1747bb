//! In-flight request tracking

use crate::utils::error::Result;
use futures::future::{BoxFuture, FutureExt, Shared, WeakShared};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Future handed to every caller of one in-flight key
pub type SharedRequest<T> = Shared<BoxFuture<'static, Result<T>>>;

/// Whether `get_or_create` started new work or attached to existing work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupOutcome {
    /// The factory ran; this caller owns a fresh request
    Started,
    /// An identical request was already in flight
    Shared,
}

struct InFlight<T> {
    id: u64,
    future: WeakShared<BoxFuture<'static, Result<T>>>,
}

type InFlightMap<T> = Mutex<HashMap<String, InFlight<T>>>;

/// Tracks in-flight requests so that at most one runs per key
///
/// The map only holds weak handles. An entry disappears when its request
/// settles, or when every caller has dropped the shared future.
pub struct RequestDeduplicator<T> {
    in_flight: Arc<InFlightMap<T>>,
    next_id: AtomicU64,
}

impl<T> Default for RequestDeduplicator<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestDeduplicator<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Return the in-flight request for `key`, or start one with `factory`
    ///
    /// `factory` is only invoked when nothing is in flight for `key`. The
    /// returned future is lazy: it makes progress while at least one caller
    /// polls it.
    pub fn get_or_create<F, Fut>(&self, key: &str, factory: F) -> (SharedRequest<T>, DedupOutcome)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let mut in_flight = self.in_flight.lock();

        if let Some(existing) = in_flight.get(key).and_then(|entry| entry.future.upgrade()) {
            debug!(cache_key = key, "Joining in-flight request");
            return (existing, DedupOutcome::Shared);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let guard = InFlightGuard {
            map: Arc::downgrade(&self.in_flight),
            key: key.to_string(),
            id,
        };
        let request = factory();

        let shared = async move {
            let _guard = guard;
            request.await
        }
        .boxed()
        .shared();

        if let Some(weak) = shared.downgrade() {
            in_flight.insert(key.to_string(), InFlight { id, future: weak });
        }

        trace!(cache_key = key, request_id = id, "Registered in-flight request");
        (shared, DedupOutcome::Started)
    }

    /// Number of keys with a request in flight
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().len()
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.lock().contains_key(key)
    }
}

/// Removes its registration when the wrapped request settles or is dropped
struct InFlightGuard<T> {
    map: Weak<InFlightMap<T>>,
    key: String,
    id: u64,
}

impl<T> Drop for InFlightGuard<T> {
    fn drop(&mut self) {
        let Some(map) = self.map.upgrade() else {
            return;
        };

        let mut in_flight = map.lock();
        // A newer request may already own the key
        if in_flight.get(&self.key).is_some_and(|entry| entry.id == self.id) {
            in_flight.remove(&self.key);
            trace!(cache_key = %self.key, request_id = self.id, "Released in-flight request");
        }
    }
}
