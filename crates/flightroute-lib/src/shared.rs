//! Reader/writer handle for serving concurrent queries.
//!
//! Any number of queries may run against the network at once; a mutation
//! waits until they finish and blocks new queries while it runs.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::network::RouteNetwork;
use crate::routing::RoutePlanner;

/// Cloneable, thread-safe handle to a [`RouteNetwork`].
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<RouteNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: RouteNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    /// Shared access for queries.
    pub fn read(&self) -> RwLockReadGuard<'_, RouteNetwork> {
        // The network has no cross-call invariant a panicking holder could break.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Exclusive access for mutation.
    pub fn write(&self) -> RwLockWriteGuard<'_, RouteNetwork> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `query` with a planner over a stable snapshot of the network.
    pub fn with_planner<R>(&self, query: impl FnOnce(&RoutePlanner<'_>) -> R) -> R {
        let guard = self.read();
        let planner = RoutePlanner::new(&guard);
        query(&planner)
    }

    pub fn add_city(&self, name: impl Into<String>) -> bool {
        self.write().add_city(name)
    }

    pub fn add_flight(&self, from: &str, to: &str, cost: i64) -> Result<bool> {
        self.write().add_flight(from, to, cost)
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Clone the current network state.
    pub fn snapshot(&self) -> RouteNetwork {
        self.read().clone()
    }
}

impl From<RouteNetwork> for SharedNetwork {
    fn from(network: RouteNetwork) -> Self {
        Self::new(network)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::manifest::sample_network;

    #[test]
    fn concurrent_queries_agree() {
        let shared = SharedNetwork::from(sample_network());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with_planner(|planner| planner.find_cheapest_route("KL", "Sydney"))
                })
            })
            .collect();

        let routes: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(routes.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(routes[0].cost(), Some(950));
    }

    #[test]
    fn mutations_are_visible_to_later_queries() {
        let shared = SharedNetwork::from(sample_network());
        assert!(shared.add_city("Auckland"));
        assert!(shared.add_flight("Sydney", "Auckland", 300).unwrap());

        let route = shared.with_planner(|planner| planner.find_cheapest_route("KL", "Auckland"));
        assert_eq!(route.cost(), Some(1250));

        shared.clear();
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedNetwork::from(sample_network());
        let snapshot = shared.snapshot();
        shared.add_city("Auckland");
        assert!(!snapshot.has_city("Auckland"));
    }
}
