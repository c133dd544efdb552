//! Route search strategies implementing the Strategy pattern.
//!
//! Each [`RouteStrategy`] wraps one traversal from [`crate::path`] so that
//! [`super::RoutePlanner::plan`] can dispatch on a [`RouteAlgorithm`] without
//! knowing how the search works.

use crate::network::{CityId, Cost, RouteNetwork};
use crate::path::{find_route_bfs, find_route_dfs, find_route_dijkstra, path_cost};

use super::RouteAlgorithm;

/// Trait for single-route search strategies.
pub trait RouteStrategy: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Search for a route between two distinct cities of `network`.
    ///
    /// Returns the visited cities and the route's total cost, or `None` when
    /// `goal` is unreachable.
    fn find_path(
        &self,
        network: &RouteNetwork,
        start: CityId,
        goal: CityId,
    ) -> Option<(Vec<CityId>, Cost)>;
}

/// Depth-first search returning whichever route it reaches first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRouteStrategy;

impl RouteStrategy for AnyRouteStrategy {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dfs
    }

    fn find_path(
        &self,
        network: &RouteNetwork,
        start: CityId,
        goal: CityId,
    ) -> Option<(Vec<CityId>, Cost)> {
        let path = find_route_dfs(network, start, goal)?;
        let cost = path_cost(network, &path)?;
        Some((path, cost))
    }
}

/// Breadth-first search for the route with the fewest flights.
///
/// Ignores flight costs entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRouteStrategy;

impl RouteStrategy for ShortestRouteStrategy {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(
        &self,
        network: &RouteNetwork,
        start: CityId,
        goal: CityId,
    ) -> Option<(Vec<CityId>, Cost)> {
        let path = find_route_bfs(network, start, goal)?;
        let cost = path_cost(network, &path)?;
        Some((path, cost))
    }
}

/// Dijkstra's algorithm for the cheapest route.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestRouteStrategy;

impl RouteStrategy for CheapestRouteStrategy {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        network: &RouteNetwork,
        start: CityId,
        goal: CityId,
    ) -> Option<(Vec<CityId>, Cost)> {
        find_route_dijkstra(network, start, goal)
    }
}

/// Select the strategy implementing `algorithm`.
pub fn select_strategy(algorithm: RouteAlgorithm) -> Box<dyn RouteStrategy> {
    match algorithm {
        RouteAlgorithm::Dfs => Box::new(AnyRouteStrategy),
        RouteAlgorithm::Bfs => Box::new(ShortestRouteStrategy),
        RouteAlgorithm::Dijkstra => Box::new(CheapestRouteStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_report_their_algorithm() {
        assert_eq!(AnyRouteStrategy.algorithm(), RouteAlgorithm::Dfs);
        assert_eq!(ShortestRouteStrategy.algorithm(), RouteAlgorithm::Bfs);
        assert_eq!(CheapestRouteStrategy.algorithm(), RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn select_strategy_chooses_correct_type() {
        for algorithm in RouteAlgorithm::ALL {
            assert_eq!(select_strategy(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn uninformed_strategies_still_report_cost() {
        let mut network = RouteNetwork::new();
        for city in ["A", "B", "C"] {
            network.add_city(city);
        }
        network.add_flight("A", "B", 4).unwrap();
        network.add_flight("B", "C", 6).unwrap();
        let [a, c] = ["A", "C"].map(|name| network.city_id(name).unwrap());

        let (_, cost) = ShortestRouteStrategy.find_path(&network, a, c).unwrap();
        assert_eq!(cost, 10);
        let (_, cost) = AnyRouteStrategy.find_path(&network, a, c).unwrap();
        assert_eq!(cost, 10);
    }
}
