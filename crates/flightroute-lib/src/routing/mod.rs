//! Route planning over a [`RouteNetwork`].
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported single-route searches (DFS, BFS, Dijkstra)
//! - [`RoutePlanner`] - Stateless query layer bound to one network
//! - [`RouteComparison`] / [`RouteProfile`] - Side-by-side algorithm reports
//!
//! # Strategy Pattern
//!
//! Single-route searches are encapsulated behind the [`RouteStrategy`] trait.
//! [`RoutePlanner::plan`] resolves city names, handles the trivial cases and
//! then delegates to the strategy selected for the requested algorithm.
//!
//! # Example
//!
//! ```
//! use flightroute_lib::{sample_network, RoutePlanner};
//!
//! let network = sample_network();
//! let planner = RoutePlanner::new(&network);
//! let route = planner.find_cheapest_route("KL", "Sydney");
//! assert_eq!(route.cost(), Some(950));
//! ```

mod planner;

pub use planner::{
    select_strategy, AnyRouteStrategy, CheapestRouteStrategy, RouteStrategy,
    ShortestRouteStrategy,
};

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::network::{CityId, Cost, RouteNetwork};
use crate::path::{enumerate_routes, path_cost, EnumerationLimits};
use crate::route::Route;

/// Maximum number of suggestions attached to an unknown-city error.
const MAX_CITY_SUGGESTIONS: usize = 3;

/// Supported single-route search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Depth-first search (any route).
    Dfs,
    /// Breadth-first search (fewest flights).
    Bfs,
    /// Dijkstra's algorithm (lowest total cost).
    #[default]
    Dijkstra,
}

impl RouteAlgorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [RouteAlgorithm; 3] = [
        RouteAlgorithm::Dfs,
        RouteAlgorithm::Bfs,
        RouteAlgorithm::Dijkstra,
    ];

    /// Human-readable description of what the algorithm optimises.
    pub fn label(self) -> &'static str {
        match self {
            RouteAlgorithm::Dfs => "Any",
            RouteAlgorithm::Bfs => "Shortest",
            RouteAlgorithm::Dijkstra => "Cheapest",
        }
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dfs => "dfs",
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dfs" | "any" => Ok(RouteAlgorithm::Dfs),
            "bfs" | "shortest" => Ok(RouteAlgorithm::Bfs),
            "dijkstra" | "cheapest" => Ok(RouteAlgorithm::Dijkstra),
            _ => Err(Error::UnknownAlgorithm(value.to_string())),
        }
    }
}

/// One algorithm's answer within a [`RouteComparison`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry {
    pub algorithm: RouteAlgorithm,
    pub route: Route,
}

/// Results of every single-route algorithm for the same pair of cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteComparison {
    pub from: String,
    pub to: String,
    pub entries: Vec<ComparisonEntry>,
}

impl RouteComparison {
    pub fn route(&self, algorithm: RouteAlgorithm) -> Option<&Route> {
        self.entries
            .iter()
            .find(|entry| entry.algorithm == algorithm)
            .map(|entry| &entry.route)
    }
}

/// Routes returned by [`RoutePlanner::enumerate`], cheapest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteSet {
    pub routes: Vec<Route>,
    /// `true` when the search stopped at `max_routes`; more routes may exist.
    pub truncated: bool,
}

/// Wall-clock time taken by one query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryTiming {
    pub query: &'static str,
    #[serde(rename = "elapsed_us", serialize_with = "serialize_micros")]
    pub elapsed: Duration,
}

/// Timings of all four queries for the same pair of cities.
#[derive(Debug, Clone, Serialize)]
pub struct RouteProfile {
    pub from: String,
    pub to: String,
    pub timings: Vec<QueryTiming>,
    pub routes_found: usize,
}

fn serialize_micros<S: serde::Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u128(elapsed.as_micros())
}

/// Resolved endpoints of a query.
enum Endpoints {
    Missing,
    Same(String),
    Distinct(CityId, CityId),
}

/// Stateless route queries against a borrowed [`RouteNetwork`].
///
/// Every query starts from fresh search state. An unknown city or an
/// unreachable destination yields [`Route::none`], never an error.
#[derive(Debug, Clone, Copy)]
pub struct RoutePlanner<'a> {
    network: &'a RouteNetwork,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(network: &'a RouteNetwork) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &'a RouteNetwork {
        self.network
    }

    /// Depth-first search for any route; neither hop- nor cost-minimal.
    pub fn find_any_route(&self, from: &str, to: &str) -> Route {
        self.plan(RouteAlgorithm::Dfs, from, to)
    }

    /// Breadth-first search for the route with the fewest flights.
    pub fn find_shortest_route(&self, from: &str, to: &str) -> Route {
        self.plan(RouteAlgorithm::Bfs, from, to)
    }

    /// Dijkstra's algorithm for the route with the lowest total cost.
    pub fn find_cheapest_route(&self, from: &str, to: &str) -> Route {
        self.plan(RouteAlgorithm::Dijkstra, from, to)
    }

    /// Compute a route with the requested algorithm.
    pub fn plan(&self, algorithm: RouteAlgorithm, from: &str, to: &str) -> Route {
        let (start, goal) = match self.endpoints(from, to) {
            Endpoints::Missing => return Route::none(),
            Endpoints::Same(city) => return Route::single(city),
            Endpoints::Distinct(start, goal) => (start, goal),
        };

        let strategy = select_strategy(algorithm);
        let route = match strategy.find_path(self.network, start, goal) {
            Some((path, cost)) => self.route_from_ids(&path, cost),
            None => Route::none(),
        };

        debug!(
            from,
            to,
            %algorithm,
            hops = route.hop_count(),
            cost = ?route.cost(),
            "route query completed"
        );
        route
    }

    /// Every simple route from `from` to `to`, cheapest first.
    ///
    /// Exponential in the worst case; intended for small networks. Use
    /// [`RoutePlanner::find_all_routes_bounded`] to cap the work.
    pub fn find_all_routes(&self, from: &str, to: &str) -> Vec<Route> {
        self.find_all_routes_bounded(from, to, &EnumerationLimits::unbounded())
    }

    /// Like [`RoutePlanner::find_all_routes`] but stops at the given limits.
    pub fn find_all_routes_bounded(
        &self,
        from: &str,
        to: &str,
        limits: &EnumerationLimits,
    ) -> Vec<Route> {
        self.enumerate(from, to, limits).routes
    }

    /// Bounded enumeration that also reports whether it stopped at `max_routes`.
    pub fn enumerate(&self, from: &str, to: &str, limits: &EnumerationLimits) -> RouteSet {
        let (start, goal) = match self.endpoints(from, to) {
            Endpoints::Missing => return RouteSet::default(),
            Endpoints::Same(city) => {
                return RouteSet {
                    routes: vec![Route::single(city)],
                    truncated: false,
                }
            }
            Endpoints::Distinct(start, goal) => (start, goal),
        };

        let enumeration = enumerate_routes(self.network, start, goal, limits);
        if enumeration.truncated {
            warn!(
                from,
                to,
                max_routes = ?limits.max_routes,
                "route enumeration truncated"
            );
        }
        debug!(from, to, routes = enumeration.routes.len(), "enumerated routes");

        RouteSet {
            routes: enumeration
                .routes
                .iter()
                .map(|(path, cost)| self.route_from_ids(path, *cost))
                .collect(),
            truncated: enumeration.truncated,
        }
    }

    /// Total cost of an explicit sequence of cities.
    ///
    /// Returns `None` when a consecutive pair has no direct flight. Sequences
    /// shorter than two cities cost nothing.
    pub fn calculate_route_cost<S: AsRef<str>>(&self, cities: &[S]) -> Option<Cost> {
        cities.windows(2).try_fold(0, |total: Cost, leg| {
            self.network
                .flight_cost(leg[0].as_ref(), leg[1].as_ref())
                .map(|cost| total.saturating_add(cost))
        })
    }

    /// Run every single-route algorithm for the same pair of cities.
    pub fn compare(&self, from: &str, to: &str) -> RouteComparison {
        let entries = RouteAlgorithm::ALL
            .into_iter()
            .map(|algorithm| ComparisonEntry {
                algorithm,
                route: self.plan(algorithm, from, to),
            })
            .collect();

        RouteComparison {
            from: from.to_string(),
            to: to.to_string(),
            entries,
        }
    }

    /// Time each of the four queries for the same pair of cities.
    pub fn profile(&self, from: &str, to: &str) -> RouteProfile {
        let mut timings = Vec::with_capacity(4);
        for algorithm in RouteAlgorithm::ALL {
            let started = Instant::now();
            let _ = self.plan(algorithm, from, to);
            timings.push(QueryTiming {
                query: algorithm.label(),
                elapsed: started.elapsed(),
            });
        }

        let started = Instant::now();
        let routes = self.find_all_routes(from, to);
        timings.push(QueryTiming {
            query: "All",
            elapsed: started.elapsed(),
        });

        RouteProfile {
            from: from.to_string(),
            to: to.to_string(),
            timings,
            routes_found: routes.len(),
        }
    }

    /// Resolve a city name, suggesting close matches when it is unknown.
    pub fn resolve_city(&self, name: &str) -> Result<CityId> {
        self.network.city_id(name).ok_or_else(|| Error::UnknownCity {
            name: name.to_string(),
            suggestions: self
                .network
                .fuzzy_city_matches(name, MAX_CITY_SUGGESTIONS),
        })
    }

    /// Like [`RoutePlanner::calculate_route_cost`] but reports why a sequence is rejected.
    pub fn validate_route<S: AsRef<str>>(&self, cities: &[S]) -> Result<Route> {
        let ids = cities
            .iter()
            .map(|city| self.resolve_city(city.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let cost = path_cost(self.network, &ids).ok_or_else(|| Error::InvalidRoute {
            cities: cities.iter().map(|city| city.as_ref().to_string()).collect(),
        })?;
        Ok(self.route_from_ids(&ids, cost))
    }

    fn endpoints(&self, from: &str, to: &str) -> Endpoints {
        match (self.network.city_id(from), self.network.city_id(to)) {
            (Some(_), Some(_)) if from == to => Endpoints::Same(from.to_string()),
            (Some(start), Some(goal)) => Endpoints::Distinct(start, goal),
            _ => {
                debug!(from, to, "route endpoints missing from network");
                Endpoints::Missing
            }
        }
    }

    fn route_from_ids(&self, path: &[CityId], cost: Cost) -> Route {
        let cities = path
            .iter()
            .filter_map(|id| self.network.city_name(*id))
            .map(str::to_string)
            .collect();
        Route::new(cities, Some(cost))
    }
}
