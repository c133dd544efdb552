use serde::Serialize;

use crate::network::{Cost, RouteNetwork};
use crate::route::Route;
use crate::routing::RouteAlgorithm;

/// Classifies the high-level query that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Route,
    AllRoutes,
    Cost,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Route => "Route",
            RouteOutputKind::AllRoutes => "Candidate route",
            RouteOutputKind::Cost => "Itinerary",
        }
    }
}

/// City visited along a route, with the cost of the flight that reached it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_cost: Option<Cost>,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<RouteAlgorithm>,
    pub found: bool,
    pub hops: usize,
    /// Total cost, or `-1` when no route was found.
    pub cost: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with per-leg costs from `network`.
    pub fn from_route(
        kind: RouteOutputKind,
        network: &RouteNetwork,
        route: &Route,
        algorithm: Option<RouteAlgorithm>,
    ) -> Self {
        let cities = route.cities();
        let steps = cities
            .iter()
            .enumerate()
            .map(|(index, city)| RouteStep {
                index,
                city: city.clone(),
                leg_cost: index
                    .checked_sub(1)
                    .and_then(|previous| network.flight_cost(&cities[previous], city)),
            })
            .collect();

        Self {
            kind,
            algorithm,
            found: route.is_valid(),
            hops: route.hop_count(),
            cost: route
                .cost()
                .and_then(|cost| i64::try_from(cost).ok())
                .unwrap_or(-1),
            origin: route.origin().map(str::to_string),
            destination: route.destination().map(str::to_string),
            steps,
        }
    }
}

/// Path marker for a step: `+` origin, `|` stopover, `-` destination.
pub fn step_marker(index: usize, last: usize) -> char {
    if index == 0 {
        '+'
    } else if index == last {
        '-'
    } else {
        '|'
    }
}

/// Outgoing flight within a [`CitySummary`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub to: String,
    pub cost: Cost,
}

/// One city of the network listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CitySummary {
    pub name: String,
    pub in_degree: usize,
    pub out_degree: usize,
    pub flights: Vec<FlightSummary>,
}

/// Serialisable listing of every city and flight in a network.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetworkSummary {
    pub cities: Vec<CitySummary>,
    pub total_cities: usize,
    pub total_flights: usize,
}

impl NetworkSummary {
    pub fn from_network(network: &RouteNetwork) -> Self {
        let cities = network
            .cities()
            .map(|(_, city)| CitySummary {
                name: city.name().to_string(),
                in_degree: city.in_degree(),
                out_degree: city.out_degree(),
                flights: city
                    .flights()
                    .filter_map(|flight| {
                        network.city_name(flight.target).map(|to| FlightSummary {
                            to: to.to_string(),
                            cost: flight.cost,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self {
            cities,
            total_cities: network.city_count(),
            total_flights: network.flight_count(),
        }
    }
}
