//! Flight routing library entry points.
//!
//! This crate models a flight network as a weighted directed graph of
//! cities and answers route queries over it: any route (depth-first),
//! fewest flights (breadth-first), cheapest (Dijkstra) and exhaustive
//! enumeration of simple routes. Higher-level consumers (the CLI) should
//! only depend on the items exported here.
//!

#![deny(warnings)]

pub mod error;
pub mod manifest;
pub mod network;
pub mod output;
pub mod path;
pub mod route;
pub mod routing;
pub mod shared;

pub use error::{Error, Result};
pub use manifest::{load_manifest, sample_manifest, sample_network, FlightSpec, NetworkManifest};
pub use network::{City, CityId, Cost, Flight, RouteNetwork};
pub use output::{
    step_marker, CitySummary, FlightSummary, NetworkSummary, RouteOutputKind, RouteStep,
    RouteSummary,
};
pub use path::EnumerationLimits;
pub use route::Route;
pub use routing::{
    ComparisonEntry, QueryTiming, RouteAlgorithm, RouteComparison, RoutePlanner, RouteProfile,
    RouteSet,
};
pub use shared::SharedNetwork;
