//! Declarative network descriptions.
//!
//! A manifest is read once and turned into a fresh [`RouteNetwork`]; the
//! network is never written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::network::RouteNetwork;

/// One directed flight within a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSpec {
    pub from: String,
    pub to: String,
    pub cost: i64,
}

/// JSON-friendly description of a flight network.
///
/// ```json
/// {
///   "cities": ["KL", "Singapore"],
///   "flights": [{ "from": "KL", "to": "Singapore", "cost": 150 }]
/// }
/// ```
///
/// Cities only mentioned by flights are added implicitly, in order of first
/// mention, after the explicitly listed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkManifest {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub flights: Vec<FlightSpec>,
}

impl NetworkManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a network from this manifest.
    ///
    /// Duplicate cities and flights are skipped with a warning; a negative
    /// flight cost aborts the build.
    pub fn build(&self) -> Result<RouteNetwork> {
        let mut network = RouteNetwork::with_capacity(self.cities.len());

        for city in &self.cities {
            if !network.add_city(city.as_str()) {
                warn!(city = %city, "duplicate city in manifest; skipping");
            }
        }

        for flight in &self.flights {
            for endpoint in [&flight.from, &flight.to] {
                if !network.has_city(endpoint) {
                    network.add_city(endpoint.as_str());
                }
            }
            if !network.add_flight(&flight.from, &flight.to, flight.cost)? {
                warn!(
                    from = %flight.from,
                    to = %flight.to,
                    "duplicate flight in manifest; skipping"
                );
            }
        }

        debug!(
            cities = network.city_count(),
            flights = network.flight_count(),
            "built network from manifest"
        );
        Ok(network)
    }
}

/// Read and parse a JSON manifest from disk.
pub fn load_manifest(path: &Path) -> Result<NetworkManifest> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    NetworkManifest::from_json_str(&contents)
}

/// The five-city South-East Asia and Pacific demonstration network.
pub fn sample_manifest() -> NetworkManifest {
    let flight = |from: &str, to: &str, cost: i64| FlightSpec {
        from: from.to_string(),
        to: to.to_string(),
        cost,
    };

    NetworkManifest {
        cities: ["KL", "Singapore", "Bangkok", "Tokyo", "Sydney"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        flights: vec![
            flight("KL", "Singapore", 150),
            flight("KL", "Bangkok", 200),
            flight("Singapore", "Tokyo", 500),
            flight("Bangkok", "Tokyo", 450),
            flight("Tokyo", "Sydney", 600),
            flight("Singapore", "Sydney", 800),
        ],
    }
}

/// Build the demonstration network described by [`sample_manifest`].
pub fn sample_network() -> RouteNetwork {
    sample_manifest()
        .build()
        .expect("sample manifest costs are non-negative")
}
