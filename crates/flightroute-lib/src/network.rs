use std::collections::HashMap;
use std::iter::Rev;
use std::slice;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Cost of a single flight or of a whole route.
pub type Cost = u64;

/// Minimum Jaro-Winkler similarity for a city to be suggested as a match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Compact identifier for a city within one [`RouteNetwork`].
///
/// Identifiers are arena indices and are only meaningful for the network
/// that issued them; [`RouteNetwork::clear`] invalidates all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub(crate) usize);

impl CityId {
    /// Position of the city in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Directed flight owned by its source city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flight {
    pub target: CityId,
    pub cost: Cost,
}

/// A named vertex of the flight network.
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    in_degree: usize,
    out_degree: usize,
    flights: Vec<Flight>,
}

impl City {
    fn new(name: String) -> Self {
        Self {
            name,
            in_degree: 0,
            out_degree: 0,
            flights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of flights arriving at this city.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of flights leaving this city.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    pub fn has_outgoing_flights(&self) -> bool {
        !self.flights.is_empty()
    }

    /// Outgoing flights, most recently added first.
    pub fn flights(&self) -> Rev<slice::Iter<'_, Flight>> {
        self.flights.iter().rev()
    }
}

/// Weighted directed graph of cities and flights.
///
/// Cities live in an arena in insertion order with a hashed name index on
/// top, so name lookups are O(1) while listings stay deterministic. Each
/// city owns its outgoing flights. Flights are stored append-only and read
/// back newest-first, which reproduces a prepend-on-insert edge list.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    cities: Vec<City>,
    index: HashMap<String, CityId>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of cities.
    pub fn with_capacity(cities: usize) -> Self {
        Self {
            cities: Vec::with_capacity(cities),
            index: HashMap::with_capacity(cities),
        }
    }

    /// Insert a new city. Returns `false` without mutating when the name is taken.
    pub fn add_city(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            debug!(city = %name, "city already exists; skipping");
            return false;
        }

        let id = CityId(self.cities.len());
        self.index.insert(name.clone(), id);
        debug!(city = %name, id = id.0, "added city");
        self.cities.push(City::new(name));
        true
    }

    /// Insert a directed flight from `from` to `to`.
    ///
    /// Returns `Ok(false)` without mutating when either city is missing or a
    /// flight between the same ordered pair already exists. A negative cost is
    /// a caller bug and fails with [`Error::NegativeFlightCost`].
    pub fn add_flight(&mut self, from: &str, to: &str, cost: i64) -> Result<bool> {
        let Ok(cost) = Cost::try_from(cost) else {
            warn!(from, to, cost, "rejected flight with negative cost");
            return Err(Error::NegativeFlightCost {
                from: from.to_string(),
                to: to.to_string(),
                cost,
            });
        };

        let (Some(source), Some(target)) = (self.city_id(from), self.city_id(to)) else {
            debug!(from, to, "flight endpoints missing; skipping");
            return Ok(false);
        };

        if self.cities[source.0]
            .flights
            .iter()
            .any(|flight| flight.target == target)
        {
            debug!(from, to, "flight already exists; skipping");
            return Ok(false);
        }

        let origin = &mut self.cities[source.0];
        origin.flights.push(Flight { target, cost });
        origin.out_degree += 1;
        self.cities[target.0].in_degree += 1;

        debug!(from, to, cost, "added flight");
        Ok(true)
    }

    pub fn has_city(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn has_direct_flight(&self, from: &str, to: &str) -> bool {
        self.flight_cost(from, to).is_some()
    }

    /// Cost of the direct flight from `from` to `to`, if one exists.
    pub fn flight_cost(&self, from: &str, to: &str) -> Option<Cost> {
        let source = self.city_id(from)?;
        let target = self.city_id(to)?;
        self.flight_cost_between(source, target)
    }

    pub(crate) fn flight_cost_between(&self, source: CityId, target: CityId) -> Option<Cost> {
        self.flights_from(source)
            .find(|flight| flight.target == target)
            .map(|flight| flight.cost)
    }

    /// Direct destinations of `from` in edge order; empty for unknown cities.
    pub fn destinations(&self, from: &str) -> Vec<&str> {
        let Some(source) = self.city_id(from) else {
            return Vec::new();
        };
        self.flights_from(source)
            .map(|flight| self.cities[flight.target.0].name.as_str())
            .collect()
    }

    /// All city names in insertion order.
    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|city| city.name.as_str()).collect()
    }

    /// Remove every city and flight.
    pub fn clear(&mut self) {
        debug!(cities = self.cities.len(), "clearing network");
        self.cities.clear();
        self.index.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Total number of flights across all cities.
    pub fn flight_count(&self) -> usize {
        self.cities.iter().map(|city| city.flights.len()).sum()
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.city_id(name).map(|id| &self.cities[id.0])
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.index.get(name).copied()
    }

    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.cities.get(id.0).map(|city| city.name.as_str())
    }

    /// Cities with their identifiers, in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.cities
            .iter()
            .enumerate()
            .map(|(index, city)| (CityId(index), city))
    }

    /// Outgoing flights of a city in edge order; empty for foreign ids.
    pub fn flights_from(&self, id: CityId) -> Rev<slice::Iter<'_, Flight>> {
        self.cities
            .get(id.0)
            .map(|city| city.flights.as_slice())
            .unwrap_or(&[])
            .iter()
            .rev()
    }

    /// Every flight as `(from, to, cost)`, grouped by source city in insertion order.
    pub fn flights(&self) -> impl Iterator<Item = (&str, &str, Cost)> + '_ {
        self.cities.iter().flat_map(move |city| {
            city.flights().map(move |flight| {
                (
                    city.name.as_str(),
                    self.cities[flight.target.0].name.as_str(),
                    flight.cost,
                )
            })
        })
    }

    /// Suggest existing city names similar to `name`, best match first.
    pub fn fuzzy_city_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .cities
            .iter()
            .map(|city| {
                let score = strsim::jaro_winkler(&needle, &city.name.to_lowercase());
                (score, city.name.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
