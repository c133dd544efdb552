use std::fmt;

use serde::{Deserialize, Serialize};

use crate::network::Cost;

/// Ordered walk through the network together with its total cost.
///
/// An empty city list with no cost is the "no route" result. A single city
/// is the trivial route from a city to itself and always costs zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Route {
    cities: Vec<String>,
    #[serde(with = "cost_sentinel")]
    cost: Option<Cost>,
}

impl Route {
    pub fn new(cities: Vec<String>, cost: Option<Cost>) -> Self {
        Self { cities, cost }
    }

    /// The "no route" result.
    pub fn none() -> Self {
        Self::default()
    }

    /// Zero-hop route from a city to itself.
    pub fn single(city: impl Into<String>) -> Self {
        Self {
            cities: vec![city.into()],
            cost: Some(0),
        }
    }

    /// `true` when the route visits at least one city.
    pub fn is_found(&self) -> bool {
        !self.cities.is_empty()
    }

    /// `true` when the route is non-empty and its cost is known.
    pub fn is_valid(&self) -> bool {
        self.is_found() && self.cost.is_some()
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn into_cities(self) -> Vec<String> {
        self.cities
    }

    pub fn cost(&self) -> Option<Cost> {
        self.cost
    }

    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&str> {
        self.cities.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.cities.last().map(String::as_str)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cost {
            Some(cost) if self.is_found() => {
                write!(f, "{} (Cost: ${})", self.cities.join(" → "), cost)
            }
            _ => f.write_str("No route available"),
        }
    }
}

/// Serialises an unknown cost as `-1`, the conventional sentinel for consumers.
mod cost_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::network::Cost;

    pub fn serialize<S: Serializer>(cost: &Option<Cost>, serializer: S) -> Result<S::Ok, S::Error> {
        match cost {
            Some(cost) => serializer.serialize_u64(*cost),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Cost>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(Cost::try_from(raw).ok())
    }
}
