use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Expected routing outcomes (absent cities, unreachable destinations,
/// duplicate insertions) are ordinary return values and never appear here.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a flight is added with a negative cost.
    #[error("flight cost cannot be negative: {from} -> {to} costs {cost}")]
    NegativeFlightCost { from: String, to: String, cost: i64 },

    /// Raised when a city name must resolve but is not part of the network.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two cities.
    #[error("no route found between {from} and {to}")]
    RouteNotFound { from: String, to: String },

    /// Raised when parsing an algorithm name fails.
    #[error("unknown routing algorithm '{0}' (expected dfs, bfs or dijkstra)")]
    UnknownAlgorithm(String),

    /// Raised when an explicit city sequence is not a walk in the network.
    #[error("route {} is not connected by direct flights", .cities.join(" -> "))]
    InvalidRoute { cities: Vec<String> },

    /// Raised when a network manifest could not be read from disk.
    #[error("failed to read network manifest from {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for manifest JSON errors.
    #[error(transparent)]
    ManifestParse(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
