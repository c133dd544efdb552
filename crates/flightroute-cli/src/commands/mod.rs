//! CLI subcommand handlers.
//!
//! `main.rs` parses arguments, builds a [`CommandContext`] and dispatches to
//! the handler for the selected subcommand.

pub mod analysis;
pub mod network;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use flightroute_lib::{load_manifest, sample_network, Error as RouteError, RouteNetwork};

use flightroute_cli::output::{OutputFormat, TextRenderer};
use flightroute_cli::terminal::ColorPalette;

/// Everything a handler needs: the loaded network and how to print results.
pub struct CommandContext {
    pub network: RouteNetwork,
    pub format: OutputFormat,
    pub renderer: TextRenderer,
}

impl CommandContext {
    pub fn new(network: RouteNetwork, format: OutputFormat, no_color: bool) -> Self {
        Self {
            network,
            format,
            renderer: TextRenderer::new(ColorPalette::resolve(no_color)),
        }
    }
}

/// Load the network from a manifest, or fall back to the built-in sample.
pub fn load_network(manifest: Option<&Path>) -> Result<RouteNetwork> {
    let Some(path) = manifest else {
        debug!("no manifest given; using the sample network");
        return Ok(sample_network());
    };

    let manifest = load_manifest(path)
        .with_context(|| format!("failed to load network manifest {}", path.display()))?;
    manifest
        .build()
        .with_context(|| format!("invalid network manifest {}", path.display()))
}

/// Turn library errors into the messages printed to users.
pub fn friendly_error(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownCity { name, suggestions } => {
            anyhow::anyhow!(format_unknown_city_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { from, to } => {
            anyhow::anyhow!(format_route_not_found_message(&from, &to))
        }
        RouteError::InvalidRoute { cities } => anyhow::anyhow!(
            "No direct flights connect {}. Check `network` for the available legs.",
            cities.join(" → ")
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_city_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown city '{}'.", name);
    match suggestions {
        [] => {}
        [suggestion] => message.push_str(&format!(" Did you mean '{suggestion}'?")),
        _ => {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(from: &str, to: &str) -> String {
    format!(
        "No route found between {} and {}. Try `destinations --from {}` to see where you can fly.",
        from, to, from
    )
}
