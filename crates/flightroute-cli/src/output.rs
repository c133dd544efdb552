//! Output formatting for command results.
//!
//! Every command produces a serialisable value. [`OutputFormat::Json`]
//! prints it as pretty JSON; [`OutputFormat::Text`] prints the string built
//! by [`TextRenderer`] for the same value.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightroute_lib::{
    step_marker, NetworkSummary, RouteComparison, RouteProfile, RouteSummary,
};

use crate::terminal::{format_cost, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Print `value` as JSON, or the text produced by `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization or writing fails.
    pub fn emit<T, F>(self, value: &T, text: F) -> io::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        match self {
            OutputFormat::Json => render_json(value),
            OutputFormat::Text => {
                let mut stdout = io::stdout();
                stdout.write_all(text().as_bytes())?;
                stdout.flush()
            }
        }
    }
}

/// Render any serialisable value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Every route between two cities, as printed by the `routes` command.
#[derive(Debug, Clone, Serialize)]
pub struct RouteListing {
    pub from: String,
    pub to: String,
    pub routes: Vec<RouteSummary>,
    /// `true` when `--max-routes` stopped the enumeration early.
    pub truncated: bool,
}

/// Answer to the `flight` command.
#[derive(Debug, Clone, Serialize)]
pub struct DirectFlight {
    pub from: String,
    pub to: String,
    pub direct: bool,
    /// Flight cost, or `-1` when there is no direct flight.
    pub cost: i64,
}

/// Answer to the `destinations` command.
#[derive(Debug, Clone, Serialize)]
pub struct DestinationList {
    pub from: String,
    pub destinations: Vec<String>,
}

/// Builds human-readable text for command results.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    palette: ColorPalette,
}

impl TextRenderer {
    /// Create a new renderer with the given color palette.
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    fn city(&self, name: &str) -> String {
        let p = &self.palette;
        format!("{}{}{}", p.white_bold, name, p.reset)
    }

    fn cost(&self, cost: u64) -> String {
        let p = &self.palette;
        format!("{}{}{}", p.green, format_cost(cost), p.reset)
    }

    fn path(&self, cities: &[String]) -> String {
        cities
            .iter()
            .map(|city| self.city(city))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Render one route with a line per city.
    pub fn route(&self, summary: &RouteSummary) -> String {
        let p = &self.palette;
        let mut buffer = String::new();
        let heading = match summary.algorithm {
            Some(algorithm) => format!("{} ({})", summary.kind.label(), algorithm.label()),
            None => summary.kind.label().to_string(),
        };

        let (Some(origin), Some(destination), Ok(total)) = (
            summary.origin.as_deref(),
            summary.destination.as_deref(),
            u64::try_from(summary.cost),
        ) else {
            let _ = writeln!(buffer, "{}: {}no route available{}", heading, p.red, p.reset);
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "{} from {} to {} ({} hops, cost {}):",
            heading,
            self.city(origin),
            self.city(destination),
            summary.hops,
            self.cost(total)
        );

        let last = summary.steps.len().saturating_sub(1);
        for step in &summary.steps {
            let marker = step_marker(step.index, last);
            let _ = write!(
                buffer,
                " {}{}{} {}",
                p.tag_for(marker),
                marker,
                p.reset,
                self.city(&step.city)
            );
            if let Some(cost) = step.leg_cost {
                let _ = write!(buffer, " {}(+{}){}", p.gray, format_cost(cost), p.reset);
            }
            buffer.push('\n');
        }
        buffer
    }

    /// Render every enumerated route on one line each, cheapest first.
    pub fn route_listing(&self, listing: &RouteListing) -> String {
        let p = &self.palette;
        let mut buffer = String::new();

        if listing.routes.is_empty() {
            let _ = writeln!(
                buffer,
                "No routes found between {} and {}.",
                self.city(&listing.from),
                self.city(&listing.to)
            );
            return buffer;
        }

        let noun = if listing.routes.len() == 1 { "route" } else { "routes" };
        let _ = writeln!(
            buffer,
            "Found {} {} from {} to {}:",
            listing.routes.len(),
            noun,
            self.city(&listing.from),
            self.city(&listing.to)
        );
        for (position, route) in listing.routes.iter().enumerate() {
            let cities: Vec<String> = route.steps.iter().map(|step| step.city.clone()).collect();
            let _ = writeln!(
                buffer,
                " {:>2}. {} {}({} hops){} {}",
                position + 1,
                self.path(&cities),
                p.gray,
                route.hops,
                p.reset,
                self.cost(u64::try_from(route.cost).unwrap_or_default())
            );
        }
        if listing.truncated {
            let _ = writeln!(
                buffer,
                "{}Stopped after {} routes; raise --max-routes to see more.{}",
                p.gray,
                listing.routes.len(),
                p.reset
            );
        }
        buffer
    }

    /// Render the network listing: one line per city, then the city count.
    pub fn network(&self, summary: &NetworkSummary) -> String {
        let p = &self.palette;
        let mut buffer = String::new();
        for city in &summary.cities {
            if city.flights.is_empty() {
                let _ = writeln!(
                    buffer,
                    "{} → {}No outgoing flights{}",
                    self.city(&city.name),
                    p.gray,
                    p.reset
                );
                continue;
            }
            let flights = city
                .flights
                .iter()
                .map(|flight| format!("{}({})", flight.to, self.cost(flight.cost)))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(buffer, "{} → {}", self.city(&city.name), flights);
        }
        let _ = writeln!(buffer, "Total cities: {}", summary.total_cities);
        buffer
    }

    /// Render the city names, one per line.
    pub fn cities(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|name| format!("{}\n", self.city(name)))
            .collect()
    }

    pub fn destinations(&self, list: &DestinationList) -> String {
        if list.destinations.is_empty() {
            return format!("{} has no outgoing flights.\n", self.city(&list.from));
        }
        let names = list
            .destinations
            .iter()
            .map(|name| self.city(name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Destinations from {}: {}\n", self.city(&list.from), names)
    }

    pub fn direct_flight(&self, flight: &DirectFlight) -> String {
        match u64::try_from(flight.cost) {
            Ok(cost) if flight.direct => format!(
                "Direct flight {} → {} costs {}.\n",
                self.city(&flight.from),
                self.city(&flight.to),
                self.cost(cost)
            ),
            _ => format!(
                "No direct flight from {} to {}.\n",
                self.city(&flight.from),
                self.city(&flight.to)
            ),
        }
    }

    /// Render the side-by-side algorithm comparison.
    pub fn comparison(&self, comparison: &RouteComparison) -> String {
        let p = &self.palette;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Algorithm comparison from {} to {}:",
            self.city(&comparison.from),
            self.city(&comparison.to)
        );
        for entry in &comparison.entries {
            let label = format!("{} ({})", entry.algorithm.label(), entry.algorithm);
            match entry.route.cost() {
                Some(cost) if entry.route.is_found() => {
                    let _ = writeln!(
                        buffer,
                        "  {:<20} {} {}({} hops){} {}",
                        label,
                        self.path(entry.route.cities()),
                        p.gray,
                        entry.route.hop_count(),
                        p.reset,
                        self.cost(cost)
                    );
                }
                _ => {
                    let _ = writeln!(buffer, "  {:<20} {}no route{}", label, p.red, p.reset);
                }
            }
        }
        buffer
    }

    /// Render query timings in microseconds.
    pub fn profile(&self, profile: &RouteProfile) -> String {
        let p = &self.palette;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Query timings from {} to {}:",
            self.city(&profile.from),
            self.city(&profile.to)
        );
        for timing in &profile.timings {
            let _ = writeln!(
                buffer,
                "  {:<10} {}{}µs{}",
                timing.query,
                p.gray,
                timing.elapsed.as_micros(),
                p.reset
            );
        }
        let _ = writeln!(buffer, "Routes enumerated: {}", profile.routes_found);
        buffer
    }
}
