//! Handlers that inspect the network itself rather than plan routes.

use anyhow::Result;

use flightroute_lib::{NetworkSummary, RoutePlanner};

use flightroute_cli::output::{DestinationList, DirectFlight};

use super::{friendly_error, CommandContext};

/// List every city in insertion order.
pub fn handle_cities(ctx: &CommandContext) -> Result<()> {
    let names = ctx.network.city_names();
    ctx.format.emit(&names, || ctx.renderer.cities(&names))?;
    Ok(())
}

/// Print every city with its outgoing flights.
pub fn handle_network(ctx: &CommandContext) -> Result<()> {
    let summary = NetworkSummary::from_network(&ctx.network);
    ctx.format.emit(&summary, || ctx.renderer.network(&summary))?;
    Ok(())
}

/// List the cities reachable with one direct flight.
pub fn handle_destinations(ctx: &CommandContext, from: &str) -> Result<()> {
    RoutePlanner::new(&ctx.network)
        .resolve_city(from)
        .map_err(friendly_error)?;

    let list = DestinationList {
        from: from.to_string(),
        destinations: ctx
            .network
            .destinations(from)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    ctx.format.emit(&list, || ctx.renderer.destinations(&list))?;
    Ok(())
}

/// Report whether a direct flight exists and what it costs.
pub fn handle_flight(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let planner = RoutePlanner::new(&ctx.network);
    planner.resolve_city(from).map_err(friendly_error)?;
    planner.resolve_city(to).map_err(friendly_error)?;

    let cost = ctx.network.flight_cost(from, to);
    let flight = DirectFlight {
        from: from.to_string(),
        to: to.to_string(),
        direct: cost.is_some(),
        cost: cost.and_then(|c| i64::try_from(c).ok()).unwrap_or(-1),
    };
    ctx.format.emit(&flight, || ctx.renderer.direct_flight(&flight))?;
    Ok(())
}
