//! Route command handlers.

use anyhow::Result;

use flightroute_lib::{
    EnumerationLimits, Error as RouteError, RouteAlgorithm, RouteOutputKind, RoutePlanner,
    RouteSummary,
};

use flightroute_cli::output::RouteListing;

use super::{friendly_error, CommandContext};

/// Arguments for the routes command.
#[derive(Debug, Clone, Default)]
pub struct RoutesCommandArgs {
    pub from: String,
    pub to: String,
    /// Stop after this many routes.
    pub max_routes: Option<usize>,
    /// Ignore routes with more flights than this.
    pub max_hops: Option<usize>,
}

impl RoutesCommandArgs {
    pub fn limits(&self) -> EnumerationLimits {
        let mut limits = EnumerationLimits::unbounded();
        if let Some(max_routes) = self.max_routes {
            limits = limits.with_max_routes(max_routes);
        }
        if let Some(max_hops) = self.max_hops {
            limits = limits.with_max_hops(max_hops);
        }
        limits
    }
}

/// Plan a single route with the requested algorithm.
///
/// Fails when either city is unknown or the destination is unreachable.
pub fn handle_route(
    ctx: &CommandContext,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
) -> Result<()> {
    let planner = RoutePlanner::new(&ctx.network);
    planner.resolve_city(from).map_err(friendly_error)?;
    planner.resolve_city(to).map_err(friendly_error)?;

    let route = planner.plan(algorithm, from, to);
    if !route.is_valid() {
        return Err(friendly_error(RouteError::RouteNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }));
    }

    let summary =
        RouteSummary::from_route(RouteOutputKind::Route, &ctx.network, &route, Some(algorithm));
    ctx.format.emit(&summary, || ctx.renderer.route(&summary))?;
    Ok(())
}

/// Enumerate every simple route, cheapest first.
///
/// An empty listing is a valid answer and exits successfully.
pub fn handle_routes(ctx: &CommandContext, args: &RoutesCommandArgs) -> Result<()> {
    let planner = RoutePlanner::new(&ctx.network);
    planner.resolve_city(&args.from).map_err(friendly_error)?;
    planner.resolve_city(&args.to).map_err(friendly_error)?;

    let found = planner.enumerate(&args.from, &args.to, &args.limits());
    let listing = RouteListing {
        from: args.from.clone(),
        to: args.to.clone(),
        routes: found
            .routes
            .iter()
            .map(|route| {
                RouteSummary::from_route(RouteOutputKind::AllRoutes, &ctx.network, route, None)
            })
            .collect(),
        truncated: found.truncated,
    };
    ctx.format.emit(&listing, || ctx.renderer.route_listing(&listing))?;
    Ok(())
}

/// Price an explicit itinerary.
pub fn handle_cost(ctx: &CommandContext, cities: &[String]) -> Result<()> {
    let route = RoutePlanner::new(&ctx.network)
        .validate_route(cities)
        .map_err(friendly_error)?;

    let summary = RouteSummary::from_route(RouteOutputKind::Cost, &ctx.network, &route, None);
    ctx.format.emit(&summary, || ctx.renderer.route(&summary))?;
    Ok(())
}
