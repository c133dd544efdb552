//! Algorithm comparison and timing handlers.

use anyhow::Result;

use flightroute_lib::RoutePlanner;

use super::{friendly_error, CommandContext};

pub fn handle_compare(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let planner = RoutePlanner::new(&ctx.network);
    planner.resolve_city(from).map_err(friendly_error)?;
    planner.resolve_city(to).map_err(friendly_error)?;

    let comparison = planner.compare(from, to);
    ctx.format
        .emit(&comparison, || ctx.renderer.comparison(&comparison))?;
    Ok(())
}

/// Time each query for one pair of cities.
pub fn handle_profile(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let planner = RoutePlanner::new(&ctx.network);
    planner.resolve_city(from).map_err(friendly_error)?;
    planner.resolve_city(to).map_err(friendly_error)?;

    let profile = planner.profile(from, to);
    ctx.format.emit(&profile, || ctx.renderer.profile(&profile))?;
    Ok(())
}
