mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightroute_cli::output::OutputFormat;
use flightroute_lib::RouteAlgorithm;

use commands::route::RoutesCommandArgs;
use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore flight networks and plan routes")]
struct Cli {
    /// JSON network manifest; the built-in sample network is used when omitted.
    #[arg(long, global = true, env = "FLIGHTROUTE_NETWORK")]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors (also honours NO_COLOR and TERM=dumb).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every city in the network.
    Cities,
    /// List every city with its outgoing flights.
    Network,
    /// List the cities reachable with one direct flight.
    Destinations {
        #[arg(long = "from")]
        from: String,
    },
    /// Show the direct flight between two cities, if any.
    Flight {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Compute a single route between two cities.
    Route {
        /// Starting city name.
        #[arg(long = "from")]
        from: String,
        /// Destination city name.
        #[arg(long = "to")]
        to: String,
        /// dfs (any route), bfs (fewest flights) or dijkstra (cheapest).
        #[arg(long, default_value_t = RouteAlgorithm::Dijkstra)]
        algorithm: RouteAlgorithm,
    },
    /// List every route between two cities, cheapest first.
    Routes {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        /// Stop after this many routes.
        #[arg(long)]
        max_routes: Option<usize>,
        /// Ignore routes with more flights than this.
        #[arg(long)]
        max_hops: Option<usize>,
    },
    /// Total cost of flying through the given cities in order.
    Cost {
        #[arg(required = true, value_name = "CITY")]
        cities: Vec<String>,
    },
    /// Run every algorithm between two cities side by side.
    Compare {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Time every query between two cities.
    Profile {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = commands::load_network(cli.network.as_deref())?;
    let ctx = CommandContext::new(network, cli.format, cli.no_color);

    match cli.command {
        Command::Cities => commands::network::handle_cities(&ctx),
        Command::Network => commands::network::handle_network(&ctx),
        Command::Destinations { from } => commands::network::handle_destinations(&ctx, &from),
        Command::Flight { from, to } => commands::network::handle_flight(&ctx, &from, &to),
        Command::Route {
            from,
            to,
            algorithm,
        } => commands::route::handle_route(&ctx, &from, &to, algorithm),
        Command::Routes {
            from,
            to,
            max_routes,
            max_hops,
        } => commands::route::handle_routes(
            &ctx,
            &RoutesCommandArgs {
                from,
                to,
                max_routes,
                max_hops,
            },
        ),
        Command::Cost { cities } => commands::route::handle_cost(&ctx, &cities),
        Command::Compare { from, to } => commands::analysis::handle_compare(&ctx, &from, &to),
        Command::Profile { from, to } => commands::analysis::handle_profile(&ctx, &from, &to),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
