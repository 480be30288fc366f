use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_lib::{
    render_dot, AirNetwork, RouteAlgorithm, RouteRequest, RouteSummary, Traveler,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airline network routing utilities")]
struct Cli {
    /// Path to the edges file (one source,destination row per flight link).
    #[arg(long)]
    data: PathBuf,

    /// Emit machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two airport codes.
    Route {
        /// Starting airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Landmark airport the route must pass through.
        #[arg(long)]
        via: Option<String>,
        /// Routing algorithm to use.
        #[arg(long, value_enum, default_value = "bfs")]
        algorithm: AlgorithmArg,
        /// Traveler age in years, used to weight links for dijkstra.
        #[arg(long)]
        age: Option<f64>,
    },
    /// List every airport code in the network.
    Airports,
    /// Write a Graphviz DOT snapshot of the network.
    Snapshot {
        /// Output file for the DOT source.
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    /// Fewest hops, ignoring risk weights.
    Bfs,
    /// Minimum accumulated risk.
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = AirNetwork::load(&cli.data)
        .with_context(|| format!("failed to load edges from {}", cli.data.display()))?;
    debug!(airports = network.airports().len(), "network loaded");

    match cli.command {
        Command::Route {
            from,
            to,
            via,
            algorithm,
            age,
        } => handle_route(network, &from, &to, via, algorithm, age, cli.json),
        Command::Airports => handle_airports(&network, cli.json),
        Command::Snapshot { output } => handle_snapshot(&network, &output),
    }
}

fn handle_route(
    mut network: AirNetwork,
    from: &str,
    to: &str,
    via: Option<String>,
    algorithm: AlgorithmArg,
    age: Option<f64>,
    json: bool,
) -> Result<()> {
    let algorithm = RouteAlgorithm::from(algorithm);
    if algorithm == RouteAlgorithm::Dijkstra {
        let traveler = age.map(Traveler::new).unwrap_or_default();
        network
            .apply_risk_weights(&traveler)
            .context("failed to weight the network for the traveler")?;
    }

    let mut request = RouteRequest {
        start: from.to_string(),
        goal: to.to_string(),
        via: None,
        algorithm,
    };
    if let Some(via) = via {
        request = request.with_via(via);
    }

    let plan = network.plan(&request)?;
    let summary = RouteSummary::from_plan(&plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_plain());
    }
    Ok(())
}

fn handle_airports(network: &AirNetwork, json: bool) -> Result<()> {
    let airports = network.airports();
    if json {
        println!("{}", serde_json::to_string_pretty(&airports)?);
    } else {
        for code in airports {
            println!("{code}");
        }
    }
    Ok(())
}

fn handle_snapshot(network: &AirNetwork, output: &Path) -> Result<()> {
    let dot = render_dot(network.graph());
    fs::write(output, dot)
        .with_context(|| format!("failed to write snapshot to {}", output.display()))?;
    println!("Snapshot written to {}", output.display());
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
