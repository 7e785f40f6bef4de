use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use travelos::{
    Catalog, Priority, Session, TravelOsConfig, TravelOsError, TripPlanner, TripRequest, logging,
    report, web,
};

/// TravelOS - multi-city travel decision support
#[derive(Parser)]
#[command(name = "travelos")]
#[command(about = "Multi-city travel planner: transport, costs and budget risk for a route")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a trip and print the report
    Plan(PlanArgs),
    /// Adjust selections line by line and watch the report update
    Interactive(PlanArgs),
    /// List the cities in the catalog
    Cities,
    /// List the available routes
    Routes,
    /// Serve the planner as a JSON API
    Serve {
        /// Address to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// Route name, e.g. "Balkan Core"
    #[arg(short, long)]
    route: Option<String>,

    /// Total budget in EUR
    #[arg(short, long)]
    budget: Option<f64>,

    /// Days spent in every city (1-7)
    #[arg(short, long)]
    days: Option<u8>,

    /// Start date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    start: Option<NaiveDate>,

    /// Priorities, repeatable or comma separated (low-cost, comfort, fast, eco, nightlife, culture)
    #[arg(short = 'p', long = "priority", value_delimiter = ',')]
    priorities: Vec<Priority>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn to_request(&self, config: &TravelOsConfig) -> TripRequest {
        let defaults = &config.planner;
        let mut request = TripRequest::new(
            self.route.clone().unwrap_or_else(|| defaults.default_route.clone()),
            self.budget.unwrap_or(defaults.default_budget),
            self.days.unwrap_or(defaults.default_days_per_city),
        )
        .with_priorities(self.priorities.iter().copied());
        request.start_date = self.start;
        request
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<TravelOsError>() {
                Some(travel_err) => eprintln!("Error: {}", travel_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        verbose,
        config: config_path,
        command,
    } = cli;

    let config = TravelOsConfig::load_from_path(config_path.clone())?;
    logging::init(&config.logging, verbose)?;

    let catalog = Catalog::builtin();
    let planner = TripPlanner::new(catalog, config.planner.settings());

    match command {
        None => print_overview(verbose, config_path, &config, catalog),
        Some(Commands::Plan(args)) => {
            let report = planner.plan(&args.to_request(&config))?;
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to encode report")?
                );
            } else {
                print!("{report}");
            }
        }
        Some(Commands::Interactive(args)) => {
            let mut session = Session::new(planner, args.to_request(&config))?;
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Cities) => print!("{}", report::render_cities(catalog)),
        Some(Commands::Routes) => print!(
            "{}",
            report::render_routes(catalog, config.planner.segment_length_km)
        ),
        Some(Commands::Serve { host, port }) => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            web::run(planner, &host, port).await?;
        }
    }

    Ok(())
}

fn print_overview(
    verbose: bool,
    config_path: Option<PathBuf>,
    config: &TravelOsConfig,
    catalog: &Catalog,
) {
    println!("🌍 TravelOS v{}", travelos::VERSION);
    println!(
        "{} routes across {} cities, no setup required.",
        catalog.routes().len(),
        catalog.cities().len()
    );
    println!();
    println!("Try: travelos plan --route \"Balkan Core\" --priority eco");
    println!("     travelos routes");
    println!("     travelos --help");

    if verbose {
        let config_path = config_path
            .or_else(TravelOsConfig::get_config_path)
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        println!();
        println!("Using config from: {config_path}");
        println!("Default route: {}", config.planner.default_route);
        println!("Segment length: {} km", config.planner.segment_length_km);
        println!("Log level: {}", config.logging.level);
    }
}
