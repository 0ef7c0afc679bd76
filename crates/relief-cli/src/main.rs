use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use relief_cli::output::OutputFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Disaster relief routing and supply dispatch")]
struct Cli {
    /// Directory holding nodes.txt, edges.txt and the other dataset files.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run hospital search, shelter search, dispatch and rescue-team assignment.
    Respond {
        /// Disaster location name.
        #[arg(long)]
        location: String,
        /// Measure dispatch distances along routes that avoid affected areas.
        #[arg(long)]
        dispatch_avoids_hazards: bool,
    },
    /// Compute the shortest route between two location names.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Allow the route to pass through affected areas.
        #[arg(long)]
        ignore_hazards: bool,
    },
    /// Find the nearest shelter reachable without crossing affected areas.
    Shelter {
        /// Location name to search from.
        #[arg(long = "from")]
        from: String,
    },
    /// Dispatch supplies from shelters to a disaster zone.
    Dispatch {
        /// Disaster location name.
        #[arg(long)]
        location: String,
        /// Measure shelter distances along routes that avoid affected areas.
        #[arg(long)]
        avoid_hazards: bool,
    },
    /// Distribute affected-area demand across hospital capacity, nearest first.
    Hospitals,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Command::Respond {
            location,
            dispatch_avoids_hazards,
        } => commands::respond::handle_respond(
            data_dir,
            &location,
            dispatch_avoids_hazards,
            cli.format,
        ),
        Command::Route {
            from,
            to,
            ignore_hazards,
        } => commands::route::handle_route(data_dir, &from, &to, ignore_hazards, cli.format),
        Command::Shelter { from } => commands::shelter::handle_shelter(data_dir, &from, cli.format),
        Command::Dispatch {
            location,
            avoid_hazards,
        } => commands::dispatch::handle_dispatch(data_dir, &location, avoid_hazards, cli.format),
        Command::Hospitals => commands::hospitals::handle_hospitals(data_dir, cli.format),
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
