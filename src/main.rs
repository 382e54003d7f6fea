mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use standings_core::{EventStore, StandingsConfig, logging};

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Inspect and seed the local standings event directory")]
struct Cli {
    /// Events directory (defaults to events_dir from config)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored events, oldest first
    List,
    /// Delete an event by id
    Delete {
        /// Event id
        id: String,
    },
    /// Replace all events with generated mock data
    Mock {
        /// Number of rounds to generate
        #[arg(short, long, default_value_t = commands::mock::DEFAULT_ROUNDS)]
        count: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StandingsConfig::load()?;
    logging::init_subscriber(&config.log_level);

    let dir = cli.dir.unwrap_or_else(|| config.events_path());
    let store = EventStore::new(dir);

    match cli.command {
        Commands::List => commands::list::run(&store).await,
        Commands::Delete { id } => commands::delete::run(&store, &id).await,
        Commands::Mock { count } => commands::mock::run(&store, count).await,
    }
}
