mod backend;
mod export;
mod render;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadmap-cli")]
#[command(about = "Map business leads by segment and city")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search one or more cities for businesses in a segment
    Search {
        /// Business segment to look for, e.g. "Lanchonete"
        #[arg(long)]
        segment: String,

        /// Search a single city
        #[arg(long, conflicts_with_all = ["cities", "cities_file"])]
        city: Option<String>,

        /// Search several cities, one per flag (repeatable)
        #[arg(long = "cities", value_name = "CITY")]
        cities: Vec<String>,

        /// Read cities from a file, one per line
        #[arg(long)]
        cities_file: Option<PathBuf>,

        /// Write a dated CSV export of the results into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Backend base URL; defaults to LEADMAP_BACKEND_URL
        #[arg(long)]
        backend_url: Option<String>,
    },
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            segment,
            city,
            cities,
            cities_file,
            export_dir,
            backend_url,
        }) => {
            let params =
                search::build_params(segment, city, &cities, cities_file.as_deref())?;
            let config = leadmap_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            let backend_url = backend_url.unwrap_or(config.backend_url);
            search::run_search_command(&params, &backend_url, export_dir.as_deref()).await?;
        }
        None => println!("leadmap-cli ready; run `leadmap-cli search --help` to start"),
    }

    Ok(())
}
