pub mod compose;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod layers;
pub mod page;
pub mod render;
pub mod server;
pub mod types;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::page::Page;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Print a page's view to stdout
    Render {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
        #[arg(short, long, default_value = "map", value_parser = parse_page)]
        page: Page,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Html,
}

fn parse_page(s: &str) -> Result<Page, String> {
    s.parse().map_err(|e: error::PageParseError| e.to_string())
}

fn load_config(path: &Path) -> Result<config::AppConfig> {
    if path.exists() {
        info!("Loading config from {:?}", path);
        config::AppConfig::load_from_file(path)
    } else {
        warn!("Config file {:?} not found, using defaults", path);
        Ok(config::AppConfig::default())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config: path } => {
            let app_config = load_config(&path)?;
            let records = data::records().context("Invalid donation dataset")?;
            info!("Loaded {} donation records", records.len());

            server::start_server(app_config, records).await?;
        }
        Commands::Render { config: path, page: selection, format } => {
            let app_config = load_config(&path)?;
            let records = data::records().context("Invalid donation dataset")?;
            let view = page::render_page(selection, &records, &app_config);

            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&view)
                    .context("Failed to serialize view")?,
                OutputFormat::Html => render::render_document(&view)?,
            };
            println!("{}", output);
        }
    }

    Ok(())
}
