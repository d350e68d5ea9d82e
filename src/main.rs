use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cheerful::app::App;
use cheerful::catalog::Catalog;
use cheerful::config::Config;
use cheerful::logging;

#[derive(Parser)]
#[command(name = "cheerful")]
#[command(about = "Campaign creation wizard for the Cheerful outreach platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Seed data file overriding the embedded catalog
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seed catalog (campaign types, integrations, providers)
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    let catalog = match cli.seed.as_deref() {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    match cli.command {
        Some(Commands::Catalog) => {
            cmd_catalog(&catalog);
        }
        None => {
            run_tui(config, catalog, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(config: Config, catalog: Catalog, log_file_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(config, catalog);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if log_path.exists() {
            if let Ok(metadata) = log_path.metadata() {
                if metadata.len() > 0 {
                    eprintln!("Session log: {}", log_path.display());
                }
            }
        }
    }

    result
}

fn cmd_catalog(catalog: &Catalog) {
    println!("Campaign Types");
    println!("{}", "─".repeat(50));
    for opt in &catalog.campaign_types {
        println!("  {} {} - {}", opt.icon.glyph(), opt.title, opt.description);
    }

    println!();
    println!("Integrations");
    println!("{}", "─".repeat(50));
    for integration in &catalog.integrations {
        let status = if integration.enabled {
            "available"
        } else {
            "coming soon"
        };
        println!(
            "  {} {} ({}) - {}",
            integration.icon.glyph(),
            integration.name,
            status,
            integration.description
        );
    }

    println!();
    println!("Email Providers");
    println!("{}", "─".repeat(50));
    for provider in &catalog.email_providers {
        println!("  {} - {}", provider.name, provider.description);
    }
}
