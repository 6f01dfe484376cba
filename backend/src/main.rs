//! Ingestion host CLI
//!
//! # Commands
//!
//! ```bash
//! ingestion-host serve                         # Start HTTP server (port 8082)
//! ingestion-host serve --port 9000 --static-dir frontend/dist
//! ingestion-host config                        # Print the effective configuration
//! ```

use clap::{Parser, Subcommand};
use ingestion_host::{start_server, ServerConfig, ServerResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ingestion-host")]
#[command(about = "Serve the data ingestion upload page and receive uploads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Overrides applied on top of the environment.
#[derive(clap::Args)]
struct Overrides {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with the built frontend (index.html + assets)
    #[arg(short, long)]
    static_dir: Option<PathBuf>,

    /// Maximum upload size in megabytes
    #[arg(long)]
    max_upload_mb: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        overrides: Overrides,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { overrides } => cmd_serve(overrides).await,
        Commands::Config { overrides } => cmd_config(overrides),
    };

    if let Err(e) = result {
        tracing::error!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load_config(overrides: Overrides) -> ServerResult<ServerConfig> {
    let mut config = ServerConfig::from_env()?;

    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(dir) = overrides.static_dir {
        config.static_dir = dir;
    }
    if let Some(mb) = overrides.max_upload_mb {
        config = config.with_max_upload_mb(mb)?;
    }

    Ok(config)
}

async fn cmd_serve(overrides: Overrides) -> ServerResult<()> {
    let config = load_config(overrides)?;
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "⚠️  No index.html in {} - run `trunk build` in frontend/ first",
            config.static_dir.display()
        );
    }
    start_server(config).await
}

fn cmd_config(overrides: Overrides) -> ServerResult<()> {
    let config = load_config(overrides)?;
    let json = serde_json::to_string_pretty(&config)?;
    println!("{}", json);
    Ok(())
}
