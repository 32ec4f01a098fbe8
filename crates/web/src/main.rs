//! User Registry - HTTP service over an in-memory user store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use web_lib::config::RegistryConfig;

#[derive(Parser)]
#[command(name = "user-registry")]
#[command(author, version, about = "In-memory user registry", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, env = "REGISTRY_HOST")]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long, env = "REGISTRY_PORT")]
        port: Option<u16>,
        /// Start with an empty registry instead of the demo users
        #[arg(long)]
        no_seed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = RegistryConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("{},tower_http=debug", config.service.log_level))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_seed,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            if no_seed {
                config.seed_users = false;
            }
            tracing::debug!(?config, "Configuration loaded");

            web_lib::run_server(config).await?;
        }
    }

    Ok(())
}
