use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tsapi::{init_logging, serve, StoreConfig, StoreProvider};

#[derive(Debug, Parser)]
#[command(name = "tsapi")]
#[command(about = "Time series measurement API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,

        #[arg(short = 'b', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Check connectivity to the backing store
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Store configuration is read once here and handed to the provider;
    // nothing else reads the environment.
    let config = StoreConfig::from_env();
    let provider = StoreProvider::new(config);

    match cli.command {
        Commands::Serve { host, port } => {
            info!("Starting API server");
            serve(host, port, provider).await?;
        }
        Commands::Ping => match provider.ping().await {
            Ok(()) => info!("Store is reachable"),
            Err(e) => {
                error!("Store ping failed: {}", e);
                return Err(e.into());
            }
        },
    }

    Ok(())
}
