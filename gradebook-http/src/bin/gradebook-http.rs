use clap::{Parser, Subcommand, ValueEnum};
use gradebook_core::config::StoreConfig;
use gradebook_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// Gradebook HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "GRADEBOOK_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "GRADEBOOK_PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Record store backend
    #[arg(long, value_enum, env = "GRADEBOOK_STORE", default_value_t = StoreKind::Memory)]
    store: StoreKind,

    /// JSON file of student records: seed for `memory`, backing file for `file`
    #[arg(long, env = "GRADEBOOK_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StoreKind {
    Memory,
    File,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server with a specific configuration file
    Config {
        /// Path to the JSON configuration file
        #[arg(short, long)]
        file: PathBuf,
    },
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        match self.store {
            StoreKind::Memory => StoreConfig::InMemory {
                seed_file: self.data_file.clone(),
            },
            StoreKind::File => StoreConfig::LocalFile {
                path: self
                    .data_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("students.json")),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Some(Commands::Config { file }) => ServerConfig::from_file(file)?,
        None => ServerConfig {
            host: cli.host.clone(),
            port: cli.port,
            store: cli.store_config(),
        },
    };

    gradebook_http::start_with_config(config, &cli.log_level).await
}
