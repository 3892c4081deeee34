use std::{net::IpAddr, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use cli::{
    handlers::{handle_compare, handle_import, handle_preview, handle_serve},
    server::ServerSettings,
};

#[derive(Parser)]
#[command(version, about = "LLM inference benchmark registry")]
struct Cli {
    /// Log verbosity: trace, debug, info, warn or error
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        /// Address to listen on
        #[arg(long, env = "BENCHDB_ADDRESS", default_value = "127.0.0.1")]
        address: IpAddr,
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3001)]
        port: u16,
        /// Worker threads
        #[arg(long, env = "BENCHDB_WORKERS", default_value_t = 4)]
        workers: usize,
        /// Snapshot file, or :memory: to keep data in memory only
        #[arg(long, env = "DB_PATH", default_value = ":memory:")]
        db_path: PathBuf,
    },
    /// Show how a CSV file would be imported
    Preview {
        /// CSV file with benchmark results
        csv_path: PathBuf,
    },
    /// Import CSV files, one benchmark per file
    Import {
        /// JSON file with the benchmark configuration
        #[arg(long)]
        config: PathBuf,
        /// Snapshot file to store the benchmarks in
        #[arg(long, env = "DB_PATH")]
        db_path: Option<PathBuf>,
        /// CSV files with benchmark results
        #[arg(required = true)]
        csv_paths: Vec<PathBuf>,
    },
    /// Compare two stored benchmarks
    Compare {
        /// Snapshot file holding the benchmarks
        #[arg(long, env = "DB_PATH")]
        db_path: PathBuf,
        /// Baseline benchmark id
        baseline_id: String,
        /// Candidate benchmark id
        candidate_id: String,
    },
}

fn init_logging(log_level: &str) {
    let level = match log_level {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Some(Commands::Serve {
            address,
            port,
            workers,
            db_path,
        }) => handle_serve(ServerSettings {
            address,
            port,
            workers,
            db_path: Some(db_path),
        }),
        Some(Commands::Preview {
            csv_path,
        }) => handle_preview(&csv_path),
        Some(Commands::Import {
            config,
            db_path,
            csv_paths,
        }) => handle_import(config, csv_paths, db_path),
        Some(Commands::Compare {
            db_path,
            baseline_id,
            candidate_id,
        }) => handle_compare(Some(db_path), baseline_id, candidate_id),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().map_err(Into::into)
        },
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
