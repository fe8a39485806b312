//! ticksync CLI - Dukascopy bi5 tick archive mirror and converter.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "ticksync")]
#[command(about = "Mirror Dukascopy bi5 tick archives and convert them to rows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download hourly .bi5 files, only replacing local files whose size differs
    Sync {
        /// Instrument symbol (e.g. EURUSD, GBPUSD, USDJPY)
        #[arg(long)]
        instrument: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,

        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        end_date: String,

        /// Directory to store the .bi5 files in (one subfolder per instrument)
        #[arg(long)]
        output_folder: PathBuf,

        /// Number of parallel downloads
        #[arg(long)]
        threads: NonZeroUsize,
    },

    /// Convert a single .bi5 file to CSV
    Convert {
        /// Path to the .bi5 file
        #[arg(long)]
        bi5_file: PathBuf,

        /// Output file
        #[arg(long)]
        csv_file: PathBuf,

        /// Date of the file (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Hour of day (0-23) of the file
        #[arg(long, default_value = "0")]
        hour: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Convert every mirrored .bi5 file of a date range into one output file
    Export {
        /// Instrument symbol (e.g. EURUSD)
        #[arg(long)]
        instrument: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,

        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        end_date: String,

        /// Directory the .bi5 files were synced into
        #[arg(long)]
        output_folder: PathBuf,

        /// Output file. Defaults to <instrument>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
}

/// Installs the tracing subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Sync {
            instrument,
            start_date,
            end_date,
            output_folder,
            threads,
        } => {
            commands::sync::sync(
                &instrument,
                &start_date,
                &end_date,
                output_folder,
                threads,
                cli.quiet,
            )
            .await
        }
        Commands::Convert {
            bi5_file,
            csv_file,
            date,
            hour,
            format,
        } => commands::convert::convert(&bi5_file, &csv_file, &date, hour, format, cli.quiet),
        Commands::Export {
            instrument,
            start_date,
            end_date,
            output_folder,
            output,
            format,
        } => commands::export::export(
            &instrument,
            &start_date,
            &end_date,
            &output_folder,
            output,
            format,
            cli.quiet,
        ),
    }
}
