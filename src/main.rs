//! Varcite CLI - load ClinVar and CiVIC exports into SQLite

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use varcite::output::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "varcite")]
#[command(version)]
#[command(about = "Load ClinVar and CiVIC variant citation exports into SQLite")]
#[command(long_about = r#"
Varcite loads tab-delimited annotation exports into local SQLite databases.
Each input file is loaded in a single transaction: all rows or none.

Example usage:
  varcite clinvar clinvar.db var_citations.txt
  varcite civic civic.db VariantSummaries.tsv ClinicalEvidenceSummaries.tsv
  varcite stats civic.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file (defaults to ./varcite.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a ClinVar citations export (`#`-headed, tab-delimited)
    Clinvar {
        /// Database file, created when missing
        db_file: PathBuf,

        /// ClinVar var_citations.txt export
        citations_file: PathBuf,
    },

    /// Load CiVIC variant and evidence summaries
    Civic {
        /// Database file, created when missing
        db_file: PathBuf,

        /// CiVIC variant summaries TSV
        civic_variants_file: PathBuf,

        /// CiVIC clinical evidence summaries TSV
        civic_citations_file: PathBuf,
    },

    /// Show row counts for a loaded database
    Stats {
        /// Database file
        db_file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and are not failures
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    varcite::storage::engine::ensure_supported()?;
    let config = varcite::config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Clinvar { db_file, citations_file } => {
            commands::run_clinvar(&db_file, &citations_file, &config.sqlite)
        }
        Commands::Civic { db_file, civic_variants_file, civic_citations_file } => commands::run_civic(
            &db_file,
            &civic_variants_file,
            &civic_citations_file,
            &config.sqlite,
        ),
        Commands::Stats { db_file, json } => {
            commands::run_stats(&db_file, OutputMode::from_json_flag(json))
        }
    }
}

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        varcite::ui::error(&format!("{e:#}"));
        process::exit(1);
    }
}
