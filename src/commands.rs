use anyhow::Context;
use std::path::Path;
use varcite::config::{self, SqliteOptions};
use varcite::ingest::{civic, clinvar, LoadReport};
use varcite::output::{emit_success, OutputMode};
use varcite::storage::{Dataset, SqliteStore};
use varcite::ui::{self, Icons, Spinner};

fn open_store(db_file: &Path, dataset: Dataset, options: &SqliteOptions) -> anyhow::Result<SqliteStore> {
    config::ensure_db_dir(db_file)?;
    SqliteStore::open(db_file, dataset, options)
        .with_context(|| format!("failed to open {} database {}", dataset.as_str(), db_file.display()))
}

/// Stream one file with a spinner, reporting the outcome either way
fn run_pass(
    label: &str,
    input: &Path,
    load: impl FnOnce() -> varcite::Result<LoadReport>,
) -> anyhow::Result<LoadReport> {
    ui::status(Icons::FILE, label, &input.display().to_string());
    let spinner = Spinner::new(&format!("Loading {}...", input.display()));
    match load() {
        Ok(report) => {
            spinner.finish_with_message("Committed");
            tracing::info!("{}: {}", label, report);
            ui::load_summary(&report);
            Ok(report)
        }
        Err(e) => {
            spinner.abandon("Rolled back");
            Err(e).with_context(|| format!("{} load from {} rolled back", label, input.display()))
        }
    }
}

pub fn run_clinvar(db_file: &Path, citations_file: &Path, options: &SqliteOptions) -> anyhow::Result<()> {
    let store = open_store(db_file, Dataset::Clinvar, options)?;
    ui::header("ClinVar citations");
    ui::status(Icons::DATABASE, "Database", &db_file.display().to_string());

    run_pass("Citations", citations_file, || clinvar::load_citations(&store, citations_file))?;
    ui::success("ClinVar load complete");
    Ok(())
}

/// Both passes always run; the command fails if either rolled back
pub fn run_civic(
    db_file: &Path,
    variants_file: &Path,
    citations_file: &Path,
    options: &SqliteOptions,
) -> anyhow::Result<()> {
    let store = open_store(db_file, Dataset::Civic, options)?;
    ui::header("CiVIC variants and citations");
    ui::status(Icons::DATABASE, "Database", &db_file.display().to_string());

    let variants = run_pass("Variants", variants_file, || civic::load_variants(&store, variants_file));
    if let Err(e) = &variants {
        ui::error(&format!("{e:#}"));
    }
    let citations = run_pass("Citations", citations_file, || civic::load_citations(&store, citations_file));

    match (variants, citations) {
        (Ok(_), Ok(_)) => {
            ui::success("CiVIC load complete");
            Ok(())
        }
        (Err(_), Ok(_)) => anyhow::bail!("variants pass failed; citations were committed"),
        (Ok(_), Err(e)) => Err(e.context("variants were committed")),
        (Err(_), Err(e)) => Err(e.context("both passes failed")),
    }
}

pub fn run_stats(db_file: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let store = SqliteStore::open_read_only(db_file)
        .with_context(|| format!("failed to open {}", db_file.display()))?;
    let stats = store.stats()?;

    if output_mode.is_human() {
        ui::status(Icons::STATS, "Statistics", &db_file.display().to_string());
        if stats.tables.is_empty() {
            ui::warn("No citation or variant tables found");
        } else {
            println!("{}", ui::stats_table(&stats));
        }
        println!("Indexes: {}", stats.indexes);
    } else {
        emit_success("stats", &stats)?;
    }
    Ok(())
}
