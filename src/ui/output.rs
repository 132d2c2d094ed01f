use crate::ingest::LoadReport;
use crate::output::is_quiet;
use crate::ui::{stderr_theme, theme, Icons};
use indicatif::HumanDuration;
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::DNA, text.style(theme().header.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}: {}", icon, label.style(theme().dim.clone()), value);
}

pub fn success(label: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

/// Always shown, on stderr
pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(stderr_theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(stderr_theme().warn.clone()));
}

/// One committed load: row count, table, timing
pub fn load_summary(report: &LoadReport) {
    if is_quiet() {
        return;
    }
    println!(
        "  {} {} rows into {}",
        Icons::FILE,
        report.rows.style(theme().success.clone()),
        report.table
    );
    if report.skipped_lines > 0 {
        println!(
            "  {} {}",
            "blank lines skipped:".style(theme().dim.clone()),
            report.skipped_lines
        );
    }
    println!("  {} {}", Icons::CLOCK, HumanDuration(report.elapsed));
}
