use crate::catalog::normalize_catalog;
use crate::config::OutputConfig;
use crate::output::{ensure_results_dir, load_json, output_path, write_report};
use crate::report::{build_report, render_warnings_block, RunResult};
use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug)]
pub struct RunOutcome {
    /// Full report, warnings block and elapsed time included.
    pub report: String,
    pub result: RunResult,
    pub warnings: Vec<String>,
}

/// Loads both inputs and builds the report. Nothing is written.
pub fn prepare(
    catalog_path: &Path,
    sales_path: &Path,
    config: &OutputConfig,
) -> Result<RunOutcome> {
    let started = Instant::now();

    let catalog_json = load_json(catalog_path, "Catalog")?;
    let sales_json = load_json(sales_path, "Sales")?;
    info!(
        "Loaded catalog from {} and sales from {}",
        catalog_path.display(),
        sales_path.display()
    );

    let catalog = normalize_catalog(&catalog_json);
    info!(
        "Catalog has {} priced products ({} warnings)",
        catalog.prices.len(),
        catalog.warnings.len()
    );

    let result = build_report(&catalog.prices, &sales_json);

    let mut report = render_warnings_block(&catalog.warnings);
    report.push_str(&result.report_text);

    if config.include_elapsed_time {
        report.push_str(&format!(
            "\nElapsed time (s): {}\n",
            started.elapsed().as_secs_f64()
        ));
    }

    Ok(RunOutcome {
        report,
        result,
        warnings: catalog.warnings,
    })
}

/// Writes a prepared report under the configured results directory and
/// returns the path it landed at.
pub fn save(outcome: &RunOutcome, config: &OutputConfig) -> Result<PathBuf> {
    ensure_results_dir(&config.results_dir)?;

    let path = output_path(
        &config.results_dir,
        &config.results_filename,
        config.incremental,
    );
    write_report(&path, &outcome.report)?;
    info!("Report written to {}", path.display());

    Ok(path)
}

/// Prepares and saves in one step.
pub fn run(
    catalog_path: &Path,
    sales_path: &Path,
    config: &OutputConfig,
) -> Result<(RunOutcome, PathBuf)> {
    let outcome = prepare(catalog_path, sales_path, config)?;
    let path = save(&outcome, config)?;
    Ok((outcome, path))
}
