pub mod catalog;
pub mod cli;
pub mod config;
pub mod fields;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod validator;

pub use catalog::{normalize_catalog, CatalogNormalization, PriceLookup};
pub use cli::Cli;
pub use config::{Config, OutputConfig};
pub use pipeline::{prepare, run, save, RunOutcome};
pub use report::{build_report, format_currency, render_warnings_block, ErrorEntry, RunResult};
pub use validator::{validate_record, Problem, ValidSale};
