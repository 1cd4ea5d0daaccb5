use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "compute-sales")]
#[command(about = "Validates sales records against a price catalogue and reports their total cost")]
pub struct Cli {
    /// Path to the price catalogue JSON file (list of {title, price})
    #[arg(value_name = "PRICE_CATALOGUE")]
    pub catalog: PathBuf,

    /// Path to the sales record JSON file
    #[arg(value_name = "SALES_RECORD")]
    pub sales: PathBuf,

    /// TOML configuration file (defaults are embedded in the binary)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to write the results file into (overrides the config)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep earlier results files and write to the next free file name
    #[arg(long)]
    pub incremental: bool,

    /// Leave the elapsed time line out of the report
    #[arg(long)]
    pub no_elapsed_time: bool,
}
