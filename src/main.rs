use anyhow::Result;
use clap::Parser;
use compute_sales::{prepare, save, Cli, Config};
use env_logger::Env;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::from_toml_path(path)?,
        None => Config::from_default_config()?,
    };

    if let Some(dir) = cli.output_dir {
        config.output.results_dir = dir;
    }
    if cli.incremental {
        config.output.incremental = true;
    }
    if cli.no_elapsed_time {
        config.output.include_elapsed_time = false;
    }

    let outcome = prepare(&cli.catalog, &cli.sales, &config.output)?;
    println!("{}", outcome.report);

    let output_path = save(&outcome, &config.output)?;
    println!("Output written to: {}", output_path.display());

    Ok(())
}

fn init_logging() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .format_target(false)
        .try_init();
}
