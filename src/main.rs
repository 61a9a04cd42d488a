use robustcar_listings::config::{AppConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use robustcar_listings::{pipeline, AppError, JsonSink, Report, LISTINGS};
use std::env;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the report only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("Loading configuration from {}", config_path);
    let config = AppConfig::load_or_default(&config_path)?;

    let output = pipeline::run(LISTINGS, &config);

    let sink = JsonSink::new(&config.output_path);
    info!("Saving records to {}...", sink.path().display());
    sink.write(&output.records)?;

    let report = Report {
        summary: &output.summary,
        records: &output.records,
        output_path: sink.path(),
        sample_size: config.sample_size,
    };
    print!("{}", report);
    Ok(())
}
