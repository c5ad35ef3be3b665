//! Walkthrough entry point.

use demo::Config;
use domain::DomainError;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), DomainError> {
    let config = Config::from_env();

    // 1. Initialize tracing
    let json = config.log_json;
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();

    tracing::info!(locale = %config.locale, currency = %config.currency, "starting walkthrough");

    // 2. Run the walkthrough
    let lines = demo::walkthrough(&config).inspect_err(|err| {
        tracing::error!(error = %err, "walkthrough failed");
    })?;

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
