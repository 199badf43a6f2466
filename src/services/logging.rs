use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Diagnostics go to stderr so stdout stays reserved for progress text and JSON.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}
