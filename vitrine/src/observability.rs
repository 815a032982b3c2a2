use eyre::Context;
use std::env;
use tracing_subscriber::{
    Layer as _, Registry,
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn initialise() -> eyre::Result<()> {
    let env_filter = env::var("RUST_LOG")
        .map_err(eyre::Report::from)
        .and_then(|targets| targets.parse().context("Failed to parse RUST_LOG value"))
        .unwrap_or_else(|_| Targets::default().with_default(LevelFilter::INFO));

    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .try_init()
        .context("Couldn't install the global tracing subscriber")?;

    Ok(())
}
