use clap::Parser;
use color_eyre::eyre::{self, Context};
use std::{env, path::PathBuf};
use vitrine_config::Configuration;

/// Personal portfolio server
#[derive(Parser)]
#[command(about, author, version = vitrine::consts::VERSION)]
struct Args {
    /// Path to the configuration file
    #[clap(long, short)]
    config: PathBuf,
}

async fn boot() -> eyre::Result<()> {
    let args = Args::parse();
    let config = Configuration::load(args.config).await?;
    vitrine::observability::initialise()?;

    let anthropic_api_key =
        env::var("ANTHROPIC_API_KEY").context("ANTHROPIC_API_KEY environment variable is not set")?;

    let state = vitrine::initialise_state(&config, anthropic_api_key)?;
    let shutdown_signal = vitrine::signal::shutdown();

    vitrine::http::run(state, config.server.clone(), shutdown_signal).await
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(boot())
}
