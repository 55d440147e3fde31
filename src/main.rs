mod cli;
mod application;
mod domain;
mod infra;
mod service;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("context_qa=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
