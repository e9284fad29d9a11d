use anyhow::Context;
use clap::Parser;
use jobform::cli::Cli;
use jobform::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.logging)?;

    jobform::ui::run(&config).context("terminal UI failed")?;
    Ok(())
}
