use anyhow::Context;
use clap::Parser;

use tierscreen::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tierscreen::run(&cli).with_context(|| {
        format!("failed to render tier screen to {}", cli.output.display())
    })?;
    Ok(())
}
