mod cli;
mod output;

use clap::Parser;
use eyre::WrapErr;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = cli::Cli::parse();

    // Diagnostics go to stderr only; stdout carries the program output.
    let filter = EnvFilter::try_new(&cli.log_level).wrap_err("invalid --log-level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let total = addup_core::total();
        tracing::debug!(total, "emitting JSON line");
        writeln!(out, "{}", output::render_json(total)).wrap_err("write total")?;
    } else {
        addup_core::write_total(&mut out)?;
    }
    Ok(())
}
