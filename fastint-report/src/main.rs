//! `fastint-reps`: print binary64 layouts of the sample integers

use clap::Parser;
use fastint_report::{logging, write_report, SAMPLE_VALUES};

/// Print IEEE-754 double representations related to the fastint number model
#[derive(Debug, Parser)]
#[command(name = "fastint-reps", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init_tracing()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &SAMPLE_VALUES)?;
    Ok(())
}
