use anyhow::Result;
use clap::Parser;

use jsty_cli::args::CliArgs;
use jsty_cli::{driver, tracing_config};

fn main() -> Result<()> {
    tracing_config::init_tracing();
    let args = CliArgs::parse();
    driver::run(&args)
}
