//! CLI for tvfetch. There are no options: the source, key space and output
//! directory are fixed.

use anyhow::{Context, Result};
use clap::Parser;
use tvfetch_core::{batch, config};

/// Download the nes6502 processor test vectors (00.json .. ff.json) into the
/// current directory, re-indented with four spaces.
#[derive(Debug, Parser)]
#[command(name = "tvfetch", version)]
#[command(about = "Fetch the nes6502 processor test vectors", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = config::load_or_init().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let summary = batch::run(cfg.http.options())?;
        tracing::info!("fetched {} vectors", summary.written.len());
        Ok(())
    }
}
