//! # headstamp
//!
//! A tool that stamps a copyright license header into the top of a source file.

use anyhow::Result;
use headstamp::cli::{Cli, run_apply};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_apply(cli.args)
}
