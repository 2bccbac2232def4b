//! # Apply Command
//!
//! This module implements the header apply flow for a single source file.
//! Parsed arguments are merged with the optional config file, the license
//! template is rendered, and the file is handed to the processor.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::load_config;
use crate::diff::DiffManager;
use crate::header::SpliceConfig;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_file_result, print_hint};
use crate::processor::{HeaderAction, Processor, ProcessorConfig};
use crate::template::{LicenseData, LicenseTemplate};

/// Arguments for the apply command
#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
  /// Source file to stamp
  #[arg(required = false, value_name = "FILE")]
  pub file: Option<PathBuf>,

  /// License template file; `{{year}}` placeholders are replaced before the
  /// header is formatted
  #[arg(long, short = 'f', value_name = "FILE")]
  pub license_file: Option<PathBuf>,

  /// Line-comment symbol used to format the header (for example "//" or "#")
  #[arg(long, short = 'c', value_name = "SYMBOL")]
  pub comment_symbol: Option<String>,

  /// Text that marks a comment block as a license header (repeatable; a block
  /// qualifies only when every given value occurs in it)
  #[arg(long, short = 'i', value_name = "TEXT")]
  pub identifier: Vec<String>,

  /// Wrap the header in `#region NAME` / `#endregion NAME` marker lines
  #[arg(long, value_name = "NAME")]
  pub region: Option<String>,

  /// Replace an existing license header instead of keeping it
  #[arg(long)]
  pub replace: bool,

  /// Check mode: report what would change without modifying the file
  #[arg(long)]
  pub check: bool,

  /// Show diff of changes
  #[arg(long)]
  pub show_diff: bool,

  /// Save diff of changes to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Copyright year(s) substituted for `{{year}}` in the template
  #[arg(long, value_name = "YEAR")]
  pub year: Option<String>,

  /// Path to config file (default: .headstamp.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl ApplyArgs {
  /// Validate the arguments that a config file cannot supply
  fn validate(&self) -> Result<(), String> {
    if self.file.is_none() {
      return Err("Missing required argument: <FILE>".to_string());
    }
    Ok(())
  }
}

/// Run the apply command with the given arguments
pub fn run_apply(args: ApplyArgs) -> Result<()> {
  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Safe to unwrap because we validated above
  let file = args.file.as_deref().expect("a source file");

  let search_dir = env::current_dir().context("Failed to determine current directory")?;

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), &search_dir, args.no_config)?;
  if config.is_some() {
    debug!("Applying configuration file defaults");
  }
  let config = config.unwrap_or_default();

  // CLI flags take precedence over config file values
  let Some(license_file) = args.license_file.or(config.license_file) else {
    eprintln!("ERROR: Missing required argument: --license-file <FILE>");
    process::exit(1);
  };
  let Some(comment_symbol) = args.comment_symbol.or(config.comment_symbol) else {
    eprintln!("ERROR: Missing required argument: --comment-symbol <SYMBOL>");
    process::exit(1);
  };
  if comment_symbol.is_empty() {
    eprintln!("ERROR: Comment symbol must not be empty");
    process::exit(1);
  }

  let identifiers = if args.identifier.is_empty() {
    config.identifiers
  } else {
    args.identifier
  };
  if identifiers.is_empty() {
    eprintln!("ERROR: Missing required argument: --identifier <TEXT>");
    process::exit(1);
  }

  let region_name = args.region.or(config.region_name);

  let year = args.year.unwrap_or_else(LicenseData::current_year);
  let license_data = LicenseData { year };

  let template = LicenseTemplate::load(&license_file)?;
  let template_lines = template.render(&license_data);

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff.clone());
  diff_manager.init()?;

  let splice_config = SpliceConfig {
    comment_symbol,
    identifiers,
    region_name,
    replace_existing: args.replace,
  };

  let processor = Processor::new(ProcessorConfig {
    splice_config,
    template_lines,
    check_only: args.check,
    diff_manager: Some(diff_manager),
  });

  let action = processor.process_file(file)?;

  print_file_result(file, action);

  // A diff is only rendered when the splice produced different content
  if let Some(ref diff_path) = args.save_diff
    && (action.changed_file() || action.needs_change())
  {
    info_log!("Diff saved to: {}", diff_path.display());
  }

  // Exit with non-zero code in check mode when the file needs changes
  if action.needs_change() {
    let hint = match action {
      HeaderAction::WouldAdd => "Run without --check to add the header.",
      HeaderAction::WouldReplace => "Run without --check to replace the header.",
      _ => unreachable!(),
    };
    print_hint(hint);
    process::exit(1);
  }

  Ok(())
}
