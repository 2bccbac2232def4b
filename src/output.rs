//! # Output Module
//!
//! This module centralizes all user-facing output for the headstamp tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show what happened to the file without requiring flags
//! - **Scriptable**: Keep stdout predictable for piping/automation
//! - **Progressive**: Silence with `-q`, diagnostics with `-v`

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::processor::HeaderAction;

/// Symbols used in output
pub mod symbols {
  /// Header added or already correct
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Header missing or stale (check mode)
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header replaced
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Print the outcome for the processed file.
///
/// In quiet mode only the path is printed, and only when the file needs a
/// change (check mode), which keeps the output useful for scripting.
pub fn print_file_result(path: &Path, action: HeaderAction) {
  if is_quiet() {
    if action.needs_change() {
      println!("{}", path.display());
    }
    return;
  }

  match action {
    HeaderAction::Added => println!(
      "{} Added license header to {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      path.display()
    ),
    HeaderAction::Replaced => println!(
      "{} Replaced license header in {}",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      path.display()
    ),
    HeaderAction::UpToDate => println!(
      "{} License header up to date in {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      path.display()
    ),
    HeaderAction::Kept => println!(
      "{} Existing license header left in place in {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      path.display()
    ),
    HeaderAction::WouldAdd => println!(
      "{} {} is missing a license header",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      path.display()
    ),
    HeaderAction::WouldReplace => println!(
      "{} {} has a stale license header",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      path.display()
    ),
  }
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}
