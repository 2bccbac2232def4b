//! # Diff Module
//!
//! This module contains functionality for creating and rendering diffs between original and modified content.
//! It's used for showing what changes when a license header is inserted or replaced.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for license header changes.
///
/// This struct handles:
/// - Generating diffs between original and modified content
/// - Displaying diffs to stderr
/// - Saving diffs to a file
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// Path to save the diff to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  /// Creates a new DiffManager with the specified configuration.
  ///
  /// # Parameters
  ///
  /// * `show_diff` - Whether to print diffs to stderr
  /// * `save_diff_path` - Path to save the diff to
  pub fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested at all.
  pub const fn is_active(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates a stale diff file from an earlier run.
  ///
  /// Diffs are appended while processing, so without this a rerun would
  /// keep growing the same file.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      fs::write(diff_path, "").with_context(|| format!("Failed to truncate diff file: {}", diff_path.display()))?;
    }
    Ok(())
  }

  /// Displays and/or saves a diff between the original and new content.
  ///
  /// This method uses the `similar` crate to generate a line diff showing
  /// what changes in the file.
  ///
  /// If show_diff is enabled, the diff will be displayed to stderr.
  /// If save_diff_path is provided, the diff will be appended to that file.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file being processed
  /// * `original` - Original file content
  /// * `new` - New file content with the license header spliced in
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if self.show_diff {
      eprintln!("Diff for {}:", path.display());
    }

    let diff = TextDiff::from_lines(original, new);

    // Collect the rendered diff so the same text can go to the save file
    let mut diff_content = String::new();
    diff_content.push_str(&format!("Diff for {}:\n", path.display()));

    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };

      if self.show_diff {
        eprint!("{sign}{change}");
      }

      diff_content.push_str(&format!("{sign}{change}"));
    }

    if self.show_diff {
      eprintln!();
    }

    diff_content.push('\n');

    // Diff file problems are reported to stderr and do not fail the run
    if let Some(ref diff_path) = self.save_diff_path {
      match OpenOptions::new().create(true).append(true).open(diff_path) {
        Ok(mut file) => {
          if let Err(e) = file.write_all(diff_content.as_bytes()) {
            eprintln!("Error writing to diff file: {e}");
          }
        }
        Err(e) => {
          eprintln!("Error opening diff file: {e}");
        }
      }
    }

    Ok(())
  }
}
