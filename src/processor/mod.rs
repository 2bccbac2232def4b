//! # Processor Module
//!
//! This module contains the file-level orchestration: read a source file,
//! run the header splice pipeline over its lines, and write the result back
//! only when the content actually changed.
//!
//! The module is organized into submodules:
//! - [`file_io`] - File reading and writing operations
//!
//! The [`Processor`] struct is the main entry point, tying the pure header
//! pipeline to the filesystem and to diff output.

mod file_io;

use std::path::Path;

use anyhow::Result;
pub use file_io::FileIO;
use tracing::debug;

use crate::diff::DiffManager;
use crate::header::{Splice, SpliceConfig, splice};
use crate::verbose_log;

/// What happened, or in check mode would happen, to a processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
  /// A license header was inserted
  Added,
  /// An existing license header was replaced
  Replaced,
  /// The splice produced content identical to the file; nothing was written
  UpToDate,
  /// An existing license header was found and left alone (no replace flag)
  Kept,
  /// Check mode: the file is missing a license header
  WouldAdd,
  /// Check mode: the file has a license header that would be re-rendered
  WouldReplace,
}

impl HeaderAction {
  /// Whether the file needs a change (check mode found work to do).
  pub const fn needs_change(self) -> bool {
    matches!(self, HeaderAction::WouldAdd | HeaderAction::WouldReplace)
  }

  /// Whether the file was actually modified on disk.
  pub const fn changed_file(self) -> bool {
    matches!(self, HeaderAction::Added | HeaderAction::Replaced)
  }
}

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Settings for the header splice pipeline
  pub splice_config: SpliceConfig,
  /// The rendered license template, one element per line
  pub template_lines: Vec<String>,
  /// Report what would change without writing anything
  pub check_only: bool,
  /// Optional diff output
  pub diff_manager: Option<DiffManager>,
}

/// Processor for handling license header operations on a file.
///
/// The `Processor` is responsible for:
/// - Reading the file into a line sequence
/// - Running the splice pipeline over it
/// - Showing or saving a diff of the change
/// - Writing the new content back, but only when it differs
pub struct Processor {
  /// Settings for the header splice pipeline
  splice_config: SpliceConfig,

  /// The rendered license template lines
  template_lines: Vec<String>,

  /// Whether to only report without modifying files
  check_only: bool,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let diff_manager = config.diff_manager.unwrap_or_else(|| DiffManager::new(false, None));

    Self {
      splice_config: config.splice_config,
      template_lines: config.template_lines,
      check_only: config.check_only,
      diff_manager,
    }
  }

  /// Processes a single file.
  ///
  /// Reads the file, decides between inserting, replacing, or keeping the
  /// header, and writes the result back when it differs from the original.
  /// In check mode nothing is written; the returned action says what a
  /// modifying run would do.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the source file
  ///
  /// # Returns
  ///
  /// The action taken (or that would be taken) on the file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or written.
  pub fn process_file(&self, path: &Path) -> Result<HeaderAction> {
    verbose_log!("Processing file: {}", path.display());

    let original = FileIO::read_lines(path)?;

    let outcome = splice(&original, &self.template_lines, &self.splice_config);
    let replacing = matches!(outcome, Splice::Replace(_));

    let Some(new_lines) = outcome.lines() else {
      debug!("Existing license header kept in {}", path.display());
      return Ok(HeaderAction::Kept);
    };

    // Write only when the line sequence differs; an untouched file keeps
    // its exact bytes, trailing newline or not.
    if new_lines == original {
      debug!("License header already current in {}", path.display());
      return Ok(HeaderAction::UpToDate);
    }

    if self.diff_manager.is_active() {
      let before = FileIO::serialize_lines(&original);
      let after = FileIO::serialize_lines(new_lines);
      if let Err(e) = self.diff_manager.display_diff(path, &before, &after) {
        eprintln!("Warning: Failed to display diff for {}: {}", path.display(), e);
      }
    }

    if self.check_only {
      return Ok(if replacing {
        HeaderAction::WouldReplace
      } else {
        HeaderAction::WouldAdd
      });
    }

    FileIO::write_lines(path, new_lines)?;
    debug!("Wrote {} lines to {}", new_lines.len(), path.display());

    Ok(if replacing {
      HeaderAction::Replaced
    } else {
      HeaderAction::Added
    })
  }
}
