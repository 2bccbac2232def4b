//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous whole-file operations on line sequences.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files as line
/// sequences. Lines are stored without their terminators; serialization puts
/// a single `\n` after every line, including the last one.
pub struct FileIO;

impl FileIO {
  /// Reads a file into a line sequence.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Returns
  ///
  /// The file content, one element per line, without line terminators.
  pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
  }

  /// Serializes a line sequence back into file content.
  ///
  /// Lines are joined with `\n` and the content ends with a single trailing
  /// newline.
  pub fn serialize_lines(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
  }

  /// Writes a line sequence to a file.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `lines` - Content to write, one element per line
  pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, Self::serialize_lines(lines)).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
