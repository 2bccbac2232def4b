//! # Header Splicing Module
//!
//! Splices a formatted header block into a file's line sequence. Two paths
//! exist: inserting a header where none was found, and replacing the span of
//! a detected one. Both paths force a single blank line between the header
//! and any adjacent non-blank content, and never add one next to content
//! that is already blank or absent.

use super::SHEBANG_PREFIX;
use super::locate::HeaderSpan;

/// Inserts a header block into content that has no license header yet.
///
/// When the first line is an interpreter directive (`#!`), that line stays
/// at the top: the header goes right below it, separated by one blank line,
/// and a second blank line is forced before the rest of the content when
/// the line after the directive is non-blank. Otherwise the header goes at
/// the very top, followed by a blank line when the original first line is
/// non-blank.
///
/// # Parameters
///
/// * `header` - The formatted header block
/// * `lines` - The original file content
///
/// # Returns
///
/// A new line sequence with the header spliced in.
pub fn insert_header(header: &[String], lines: &[String]) -> Vec<String> {
  let mut result = Vec::with_capacity(header.len() + lines.len() + 2);

  if let Some(first) = lines.first()
    && first.starts_with(SHEBANG_PREFIX)
  {
    result.push(first.clone());
    result.push(String::new());
    result.extend_from_slice(header);
    if lines.len() > 1 && !lines[1].is_empty() {
      result.push(String::new());
    }
    result.extend_from_slice(&lines[1..]);
    return result;
  }

  result.extend_from_slice(header);
  if let Some(first) = lines.first()
    && !first.is_empty()
  {
    result.push(String::new());
  }
  result.extend_from_slice(lines);
  result
}

/// Replaces the detected header span with a freshly formatted block.
///
/// Content outside the span is carried over untouched. A blank line is
/// forced before the new header when the line just above the span is
/// non-blank, and after it when the line just below the span is non-blank;
/// blank lines already next to the span are reused rather than doubled.
///
/// # Parameters
///
/// * `header` - The formatted replacement block
/// * `lines` - The original file content
/// * `span` - The span of the existing header, as found by the locator
///
/// # Returns
///
/// A new line sequence with the span replaced.
pub fn replace_header(header: &[String], lines: &[String], span: HeaderSpan) -> Vec<String> {
  let mut result = Vec::with_capacity(header.len() + lines.len() - span.len() + 2);

  result.extend_from_slice(&lines[..span.start]);
  if span.start > 0 && !lines[span.start - 1].is_empty() {
    result.push(String::new());
  }
  result.extend_from_slice(header);
  if span.end < lines.len() && !lines[span.end].is_empty() {
    result.push(String::new());
  }
  result.extend_from_slice(&lines[span.end..]);
  result
}
