//! # Header Locator Module
//!
//! Finds the leading comment block of a file and decides whether it is a
//! license header. Only the first comment block is ever considered: the scan
//! stops at the first non-comment line, so comments buried deeper in the
//! file can never be mistaken for a header.

use super::{REGION_END_PREFIX, REGION_START_PREFIX, SHEBANG_PREFIX};

/// The location of a detected license header as a half-open line range.
///
/// `start` is the index of the first header line, `end` is the index one
/// past the last header line. A located span is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpan {
  /// Index of the first line of the header block
  pub start: usize,
  /// Index one past the last line of the header block
  pub end: usize,
}

impl HeaderSpan {
  /// Number of lines covered by the span.
  pub const fn len(&self) -> usize {
    self.end - self.start
  }

  /// Whether the span covers no lines.
  pub const fn is_empty(&self) -> bool {
    self.start == self.end
  }
}

/// Locates the license header in a file's line sequence, if one exists.
///
/// The search runs in three steps:
///
/// 1. Find the first line that starts with the comment symbol or one of the
///    region markers. A shebang line (`#!`) never starts a comment block,
///    even when the comment symbol is `#`.
/// 2. Extend the block line by line until the first line that starts with
///    none of those prefixes, or the end of the file.
/// 3. Check that every identifier occurs somewhere in the block's text. The
///    identifiers are plain substrings, not patterns; all of them must be
///    present for the block to qualify.
///
/// # Parameters
///
/// * `lines` - The file content, one element per line
/// * `comment_symbol` - The line-comment symbol headers are written with
/// * `identifiers` - Substrings that distinguish a license header from an
///   ordinary comment block
///
/// # Returns
///
/// The span of the license header, or `None` when the file has no leading
/// comment block or the block does not contain every identifier.
pub fn find_license_header(lines: &[String], comment_symbol: &str, identifiers: &[String]) -> Option<HeaderSpan> {
  let span = find_first_comment_block(lines, comment_symbol)?;

  if is_license_header(&lines[span.start..span.end], identifiers) {
    Some(span)
  } else {
    None
  }
}

/// Finds the first comment block without judging its content.
fn find_first_comment_block(lines: &[String], comment_symbol: &str) -> Option<HeaderSpan> {
  let prefixes = [comment_symbol, REGION_START_PREFIX, REGION_END_PREFIX];

  let start = lines
    .iter()
    .position(|line| starts_with_any(line, &prefixes) && !line.starts_with(SHEBANG_PREFIX))?;

  // The shebang exclusion only applies to where a block may start; a line
  // like "#!..." inside the block would still extend it.
  let end = lines[start..]
    .iter()
    .position(|line| !starts_with_any(line, &prefixes))
    .map_or(lines.len(), |offset| start + offset);

  Some(HeaderSpan { start, end })
}

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
  prefixes.iter().any(|prefix| line.starts_with(prefix))
}

/// Checks whether a comment block contains every required identifier.
///
/// The block lines are joined with newlines and each identifier is tested
/// as a literal substring of the joined text. An empty identifier list
/// accepts any block.
fn is_license_header(block: &[String], identifiers: &[String]) -> bool {
  let text = block.join("\n");
  identifiers.iter().all(|identifier| text.contains(identifier.as_str()))
}
