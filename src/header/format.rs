//! # Header Formatter Module
//!
//! Turns the raw lines of a license template into a ready-to-splice comment
//! block: every line gets the configured line-comment symbol prepended, and
//! the whole block can optionally be wrapped in a named C# `#region` pair so
//! editors can fold the header away.

use super::{REGION_END_PREFIX, REGION_START_PREFIX};

/// Formats license template lines into a commented header block.
///
/// Each template line is prefixed with the comment symbol followed by a
/// single space. Empty template lines are kept and become a bare
/// `"<symbol> "` line, which preserves intentional paragraph breaks inside
/// the license text. When `region_name` is given, the block is wrapped in
/// `#region <name>` / `#endregion <name>` marker lines; the name is used
/// verbatim.
///
/// # Parameters
///
/// * `template_lines` - The license text, one element per line
/// * `comment_symbol` - The line-comment symbol to prepend (e.g. `//` or `#`)
/// * `region_name` - Optional region name to wrap the header in
///
/// # Returns
///
/// The formatted header as a new line sequence.
pub fn format_header(template_lines: &[String], comment_symbol: &str, region_name: Option<&str>) -> Vec<String> {
  let mut header: Vec<String> = template_lines
    .iter()
    .map(|line| format!("{comment_symbol} {line}"))
    .collect();

  if let Some(name) = region_name {
    header.insert(0, format!("{REGION_START_PREFIX}{name}"));
    header.push(format!("{REGION_END_PREFIX} {name}"));
  }

  header
}
