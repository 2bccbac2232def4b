//! # Header Module
//!
//! The core of headstamp: pure functions that format a license header,
//! locate an existing one inside a file's line sequence, and splice a fresh
//! header into the right place. Everything in this module works on plain
//! line sequences and performs no I/O, which keeps the whole pipeline
//! deterministic and easy to test.
//!
//! The pieces are:
//! - [`format_header`] turns license template lines into a commented block
//! - [`find_license_header`] finds and qualifies the first comment block
//! - [`insert_header`] / [`replace_header`] produce the new line sequence
//! - [`splice`] runs the full decision pipeline for one file

pub mod edit;
pub mod format;
pub mod locate;

pub use edit::{insert_header, replace_header};
pub use format::format_header;
pub use locate::{HeaderSpan, find_license_header};

/// Marker that an interpreter directive line starts with.
pub const SHEBANG_PREFIX: &str = "#!";

/// Opening region marker. The trailing space keeps the bare word `#region`
/// from matching as a prefix of unrelated lines.
pub const REGION_START_PREFIX: &str = "#region ";

/// Closing region marker.
pub const REGION_END_PREFIX: &str = "#endregion";

/// Settings that drive the splice pipeline for one file.
#[derive(Debug, Clone)]
pub struct SpliceConfig {
  /// Line-comment symbol used to format the header and to recognize
  /// comment lines (e.g. `//` or `#`)
  pub comment_symbol: String,
  /// Substrings that must all be present for a comment block to count as a
  /// license header
  pub identifiers: Vec<String>,
  /// Optional name of a C# region to wrap the header in
  pub region_name: Option<String>,
  /// Whether a detected license header should be replaced with a freshly
  /// formatted one
  pub replace_existing: bool,
}

/// Outcome of running the splice pipeline over a file's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
  /// No license header was found; the new content has one inserted
  Insert(Vec<String>),
  /// A license header was found and re-rendered in place
  Replace(Vec<String>),
  /// A license header was found and left alone
  Keep,
}

impl Splice {
  /// The new line sequence, if the pipeline produced one.
  pub fn lines(&self) -> Option<&[String]> {
    match self {
      Self::Insert(lines) | Self::Replace(lines) => Some(lines),
      Self::Keep => None,
    }
  }
}

/// Decides what to do with one file's content and computes the result.
///
/// A file without a qualifying license header gets one inserted. A file
/// with one gets it replaced when `replace_existing` is set, and is left
/// untouched otherwise. The returned line sequence may still equal the
/// input (a replaced header that was already current); callers that write
/// files compare before writing.
///
/// # Parameters
///
/// * `lines` - The file content, one element per line
/// * `template_lines` - The license template, one element per line
/// * `config` - Comment symbol, identifiers, region and replace settings
pub fn splice(lines: &[String], template_lines: &[String], config: &SpliceConfig) -> Splice {
  let header = format_header(template_lines, &config.comment_symbol, config.region_name.as_deref());

  match find_license_header(lines, &config.comment_symbol, &config.identifiers) {
    None => Splice::Insert(insert_header(&header, lines)),
    Some(span) if config.replace_existing => Splice::Replace(replace_header(&header, lines, span)),
    Some(_) => Splice::Keep,
  }
}
