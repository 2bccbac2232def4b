//! # Template Module
//!
//! Loads the license template file and renders it into the line sequence
//! the header formatter consumes. Rendering supports a single `{{year}}`
//! variable; templates without it pass through untouched, so plain license
//! text files work as-is.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Datelike;

use crate::verbose_log;

/// Data used to fill out a license template.
pub struct LicenseData {
  /// The copyright year to substitute for `{{year}}`
  pub year: String,
}

impl LicenseData {
  /// The current local year, used when no explicit year is given.
  pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
  }
}

/// A loaded license template.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use headstamp::template::{LicenseData, LicenseTemplate};
///
/// # fn main() -> anyhow::Result<()> {
/// let template = LicenseTemplate::load(Path::new("LICENSE.header"))?;
/// let lines = template.render(&LicenseData {
///   year: "2025".to_string(),
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LicenseTemplate {
  /// The raw template content
  template: String,
}

impl LicenseTemplate {
  /// Loads a license template from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, is not valid UTF-8, or is
  /// completely empty. An empty template would produce an empty header
  /// block, which the splicing step has no meaningful way to place.
  pub fn load(path: &Path) -> Result<Self> {
    verbose_log!("Loading license template from: {}", path.display());

    let template =
      fs::read_to_string(path).with_context(|| format!("Failed to read license template file: {}", path.display()))?;

    if template.lines().next().is_none() {
      bail!("License template file is empty: {}", path.display());
    }

    Ok(Self { template })
  }

  /// Builds a template from an in-memory string.
  ///
  /// Used by tests and by callers that already hold the template text.
  pub fn from_text(template: impl Into<String>) -> Self {
    Self {
      template: template.into(),
    }
  }

  /// Renders the template with the given data.
  ///
  /// Replaces every `{{year}}` occurrence with the year from `data` and
  /// splits the result into lines.
  pub fn render(&self, data: &LicenseData) -> Vec<String> {
    verbose_log!("Rendering license template with year: {}", data.year);

    let rendered = self.template.replace("{{year}}", &data.year);
    rendered.lines().map(str::to_string).collect()
  }
}
