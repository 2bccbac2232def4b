//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing with styled help output.

mod apply;

pub use apply::{ApplyArgs, run_apply};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string for `--version`, extended with the git hash and commit date
/// when the binary was built from a checkout.
fn build_version() -> String {
  let base = env!("CARGO_PKG_VERSION");
  match (option_env!("GIT_HASH"), option_env!("GIT_DATE")) {
    (Some(hash), Some(date)) => format!("{base} ({hash} {date})"),
    (Some(hash), None) => format!("{base} ({hash})"),
    _ => base.to_string(),
  }
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version = build_version(),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Add a license header to a file
  headstamp --license-file LICENSE.txt --identifier \"Copyright\" src/main.rs

  # Use a hash comment symbol for scripts
  headstamp -f LICENSE.txt -c \"#\" -i \"Copyright\" scripts/deploy.sh

  # Replace an existing license header with a freshly rendered one
  headstamp -f LICENSE.txt -i \"Copyright\" --replace src/main.rs

  # Check without modifying the file (exits 1 when a change is needed)
  headstamp --check -f LICENSE.txt -i \"Copyright\" src/main.rs

  # Show a diff of the pending change
  headstamp --show-diff -f LICENSE.txt -i \"Copyright\" src/main.rs

  # Save the diff to a file
  headstamp --save-diff changes.diff -f LICENSE.txt -i \"Copyright\" src/main.rs

  # Wrap the header in region markers
  headstamp --region \"license\" -f LICENSE.txt -i \"Copyright\" src/main.rs

  # Pin the template year instead of using the current one
  headstamp --year 2024 -f LICENSE.txt -i \"Copyright\" src/main.rs
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub args: ApplyArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
