//! # headstamp
//!
//! A tool that stamps a copyright license header into the top of a source file.
//!
//! `headstamp` modifies a single file in place and avoids touching any file that already
//! carries a qualifying header. It follows the Unix philosophy of tooling where possible
//! and is designed with modern Rust best practices for CLI tools.
//!
//! ## Features
//!
//! * Insert a freshly formatted license header at the top of a source file
//! * Replace an existing header that matches the configured identifier markers
//! * Shebang lines stay on line one, with blank-line spacing handled for you
//! * Check-only mode to verify headers without modifying files
//! * Optional `#region` markers wrapped around the header
//! * Diff output for pending changes, printed to stderr or saved to a file
//! * Optional `.headstamp.toml` config file for per-project defaults
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headstamp::header::SpliceConfig;
//! use headstamp::processor::{Processor, ProcessorConfig};
//! use headstamp::template::{LicenseData, LicenseTemplate};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load the license template and substitute the year
//!     let template = LicenseTemplate::load(Path::new("LICENSE.txt"))?;
//!     let template_lines = template.render(&LicenseData {
//!         year: "2025".to_string(),
//!     });
//!
//!     // Create a processor that adds headers but keeps existing ones
//!     let processor = Processor::new(ProcessorConfig {
//!         splice_config: SpliceConfig {
//!             comment_symbol: "//".to_string(),
//!             identifiers: vec!["Copyright".to_string()],
//!             region_name: None,
//!             replace_existing: false,
//!         },
//!         template_lines,
//!         check_only: false,
//!         diff_manager: None,
//!     });
//!
//!     // Process a single file
//!     let action = processor.process_file(Path::new("src/main.rs"))?;
//!     println!("{action:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`header`] - Core header location, formatting, and splicing
//! * [`processor`] - File-level read, splice, and write-if-different flow
//! * [`template`] - License template loading and `{{year}}` substitution
//! * [`config`] - Optional `.headstamp.toml` defaults
//! * [`logging`] - Logging utilities for verbose output
//! * [`diff`] - Diff rendering for pending changes
//!
//! [`header`]: crate::header
//! [`processor`]: crate::processor
//! [`template`]: crate::template
//! [`config`]: crate::config
//! [`logging`]: crate::logging
//! [`diff`]: crate::diff

// Re-export modules for public API
pub mod cli;
pub mod config;
pub mod diff;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod template;

// Re-export macros
// Note: We don't re-export the macros here since they're already defined in the logging module
// and would cause redefinition errors
