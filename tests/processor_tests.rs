use std::fs;

use anyhow::Result;
use headstamp::diff::DiffManager;
use headstamp::header::SpliceConfig;
use headstamp::processor::{HeaderAction, Processor, ProcessorConfig};
use headstamp::template::{LicenseData, LicenseTemplate};
use tempfile::tempdir;

fn create_test_processor(template_content: &str, replace_existing: bool, check_only: bool) -> Processor {
  let template = LicenseTemplate::from_text(template_content);
  let template_lines = template.render(&LicenseData {
    year: "2025".to_string(),
  });

  Processor::new(ProcessorConfig {
    splice_config: SpliceConfig {
      comment_symbol: "//".to_string(),
      identifiers: vec!["Copyright".to_string()],
      region_name: None,
      replace_existing,
    },
    template_lines,
    check_only,
    diff_manager: None,
  })
}

#[test]
fn test_adds_header_to_file() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  fs::write(&file_path, "fn main() {}\n")?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", false, false);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::Added);
  let content = fs::read_to_string(&file_path)?;
  assert_eq!(content, "// Copyright (c) 2025 Test Co\n\nfn main() {}\n");

  Ok(())
}

#[test]
fn test_keeps_existing_header_without_replace() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  let original = "// Copyright (c) 2020 Test Co\n\nfn main() {}\n";
  fs::write(&file_path, original)?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", false, false);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::Kept);
  assert_eq!(fs::read_to_string(&file_path)?, original);

  Ok(())
}

#[test]
fn test_replaces_stale_header() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  fs::write(&file_path, "// Copyright (c) 2020 Test Co\n\nfn main() {}\n")?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", true, false);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::Replaced);
  let content = fs::read_to_string(&file_path)?;
  assert_eq!(content, "// Copyright (c) 2025 Test Co\n\nfn main() {}\n");

  Ok(())
}

#[test]
fn test_current_header_is_not_rewritten() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");

  // No trailing newline: an untouched file keeps its exact bytes
  let original = "// Copyright (c) 2025 Test Co\n\nfn main() {}";
  fs::write(&file_path, original)?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", true, false);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::UpToDate);
  assert_eq!(fs::read_to_string(&file_path)?, original);

  Ok(())
}

#[test]
fn test_crlf_file_with_current_header_is_left_alone() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  let original = "// Copyright (c) 2025 Test Co\r\n\r\nfn main() {}\r\n";
  fs::write(&file_path, original)?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", true, false);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::UpToDate);
  assert_eq!(fs::read_to_string(&file_path)?, original);

  Ok(())
}

#[test]
fn test_check_mode_reports_missing_header_without_writing() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  let original = "fn main() {}\n";
  fs::write(&file_path, original)?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", false, true);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::WouldAdd);
  assert_eq!(fs::read_to_string(&file_path)?, original);

  Ok(())
}

#[test]
fn test_check_mode_reports_stale_header_without_writing() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  let original = "// Copyright (c) 2020 Test Co\n\nfn main() {}\n";
  fs::write(&file_path, original)?;

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", true, true);
  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::WouldReplace);
  assert_eq!(fs::read_to_string(&file_path)?, original);

  Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
  let temp_dir = tempdir().expect("temp dir");
  let file_path = temp_dir.path().join("missing.rs");

  let processor = create_test_processor("Copyright (c) {{year}} Test Co", false, false);
  let error = processor.process_file(&file_path).unwrap_err();

  assert!(error.to_string().contains("Failed to read file"));
}

#[test]
fn test_shebang_script_keeps_directive_on_first_line() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("deploy.sh");
  fs::write(&file_path, "#!/bin/sh\necho hi\n")?;

  let template = LicenseTemplate::from_text("Copyright (c) {{year}} Test Co");
  let template_lines = template.render(&LicenseData {
    year: "2025".to_string(),
  });
  let processor = Processor::new(ProcessorConfig {
    splice_config: SpliceConfig {
      comment_symbol: "#".to_string(),
      identifiers: vec!["Copyright".to_string()],
      region_name: None,
      replace_existing: false,
    },
    template_lines,
    check_only: false,
    diff_manager: None,
  });

  let action = processor.process_file(&file_path)?;

  assert_eq!(action, HeaderAction::Added);
  let content = fs::read_to_string(&file_path)?;
  assert_eq!(content, "#!/bin/sh\n\n# Copyright (c) 2025 Test Co\n\necho hi\n");

  Ok(())
}

#[test]
fn test_diff_is_written_to_save_file() -> Result<()> {
  let temp_dir = tempdir()?;
  let file_path = temp_dir.path().join("main.rs");
  fs::write(&file_path, "fn main() {}\n")?;

  let diff_path = temp_dir.path().join("changes.diff");
  let diff_manager = DiffManager::new(false, Some(diff_path.clone()));
  diff_manager.init()?;

  let template = LicenseTemplate::from_text("Copyright (c) {{year}} Test Co");
  let template_lines = template.render(&LicenseData {
    year: "2025".to_string(),
  });
  let processor = Processor::new(ProcessorConfig {
    splice_config: SpliceConfig {
      comment_symbol: "//".to_string(),
      identifiers: vec!["Copyright".to_string()],
      region_name: None,
      replace_existing: false,
    },
    template_lines,
    check_only: true,
    diff_manager: Some(diff_manager),
  });

  let action = processor.process_file(&file_path)?;
  assert_eq!(action, HeaderAction::WouldAdd);

  // The file itself is untouched in check mode, but the diff is captured
  assert_eq!(fs::read_to_string(&file_path)?, "fn main() {}\n");
  let diff = fs::read_to_string(&diff_path)?;
  assert!(diff.contains("+// Copyright (c) 2025 Test Co"));
  assert!(diff.contains(" fn main() {}"));

  Ok(())
}
