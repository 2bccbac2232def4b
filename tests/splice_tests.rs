use headstamp::header::{Splice, SpliceConfig, splice};

fn lines(raw: &[&str]) -> Vec<String> {
  raw.iter().map(|s| (*s).to_string()).collect()
}

// The short identifier "C" mirrors how callers pick a distinctive substring
// of their license text; a block qualifies only when it contains it.
fn splice_config(replace_existing: bool) -> SpliceConfig {
  SpliceConfig {
    comment_symbol: "//".to_string(),
    identifiers: vec!["C".to_string()],
    region_name: None,
    replace_existing,
  }
}

#[test]
fn test_insert_into_empty_file() {
  let result = splice(&[], &lines(&["1", "2"]), &splice_config(false));

  assert_eq!(result, Splice::Insert(lines(&["// 1", "// 2"])));
}

#[test]
fn test_insert_with_region_markers() {
  let config = SpliceConfig {
    region_name: Some("header".to_string()),
    ..splice_config(false)
  };

  let result = splice(&[], &lines(&["1", "2"]), &config);

  assert_eq!(
    result,
    Splice::Insert(lines(&["#region header", "// 1", "// 2", "#endregion header"]))
  );
}

#[test]
fn test_insert_above_content() {
  let result = splice(&lines(&["content"]), &lines(&["1", "2"]), &splice_config(false));

  // A blank line separates the new header from the original first line
  assert_eq!(result, Splice::Insert(lines(&["// 1", "// 2", "", "content"])));
}

#[test]
fn test_replace_block_spanning_whole_file() {
  let input = lines(&["// 1", "// C 2", "// 3"]);

  let result = splice(&input, &lines(&["1", "2"]), &splice_config(true));

  assert_eq!(result, Splice::Replace(lines(&["// 1", "// 2"])));
}

#[test]
fn test_replace_forces_blank_line_before_code() {
  let input = lines(&["// 1", "// C 2", "// 3", "4"]);

  let result = splice(&input, &lines(&["1", "2"]), &splice_config(true));

  assert_eq!(result, Splice::Replace(lines(&["// 1", "// 2", "", "4"])));
}

#[test]
fn test_replace_reuses_existing_blank_line() {
  let input = lines(&["// 1", "// C 2", "// 3", "", "4"]);

  let result = splice(&input, &lines(&["1", "2"]), &splice_config(true));

  // Exactly one blank line between header and code, not two
  assert_eq!(result, Splice::Replace(lines(&["// 1", "// 2", "", "4"])));
}

#[test]
fn test_unrecognized_comment_block_stays_below_new_header() {
  // The leading comment block lacks the identifier, so even with replacement
  // enabled the new header goes above it
  let input = lines(&["// 3", "// 4", "5"]);

  let result = splice(&input, &lines(&["1", "2"]), &splice_config(true));

  assert_eq!(result, Splice::Insert(lines(&["// 1", "// 2", "", "// 3", "// 4", "5"])));
}

#[test]
fn test_insert_after_shebang() {
  let template = lines(&["3", "4"]);
  let expected = Splice::Insert(lines(&["#!bb", "", "// 3", "// 4", "", "// 1", "2"]));

  let result = splice(&lines(&["#!bb", "// 1", "2"]), &template, &splice_config(true));
  assert_eq!(result, expected);

  // An existing blank line after the shebang is reused, not doubled
  let result = splice(&lines(&["#!bb", "", "// 1", "2"]), &template, &splice_config(true));
  assert_eq!(result, expected);
}

#[test]
fn test_insert_into_shebang_only_file() {
  let result = splice(&lines(&["#!bb"]), &lines(&["3", "4"]), &splice_config(true));

  assert_eq!(result, Splice::Insert(lines(&["#!bb", "", "// 3", "// 4"])));
}

#[test]
fn test_insert_between_shebang_and_code() {
  let result = splice(&lines(&["#!bb", "1"]), &lines(&["3", "4"]), &splice_config(true));

  assert_eq!(result, Splice::Insert(lines(&["#!bb", "", "// 3", "// 4", "", "1"])));
}

#[test]
fn test_replace_header_that_follows_shebang() {
  let template = lines(&["3", "4"]);
  let expected = Splice::Replace(lines(&["#!bb", "", "// 3", "// 4"]));

  let result = splice(&lines(&["#!bb", "// C"]), &template, &splice_config(true));
  assert_eq!(result, expected);

  let result = splice(&lines(&["#!bb", "// C", "// 1"]), &template, &splice_config(true));
  assert_eq!(result, expected);
}

#[test]
fn test_replace_keeps_blank_framing_after_shebang() {
  let template = lines(&["3", "4"]);

  let result = splice(&lines(&["#!bb", "", "// C", "", "1", "2"]), &template, &splice_config(true));
  assert_eq!(result, Splice::Replace(lines(&["#!bb", "", "// 3", "// 4", "", "1", "2"])));

  let result = splice(&lines(&["#!bb", "", "// C"]), &template, &splice_config(true));
  assert_eq!(result, Splice::Replace(lines(&["#!bb", "", "// 3", "// 4"])));
}

#[test]
fn test_qualifying_header_is_kept_without_replace() {
  let input = lines(&["// C", "code"]);

  let result = splice(&input, &lines(&["1", "2"]), &splice_config(false));

  assert_eq!(result, Splice::Keep);
  assert_eq!(result.lines(), None);
}

#[test]
fn test_all_identifiers_must_match() {
  let config = SpliceConfig {
    identifiers: vec!["C".to_string(), "X".to_string()],
    ..splice_config(true)
  };

  // "X" never occurs, so the block does not qualify as a license header
  let result = splice(&lines(&["// C", "1"]), &lines(&["1", "2"]), &config);

  assert_eq!(result, Splice::Insert(lines(&["// 1", "// 2", "", "// C", "1"])));
}

#[test]
fn test_inserted_header_is_found_on_the_next_run() {
  let template = lines(&["Copyright (c) 2025 Example Corp", "All rights reserved."]);
  let config = SpliceConfig {
    comment_symbol: "//".to_string(),
    identifiers: vec!["Copyright".to_string()],
    region_name: None,
    replace_existing: true,
  };

  let Splice::Insert(first_pass) = splice(&lines(&["fn main() {}"]), &template, &config) else {
    panic!("expected the first pass to insert a header");
  };

  // Running again replaces the header with identical content
  let second_pass = splice(&first_pass, &template, &config);
  assert_eq!(second_pass, Splice::Replace(first_pass));
}

#[test]
fn test_region_wrapped_header_is_found_on_the_next_run() {
  let template = lines(&["Copyright (c) 2025 Example Corp"]);
  let config = SpliceConfig {
    comment_symbol: "//".to_string(),
    identifiers: vec!["Copyright".to_string()],
    region_name: Some("license".to_string()),
    replace_existing: true,
  };

  let Splice::Insert(first_pass) = splice(&lines(&["fn main() {}"]), &template, &config) else {
    panic!("expected the first pass to insert a header");
  };
  assert_eq!(first_pass[0], "#region license");

  // The region markers are part of the comment block, so the header is
  // located again in full
  let second_pass = splice(&first_pass, &template, &config);
  assert_eq!(second_pass, Splice::Replace(first_pass));
}
