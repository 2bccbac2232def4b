use std::process::Command;

fn main() {
  embed_git_env("GIT_HASH", &["rev-parse", "--short", "HEAD"]);
  embed_git_env("GIT_DATE", &["log", "-1", "--format=%cs"]);

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}

// Exposes the commit hash and commit date to the version string.
// Skipped silently when Git is unavailable or this is not a repository.
fn embed_git_env(key: &str, args: &[&str]) {
  if let Ok(output) = Command::new("git").args(args).output() {
    let value = String::from_utf8(output.stdout).unwrap_or_default().trim().to_string();
    if !value.is_empty() {
      println!("cargo:rustc-env={key}={value}");
    }
  }
}
