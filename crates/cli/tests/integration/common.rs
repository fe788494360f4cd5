//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name))
    .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own temporary working directory so relative
/// output directories land in an isolated place.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Get a Command for the wns binary, running in the temp directory.
  pub fn wns_cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("wns");
    cmd.current_dir(self.temp.path());
    cmd
  }

  /// Copy a fixture into the temp directory, returning its new path.
  pub fn copy_fixture(&self, name: &str) -> PathBuf {
    let dest = self.temp.path().join(name);
    std::fs::write(&dest, fixture_content(name)).unwrap();
    dest
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Path of the output directory a run with the default configs uses.
  pub fn output_dir(&self) -> PathBuf {
    self.temp.path().join("output")
  }
}
