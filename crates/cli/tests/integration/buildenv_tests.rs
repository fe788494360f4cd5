//! Build environment fragment integration tests.

use predicates::prelude::*;

use super::common::{fixture_path, TestEnv};

#[test]
fn show_prints_descriptor_fields() {
  let env = TestEnv::new();

  env
    .wns_cmd()
    .arg("show")
    .arg(fixture_path("common.lua"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Build environment 'openwns'"))
    .stdout(predicate::str::contains("wns-1.0"))
    .stdout(predicate::str::contains("bazaar application--main--1.0"));
}

#[test]
fn show_json_is_parseable() {
  let env = TestEnv::new();

  let assert = env
    .wns_cmd()
    .arg("show")
    .arg(fixture_path("common.lua"))
    .arg("--json")
    .assert()
    .success();

  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(value["project_name"], "openwns");
  assert_eq!(value["auto_deps"][0], "wns");
  assert_eq!(value["shortcuts"], true);
  assert_eq!(value["flat_includes"], false);
  assert_eq!(value["revision_control"]["system"], "bazaar");
}

#[test]
fn show_json_omits_absent_revision_control() {
  let env = TestEnv::new();

  let assert = env
    .wns_cmd()
    .arg("show")
    .arg(fixture_path("common_norcs.lua"))
    .arg("--json")
    .assert()
    .success();

  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert!(value.get("revision_control").is_none());
  assert_eq!(value["project_name"], "openwns");
}

#[test]
fn show_missing_fragment_fails() {
  let env = TestEnv::new();

  env
    .wns_cmd()
    .arg("show")
    .arg("no-such-fragment.lua")
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));
}

#[test]
fn check_passes_all_fragment_variations() {
  let env = TestEnv::new();

  env
    .wns_cmd()
    .arg("check")
    .arg(fixture_path("common.lua"))
    .arg(fixture_path("common_tla.lua"))
    .arg(fixture_path("common_norcs.lua"))
    .arg(fixture_path("common_library.lua"))
    .assert()
    .success()
    .stdout(predicate::str::contains("[OK]"))
    .stdout(predicate::str::contains("4 fragment(s) OK"));
}

#[test]
fn check_flags_fragment_without_return() {
  let env = TestEnv::new();

  env
    .wns_cmd()
    .arg("check")
    .arg(fixture_path("common.lua"))
    .arg(fixture_path("fragment_no_return.lua"))
    .assert()
    .failure()
    .stdout(predicate::str::contains("[FAILED]"))
    .stderr(predicate::str::contains("did not return a build environment"));
}

#[test]
fn check_flags_missing_projname() {
  let env = TestEnv::new();

  env
    .wns_cmd()
    .arg("check")
    .arg(fixture_path("fragment_missing_projname.lua"))
    .assert()
    .failure()
    .stdout(predicate::str::contains("[FAILED]"))
    .stderr(predicate::str::contains("projname"));
}

#[test]
fn show_is_deterministic_across_runs() {
  let env = TestEnv::new();

  let first = env
    .wns_cmd()
    .arg("show")
    .arg(fixture_path("common_tla.lua"))
    .arg("--json")
    .assert()
    .success();
  let second = env
    .wns_cmd()
    .arg("show")
    .arg(fixture_path("common_tla.lua"))
    .arg("--json")
    .assert()
    .success();

  assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
