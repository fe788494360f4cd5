//! Run command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn run_writes_all_output_files() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env
    .wns_cmd()
    .arg("run")
    .arg("config.lua")
    .assert()
    .success()
    .stdout(predicate::str::contains("Simulation ended at t=2"));

  let output = env.output_dir();
  assert!(output.join("WNSStatus.dat").exists());
  assert!(output.join("progress").exists());
  assert!(output.join("fingerprint").exists());
}

#[test]
fn run_reports_successful_termination() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env.wns_cmd().arg("run").arg("config.lua").assert().success();

  let status = std::fs::read_to_string(env.output_dir().join("WNSStatus.dat")).unwrap();
  assert!(status.contains("Simulation terminated successfully"));
  assert!(status.contains("Max. simulation time: 2"));

  let progress: f64 = std::fs::read_to_string(env.output_dir().join("progress"))
    .unwrap()
    .parse()
    .unwrap();
  assert_eq!(progress, 1.0);
}

#[test]
fn run_fingerprint_records_the_config() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env.wns_cmd().arg("run").arg("config.lua").assert().success();

  let fingerprint = std::fs::read_to_string(env.output_dir().join("fingerprint")).unwrap();
  let value: serde_json::Value = serde_json::from_str(&fingerprint).unwrap();

  assert_eq!(value["program"], "wns");
  assert_eq!(value["config_sha256"].as_str().unwrap().len(), 64);
  assert!(value["config_file"].as_str().unwrap().ends_with("config.lua"));
}

#[test]
fn run_move_strategy_keeps_previous_output() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env.wns_cmd().arg("run").arg("config.lua").assert().success();
  env.wns_cmd().arg("run").arg("config.lua").assert().success();

  // The previous output directory was renamed next to the fresh one
  let moved = std::fs::read_dir(env.temp.path())
    .unwrap()
    .filter_map(|e| e.ok())
    .filter(|e| {
      let name = e.file_name();
      let name = name.to_string_lossy();
      name.starts_with("output.")
    })
    .count();
  assert_eq!(moved, 1);
  assert!(env.output_dir().join("WNSStatus.dat").exists());
}

#[test]
fn run_delete_strategy_discards_previous_output() {
  let env = TestEnv::new();
  env.copy_fixture("config_delete.lua");

  env
    .wns_cmd()
    .arg("run")
    .arg("config_delete.lua")
    .assert()
    .success();
  env
    .wns_cmd()
    .arg("run")
    .arg("config_delete.lua")
    .assert()
    .success();

  let moved = std::fs::read_dir(env.temp.path())
    .unwrap()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_name().to_string_lossy().starts_with("output."))
    .count();
  assert_eq!(moved, 0);
}

#[test]
fn run_patch_overrides_config_knob() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env
    .wns_cmd()
    .arg("run")
    .arg("config.lua")
    .arg("-y")
    .arg("simulation { max_sim_time = 0.5 }")
    .assert()
    .success()
    .stdout(predicate::str::contains("Simulation ended at t=0.5"));
}

#[test]
fn run_patch_is_recorded_in_fingerprint() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env
    .wns_cmd()
    .arg("run")
    .arg("config.lua")
    .arg("-y")
    .arg("simulation { max_sim_time = 0.5 }")
    .assert()
    .success();

  let fingerprint = std::fs::read_to_string(env.output_dir().join("fingerprint")).unwrap();
  let value: serde_json::Value = serde_json::from_str(&fingerprint).unwrap();
  assert_eq!(value["patches"][0], "simulation { max_sim_time = 0.5 }");
}

#[test]
fn run_fast_shutdown_skips_final_status_rewrite() {
  let env = TestEnv::new();
  env.write_file(
    "config.lua",
    r#"
    simulation {
        max_sim_time = 1.0,
        output_dir = "output",
        fast_shutdown = true,
    }
    "#,
  );

  env.wns_cmd().arg("run").arg("config.lua").assert().success();

  // Only the initial report was written; the final rewrite is skipped
  let status = std::fs::read_to_string(env.output_dir().join("WNSStatus.dat")).unwrap();
  assert!(status.contains("Simulation is still running"));
}

#[test]
fn run_rejects_unknown_output_strategy() {
  let env = TestEnv::new();
  env.copy_fixture("config_bad_strategy.lua");

  env
    .wns_cmd()
    .arg("run")
    .arg("config_bad_strategy.lua")
    .assert()
    .failure()
    .stderr(predicate::str::contains("archive"));
}

#[test]
fn run_rejects_broken_patch_expression() {
  let env = TestEnv::new();
  env.copy_fixture("config.lua");

  env
    .wns_cmd()
    .arg("run")
    .arg("config.lua")
    .arg("-y")
    .arg("this is not lua")
    .assert()
    .failure()
    .stderr(predicate::str::contains("this is not lua"));
}

#[test]
fn run_missing_config_fails() {
  let env = TestEnv::new();

  env
    .wns_cmd()
    .arg("run")
    .arg("config.lua")
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));
}
