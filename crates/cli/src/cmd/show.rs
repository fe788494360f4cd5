//! Show command implementation.
//!
//! Evaluates a build environment fragment and prints the descriptor it
//! returned — the same record the enclosing build orchestrator would
//! receive.

use anyhow::Result;
use std::path::Path;

use wns_core::{load_build_env, BuildEnv};

use crate::output::{print_error, print_json, print_stat, print_success};

pub fn cmd_show(fragment: &Path, json: bool) -> Result<()> {
  let env = match load_build_env(fragment) {
    Ok(env) => env,
    Err(e) => {
      print_error(&format!("Failed to evaluate fragment: {}", e));
      std::process::exit(1);
    }
  };

  if json {
    print_json(&env)?;
    return Ok(());
  }

  print_success(&format!("Build environment '{}'", env.project_name));
  print_stat("Auto deps", &list_or_none(&env.auto_deps));
  print_stat("Shortcuts", yes_no(env.shortcuts));
  print_stat("Default version", yes_no(env.default_version));
  print_stat("Binary", yes_no(env.binary));
  print_stat("Flat includes", yes_no(env.flat_includes));
  print_stat("Libs", &list_or_none(&env.libs));
  print_stat("Revision control", &describe_rcs(&env));

  Ok(())
}

fn yes_no(flag: bool) -> &'static str {
  if flag {
    "yes"
  } else {
    "no"
  }
}

fn list_or_none(items: &[String]) -> String {
  if items.is_empty() {
    "(none)".to_string()
  } else {
    items.join(", ")
  }
}

fn describe_rcs(env: &BuildEnv) -> String {
  match &env.revision_control {
    Some(rcs) => format!(
      "{} {}--{}--{} at {}",
      rcs.system, rcs.module, rcs.branch, rcs.version, rcs.path
    ),
    None => "(none)".to_string(),
  }
}
