//! Run command implementation.
//!
//! Evaluates the simulation config, prepares the output directory, drops
//! the fingerprint and drives the run to its end. Exit status follows
//! the runner contract: 0 for a regular end, 1 for errors and
//! interrupts, 2 for a premature abort.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use wns_core::{load_sim_config, strategy_for, CoreError, Fingerprint, SimControl, StatusReport};
use wns_platform::install_signal_flags;

use crate::cmd::map_core_err;
use crate::output::{format_duration, print_error, print_info, print_stat, print_success, print_warning};

pub fn cmd_run(config: &Path, patches: &[String], verbose: bool) -> Result<()> {
  if !config.exists() {
    print_error(&format!("Config file not found: {}", config.display()));
    std::process::exit(1);
  }

  let config = dunce::canonicalize(config)?;
  let started = Instant::now();

  print_info(&format!("Evaluating {}", config.display()));

  let settings = match load_sim_config(&config, patches) {
    Ok(settings) => settings,
    Err(e) => {
      print_error(&format!("Failed to evaluate config: {}", e));
      std::process::exit(1);
    }
  };

  if verbose {
    print_stat("Max sim time", &format!("{} s", settings.max_sim_time));
    print_stat("Output dir", &settings.output_dir.display().to_string());
    print_stat("Output strategy", &settings.output_strategy);
    print_stat(
      "Status interval",
      &format!("{} s", settings.status_write_interval),
    );
  }

  // Prepare the output directory before anything is written into it
  let strategy = map_core_err(strategy_for(&settings.output_strategy))?;
  map_core_err(strategy.prepare(&settings.output_dir))?;
  debug!("output directory prepared at {}", settings.output_dir.display());

  let fingerprint = map_core_err(Fingerprint::collect("wns", &config, patches))?;
  map_core_err(fingerprint.write(&settings.output_dir))?;

  let signals = map_core_err(install_signal_flags().map_err(CoreError::Platform))?;

  let mut status = StatusReport::new(&settings);
  map_core_err(status.start())?;

  let mut control = SimControl::new(&settings);
  let outcome = match control.run(&mut status, &signals) {
    Ok(outcome) => outcome,
    Err(CoreError::Interrupted) => {
      print_error("Interrupted");
      std::process::exit(1);
    }
    Err(e) => {
      print_error(&format!("{}", e));
      std::process::exit(1);
    }
  };

  if !settings.fast_shutdown {
    map_core_err(status.finish(outcome.end_time))?;
  }

  print_success(&format!(
    "Simulation ended at t={} s ({})",
    outcome.end_time,
    format_duration(started.elapsed())
  ));

  if outcome.premature_abort {
    print_warning("Simulation was aborted prematurely");
    std::process::exit(2);
  }

  Ok(())
}
