//! Simulation run settings
//!
//! Accumulated by `simulation{}` calls during config evaluation. A call
//! only touches the keys it names, so a later call (or a `-y` patch
//! expression) overrides single fields while leaving the rest alone.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The knobs of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimSettings {
    /// Simulated end time in seconds; 0 means no scheduled end
    pub max_sim_time: f64,

    /// Settling time in seconds, reported but not acted on by the runner
    pub settling_time: f64,

    /// Directory all run artifacts are written to
    pub output_dir: PathBuf,

    /// Status report file name, relative to the output directory
    pub status_file_name: String,

    /// Wall-clock seconds between status report writes
    pub status_write_interval: f64,

    /// Name of the output-directory preparation strategy
    pub output_strategy: String,

    /// Skip the final status write on shutdown
    pub fast_shutdown: bool,

    /// Simulated seconds between mark log lines
    pub mark_interval: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            max_sim_time: 0.0,
            settling_time: 0.0,
            output_dir: PathBuf::from("output"),
            status_file_name: "WNSStatus.dat".to_string(),
            status_write_interval: 30.0,
            output_strategy: "move".to_string(),
            fast_shutdown: false,
            mark_interval: 1.0,
        }
    }
}

impl SimSettings {
    /// Path of the status report file
    pub fn status_file(&self) -> PathBuf {
        self.output_dir.join(&self.status_file_name)
    }

    /// Path of the progress file
    pub fn progress_file(&self) -> PathBuf {
        self.output_dir.join("progress")
    }
}
