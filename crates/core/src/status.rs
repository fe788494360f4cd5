//! Status and progress reporting
//!
//! A run maintains two files under its output directory: the status
//! report (human-readable snapshot of the run) and the progress file (a
//! single fraction for campaign tooling to poll). Both are written when
//! the run starts, then on a wall-clock interval, then once more at the
//! end. Failure to create either file at start aborts the run; a failed
//! periodic rewrite is only logged.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use tracing::warn;
use wns_lua::SimSettings;
use wns_platform::{memory_usage_kb, proc_status_lines, HostInfo};

use crate::error::CoreError;
use crate::Result;

/// Writer for the status and progress files of one run
pub struct StatusReport {
    max_sim_time: f64,
    settling_time: f64,
    write_interval: f64,
    status_file: PathBuf,
    progress_file: PathBuf,
    host: HostInfo,
    start_time: SystemTime,
    start_instant: Instant,
    last_write: Option<Instant>,
    running: bool,
}

impl StatusReport {
    pub fn new(settings: &SimSettings) -> Self {
        Self {
            max_sim_time: settings.max_sim_time,
            settling_time: settings.settling_time,
            write_interval: settings.status_write_interval,
            status_file: settings.status_file(),
            progress_file: settings.progress_file(),
            host: HostInfo::current(),
            start_time: SystemTime::now(),
            start_instant: Instant::now(),
            last_write: None,
            running: false,
        }
    }

    /// Create both files and write the initial report
    ///
    /// The output directory must already be prepared; an uncreatable
    /// status or progress file is a hard error.
    pub fn start(&mut self) -> Result<()> {
        self.start_time = SystemTime::now();
        self.start_instant = Instant::now();

        touch(&self.status_file)?;
        touch(&self.progress_file)?;

        self.running = true;
        self.write(false, 0.0)?;
        self.last_write = Some(Instant::now());

        Ok(())
    }

    /// Rewrite the report if the wall-clock interval has elapsed
    ///
    /// Write failures here are logged and swallowed so a full disk or a
    /// vanished directory does not kill a long run mid-flight.
    pub fn offer_periodic(&mut self, sim_time: f64) {
        if !self.running {
            return;
        }

        let due = self
            .last_write
            .map_or(true, |t| t.elapsed().as_secs_f64() >= self.write_interval);
        if !due {
            return;
        }

        if let Err(e) = self.write(false, sim_time) {
            warn!("periodic status write failed: {e}");
        }
        self.last_write = Some(Instant::now());
    }

    /// Stop periodic rewrites
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Write the final report; errors propagate here
    pub fn finish(&mut self, sim_time: f64) -> Result<()> {
        self.running = false;
        self.write(true, sim_time)
    }

    /// Write status and progress files for the given simulated time
    pub fn write(&self, end_of_sim: bool, sim_time: f64) -> Result<()> {
        let report = self.render(end_of_sim, sim_time);
        write_file(&self.status_file, &report)?;

        let progress = if self.max_sim_time > 0.0 {
            (sim_time / self.max_sim_time).clamp(0.0, 1.0)
        } else {
            0.0
        };
        write_file(&self.progress_file, &format!("{progress}"))?;

        Ok(())
    }

    fn render(&self, end_of_sim: bool, sim_time: f64) -> String {
        let mut out = String::new();

        let status = if end_of_sim {
            "Simulation terminated successfully"
        } else {
            "Simulation is still running"
        };

        let _ = writeln!(out, "        openWNS");
        let _ = writeln!(out, "       =========");
        let _ = writeln!(out, "                 Status: {status}");
        let _ = writeln!(
            out,
            "                  Start: {}",
            humantime::format_rfc3339_seconds(self.start_time)
        );
        let _ = writeln!(
            out,
            "                    Now: {}",
            humantime::format_rfc3339_seconds(SystemTime::now())
        );
        let _ = writeln!(
            out,
            "               Duration: {}",
            format_elapsed(self.start_instant.elapsed().as_secs())
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "        Simulation time: {sim_time}");
        let _ = writeln!(out, "   Max. simulation time: {}", self.max_sim_time);
        let _ = writeln!(out, "          Settling time: {}", self.settling_time);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "                   Host: {} ({})",
            self.host.hostname,
            self.host.platform_string()
        );

        if let Ok(Some(kb)) = memory_usage_kb() {
            let _ = writeln!(out, "           Memory usage: {kb} kB");
        }

        let proc_lines = proc_status_lines().unwrap_or_default();
        if !proc_lines.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "The following output is read from /proc/self/status");
            let _ = writeln!(out, "----------------------------------------------------------");
            for line in proc_lines {
                let _ = writeln!(out, "{line}");
            }
        }

        out
    }
}

/// Format elapsed seconds as h:mm:ss
fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

fn touch(path: &Path) -> Result<()> {
    std::fs::File::create(path).map_err(|_| CoreError::StatusWrite {
        path: path.display().to_string(),
    })?;
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|_| CoreError::StatusWrite {
        path: path.display().to_string(),
    })
}
