//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, the per-fragment check lines, and byte/duration formatting.

use std::time::Duration;

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const TEST: &str = "[TST]";
  pub const OK: &str = "[OK]";
  pub const FAILED: &str = "[FAILED]";
}

/// Column the check verdict is aligned to
const CHECK_NAME_WIDTH: usize = 60;

pub fn format_bytes(bytes: u64) -> String {
  const KB: u64 = 1024;
  const MB: u64 = KB * 1024;
  const GB: u64 = MB * 1024;

  if bytes >= GB {
    format!("{:.1} GB", bytes as f64 / GB as f64)
  } else if bytes >= MB {
    format!("{:.1} MB", bytes as f64 / MB as f64)
  } else if bytes >= KB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else {
    format!("{} B", bytes)
  }
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// One aligned line per checked fragment, verdict at the end
pub fn print_check_line(name: &str, ok: bool) {
  let padding = pad_for(name);
  let verdict = if ok {
    format!("{}", symbols::OK.if_supports_color(Stream::Stdout, |s| s.green()))
  } else {
    format!("{}", symbols::FAILED.if_supports_color(Stream::Stdout, |s| s.red()))
  };

  println!(
    "{} {}{}{}",
    symbols::TEST.if_supports_color(Stream::Stdout, |s| s.magenta()),
    name,
    padding,
    verdict
  );
}

fn pad_for(name: &str) -> String {
  let used = name.chars().count();
  " ".repeat(CHECK_NAME_WIDTH.saturating_sub(used).max(1))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
