//! Status command implementation.
//!
//! Displays runner version and host identity, plus process figures in
//! verbose mode.

use anyhow::Result;

use wns_platform::{memory_usage_kb, HostInfo};

use crate::output::{format_bytes, print_stat, print_success};

pub fn cmd_status(verbose: bool) -> Result<()> {
  let host = HostInfo::current();

  print_success(&format!("openwns v{}", env!("CARGO_PKG_VERSION")));
  println!();
  print_stat("Platform", &host.platform_string());
  print_stat("OS", host.os.as_str());
  print_stat("Arch", host.arch.as_str());
  print_stat("User", &host.username);
  print_stat("Hostname", &host.hostname);

  if verbose {
    print_stat("Pid", &host.pid.to_string());
    if let Ok(Some(kb)) = memory_usage_kb() {
      print_stat("Memory", &format_bytes(kb * 1024));
    }
  }

  Ok(())
}
