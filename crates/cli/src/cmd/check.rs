//! Check command implementation.
//!
//! Evaluates each given fragment and prints one aligned verdict line
//! per file. Fragments that fail get their error on the following line;
//! any failure makes the command exit non-zero.

use anyhow::Result;
use std::path::PathBuf;

use wns_core::load_build_env;

use crate::output::{print_check_line, print_error, print_success};

pub fn cmd_check(fragments: &[PathBuf]) -> Result<()> {
  let mut failed = 0usize;

  for path in fragments {
    let name = path.display().to_string();

    match load_build_env(path) {
      Ok(_) => print_check_line(&name, true),
      Err(e) => {
        failed += 1;
        print_check_line(&name, false);
        print_error(&format!("{}", e));
      }
    }
  }

  if failed > 0 {
    print_error(&format!(
      "{} of {} fragment(s) failed",
      failed,
      fragments.len()
    ));
    std::process::exit(1);
  }

  print_success(&format!("{} fragment(s) OK", fragments.len()));
  Ok(())
}
