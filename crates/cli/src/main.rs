use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::{cmd_check, cmd_run, cmd_show, cmd_status};

/// openwns - simulation runner and build environment tooling
#[derive(Parser)]
#[command(name = "wns")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run a simulation
  Run {
    /// Path to the simulation config (default: config.lua)
    #[arg(default_value = "config.lua")]
    config: PathBuf,

    /// Patch the configuration with a Lua expression (repeatable)
    #[arg(short = 'y', long = "patch-config", value_name = "EXPR")]
    patch: Vec<String>,
  },

  /// Evaluate a build environment fragment and print its descriptor
  Show {
    /// Path to the fragment
    fragment: PathBuf,

    /// Print the descriptor as JSON
    #[arg(long)]
    json: bool,
  },

  /// Validate build environment fragments
  Check {
    /// Fragment files to validate
    #[arg(required = true)]
    fragments: Vec<PathBuf>,
  },

  /// Show runner and host information
  Status,
}

fn main() -> Result<()> {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Run { config, patch } => cmd_run(&config, &patch, cli.verbose),
    Commands::Show { fragment, json } => cmd_show(&fragment, json),
    Commands::Check { fragments } => cmd_check(&fragments),
    Commands::Status => cmd_status(cli.verbose),
  }
}
