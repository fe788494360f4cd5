//! Configuration loading entry points
//!
//! Thin wrappers over the evaluation layer so callers deal in core
//! errors only.

use std::path::Path;

use wns_lua::{BuildEnv, SimSettings};

use crate::Result;

/// Evaluate a build environment fragment into its descriptor
pub fn load_build_env(path: &Path) -> Result<BuildEnv> {
    Ok(wns_lua::evaluate_build_env(path)?)
}

/// Evaluate a simulation config, applying the given patch expressions
pub fn load_sim_config(path: &Path, patches: &[String]) -> Result<SimSettings> {
    Ok(wns_lua::evaluate_sim_config(path, patches)?)
}
