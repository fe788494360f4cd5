//! Lua configuration evaluation

use crate::error::EvalError;
use crate::globals::{
    setup_build_env_function, setup_rcs_table, setup_simulation_function, setup_wns_global,
};
use crate::settings::SimSettings;
use crate::types::BuildEnv;
use mlua::{Lua, Value};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::debug;
use wns_platform::HostInfo;

/// Context for evaluating a configuration script
pub struct EvalContext {
    /// Host information exposed to scripts as the `wns` table
    pub host: HostInfo,
}

impl EvalContext {
    pub fn new() -> Self {
        Self {
            host: HostInfo::current(),
        }
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a build environment fragment and return its descriptor
///
/// The fragment constructs a descriptor with `build_env{}` and hands it
/// back with `return` — the counterpart of the orchestrator receiving
/// the configured environment. A fragment that returns anything else is
/// rejected.
pub fn evaluate_build_env(path: &Path) -> Result<BuildEnv, EvalError> {
    if !path.exists() {
        return Err(EvalError::ConfigNotFound(path.display().to_string()));
    }

    let source = std::fs::read_to_string(path)?;
    let ctx = EvalContext::new();

    eval_fragment(&source, &path.display().to_string(), &ctx)
}

/// Evaluate a build environment fragment from a string
///
/// This is useful for testing or when the fragment is embedded.
pub fn evaluate_build_env_str(source: &str, ctx: &EvalContext) -> Result<BuildEnv, EvalError> {
    eval_fragment(source, "fragment", ctx)
}

fn eval_fragment(source: &str, chunk_name: &str, ctx: &EvalContext) -> Result<BuildEnv, EvalError> {
    debug!(fragment = chunk_name, "evaluating build environment fragment");

    let lua = Lua::new();

    setup_wns_global(&lua, &ctx.host)?;
    setup_build_env_function(&lua)?;
    setup_rcs_table(&lua)?;

    let value = lua.load(source).set_name(chunk_name).eval::<Value>()?;

    match value {
        Value::UserData(user_data) if user_data.is::<BuildEnv>() => {
            Ok(user_data.borrow::<BuildEnv>()?.clone())
        }
        _ => Err(EvalError::EnvironmentNotReturned(chunk_name.to_string())),
    }
}

/// Evaluate a simulation config and apply patch expressions
///
/// Patches are Lua chunks run in the same state after the config script;
/// they typically call `simulation{}` again to override single knobs.
pub fn evaluate_sim_config(path: &Path, patches: &[String]) -> Result<SimSettings, EvalError> {
    if !path.exists() {
        return Err(EvalError::ConfigNotFound(path.display().to_string()));
    }

    let source = std::fs::read_to_string(path)?;
    let ctx = EvalContext::new();

    evaluate_sim_config_str(&source, patches, &ctx)
}

/// Evaluate a simulation config from a string
pub fn evaluate_sim_config_str(
    source: &str,
    patches: &[String],
    ctx: &EvalContext,
) -> Result<SimSettings, EvalError> {
    let lua = Lua::new();

    setup_wns_global(&lua, &ctx.host)?;

    let settings = Rc::new(RefCell::new(SimSettings::default()));
    setup_simulation_function(&lua, settings.clone())?;

    lua.load(source).set_name("config").exec()?;

    for patch in patches {
        debug!(patch, "applying config patch");
        lua.load(patch.as_str())
            .set_name("patch")
            .exec()
            .map_err(|e| EvalError::Patch {
                expr: patch.clone(),
                message: e.to_string(),
            })?;
    }

    let settings = settings.borrow().clone();
    Ok(settings)
}
