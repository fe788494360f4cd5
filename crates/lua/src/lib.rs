//! wns-lua: Lua configuration evaluation for openwns
//!
//! Configuration comes in two shapes, both plain Lua scripts:
//!
//! - *Build environment fragments* construct a [`BuildEnv`] descriptor
//!   with `build_env{}` and `return` it to the enclosing orchestrator.
//! - *Simulation configs* call `simulation{}` to set the knobs of a run;
//!   later calls merge over earlier ones, which is also how `-y` patch
//!   expressions work.

mod error;
mod eval;
mod globals;
mod settings;
mod types;

pub use error::EvalError;
pub use eval::{
    evaluate_build_env, evaluate_build_env_str, evaluate_sim_config, evaluate_sim_config_str,
    EvalContext,
};
pub use settings::SimSettings;
pub use types::{BuildEnv, RcsSystem, RevisionControl};
