//! wns-core: the openwns simulation runner
//!
//! This crate owns everything between an evaluated configuration and a
//! finished run: the control-event timeline, simulation control
//! (scheduled shutdown, premature abort), periodic status reporting,
//! output-directory preparation and the run fingerprint.

mod config;
mod error;
mod fingerprint;
mod output;
mod simctrl;
mod status;
mod timeline;

pub use config::{load_build_env, load_sim_config};
pub use error::CoreError;
pub use fingerprint::Fingerprint;
pub use output::{strategy_for, OutputPreparationStrategy};
pub use simctrl::{RunOutcome, SimControl};
pub use status::StatusReport;
pub use timeline::{ControlEvent, EventTimeline};

// Re-export types from wns-lua for convenience
pub use wns_lua::{BuildEnv, EvalError, RcsSystem, RevisionControl, SimSettings};
// Re-export signal flags from wns-platform
pub use wns_platform::SignalFlags;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
