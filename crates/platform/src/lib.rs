//! Host introspection and system plumbing for the openwns runner
//!
//! This crate provides the pieces of the runner that talk to the
//! operating system:
//! - OS and architecture identification
//! - Process introspection (`/proc/self/status`, memory usage)
//! - Path expansion (`~`) and normalization
//! - POSIX signal flags for the run loop

mod error;
mod paths;
mod platform;
mod proc;
mod signals;

pub use error::PlatformError;
pub use paths::{expand_path, normalize_path};
pub use platform::{Arch, HostInfo, Os};
pub use proc::{memory_usage_kb, proc_status_lines};
pub use signals::{install_signal_flags, SignalFlags};
