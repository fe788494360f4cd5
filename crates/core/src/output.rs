//! Output-directory preparation strategies
//!
//! Before a run starts, the configured strategy brings the output
//! directory into a writable, empty state. `move` keeps previous
//! results by renaming the old directory to a timestamped name;
//! `delete` discards them. Strategies are selected by their config
//! name.

use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use tracing::info;

use crate::error::CoreError;
use crate::Result;

/// Brings the output directory into a fresh state
pub trait OutputPreparationStrategy {
    fn prepare(&self, path: &Path) -> Result<()>;
}

/// Rename an existing output directory out of the way, then recreate it
///
/// The old directory keeps its contents under `<path>.<mtime>`, with
/// the modification time rendered as an RFC 3339 stamp.
pub struct MoveAside;

impl OutputPreparationStrategy for MoveAside {
    fn prepare(&self, path: &Path) -> Result<()> {
        match std::fs::symlink_metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Nothing to move
            }
            Err(e) => {
                return Err(CoreError::OutputDirAccess {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
            Ok(metadata) => {
                let mtime = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                let stamp = humantime::format_rfc3339_seconds(mtime);

                let mut aside = path.as_os_str().to_os_string();
                aside.push(format!(".{stamp}"));

                info!("moving previous output to {}", aside.to_string_lossy());
                std::fs::rename(path, &aside)?;
            }
        }

        std::fs::create_dir_all(path)?;
        Ok(())
    }
}

/// Remove the output directory and recreate it empty
pub struct Delete;

impl OutputPreparationStrategy for Delete {
    fn prepare(&self, path: &Path) -> Result<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(CoreError::OutputDirAccess {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        }

        std::fs::create_dir_all(path)?;
        Ok(())
    }
}

/// Look up a strategy by its configuration name
pub fn strategy_for(name: &str) -> Result<Box<dyn OutputPreparationStrategy>> {
    match name {
        "move" => Ok(Box::new(MoveAside)),
        "delete" => Ok(Box::new(Delete)),
        other => Err(CoreError::UnknownOutputStrategy(other.to_string())),
    }
}
