//! The run fingerprint
//!
//! A small JSON record dropped into the output directory before the run
//! starts, tying the results to the exact configuration (by digest),
//! the host and the runner version that produced them.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use wns_platform::HostInfo;

use crate::Result;

pub const FINGERPRINT_FILE_NAME: &str = "fingerprint";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fingerprint {
    pub program: String,
    pub version: String,
    pub platform: String,
    pub hostname: String,
    pub username: String,
    pub config_file: PathBuf,
    pub config_sha256: String,
    pub patches: Vec<String>,
    pub started_at: String,
}

impl Fingerprint {
    /// Collect the fingerprint for a run of `config_path` with the
    /// given patch expressions
    pub fn collect(program: &str, config_path: &Path, patches: &[String]) -> Result<Self> {
        let source = std::fs::read_to_string(config_path)?;
        let digest = Sha256::digest(source.as_bytes());
        let host = HostInfo::current();

        Ok(Self {
            program: program.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: host.platform_string(),
            hostname: host.hostname,
            username: host.username,
            config_file: config_path.to_path_buf(),
            config_sha256: hex::encode(digest),
            patches: patches.to_vec(),
            started_at: humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
        })
    }

    /// Write the fingerprint into the prepared output directory
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(FINGERPRINT_FILE_NAME);
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
