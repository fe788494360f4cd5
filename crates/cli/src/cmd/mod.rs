mod check;
mod run;
mod show;
mod status;

pub use check::cmd_check;
pub use run::cmd_run;
pub use show::cmd_show;
pub use status::cmd_status;

// Helper to convert CoreError to anyhow::Error (works around mlua not being Send+Sync)
pub(crate) fn map_core_err<T>(result: wns_core::Result<T>) -> anyhow::Result<T> {
  result.map_err(|e| anyhow::anyhow!("{}", e))
}
