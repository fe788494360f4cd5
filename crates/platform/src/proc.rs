//! Process introspection via the proc filesystem
//!
//! The status report embeds two figures from the running process: its
//! virtual memory usage and the raw `/proc/self/status` table. Both are
//! Linux-only; on other systems the readers return nothing and the
//! report sections are simply absent.

use crate::error::PlatformError;

/// Virtual memory usage of the current process in kB
///
/// Reads the first field of `/proc/self/statm` (total program size in
/// pages) and multiplies by the system page size.
#[cfg(target_os = "linux")]
pub fn memory_usage_kb() -> Result<Option<u64>, PlatformError> {
    let statm = std::fs::read_to_string("/proc/self/statm")?;

    let pages: u64 = match statm.split_whitespace().next() {
        Some(field) => field
            .parse()
            .map_err(|_| PlatformError::InvalidPath(format!("unparsable statm field: {field}")))?,
        None => return Ok(None),
    };

    // /proc/self/statm counts in pages
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if page_size <= 0 {
        return Ok(None);
    }

    Ok(Some(pages * page_size as u64 / 1024))
}

#[cfg(not(target_os = "linux"))]
pub fn memory_usage_kb() -> Result<Option<u64>, PlatformError> {
    Ok(None)
}

/// Raw lines of `/proc/self/status`, as the kernel reports them
#[cfg(target_os = "linux")]
pub fn proc_status_lines() -> Result<Vec<String>, PlatformError> {
    let status = std::fs::read_to_string("/proc/self/status")?;
    Ok(status.lines().map(str::to_string).collect())
}

#[cfg(not(target_os = "linux"))]
pub fn proc_status_lines() -> Result<Vec<String>, PlatformError> {
    Ok(Vec::new())
}
