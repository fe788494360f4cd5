//! POSIX signal flags for the run loop
//!
//! Handlers do nothing but set atomic flags; the run loop polls and
//! clears them between events. The runner reacts to three signals:
//! SIGINT interrupts the run, SIGUSR2 requests a premature abort with
//! regular cleanup, SIGUSR1 requests an on-demand status line.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::error::PlatformError;

/// Flags raised by signal handlers, consumed by the run loop
#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    interrupt: Arc<AtomicBool>,
    abort: Arc<AtomicBool>,
    report: Arc<AtomicBool>,
}

impl SignalFlags {
    /// Create detached flags that no handler writes to
    ///
    /// Used by tests and by callers that drive the run loop without
    /// installing process-wide handlers.
    pub fn detached() -> Self {
        Self::default()
    }

    /// True once after SIGINT was received
    pub fn take_interrupt(&self) -> bool {
        self.interrupt.swap(false, Ordering::SeqCst)
    }

    /// True once after SIGUSR2 was received
    pub fn take_abort(&self) -> bool {
        self.abort.swap(false, Ordering::SeqCst)
    }

    /// True once after SIGUSR1 was received
    pub fn take_report(&self) -> bool {
        self.report.swap(false, Ordering::SeqCst)
    }

    pub fn raise_interrupt(&self) {
        self.interrupt.store(true, Ordering::SeqCst);
    }

    pub fn raise_abort(&self) {
        self.abort.store(true, Ordering::SeqCst);
    }

    pub fn raise_report(&self) {
        self.report.store(true, Ordering::SeqCst);
    }
}

static INSTALLED: OnceLock<SignalFlags> = OnceLock::new();

#[cfg(unix)]
extern "C" fn on_signal(signum: libc::c_int) {
    // Only atomic stores happen here; anything else is off-limits in a
    // signal handler.
    if let Some(flags) = INSTALLED.get() {
        match signum {
            libc::SIGINT => flags.interrupt.store(true, Ordering::SeqCst),
            libc::SIGUSR1 => flags.report.store(true, Ordering::SeqCst),
            libc::SIGUSR2 => flags.abort.store(true, Ordering::SeqCst),
            _ => {}
        }
    }
}

/// Install the process-wide signal handlers and return their flags
///
/// Idempotent: repeated calls return handles to the same flags. On
/// non-unix targets no handlers are installed and the returned flags
/// are never raised by the system.
pub fn install_signal_flags() -> Result<SignalFlags, PlatformError> {
    let flags = INSTALLED.get_or_init(SignalFlags::default).clone();

    #[cfg(unix)]
    {
        use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

        let action = SigAction::new(
            SigHandler::Handler(on_signal),
            SaFlags::SA_RESTART,
            SigSet::empty(),
        );

        for signal in [Signal::SIGINT, Signal::SIGUSR1, Signal::SIGUSR2] {
            unsafe {
                sigaction(signal, &action).map_err(|e| PlatformError::SignalHandler {
                    signal: signal.to_string(),
                    message: e.to_string(),
                })?;
            }
        }

        tracing::debug!("signal handlers installed for SIGINT, SIGUSR1, SIGUSR2");
    }

    Ok(flags)
}
