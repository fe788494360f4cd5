//! Simulation control
//!
//! Owns the control-event timeline of a run: the shutdown scheduled at
//! max sim time, the periodic mark, and premature aborts injected by
//! signal. The run loop is synchronous and single-threaded; signal
//! handlers only raise flags which are polled here between events.

use tracing::{debug, info};
use wns_lua::SimSettings;
use wns_platform::SignalFlags;

use crate::error::CoreError;
use crate::status::StatusReport;
use crate::timeline::{ControlEvent, EventTimeline};
use crate::Result;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    /// Simulated time at which the run stopped
    pub end_time: f64,
    /// True if the run was ended by an abort request instead of
    /// reaching max sim time
    pub premature_abort: bool,
}

/// Drives a run from start to shutdown
pub struct SimControl {
    timeline: EventTimeline,
    mark_interval: f64,
    fast_shutdown: bool,
    premature_abort: bool,
}

impl SimControl {
    pub fn new(settings: &SimSettings) -> Self {
        let mut timeline = EventTimeline::new();

        // The end of the run is a regular event; max_sim_time 0 means
        // the run ends right at the start.
        timeline.schedule_in(settings.max_sim_time.max(0.0), ControlEvent::Shutdown);
        timeline.schedule_in(settings.mark_interval, ControlEvent::Mark);

        Self {
            timeline,
            mark_interval: settings.mark_interval,
            fast_shutdown: settings.fast_shutdown,
            premature_abort: false,
        }
    }

    /// Current simulated time in seconds
    pub fn time(&self) -> f64 {
        self.timeline.time()
    }

    /// End the run now, with the regular shutdown path
    ///
    /// Everything behaves as if max sim time had been reached; the
    /// caller maps the outcome to exit status 2.
    pub fn request_abort(&mut self) {
        if self.timeline.is_stopped() || self.premature_abort {
            return;
        }
        info!("premature abort: scheduling shutdown now");
        self.timeline.schedule_now(ControlEvent::Shutdown);
        self.premature_abort = true;
    }

    /// Process control events until shutdown
    pub fn run(&mut self, status: &mut StatusReport, signals: &SignalFlags) -> Result<RunOutcome> {
        info!("simulation started");

        loop {
            if signals.take_interrupt() {
                return Err(CoreError::Interrupted);
            }
            if signals.take_abort() {
                self.request_abort();
            }
            if signals.take_report() {
                info!("current simulation time: {} [s]", self.timeline.time());
            }

            match self.timeline.next() {
                None => break,
                Some((_, ControlEvent::Mark)) => {
                    debug!("--- MARK ---");
                    self.timeline
                        .schedule_in(self.mark_interval, ControlEvent::Mark);
                }
                Some((time, ControlEvent::Shutdown)) => {
                    status.stop();
                    if self.fast_shutdown {
                        info!(sim_time = time, "fast shutdown ... bye");
                    } else {
                        info!(
                            sim_time = time,
                            "stopping timeline - final events are now being processed"
                        );
                    }
                    self.timeline.stop();
                }
            }

            status.offer_periodic(self.timeline.time());
        }

        Ok(RunOutcome {
            end_time: self.timeline.time(),
            premature_abort: self.premature_abort,
        })
    }
}
