//! The control-event timeline
//!
//! A virtual-time queue of the events simulation control owns. Events
//! pop in time order, FIFO within equal times; the clock advances to
//! each popped event and never moves backwards. `stop` discards
//! everything still pending — final cleanup happens in the run loop,
//! not here.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Events owned by simulation control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Periodic liveness mark in the log
    Mark,
    /// End of the run, scheduled at max sim time or injected on abort
    Shutdown,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    time: f64,
    seq: u64,
    event: ControlEvent,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.time.total_cmp(&other.time).is_eq() && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.time
            .total_cmp(&other.time)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Virtual-time event queue
#[derive(Debug, Default)]
pub struct EventTimeline {
    queue: BinaryHeap<Reverse<Entry>>,
    now: f64,
    seq: u64,
    stopped: bool,
}

impl EventTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in seconds
    pub fn time(&self) -> f64 {
        self.now
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Schedule an event `delay` simulated seconds from now
    pub fn schedule_in(&mut self, delay: f64, event: ControlEvent) {
        let time = self.now + delay.max(0.0);
        self.push(time, event);
    }

    /// Schedule an event at the current simulated time
    ///
    /// It still queues behind events already pending for this instant.
    pub fn schedule_now(&mut self, event: ControlEvent) {
        self.push(self.now, event);
    }

    /// Stop the timeline, discarding all pending events
    pub fn stop(&mut self) {
        self.stopped = true;
        self.queue.clear();
    }

    /// Pop the next event, advancing the clock to it
    pub fn next(&mut self) -> Option<(f64, ControlEvent)> {
        if self.stopped {
            return None;
        }

        let Reverse(entry) = self.queue.pop()?;
        self.now = entry.time;
        Some((entry.time, entry.event))
    }

    fn push(&mut self, time: f64, event: ControlEvent) {
        let entry = Entry {
            time,
            seq: self.seq,
            event,
        };
        self.seq += 1;
        self.queue.push(Reverse(entry));
    }
}
