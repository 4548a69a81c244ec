use std::time::{Duration, Instant};

/// Polling lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Stopped,
    Polling,
}

#[derive(Debug)]
struct PollTimer {
    next_due: Instant,
}

/// Timer-driven refresh scheduler.
///
/// `start` always clears any existing timer before arming a new one, so
/// repeated starts (or stop/start toggles) never stack timers. Stopping has
/// no effect on a fetch already in flight; a late response still lands.
#[derive(Debug)]
pub struct Poller {
    state: PollState,
    interval: Duration,
    timer: Option<PollTimer>,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: PollState::Stopped,
            interval,
            timer: None,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn is_polling(&self) -> bool {
        self.state == PollState::Polling
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of armed timers: 0 when stopped, 1 when polling.
    pub fn active_timers(&self) -> usize {
        usize::from(self.timer.is_some())
    }

    /// Arm the poll timer. Idempotent: an already-armed timer is replaced,
    /// never duplicated.
    pub fn start(&mut self, now: Instant) {
        self.timer = None;
        self.timer = Some(PollTimer {
            next_due: now + self.interval,
        });
        self.state = PollState::Polling;
    }

    /// Disarm the poll timer. Idempotent.
    pub fn stop(&mut self) {
        self.timer = None;
        self.state = PollState::Stopped;
    }

    /// Consume a due tick. Returns true at most once per interval.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(ref mut timer) if now >= timer.next_due => {
                timer.next_due = now + self.interval;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the next tick, if a timer is armed. Used to
    /// bound the event-loop wait so ticks are not missed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.timer
            .as_ref()
            .map(|timer| timer.next_due.saturating_duration_since(now))
    }
}
