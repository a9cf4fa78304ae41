use std::time::{Duration, Instant};

/// Default focus session: 25 minutes.
pub const DEFAULT_SESSION_SECS: u32 = 25 * 60;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Runtime status of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Stopped,
    Started,
}

/// The focus countdown timer.
///
/// `deadline` is the single armed one-second tick: it is `Some` exactly
/// while the timer is `Started` with seconds left, and cleared on stop, on
/// reaching zero, and on restart. Every transition rewrites it, so a stale
/// tick can never fire and two tickers can never coexist.
#[derive(Debug, Clone)]
pub struct Countdown {
    pub status: TimerStatus,
    pub remaining_secs: u32,
    session_secs: u32,
    deadline: Option<Instant>,
}

impl Countdown {
    /// Create a stopped countdown holding a full session
    pub fn new(session_secs: u32) -> Self {
        Self {
            status: TimerStatus::Stopped,
            remaining_secs: session_secs,
            session_secs,
            deadline: None,
        }
    }

    /// Start counting down from the current remaining value. Does not
    /// reset; a timer already at zero settles straight back to `Stopped`.
    pub fn start(&mut self, now: Instant) {
        self.status = TimerStatus::Started;
        self.rearm(now);
    }

    /// Stop the countdown, keeping the remaining value
    pub fn stop(&mut self) {
        self.status = TimerStatus::Stopped;
        self.deadline = None;
    }

    /// Reset to a full session and start, discarding any prior progress
    pub fn restart(&mut self, now: Instant) {
        self.remaining_secs = self.session_secs;
        self.status = TimerStatus::Started;
        self.rearm(now);
    }

    /// Advance the countdown to `now`, applying one decrement per whole
    /// second the armed deadline has been passed. Reaching zero stops the
    /// timer and disarms the tick.
    pub fn tick(&mut self, now: Instant) {
        if self.status != TimerStatus::Started {
            return;
        }
        let Some(mut deadline) = self.deadline else {
            return;
        };

        while now >= deadline && self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            deadline += ONE_SECOND;
        }

        if self.remaining_secs == 0 {
            self.stop();
        } else {
            self.deadline = Some(deadline);
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Started
    }

    /// `M:SS` readout for the timer pane
    pub fn display(&self) -> String {
        format_remaining(self.remaining_secs)
    }

    // Arm the one-second tick, or settle to Stopped when nothing is left
    // to count.
    fn rearm(&mut self, now: Instant) {
        if self.remaining_secs == 0 {
            self.stop();
        } else {
            self.deadline = Some(now + ONE_SECOND);
        }
    }
}

/// Format seconds as `M:SS`: minutes unpadded, seconds zero-padded
/// (1500 -> "25:00", 65 -> "1:05", 0 -> "0:00")
pub fn format_remaining(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
