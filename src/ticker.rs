use std::time::Duration;

/// Event-loop poll interval in milliseconds. Short enough that the
/// one-second countdown deadline is observed promptly.
pub const POLL_MS: u64 = 250;

/// Get the poll interval
pub fn poll_interval() -> Duration {
    Duration::from_millis(POLL_MS)
}
