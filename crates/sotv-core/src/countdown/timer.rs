//! Seconds-remaining state and its `M:SS` label.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTimer {
    remaining_secs: u64,
}

impl ExpiryTimer {
    /// Timer for `window`, truncated to whole seconds.
    pub fn new(window: Duration) -> Self {
        Self {
            remaining_secs: window.as_secs(),
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// One second elapsed. Returns true once the timer has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.is_expired()
    }

    pub fn label(&self) -> String {
        format_remaining(self.remaining_secs)
    }
}

/// Format seconds as `M:SS` (minutes are not wrapped into hours).
pub fn format_remaining(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_format() {
        assert_eq!(format_remaining(300), "5:00");
        assert_eq!(format_remaining(299), "4:59");
        assert_eq!(format_remaining(61), "1:01");
        assert_eq!(format_remaining(9), "0:09");
        assert_eq!(format_remaining(0), "0:00");
        assert_eq!(format_remaining(3600), "60:00");
    }

    #[test]
    fn five_minutes_takes_300_ticks() {
        let mut t = ExpiryTimer::new(Duration::from_secs(5 * 60));
        assert_eq!(t.label(), "5:00");
        for _ in 0..299 {
            assert!(!t.tick());
        }
        assert_eq!(t.label(), "0:01");
        assert!(t.tick());
        assert_eq!(t.label(), "0:00");
        // Further ticks stay at zero.
        assert!(t.tick());
        assert_eq!(t.remaining_secs(), 0);
    }

    #[test]
    fn sub_second_window_is_already_expired() {
        assert!(ExpiryTimer::new(Duration::from_millis(900)).is_expired());
    }
}
