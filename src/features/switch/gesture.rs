//! Long-press recogniser
//!
//! Decides when a held press has lasted long enough. The threshold is
//! captured when the press begins, so changing it mid-press only affects
//! the next one.

use std::time::{Duration, Instant};

/// Result of polling the recogniser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognition {
    /// No press being tracked
    Idle,
    /// Press held, threshold not reached yet
    Pending { remaining: Duration },
    /// Threshold reached; reported once per press
    Recognized,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    began_at: Instant,
    threshold: Duration,
}

#[derive(Debug, Clone)]
pub struct LongPressRecognizer {
    minimum_duration: Duration,
    armed: Option<Armed>,
}

impl LongPressRecognizer {
    pub fn new(minimum_duration: Duration) -> Self {
        Self {
            minimum_duration,
            armed: None,
        }
    }

    pub fn minimum_duration(&self) -> Duration {
        self.minimum_duration
    }

    /// Change the threshold for presses that begin after this call
    pub fn set_minimum_duration(&mut self, duration: Duration) {
        self.minimum_duration = duration;
    }

    pub fn is_tracking(&self) -> bool {
        self.armed.is_some()
    }

    /// Start tracking a press
    pub fn begin(&mut self, at: Instant) {
        self.armed = Some(Armed {
            began_at: at,
            threshold: self.minimum_duration,
        });
    }

    /// Check the tracked press against the threshold
    pub fn poll(&mut self, now: Instant) -> Recognition {
        let Some(armed) = self.armed else {
            return Recognition::Idle;
        };

        let held = now.saturating_duration_since(armed.began_at);
        if held >= armed.threshold {
            self.armed = None;
            Recognition::Recognized
        } else {
            Recognition::Pending {
                remaining: armed.threshold - held,
            }
        }
    }

    /// Forget the tracked press so the next one starts clean
    pub fn reset(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_once_after_threshold() {
        let start = Instant::now();
        let mut recognizer = LongPressRecognizer::new(Duration::from_secs(1));
        recognizer.begin(start);

        assert_eq!(
            recognizer.poll(start + Duration::from_millis(400)),
            Recognition::Pending {
                remaining: Duration::from_millis(600)
            }
        );
        assert_eq!(
            recognizer.poll(start + Duration::from_secs(1)),
            Recognition::Recognized
        );
        assert_eq!(
            recognizer.poll(start + Duration::from_secs(2)),
            Recognition::Idle
        );
    }

    #[test]
    fn idle_without_press() {
        let mut recognizer = LongPressRecognizer::new(Duration::from_secs(1));
        assert_eq!(recognizer.poll(Instant::now()), Recognition::Idle);
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn reset_drops_press() {
        let start = Instant::now();
        let mut recognizer = LongPressRecognizer::new(Duration::from_secs(1));
        recognizer.begin(start);
        recognizer.reset();
        assert_eq!(
            recognizer.poll(start + Duration::from_secs(5)),
            Recognition::Idle
        );
    }

    #[test]
    fn threshold_change_waits_for_next_press() {
        let start = Instant::now();
        let mut recognizer = LongPressRecognizer::new(Duration::from_secs(1));
        recognizer.begin(start);
        recognizer.set_minimum_duration(Duration::from_secs(3));

        assert_eq!(
            recognizer.poll(start + Duration::from_secs(1)),
            Recognition::Recognized
        );

        recognizer.begin(start + Duration::from_secs(2));
        assert!(matches!(
            recognizer.poll(start + Duration::from_secs(3)),
            Recognition::Pending { .. }
        ));
    }
}
