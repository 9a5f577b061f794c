//! Synthetic progress timeline

use std::time::Duration;

/// Default number of progress notifications per session
pub const DEFAULT_STEPS: u8 = 10;

/// Default spacing between notifications
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Fixed timeline of progress notifications: step `n` of `steps` fires
/// `n * interval` after the session starts and carries `n * 100 / steps`.
///
/// The timeline does not depend on file count or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    steps: u8,
    interval: Duration,
}

impl ProgressSchedule {
    /// `steps` is clamped to 1..=100.
    pub fn new(steps: u8, interval: Duration) -> Self {
        Self {
            steps: steps.clamp(1, 100),
            interval,
        }
    }

    pub fn steps(&self) -> u8 {
        self.steps
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time from session start to the final notification
    pub fn total_duration(&self) -> Duration {
        self.interval * u32::from(self.steps)
    }

    /// `(delay from start, progress value)` for every step, in firing order.
    /// The last value is always 100.
    pub fn ticks(&self) -> impl Iterator<Item = (Duration, u8)> + '_ {
        (1..=self.steps).map(move |n| {
            let value = u16::from(n) * 100 / u16::from(self.steps);
            (self.interval * u32::from(n), value as u8)
        })
    }
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS, DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_timeline() {
        let ticks: Vec<_> = ProgressSchedule::default().ticks().collect();
        let expected: Vec<_> = (1..=10u8)
            .map(|n| (Duration::from_millis(500 * u64::from(n)), n * 10))
            .collect();
        assert_eq!(ticks, expected);
        assert_eq!(ProgressSchedule::default().total_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_uneven_steps_end_at_100() {
        let values: Vec<_> = ProgressSchedule::new(3, Duration::from_millis(1))
            .ticks()
            .map(|(_, v)| v)
            .collect();
        assert_eq!(values, vec![33, 66, 100]);
        assert_eq!(ProgressSchedule::new(0, Duration::ZERO).steps(), 1);
    }
}
