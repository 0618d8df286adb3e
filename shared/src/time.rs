//! Time sampling - reads the host's local civil time for one render tick.

use chrono::{DateTime, Local, Timelike};

/// One reading of the host's local wall clock.
///
/// A sample is taken fresh at every tick and discarded after the frame it
/// was drawn in, so wall-clock adjustments made by the OS (DST transitions,
/// manual clock changes) show up on the next redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Hour in 24-hour format (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// Fractional seconds (0.0-1.0) for smooth hand motion
    pub second_fraction: f64,
}

impl TimeSample {
    /// Read the host's local time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    fn from_datetime(now: DateTime<Local>) -> Self {
        // During a leap second chrono reports nanosecond() >= 1e9
        let nanos = now.nanosecond().min(999_999_999);
        TimeSample {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            second_fraction: nanos as f64 / 1_000_000_000.0,
        }
    }

    /// Seconds including the fractional part.
    pub fn seconds(&self) -> f64 {
        self.second as f64 + self.second_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sample_fields_in_range() {
        let sample = TimeSample::now();
        assert!(sample.hour < 24);
        assert!(sample.minute < 60);
        assert!(sample.second < 60);
        assert!(sample.second_fraction >= 0.0 && sample.second_fraction < 1.0);
    }

    #[test]
    fn test_from_datetime() {
        let dt = Local.with_ymd_and_hms(2024, 5, 14, 21, 47, 5).unwrap();
        let sample = TimeSample::from_datetime(dt);
        assert_eq!(sample.hour, 21);
        assert_eq!(sample.minute, 47);
        assert_eq!(sample.second, 5);
        assert_eq!(sample.second_fraction, 0.0);
    }

    #[test]
    fn test_seconds_includes_fraction() {
        let sample = TimeSample {
            hour: 10,
            minute: 4,
            second: 30,
            second_fraction: 0.25,
        };
        assert!((sample.seconds() - 30.25).abs() < 1e-12);
    }
}
