//! Wall-clock time sampling.
//!
//! The clock source is a trait seam so the render path can be exercised with
//! deterministic times in tests. The production implementation reads the
//! host's local time via chrono.

use std::fmt;

use chrono::Timelike;

/// One immutable reading of the wall clock.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TimeSample {
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
    /// 0–59.
    pub second: u8,
}

impl TimeSample {
    pub const MIDNIGHT: TimeSample = TimeSample { hour: 0, minute: 0, second: 0 };

    /// Creates a sample. Out-of-range components are a caller bug; they are
    /// wrapped into range so release builds stay drawable.
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60, "{hour}:{minute}:{second}");
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Error returned when the wall clock cannot be read.
#[derive(Debug, Clone)]
pub struct ClockUnavailable(pub String);

impl fmt::Display for ClockUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wall clock unavailable: {}", self.0)
    }
}

impl std::error::Error for ClockUnavailable {}

/// Source of wall-clock readings.
pub trait WallClock {
    fn now(&self) -> Result<TimeSample, ClockUnavailable>;
}

/// Reads the host's local time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Result<TimeSample, ClockUnavailable> {
        let now = chrono::Local::now();
        Ok(TimeSample::new(
            now.hour() as u8,
            now.minute() as u8,
            now.second() as u8,
        ))
    }
}

/// Wraps a [`WallClock`] and keeps the last known-good sample.
///
/// A failed read logs a warning and falls back to the previous sample, so a
/// transient clock failure never takes down the render loop. The displayed
/// time catches back up on the next successful read.
pub struct SampleFeed<C> {
    clock: C,
    last: TimeSample,
}

impl<C: WallClock> SampleFeed<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: TimeSample::MIDNIGHT,
        }
    }

    /// Reads the clock, updating and returning the last known-good sample.
    pub fn refresh(&mut self) -> TimeSample {
        match self.clock.now() {
            Ok(sample) => {
                self.last = sample;
                sample
            }
            Err(e) => {
                log::warn!("{e}; reusing last sample {}", self.last);
                self.last
            }
        }
    }

    /// The most recent successful sample without reading the clock again.
    #[inline]
    pub fn last(&self) -> TimeSample {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::{ClockUnavailable, SampleFeed, TimeSample, WallClock};

    /// Replays a scripted sequence of readings.
    struct ScriptedClock {
        readings: RefCell<VecDeque<Result<TimeSample, ClockUnavailable>>>,
    }

    impl ScriptedClock {
        fn new(readings: Vec<Result<TimeSample, ClockUnavailable>>) -> Self {
            Self {
                readings: RefCell::new(readings.into()),
            }
        }
    }

    impl WallClock for ScriptedClock {
        fn now(&self) -> Result<TimeSample, ClockUnavailable> {
            self.readings
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ClockUnavailable("script exhausted".into())))
        }
    }

    #[test]
    fn refresh_returns_current_reading() {
        let clock = ScriptedClock::new(vec![Ok(TimeSample::new(14, 30, 45))]);
        let mut feed = SampleFeed::new(clock);
        assert_eq!(feed.refresh(), TimeSample::new(14, 30, 45));
        assert_eq!(feed.last(), TimeSample::new(14, 30, 45));
    }

    #[test]
    fn failed_read_reuses_last_known_good() {
        let clock = ScriptedClock::new(vec![
            Ok(TimeSample::new(9, 15, 0)),
            Err(ClockUnavailable("tz database gone".into())),
            Ok(TimeSample::new(9, 15, 2)),
        ]);
        let mut feed = SampleFeed::new(clock);

        assert_eq!(feed.refresh(), TimeSample::new(9, 15, 0));
        // Failure falls back instead of propagating.
        assert_eq!(feed.refresh(), TimeSample::new(9, 15, 0));
        // Recovery picks the live reading back up.
        assert_eq!(feed.refresh(), TimeSample::new(9, 15, 2));
    }

    #[test]
    fn failure_before_any_success_yields_midnight() {
        let clock = ScriptedClock::new(vec![Err(ClockUnavailable("no clock".into()))]);
        let mut feed = SampleFeed::new(clock);
        assert_eq!(feed.refresh(), TimeSample::MIDNIGHT);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeSample::new(7, 4, 9).to_string(), "07:04:09");
    }
}
