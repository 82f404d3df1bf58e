// src/clock.rs

//! # Cycle Clock
//!
//! Derives the elapsed time between cycles from a monotonic tick counter.
//! The result is always strictly positive: when the counter did not advance,
//! went backward or wrapped, the nominal cycle period is used instead.

use crate::Number;
use log::debug;

/// Tracks the tick count of the previous cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleClock<T> {
    last_tick: u32,
    tick_period_ms: u32,
    nominal_period: T,
}

impl<T: Number> CycleClock<T> {
    /// Creates a clock seeded with the current tick count.
    ///
    /// - `tick_period_ms`: duration of one tick in milliseconds.
    /// - `nominal_period`: fallback cycle period in seconds.
    pub fn new(now: u32, tick_period_ms: u32, nominal_period: T) -> Self {
        Self {
            last_tick: now,
            tick_period_ms,
            nominal_period,
        }
    }

    /// Tick count seen on the previous call.
    pub fn last_tick(&self) -> u32 {
        self.last_tick
    }

    /// Seconds elapsed since the previous call, and records `now`.
    pub fn elapsed(&mut self, now: u32) -> T {
        let dt = if now > self.last_tick {
            self.ticks_to_seconds(now - self.last_tick)
        } else {
            None
        };
        self.last_tick = now;

        dt.unwrap_or_else(|| {
            debug!("tick counter did not advance, using nominal cycle period");
            self.nominal_period
        })
    }

    fn ticks_to_seconds(&self, ticks: u32) -> Option<T> {
        let ms = ticks.checked_mul(self.tick_period_ms)?;
        let dt = T::from_u32(ms)? / T::from_u32(1000)?;
        if dt > T::zero() {
            Some(dt)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// Advancing ticks convert to seconds.
    #[test]
    fn test_clock_advancing() {
        let mut clock = CycleClock::new(100, 1, 0.01_f32);
        assert!(value_close(0.012, clock.elapsed(112)));
        assert!(value_close(0.008, clock.elapsed(120)));
        assert_eq!(120, clock.last_tick());

        let mut clock = CycleClock::new(0, 2, 0.01_f32);
        assert!(value_close(0.01, clock.elapsed(5)));
    }

    /// A stalled counter falls back to the nominal period.
    #[test]
    fn test_clock_stalled() {
        let mut clock = CycleClock::new(50, 1, 0.01_f32);
        assert_eq!(0.01, clock.elapsed(50));
    }

    /// A wrapped counter falls back to the nominal period and resyncs.
    #[test]
    fn test_clock_wrapped() {
        let mut clock = CycleClock::new(u32::MAX - 3, 1, 0.01_f32);
        assert_eq!(0.01, clock.elapsed(6));
        assert!(value_close(0.01, clock.elapsed(16)));
    }

    /// Overflowing tick arithmetic is treated like a stall.
    #[test]
    fn test_clock_overflow() {
        let mut clock = CycleClock::new(0, 10, 0.01_f32);
        assert_eq!(0.01, clock.elapsed(u32::MAX));
    }
}
