// src/stage/attitude_filter.rs

//! # Attitude Filter
//!
//! One-pole low-pass filter smoothing the raw airframe attitude of an axis.

use crate::Number;

/// Filter state for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeFilter<T> {
    /// Last filtered attitude.
    pub filtered: T,
}

impl<T: Number> AttitudeFilter<T> {
    /// Feeds one raw sample and returns the filtered attitude.
    ///
    /// `response_time` is the filter time constant in the same unit as `dt`.
    /// A response time of zero returns `raw` unchanged.
    pub fn apply(&mut self, raw: T, response_time: T, dt: T) -> T {
        self.filtered = (response_time * self.filtered + dt * raw) / (response_time + dt);
        self.filtered
    }
}
