// src/stage/input_shaper.rs

//! # Input Shaper
//!
//! Turns a normalized operator value into the per-axis command offset.

use crate::{Number, StabilizationMode};

/// Input data for shaping one axis' operator value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputShaperData<T> {
    /// Normalized operator value, roughly in `[-1, 1]`.
    pub value: T,
    /// Largest offset magnitude operator input may command.
    pub input_range: T,
    /// Offset rate at full deflection in axis-lock mode.
    pub input_rate: T,
    /// Axis-lock rates at or below this magnitude are ignored.
    pub max_axis_lock_rate: T,
    /// The time delta since the last computation, in seconds.
    pub dt: T,
}

/// Computes the new command offset from the previous one.
///
/// In [`StabilizationMode::Attitude`] the offset follows the operator value
/// directly. In [`StabilizationMode::AxisLock`] the operator value is a rate
/// that is integrated into the held offset, but only once it exceeds the
/// dead zone; the integrated offset never leaves `[-input_range, input_range]`.
pub fn shape_input<T: Number>(offset: T, mode: StabilizationMode, data: InputShaperData<T>) -> T {
    match mode {
        StabilizationMode::Attitude => data.value * data.input_range,
        StabilizationMode::AxisLock => {
            let rate = data.value * data.input_rate;
            if rate.magnitude() > data.max_axis_lock_rate {
                (offset + rate * data.dt).bound(data.input_range)
            } else {
                offset
            }
        }
    }
}
