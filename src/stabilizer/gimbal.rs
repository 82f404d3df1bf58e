// src/stabilizer/gimbal.rs

//! # Gimbal Stabilizer
//!
//! Runs the stabilization pipeline for each axis: input shaping, optional
//! attitude filtering, optional feed-forward compensation and output
//! composition. The stabilizer owns all persistent per-axis state; settings,
//! attitude and operator inputs are supplied per cycle.

use crate::stage::{
    compose_output, gimbal_correction, shape_input, AttitudeFilter, FeedForward,
    FeedForwardData, InputShaperData,
};
use crate::{Axis, AxisValues, CameraStabSettings, ConfigError, Number, SAMPLE_PERIOD_MS};
use log::{debug, trace};

/// Persistent per-axis state carried between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraStabState<T> {
    /// Command offset produced by the input shaper.
    pub input_offset: AxisValues<T>,
    /// Attitude low-pass history.
    pub attitude_filter: AxisValues<AttitudeFilter<T>>,
    /// Feed-forward history.
    pub feed_forward: AxisValues<FeedForward<T>>,
}

/// Camera gimbal stabilizer.
#[derive(Debug, Clone)]
pub struct GimbalStabilizer<T> {
    state: CameraStabState<T>,
    nominal_period: T,
}

impl<T: Number> GimbalStabilizer<T> {
    /// Creates a stabilizer with cleared state and the nominal 10 ms period.
    pub fn new() -> Self {
        let nominal_period = T::from_u32(SAMPLE_PERIOD_MS)
            .zip(T::from_u32(1000))
            .map(|(ms, scale)| ms / scale)
            .filter(|period| *period > T::zero())
            .unwrap_or_else(T::one);
        Self::with_nominal_period(nominal_period)
    }

    /// Creates a stabilizer with cleared state.
    ///
    /// `nominal_period` is the cycle period in seconds used in place of a
    /// `dt` that is not strictly positive.
    pub fn with_nominal_period(nominal_period: T) -> Self {
        Self {
            state: CameraStabState::default(),
            nominal_period,
        }
    }

    /// Period substituted for a non-positive `dt`.
    pub fn nominal_period(&self) -> T {
        self.nominal_period
    }

    /// Current persistent state.
    pub fn state(&self) -> &CameraStabState<T> {
        &self.state
    }

    /// Computes the output of one axis.
    ///
    /// - `attitude`: raw airframe attitude snapshot for all axes. Cross-axis
    ///   geometry correction reads the other axes from it.
    /// - `input`: operator value of this axis, or `None` when no source is
    ///   configured or the source could not be read. The offset then keeps
    ///   its previous value.
    /// - `dt`: time since the last cycle in seconds. A value that is not
    ///   strictly positive is replaced by the nominal period.
    ///
    /// Returns the output in `[-1, 1]`, or the configuration invariant that
    /// was violated.
    pub fn control_axis(
        &mut self,
        axis: Axis,
        settings: &CameraStabSettings<T>,
        attitude: &AxisValues<T>,
        input: Option<T>,
        dt: T,
    ) -> Result<T, ConfigError> {
        let dt = if dt > T::zero() {
            dt
        } else {
            debug!("non-positive dt {:?} on {} axis, using nominal period", dt, axis);
            self.nominal_period
        };
        let axis_settings = &settings.axes[axis];
        let output_range = settings.output_range(axis)?;

        if let Some(value) = input {
            let mode = settings.stabilization_mode(axis)?;
            let data = InputShaperData {
                value,
                input_range: axis_settings.input_range,
                input_rate: axis_settings.input_rate,
                max_axis_lock_rate: axis_settings.max_axis_lock_rate,
                dt,
            };
            self.state.input_offset[axis] = shape_input(self.state.input_offset[axis], mode, data);
        }

        let mut working = attitude[axis];

        if settings.attitude_filter {
            working = self.state.attitude_filter[axis].apply(working, axis_settings.response_time, dt);
        }

        if settings.feed_forward && axis_settings.feed_forward != T::zero() {
            let gimbal_type = settings.gimbal_type()?;
            let data = FeedForwardData {
                gain: axis_settings.feed_forward,
                correction: gimbal_correction(gimbal_type, axis, attitude, settings)?,
                accel_time: axis_settings.accel_time,
                decel_time: axis_settings.decel_time,
                max_acceleration: axis_settings.max_acceleration,
                dt,
            };
            working = self.state.feed_forward[axis].apply(working, data);
        }

        let output = compose_output(working, self.state.input_offset[axis], output_range);
        trace!("{} axis: attitude {:?}, output {:?}", axis, working, output);
        Ok(output)
    }

    /// Computes the outputs of all axes in roll, pitch, yaw order.
    ///
    /// Stops at the first axis that violates a configuration invariant.
    pub fn control(
        &mut self,
        settings: &CameraStabSettings<T>,
        attitude: AxisValues<T>,
        inputs: AxisValues<Option<T>>,
        dt: T,
    ) -> Result<AxisValues<T>, ConfigError> {
        let mut output = AxisValues::default();
        for axis in Axis::ALL {
            output[axis] = self.control_axis(axis, settings, &attitude, inputs[axis], dt)?;
        }
        Ok(output)
    }
}

impl<T: Number> Default for GimbalStabilizer<T> {
    fn default() -> Self {
        Self::new()
    }
}
