// src/stage/feed_forward.rs

//! # Feed-Forward Compensator
//!
//! Anticipates the gimbal's response to fast attitude changes. Each cycle the
//! attitude change is scaled into an accumulator that boosts the working
//! attitude, the accumulator then decays toward zero with separate time
//! constants for acceleration and deceleration, and the compensated attitude
//! is finally rate limited.
//!
//! On some frame geometries rotating one ring shortens the effective arm of
//! another, so the boost of that axis is scaled down by how far the other
//! ring is deflected within its output range.

use crate::{Axis, AxisValues, CameraStabSettings, ConfigError, GimbalType, Number};

/// Input data for one feed-forward step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedForwardData<T> {
    /// Feed-forward gain.
    pub gain: T,
    /// Gimbal geometry correction factor, see [`gimbal_correction`].
    pub correction: T,
    /// Decay time constant while the accumulator is positive.
    pub accel_time: T,
    /// Decay time constant while the accumulator is not positive.
    pub decel_time: T,
    /// Largest change of the compensated attitude per second.
    pub max_acceleration: T,
    /// The time delta since the last computation, in seconds.
    pub dt: T,
}

/// Feed-forward history for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedForward<T> {
    /// Working attitude seen on the previous step, before compensation.
    pub last_attitude: T,
    /// Compensated attitude produced by the previous step.
    pub last_filtered_attitude: T,
    /// Decaying predictive boost.
    pub accumulator: T,
}

impl<T: Number> FeedForward<T> {
    /// Compensates `attitude` and returns the rate-limited result.
    pub fn apply(&mut self, attitude: T, data: FeedForwardData<T>) -> T {
        let mut accumulator =
            self.accumulator + (attitude - self.last_attitude) * data.gain * data.correction;
        self.last_attitude = attitude;
        let mut attitude = attitude + accumulator;

        let time_constant = if accumulator > T::zero() {
            data.accel_time
        } else {
            data.decel_time
        };
        let mut filter = time_constant / data.dt;
        if filter < T::one() {
            filter = T::one();
        }
        accumulator = accumulator - accumulator / filter;
        self.accumulator = accumulator;
        attitude = attitude + accumulator;

        let delta = attitude - self.last_filtered_attitude;
        let max_delta = data.max_acceleration * data.dt;
        if delta.magnitude() > max_delta {
            // accelerating too hard
            attitude = if delta > T::zero() {
                self.last_filtered_attitude + max_delta
            } else {
                self.last_filtered_attitude - max_delta
            };
        }
        self.last_filtered_attitude = attitude;
        attitude
    }
}

/// Geometry correction factor for the feed-forward gain of `axis`.
///
/// `attitude` is the raw airframe attitude snapshot of the cycle. Generic
/// gimbals and uncorrected axes get `1`.
pub fn gimbal_correction<T: Number>(
    gimbal_type: GimbalType,
    axis: Axis,
    attitude: &AxisValues<T>,
    settings: &CameraStabSettings<T>,
) -> Result<T, ConfigError> {
    let other = match (gimbal_type, axis) {
        (GimbalType::YawRollPitch, Axis::Roll) => Axis::Pitch,
        (GimbalType::YawPitchRoll, Axis::Pitch) => Axis::Roll,
        _ => return Ok(T::one()),
    };
    let range = settings.output_range(other)?;
    Ok((range - attitude[other].magnitude()) / range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn ff_data() -> FeedForwardData<f32> {
        FeedForwardData {
            gain: 1.0,
            correction: 1.0,
            accel_time: 0.05,
            decel_time: 0.1,
            max_acceleration: 10_000.0,
            dt: 0.01,
        }
    }

    /// Scenario: pitch at half its range halves the roll boost.
    #[test]
    fn test_ff_correction_yaw_roll_pitch() {
        let mut settings = CameraStabSettings::<f32>::new();
        settings.axes[Axis::Pitch].output_range = 30.0;
        let attitude = AxisValues::new(5.0, 15.0, 90.0);

        let roll = gimbal_correction(GimbalType::YawRollPitch, Axis::Roll, &attitude, &settings);
        let pitch = gimbal_correction(GimbalType::YawRollPitch, Axis::Pitch, &attitude, &settings);
        let yaw = gimbal_correction(GimbalType::YawRollPitch, Axis::Yaw, &attitude, &settings);

        assert!(value_close(0.5, roll.unwrap()), "Roll should be halved.");
        assert_eq!(Ok(1.0), pitch);
        assert_eq!(Ok(1.0), yaw);
    }

    /// The mirrored geometry corrects pitch from the roll deflection.
    #[test]
    fn test_ff_correction_yaw_pitch_roll() {
        let mut settings = CameraStabSettings::<f32>::new();
        settings.axes[Axis::Roll].output_range = 40.0;
        let attitude = AxisValues::new(-10.0, 15.0, 0.0);

        let pitch = gimbal_correction(GimbalType::YawPitchRoll, Axis::Pitch, &attitude, &settings);
        let roll = gimbal_correction(GimbalType::YawPitchRoll, Axis::Roll, &attitude, &settings);

        assert!(value_close(0.75, pitch.unwrap()), "Pitch should use |roll|.");
        assert_eq!(Ok(1.0), roll);
    }

    /// Generic gimbals are never corrected, not even with a zero range elsewhere.
    #[test]
    fn test_ff_correction_generic() {
        let mut settings = CameraStabSettings::<f32>::new();
        settings.axes[Axis::Pitch].output_range = 0.0;
        let attitude = AxisValues::new(30.0, 30.0, 30.0);
        for axis in Axis::ALL {
            assert_eq!(
                Ok(1.0),
                gimbal_correction(GimbalType::Generic, axis, &attitude, &settings)
            );
        }
    }

    /// A zero range on the referenced axis is reported, not divided by.
    #[test]
    fn test_ff_correction_zero_range() {
        let mut settings = CameraStabSettings::<f32>::new();
        settings.axes[Axis::Pitch].output_range = 0.0;
        let attitude = AxisValues::splat(0.0);
        assert_eq!(
            Err(ConfigError::ZeroOutputRange(Axis::Pitch)),
            gimbal_correction(GimbalType::YawRollPitch, Axis::Roll, &attitude, &settings)
        );
    }

    /// A step in attitude is boosted and partially decayed in the same cycle.
    #[test]
    fn test_ff_step_response() {
        let mut ff = FeedForward::default();
        let attitude = ff.apply(10.0, ff_data());

        // accumulator 10, decays by 0.05 / 0.01 = 5 to 8
        assert!(value_close(8.0, ff.accumulator));
        assert!(value_close(10.0, ff.last_attitude));
        assert!(value_close(28.0, attitude), "Expected 10 + 10 + 8: {}", attitude);
        assert_eq!(attitude, ff.last_filtered_attitude);
    }

    /// Held attitude lets the accumulator decay with the sign-dependent constant.
    #[test]
    fn test_ff_pure_decay() {
        let data = ff_data();

        let mut ff = FeedForward {
            last_attitude: 0.0,
            last_filtered_attitude: 0.0,
            accumulator: 4.0,
        };
        let mut previous = ff.accumulator;
        for _ in 0..50 {
            let _ = ff.apply(0.0, data);
            assert!(ff.accumulator > 0.0 && ff.accumulator < previous);
            assert!(value_close(previous * 0.8, ff.accumulator), "Accel decay is 1/5.");
            previous = ff.accumulator;
        }

        let mut ff = FeedForward {
            last_attitude: 0.0,
            last_filtered_attitude: 0.0,
            accumulator: -4.0,
        };
        let mut previous = ff.accumulator;
        for _ in 0..50 {
            let _ = ff.apply(0.0, data);
            assert!(ff.accumulator < 0.0 && ff.accumulator > previous);
            assert!(value_close(previous * 0.9, ff.accumulator), "Decel decay is 1/10.");
            previous = ff.accumulator;
        }
    }

    /// Time constants shorter than dt clear the accumulator in one step.
    #[test]
    fn test_ff_decay_filter_floor() {
        let data = FeedForwardData {
            accel_time: 0.001,
            decel_time: 0.0,
            ..ff_data()
        };
        let mut ff = FeedForward {
            accumulator: 3.0,
            ..FeedForward::default()
        };
        let _ = ff.apply(0.0, data);
        assert_eq!(0.0, ff.accumulator);

        ff.accumulator = -3.0;
        let _ = ff.apply(0.0, data);
        assert_eq!(0.0, ff.accumulator);
    }

    /// The compensated attitude never moves faster than the acceleration limit.
    #[test]
    fn test_ff_acceleration_limit() {
        let data = FeedForwardData {
            gain: 2.0,
            max_acceleration: 300.0,
            ..ff_data()
        };
        let max_delta = data.max_acceleration * data.dt;
        let inputs = [0.0, 40.0, -40.0, 5.0, 5.0, 5.0, 80.0, 79.0, -10.0, 0.0, 0.0, 0.0];

        let mut ff = FeedForward::default();
        let mut previous = 0.0;
        for input in inputs {
            let attitude = ff.apply(input, data);
            assert!(
                (attitude - previous).abs() <= max_delta + TEST_TOLERANCE,
                "Moved {} in one cycle.",
                attitude - previous
            );
            previous = attitude;
        }

        // A large step is clamped to exactly the limit.
        let mut ff = FeedForward::default();
        assert!(value_close(max_delta, ff.apply(50.0, data)));
        let mut ff = FeedForward::default();
        assert!(value_close(-max_delta, ff.apply(-50.0, data)));
    }
}
