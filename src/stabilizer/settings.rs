// src/stabilizer/settings.rs

//! Settings record for the camera stabilizer.
//!
//! The record mirrors what the settings bus carries: one block of tuning
//! values per axis plus a few global fields. Enumerated choices are stored as
//! their raw bus codes so that a corrupted record can be represented, and
//! are decoded at the point of use.

use crate::{Axis, AxisValues, ConfigError, Number};

/// How operator input is turned into a command offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StabilizationMode {
    /// Operator input maps directly onto an attitude offset.
    Attitude = 0,
    /// Operator input is a rate integrated into a held offset.
    AxisLock = 1,
}

impl StabilizationMode {
    /// Decodes a raw mode code read from the settings of `axis`.
    pub fn decode(code: u8, axis: Axis) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(StabilizationMode::Attitude),
            1 => Ok(StabilizationMode::AxisLock),
            _ => Err(ConfigError::UnknownStabilizationMode { axis, code }),
        }
    }
}

/// Mechanical order of the gimbal rings, used for cross-axis correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GimbalType {
    /// No cross-axis correction.
    Generic = 0,
    /// Yaw ring carries roll, roll ring carries pitch.
    YawRollPitch = 1,
    /// Yaw ring carries pitch, pitch ring carries roll.
    YawPitchRoll = 2,
}

impl TryFrom<u8> for GimbalType {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GimbalType::Generic),
            1 => Ok(GimbalType::YawRollPitch),
            2 => Ok(GimbalType::YawPitchRoll),
            _ => Err(ConfigError::UnknownGimbalType(code)),
        }
    }
}

/// Where an axis takes its operator input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSource {
    /// No operator input; the offset keeps its last value.
    #[default]
    None,
    /// Accessory channel instance.
    Accessory(u8),
}

/// Per-axis tuning values.
///
/// Angles are in degrees, rates in degrees per second and times in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSettings<T> {
    /// Operator input source.
    pub input: InputSource,
    /// Raw [`StabilizationMode`] code.
    pub stabilization_mode: u8,
    /// Largest offset operator input may command.
    pub input_range: T,
    /// Offset rate at full operator deflection in axis-lock mode.
    pub input_rate: T,
    /// Divisor normalizing the combined signal to the output interval.
    pub output_range: T,
    /// Attitude low-pass time constant. Zero passes the raw attitude.
    pub response_time: T,
    /// Feed-forward gain. Zero disables the compensator for this axis.
    pub feed_forward: T,
    /// Decay time constant while the feed-forward accumulator is positive.
    pub accel_time: T,
    /// Decay time constant while the feed-forward accumulator is not positive.
    pub decel_time: T,
    /// Largest change of the compensated attitude per second.
    pub max_acceleration: T,
    /// Axis-lock rates at or below this magnitude are ignored.
    pub max_axis_lock_rate: T,
}

impl<T: Number> AxisSettings<T> {
    /// Default axis tuning. Only the input source needs to be set to make
    /// the axis respond to an operator.
    pub fn new() -> Self {
        Self {
            input: InputSource::None,
            stabilization_mode: StabilizationMode::Attitude as u8,
            input_range: preset(20.0),
            input_rate: preset(50.0),
            output_range: preset(20.0),
            response_time: T::zero(),
            feed_forward: T::zero(),
            accel_time: preset(0.005),
            decel_time: preset(0.005),
            max_acceleration: preset(500.0),
            max_axis_lock_rate: T::one(),
        }
    }
}

impl<T: Number> Default for AxisSettings<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings covering all three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraStabSettings<T> {
    /// Per-axis tuning.
    pub axes: AxisValues<AxisSettings<T>>,
    /// Raw [`GimbalType`] code.
    pub gimbal_type: u8,
    /// Enables the attitude low-pass stage.
    pub attitude_filter: bool,
    /// Enables the feed-forward stage.
    pub feed_forward: bool,
}

impl<T: Number> CameraStabSettings<T> {
    /// Creates settings with default tuning on every axis, a generic gimbal
    /// and both optional stages enabled.
    ///
    /// Example Usage
    /// ```
    /// use gimbal_stabilization::{Axis, CameraStabSettings, GimbalType, InputSource, StabilizationMode};
    ///
    /// let mut settings = CameraStabSettings::<f32>::new();
    ///
    /// // Tilt the camera with accessory channel 0, holding the commanded angle.
    /// settings.axes[Axis::Pitch].input = InputSource::Accessory(0);
    /// settings.set_stabilization_mode(Axis::Pitch, StabilizationMode::AxisLock);
    /// settings.axes[Axis::Pitch].input_range = 45.0;
    /// settings.axes[Axis::Pitch].input_rate = 30.0;
    ///
    /// // Smooth roll and anticipate fast motion.
    /// settings.axes[Axis::Roll].response_time = 0.05;
    /// settings.axes[Axis::Roll].feed_forward = 0.5;
    ///
    /// settings.set_gimbal_type(GimbalType::YawRollPitch);
    ///
    /// assert_eq!(Ok(StabilizationMode::AxisLock), settings.stabilization_mode(Axis::Pitch));
    /// assert_eq!(Ok(GimbalType::YawRollPitch), settings.gimbal_type());
    /// ```
    pub fn new() -> Self {
        Self {
            axes: AxisValues::from_fn(|_| AxisSettings::new()),
            gimbal_type: GimbalType::Generic as u8,
            attitude_filter: true,
            feed_forward: true,
        }
    }

    /// Decoded stabilization mode of `axis`.
    pub fn stabilization_mode(&self, axis: Axis) -> Result<StabilizationMode, ConfigError> {
        StabilizationMode::decode(self.axes[axis].stabilization_mode, axis)
    }

    /// Sets the stabilization mode of `axis`.
    pub fn set_stabilization_mode(&mut self, axis: Axis, mode: StabilizationMode) {
        self.axes[axis].stabilization_mode = mode as u8;
    }

    /// Decoded gimbal type.
    pub fn gimbal_type(&self) -> Result<GimbalType, ConfigError> {
        GimbalType::try_from(self.gimbal_type)
    }

    /// Sets the gimbal type.
    pub fn set_gimbal_type(&mut self, gimbal_type: GimbalType) {
        self.gimbal_type = gimbal_type as u8;
    }

    /// Output range of `axis`, rejected when it would divide by zero.
    pub fn output_range(&self, axis: Axis) -> Result<T, ConfigError> {
        let range = self.axes[axis].output_range;
        if range == T::zero() {
            Err(ConfigError::ZeroOutputRange(axis))
        } else {
            Ok(range)
        }
    }
}

impl<T: Number> Default for CameraStabSettings<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Tuning presets are small decimals every supported scalar can represent.
fn preset<T: Number>(value: f32) -> T {
    T::from_f32(value).unwrap_or_default()
}
