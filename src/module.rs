// src/module.rs

//! # Camera Stabilization Module
//!
//! Host integration for the gimbal stabilizer. The module has no thread of
//! its own: it registers a periodic trigger at initialization and runs one
//! stabilization cycle each time the host calls [`CameraStabModule::attitude_updated`].
//! Calls must not overlap; the host scheduler serializes them.
//!
//! All data exchange goes through the [`CameraStabBus`] seam so the module
//! can sit on top of whatever object bus the host provides.

use core::fmt::Debug;
use core::time::Duration;

use crate::{
    Axis, AxisValues, CameraStabSettings, ConfigError, CycleClock, GimbalStabilizer, InitError,
    InputSource, Number,
};
use log::{error, info, trace};

/// Nominal cycle period in milliseconds.
pub const SAMPLE_PERIOD_MS: u32 = 10;

/// Data bus the module reads its inputs from and publishes its outputs to.
pub trait CameraStabBus<T> {
    /// Current settings snapshot.
    fn settings(&self) -> CameraStabSettings<T>;
    /// Current airframe attitude in degrees.
    fn attitude(&self) -> AxisValues<T>;
    /// Normalized value of an accessory channel instance, `None` when the
    /// instance is not available.
    fn accessory(&self, instance: u8) -> Option<T>;
    /// Monotonic tick counter.
    fn tick_count(&self) -> u32;
    /// Publishes the desired camera output of one axis.
    fn set_camera_desired(&mut self, axis: Axis, value: T);
}

/// Host facility that invokes a callback at a fixed period.
pub trait PeriodicScheduler {
    /// Registration failure reported by the host.
    type Error: Debug;

    /// Registers the stabilization callback.
    fn register_periodic(&mut self, period: Duration) -> Result<(), Self::Error>;
}

/// Module configuration supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraStabConfig {
    /// Whether the optional module is enabled.
    pub enabled: bool,
    /// Trigger period in milliseconds.
    pub sample_period_ms: u32,
    /// Duration of one tick of the host counter in milliseconds.
    pub tick_period_ms: u32,
}

impl CameraStabConfig {
    /// Creates a configuration with the nominal 10 ms period and 1 ms ticks.
    /// The module starts disabled, like every optional module.
    ///
    /// Example Usage
    /// ```
    /// use gimbal_stabilization::CameraStabConfig;
    ///
    /// let mut config = CameraStabConfig::new();
    /// config.enabled = true;
    ///
    /// assert_eq!(10, config.sample_period_ms);
    /// ```
    pub fn new() -> Self {
        Self {
            enabled: false,
            sample_period_ms: SAMPLE_PERIOD_MS,
            tick_period_ms: 1,
        }
    }
}

impl Default for CameraStabConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera stabilization module instance.
#[derive(Debug, Clone)]
pub struct CameraStabModule<T> {
    stabilizer: GimbalStabilizer<T>,
    clock: CycleClock<T>,
}

impl<T: Number> CameraStabModule<T> {
    /// Creates the module state and registers the periodic trigger.
    ///
    /// `now` is the current tick count. Nothing is registered when the
    /// module is disabled or the sample period is invalid.
    pub fn initialize<S: PeriodicScheduler>(
        config: &CameraStabConfig,
        now: u32,
        scheduler: &mut S,
    ) -> Result<Self, InitError> {
        if !config.enabled {
            return Err(InitError::Disabled);
        }

        let nominal_period = T::from_u32(config.sample_period_ms)
            .zip(T::from_u32(1000))
            .map(|(ms, scale)| ms / scale)
            .filter(|period| *period > T::zero())
            .ok_or(InitError::InvalidSamplePeriod(config.sample_period_ms))?;

        scheduler
            .register_periodic(Duration::from_millis(u64::from(config.sample_period_ms)))
            .map_err(|err| {
                error!("camera stabilization trigger registration failed: {:?}", err);
                InitError::Registration
            })?;

        info!(
            "camera stabilization initialized, {} ms period",
            config.sample_period_ms
        );
        Ok(Self {
            stabilizer: GimbalStabilizer::with_nominal_period(nominal_period),
            clock: CycleClock::new(now, config.tick_period_ms, nominal_period),
        })
    }

    /// Start hook. The module is purely callback driven, so there is nothing to start.
    pub fn start(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    /// The stabilizer and its persistent state.
    pub fn stabilizer(&self) -> &GimbalStabilizer<T> {
        &self.stabilizer
    }

    /// Runs one stabilization cycle.
    ///
    /// Each axis output is published as soon as it is computed. A
    /// configuration invariant violation stops the cycle: the offending axis
    /// and the ones after it are not published.
    pub fn attitude_updated<B: CameraStabBus<T>>(&mut self, bus: &mut B) -> Result<(), ConfigError> {
        let settings = bus.settings();
        let dt = self.clock.elapsed(bus.tick_count());
        let attitude = bus.attitude();

        for axis in Axis::ALL {
            let input = match settings.axes[axis].input {
                InputSource::None => None,
                InputSource::Accessory(instance) => {
                    let value = bus.accessory(instance);
                    if value.is_none() {
                        trace!("accessory {} unavailable, holding {} offset", instance, axis);
                    }
                    value
                }
            };

            let output = self
                .stabilizer
                .control_axis(axis, &settings, &attitude, input, dt)
                .inspect_err(|err| error!("camera stabilization halted: {}", err))?;
            bus.set_camera_desired(axis, output);
        }
        Ok(())
    }
}
