// src/error.rs

//! # Error Types
//!
//! Configuration invariant violations are fatal for the cycle that meets
//! them. Transient accessory read failures are not errors at all and never
//! show up here.

use thiserror::Error;

use crate::Axis;

/// Corrupted or mis-generated configuration detected while running a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The stabilization mode code is not a known mode.
    #[error("unknown stabilization mode {code} on {axis} axis")]
    UnknownStabilizationMode {
        /// Axis whose settings carry the code.
        axis: Axis,
        /// Raw mode code.
        code: u8,
    },
    /// The gimbal type code is not a known gimbal type.
    #[error("unknown gimbal type {0}")]
    UnknownGimbalType(u8),
    /// An axis index outside roll, pitch and yaw.
    #[error("unknown axis index {0}")]
    UnknownAxis(u8),
    /// An output range of zero would be used as a divisor.
    #[error("zero output range on {0} axis")]
    ZeroOutputRange(Axis),
}

/// Module initialization failure. The stabilizer is not created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// The module is not enabled in the optional module settings.
    #[error("camera stabilization module is disabled")]
    Disabled,
    /// The sample period is zero or not representable in the scalar type.
    #[error("invalid sample period of {0} ms")]
    InvalidSamplePeriod(u32),
    /// The periodic trigger could not be registered.
    #[error("failed to register periodic trigger")]
    Registration,
}
