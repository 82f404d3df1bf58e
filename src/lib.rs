// src/lib.rs

//! # Camera Gimbal Stabilization
//!
//! This crate provides a `no_std`, no-alloc stabilization pipeline for
//! camera gimbals. Once per control cycle it computes roll, pitch and yaw
//! output commands in `[-1, 1]` that keep the camera steady against
//! aircraft motion while still following operator input.
//!
//! Each axis runs through four stages:
//!
//! 1. **Input shaping** turns an operator value into a command offset, either
//!    directly or by integrating it as a rate (axis lock).
//! 2. **Attitude filtering** (optional) low-pass filters the airframe attitude.
//! 3. **Feed-forward** (optional) anticipates fast attitude changes, decays
//!    the boost, corrects for gimbal geometry and limits acceleration.
//! 4. **Output composition** normalizes attitude plus offset by the output
//!    range and saturates it.
//!
//! The pipeline is generic over the scalar type; `f32` and fixed-point types
//! both work.

#![no_std]
#![deny(missing_docs)]

pub mod axis;
pub mod clock;
pub mod error;
pub mod module;
pub mod number;
pub mod stabilizer;
pub mod stage;

#[doc(inline)]
pub use axis::*;
#[doc(inline)]
pub use clock::*;
#[doc(inline)]
pub use error::*;
#[doc(inline)]
pub use module::*;
#[doc(inline)]
pub use number::*;
#[doc(inline)]
pub use stabilizer::*;

#[cfg(test)]
mod test_utils;
