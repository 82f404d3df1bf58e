// src/stabilizer.rs

//! # Camera Stabilizer
//!
//! This module provides the settings record and the stabilizer that runs
//! the per-axis pipeline over it.

pub mod gimbal;
pub use gimbal::*;
pub mod settings;
pub use settings::*;
