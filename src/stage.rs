// src/stage.rs

//! # Pipeline Stages
//!
//! This module provides the per-axis stages of the stabilization pipeline.
//! Each stage is a small compute function or state struct operating on one
//! axis at a time.

pub mod attitude_filter;
pub use attitude_filter::*;
pub mod feed_forward;
pub use feed_forward::*;
pub mod input_shaper;
pub use input_shaper::*;
pub mod output;
pub use output::*;
