// src/axis.rs

//! # Gimbal Axes
//!
//! The pipeline always processes roll, pitch and yaw in that order. The
//! geometry correction refers to specific other axes by identity, so axes
//! are a closed enumeration rather than bare indices.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::ConfigError;

/// One of the three gimbal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    /// Rotation about the longitudinal axis.
    Roll = 0,
    /// Rotation about the lateral axis.
    Pitch = 1,
    /// Rotation about the vertical axis.
    Yaw = 2,
}

impl Axis {
    /// All axes in processing order.
    pub const ALL: [Axis; 3] = [Axis::Roll, Axis::Pitch, Axis::Yaw];

    /// Position of the axis in per-axis arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Axis {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::Roll),
            1 => Ok(Axis::Pitch),
            2 => Ok(Axis::Yaw),
            _ => Err(ConfigError::UnknownAxis(index)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Roll => "roll",
            Axis::Pitch => "pitch",
            Axis::Yaw => "yaw",
        };
        f.write_str(name)
    }
}

/// One value per axis, indexable by [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisValues<T>([T; 3]);

impl<T> AxisValues<T> {
    /// Creates a container from roll, pitch and yaw values.
    pub const fn new(roll: T, pitch: T, yaw: T) -> Self {
        Self([roll, pitch, yaw])
    }

    /// Builds each axis value from a closure.
    pub fn from_fn<F: FnMut(Axis) -> T>(mut f: F) -> Self {
        Self([f(Axis::Roll), f(Axis::Pitch), f(Axis::Yaw)])
    }

    /// Applies `f` to each axis value.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> AxisValues<U> {
        AxisValues(self.0.map(f))
    }

    /// Iterates over `(axis, value)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy> AxisValues<T> {
    /// Same value on every axis.
    pub const fn splat(value: T) -> Self {
        Self([value; 3])
    }

    /// Roll value.
    pub fn roll(&self) -> T {
        self.0[Axis::Roll.index()]
    }

    /// Pitch value.
    pub fn pitch(&self) -> T {
        self.0[Axis::Pitch.index()]
    }

    /// Yaw value.
    pub fn yaw(&self) -> T {
        self.0[Axis::Yaw.index()]
    }
}

impl<T> Index<Axis> for AxisValues<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<Axis> for AxisValues<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

impl<T> From<(T, T, T)> for AxisValues<T> {
    fn from((roll, pitch, yaw): (T, T, T)) -> Self {
        Self([roll, pitch, yaw])
    }
}

impl<T> From<AxisValues<T>> for (T, T, T) {
    fn from(values: AxisValues<T>) -> Self {
        let [roll, pitch, yaw] = values.0;
        (roll, pitch, yaw)
    }
}
