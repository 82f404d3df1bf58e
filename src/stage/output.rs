// src/stage/output.rs

//! # Output Composer

use crate::Number;

/// Combines the working attitude and command offset into an output in `[-1, 1]`.
pub fn compose_output<T: Number>(attitude: T, offset: T, output_range: T) -> T {
    ((attitude + offset) / output_range).bound(T::one())
}
