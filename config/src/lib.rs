//! # Config Crate
//!
//! Centralized defaults for the grease-pencil drawing helpers.
//! Segment counts, radii, line widths and default names are defined here so
//! that the sampler and the scene layer agree on one set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_AXIS_CODE, DEFAULT_CIRCLE_SEGMENTS, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001;
//! assert!(value.abs() < EPSILON);
//!
//! // Circles fall back to 64 segments, drawn in the XZ plane
//! let segments: Option<u32> = None;
//! assert_eq!(segments.unwrap_or(DEFAULT_CIRCLE_SEGMENTS), 64);
//! assert_eq!(DEFAULT_AXIS_CODE, "XZY");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All defaults defined once, used everywhere
//! - **No Dependencies**: Plain constants and a validated snapshot type

pub mod constants;

#[cfg(test)]
mod tests;
