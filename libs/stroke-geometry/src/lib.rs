//! # Stroke Geometry
//!
//! Host-independent point generation for grease-pencil strokes.
//!
//! ## Architecture
//!
//! ```text
//! CurveSpec → sampler (u, v, w) → AxisPermutation → Curve (world points)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stroke_geometry::{sample, CircleParams, CurveSpec};
//!
//! let spec = CurveSpec::Circle(CircleParams::new(5.0).with_segments(64));
//! let curve = sample(&spec).unwrap();
//! assert_eq!(curve.len(), 64);
//! ```

pub mod axis;
pub mod curve;
pub mod error;
pub mod sampler;
pub mod transform;

pub use axis::{Axis, AxisPermutation};
pub use curve::{Curve, Point};
pub use error::{GeometryError, GeometryResult};
pub use sampler::{
    bezier_point, sample, sample_bezier, sample_circle, sample_circle_with, sample_with,
    BezierBuilder, BezierParams, CircleParams, CurveSpec, OutOfArc,
};
pub use transform::{axis_rotation, rotate_about_centroid, rotate_about_origin};
