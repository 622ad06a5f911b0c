//! # Curve Sampler
//!
//! Converts a parametric shape description into an ordered [`Curve`].
//!
//! ## Shapes
//!
//! - **Circle**: arc window of a circle in a plane chosen by an axis permutation
//! - **Bezier**: cubic Bézier through two end points and two control points
//!
//! [`CurveSpec`] is the single configuration type; [`sample`] is the single
//! entry point. The per-shape functions are public for callers that already
//! hold the concrete parameters.

pub mod bezier;
pub mod circle;

pub use bezier::{bezier_point, sample_bezier, BezierBuilder, BezierParams};
pub use circle::{sample_circle, sample_circle_with, CircleParams, OutOfArc};

use config::constants::{approx_equal, GlobalConfig};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::{GeometryError, GeometryResult};

/// A shape the sampler knows how to turn into points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CurveSpec {
    Circle(CircleParams),
    Bezier(BezierParams),
}

impl CurveSpec {
    /// Requested segment count.
    pub fn segments(&self) -> u32 {
        match self {
            CurveSpec::Circle(params) => params.segments,
            CurveSpec::Bezier(params) => params.segments,
        }
    }

    /// Whether strokes built from this shape should be closed.
    ///
    /// Only a full circle closes on itself.
    pub fn is_closed(&self) -> bool {
        match self {
            CurveSpec::Circle(params) => {
                let span = params.end_deg - params.start_deg;
                span >= 360.0 || approx_equal(span, 360.0)
            }
            CurveSpec::Bezier(_) => false,
        }
    }

    /// Samples this shape. See [`sample`].
    pub fn sample(&self) -> GeometryResult<Curve> {
        sample(self)
    }
}

impl From<CircleParams> for CurveSpec {
    fn from(params: CircleParams) -> Self {
        CurveSpec::Circle(params)
    }
}

impl From<BezierParams> for CurveSpec {
    fn from(params: BezierParams) -> Self {
        CurveSpec::Bezier(params)
    }
}

/// Samples any supported shape.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use stroke_geometry::{sample, BezierParams, CurveSpec};
///
/// let spec = CurveSpec::Bezier(
///     BezierParams::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0), DVec3::new(2.0, 1.0, 0.0), DVec3::new(3.0, 0.0, 0.0))
///         .with_segments(3),
/// );
/// let curve = sample(&spec).unwrap();
/// assert_eq!(curve.first(), Some(DVec3::ZERO));
/// assert_eq!(curve.last(), Some(DVec3::new(3.0, 0.0, 0.0)));
/// ```
pub fn sample(spec: &CurveSpec) -> GeometryResult<Curve> {
    match spec {
        CurveSpec::Circle(params) => sample_circle(params),
        CurveSpec::Bezier(params) => sample_bezier(params),
    }
}

/// [`sample`] with an explicit numeric tolerance.
pub fn sample_with(spec: &CurveSpec, config: &GlobalConfig) -> GeometryResult<Curve> {
    match spec {
        CurveSpec::Circle(params) => sample_circle_with(params, config),
        CurveSpec::Bezier(params) => sample_bezier(params),
    }
}

fn ensure_segments(segments: u32) -> GeometryResult<()> {
    if segments == 0 {
        return Err(GeometryError::invalid_argument(
            "segment count must be greater than zero",
        ));
    }
    Ok(())
}

fn ensure_finite(name: &str, point: DVec3) -> GeometryResult<()> {
    if !point.is_finite() {
        return Err(GeometryError::invalid_argument(format!(
            "'{name}' point is not set to finite coordinates: {point}"
        )));
    }
    Ok(())
}
