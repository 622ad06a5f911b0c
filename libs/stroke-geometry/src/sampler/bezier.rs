//! # Cubic Bézier Sampler
//!
//! Samples `B(t) = (1−t)³·P0 + 3(1−t)²t·P1 + 3(1−t)t²·P2 + t³·P3` at
//! `t = i / (segments − 1)`, so both end points are always part of the
//! output.

use config::constants::DEFAULT_BEZIER_SEGMENTS;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::curve::{Curve, Point};
use crate::error::{GeometryError, GeometryResult};

use super::{ensure_finite, ensure_segments};

/// Parameters for sampling a cubic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierParams {
    pub from: DVec3,
    pub control1: DVec3,
    pub control2: DVec3,
    pub to: DVec3,
    /// Number of points to emit, end points included.
    pub segments: u32,
}

impl BezierParams {
    /// Curve through `from` and `to` with the default segment count.
    pub fn new(from: DVec3, control1: DVec3, control2: DVec3, to: DVec3) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
            segments: DEFAULT_BEZIER_SEGMENTS,
        }
    }

    /// Starts a builder in which every control point must be set.
    pub fn builder() -> BezierBuilder {
        BezierBuilder::default()
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Checks every parameter without sampling.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_segments(self.segments)?;
        ensure_finite("from", self.from)?;
        ensure_finite("control1", self.control1)?;
        ensure_finite("control2", self.control2)?;
        ensure_finite("to", self.to)
    }

    /// Samples this curve. See [`sample_bezier`].
    pub fn sample(&self) -> GeometryResult<Curve> {
        sample_bezier(self)
    }
}

/// Collects Bézier control points that may arrive one at a time.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use stroke_geometry::BezierParams;
///
/// let missing = BezierParams::builder()
///     .from(DVec3::ZERO)
///     .to(DVec3::X)
///     .build();
/// assert!(missing.unwrap_err().to_string().contains("control1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BezierBuilder {
    from: Option<DVec3>,
    control1: Option<DVec3>,
    control2: Option<DVec3>,
    to: Option<DVec3>,
    segments: Option<u32>,
}

impl BezierBuilder {
    pub fn from(mut self, point: DVec3) -> Self {
        self.from = Some(point);
        self
    }

    pub fn control1(mut self, point: DVec3) -> Self {
        self.control1 = Some(point);
        self
    }

    pub fn control2(mut self, point: DVec3) -> Self {
        self.control2 = Some(point);
        self
    }

    pub fn to(mut self, point: DVec3) -> Self {
        self.to = Some(point);
        self
    }

    pub fn segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Fails with `InvalidArgument` naming the first unset control point.
    pub fn build(self) -> GeometryResult<BezierParams> {
        let params = BezierParams {
            from: required("from", self.from)?,
            control1: required("control1", self.control1)?,
            control2: required("control2", self.control2)?,
            to: required("to", self.to)?,
            segments: self.segments.unwrap_or(DEFAULT_BEZIER_SEGMENTS),
        };
        params.validate()?;
        Ok(params)
    }
}

fn required(name: &str, value: Option<DVec3>) -> GeometryResult<DVec3> {
    value.ok_or_else(|| GeometryError::invalid_argument(format!("'{name}' point is not set")))
}

/// Evaluates the cubic Bézier polynomial at `t`.
#[inline]
pub fn bezier_point(from: DVec3, control1: DVec3, control2: DVec3, to: DVec3, t: f64) -> Point {
    let s = 1.0 - t;
    from * (s * s * s) + control1 * (3.0 * s * s * t) + control2 * (3.0 * s * t * t) + to * (t * t * t)
}

/// Samples a cubic Bézier curve into `segments` points.
///
/// A single segment yields just `from`.
pub fn sample_bezier(params: &BezierParams) -> GeometryResult<Curve> {
    params.validate()?;

    let last = params.segments.saturating_sub(1);
    Ok((0..params.segments)
        .map(|i| {
            let t = if last == 0 {
                0.0
            } else {
                f64::from(i) / f64::from(last)
            };
            bezier_point(params.from, params.control1, params.control2, params.to, t)
        })
        .collect())
}
