//! # Circle Sampler
//!
//! Samples a circle (or an arc window of one) at uniform angular steps.
//!
//! ## Algorithm
//!
//! ```text
//! step = 2π / segments
//! for i in 0..segments:
//!     angle = i * step
//!     if start <= angle <= end:
//!         emit map(cu + r cos(angle), cv + r sin(angle), cw)
//! ```
//!
//! `(cu, cv, cw)` is the world-space center read back through the axis
//! permutation, so the circle stays centered on `center` whatever plane the
//! permutation selects.

use std::f64::consts::TAU;

use config::constants::{
    GlobalConfig, DEFAULT_ARC_END_DEG, DEFAULT_ARC_START_DEG, DEFAULT_CIRCLE_RADIUS,
    DEFAULT_CIRCLE_SEGMENTS, DEFAULT_SAMPLER_RADIUS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::axis::AxisPermutation;
use crate::curve::{Curve, Point};
use crate::error::{GeometryError, GeometryResult};

use super::{ensure_finite, ensure_segments};

/// What the sampler does with indices whose angle falls outside the arc
/// window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutOfArc {
    /// Omit them: the curve holds only in-window points.
    #[default]
    Skip,
    /// Keep one point per segment and leave out-of-window points at the
    /// origin, matching a pre-sized, zero-initialized point buffer.
    Origin,
}

/// Parameters for sampling a circle arc.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use stroke_geometry::{AxisPermutation, CircleParams};
///
/// let params = CircleParams::new(5.0)
///     .with_center(DVec3::new(1.0, 0.0, 0.0))
///     .with_segments(4)
///     .with_axes(AxisPermutation::XYZ);
/// let curve = params.sample().unwrap();
/// assert_eq!(curve.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleParams {
    /// World-space center.
    pub center: DVec3,
    /// Radius; must be positive.
    pub radius: f64,
    /// Start of the arc window in degrees (inclusive).
    pub start_deg: f64,
    /// End of the arc window in degrees (inclusive).
    pub end_deg: f64,
    /// Number of angular steps around the full circle.
    pub segments: u32,
    /// Plane selection.
    pub axes: AxisPermutation,
    /// Handling of out-of-window indices.
    pub out_of_arc: OutOfArc,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            radius: DEFAULT_SAMPLER_RADIUS,
            start_deg: DEFAULT_ARC_START_DEG,
            end_deg: DEFAULT_ARC_END_DEG,
            segments: DEFAULT_CIRCLE_SEGMENTS,
            axes: AxisPermutation::default(),
            out_of_arc: OutOfArc::default(),
        }
    }
}

impl CircleParams {
    /// Full circle of the given radius around the origin.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Full circle as `draw_circle` draws it when the caller gives no
    /// radius or segment count: radius 5, 64 segments.
    pub fn drawing() -> Self {
        Self::new(DEFAULT_CIRCLE_RADIUS).with_segments(DEFAULT_CIRCLE_SEGMENTS)
    }

    /// Full circle with the segment count from `config`.
    pub fn from_config(radius: f64, config: &GlobalConfig) -> Self {
        Self::new(radius).with_segments(config.circle_segments)
    }

    pub fn with_center(mut self, center: DVec3) -> Self {
        self.center = center;
        self
    }

    /// Takes a four-component center; the fourth component is ignored.
    pub fn with_legacy_center(mut self, center: [f64; 4]) -> Self {
        self.center = DVec3::new(center[0], center[1], center[2]);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Restricts sampling to `[start_deg, end_deg]`.
    pub fn with_arc(mut self, start_deg: f64, end_deg: f64) -> Self {
        self.start_deg = start_deg;
        self.end_deg = end_deg;
        self
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_axes(mut self, axes: AxisPermutation) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_out_of_arc(mut self, out_of_arc: OutOfArc) -> Self {
        self.out_of_arc = out_of_arc;
        self
    }

    /// Checks every parameter without sampling.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_segments(self.segments)?;
        ensure_finite("center", self.center)?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::invalid_argument(format!(
                "radius must be a positive number, got {}",
                self.radius
            )));
        }
        if !self.start_deg.is_finite() || !self.end_deg.is_finite() {
            return Err(GeometryError::invalid_argument(
                "arc bounds must be finite numbers",
            ));
        }
        if self.start_deg > self.end_deg {
            return Err(GeometryError::invalid_argument(format!(
                "arc start ({}°) is after arc end ({}°)",
                self.start_deg, self.end_deg
            )));
        }
        Ok(())
    }

    /// Samples this circle. See [`sample_circle`].
    pub fn sample(&self) -> GeometryResult<Curve> {
        sample_circle(self)
    }
}

/// Samples a circle arc into a curve with the default tolerance.
///
/// Fails with `InvalidArgument` on bad parameters, or when `Skip` is in
/// effect and the arc window contains no sample angle.
pub fn sample_circle(params: &CircleParams) -> GeometryResult<Curve> {
    sample_circle_with(params, &GlobalConfig::default())
}

/// Samples a circle arc, widening the arc window by `config.tolerance`
/// on both ends.
pub fn sample_circle_with(params: &CircleParams, config: &GlobalConfig) -> GeometryResult<Curve> {
    params.validate()?;

    let step = TAU / f64::from(params.segments);
    let start = params.start_deg.to_radians() - config.tolerance;
    let end = params.end_deg.to_radians() + config.tolerance;
    let (cu, cv, cw) = params.axes.unmap(params.center);

    let in_window = |i: u32| {
        let angle = f64::from(i) * step;
        angle >= start && angle <= end
    };
    let on_circle = |i: u32| {
        let (sin, cos) = (f64::from(i) * step).sin_cos();
        params
            .axes
            .map(cu + params.radius * cos, cv + params.radius * sin, cw)
    };

    let points: Vec<Point> = match params.out_of_arc {
        // Only the indices around the window are visited.
        OutOfArc::Skip => window_indices(start, end, step, params.segments)
            .filter(|&i| in_window(i))
            .map(on_circle)
            .collect(),
        OutOfArc::Origin => (0..params.segments)
            .map(|i| if in_window(i) { on_circle(i) } else { DVec3::ZERO })
            .collect(),
    };

    if points.is_empty() {
        return Err(GeometryError::invalid_argument(format!(
            "arc [{}°, {}°] contains none of the {} sample angles",
            params.start_deg, params.end_deg, params.segments
        )));
    }
    Ok(Curve::from_points(points))
}

/// Sample indices whose angle can fall inside `[start, end]`, padded by one
/// on each side and clamped to `0..segments`.
fn window_indices(start: f64, end: f64, step: f64, segments: u32) -> std::ops::RangeInclusive<u32> {
    let last_index = segments - 1;
    // Float to int casts saturate, so out-of-range bounds clamp.
    let first = ((start / step).floor() as u32).saturating_sub(1);
    let last = ((end / step).ceil() as u32).saturating_add(1).min(last_index);
    first..=last
}
