//! # Curve
//!
//! An ordered, finite run of sampled points.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A sampled point. Positions are f64 throughout.
pub type Point = DVec3;

/// Ordered points produced by one sampling call.
///
/// A curve is a value: resampling means calling the sampler again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    /// Wraps an existing point list.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a reference to the points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consumes the curve, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// First point, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Arithmetic mean of the points, or `None` for an empty curve.
    pub fn centroid(&self) -> Option<Point> {
        centroid(&self.points)
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty curve.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = self.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Sum of distances between consecutive points.
    pub fn polyline_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Curve {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl FromIterator<Point> for Curve {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Arithmetic mean of `points`, or `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum: DVec3 = points.iter().copied().sum();
    Some(sum / points.len() as f64)
}
