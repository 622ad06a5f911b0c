//! # Configuration Constants
//!
//! Defaults for curve sampling and stroke creation. The draw routines take
//! explicit parameters; these values are what they fall back to.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sampling**: Segment counts, radii, arc bounds, axis code
//! - **Strokes**: Line widths
//! - **Scene**: Default object, layer and material values

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for the inclusive arc-window test and for approximate equality of
/// sampled coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of points sampled around a drawn circle.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CIRCLE_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_CIRCLE_SEGMENTS), 64);
/// ```
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 64;

/// Default number of points sampled along a drawn cubic Bézier curve.
pub const DEFAULT_BEZIER_SEGMENTS: u32 = 90;

/// Radius used by the `draw_circle` call site when none is given.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 5.0;

/// Radius of a bare `CircleParams` before the caller overrides it.
pub const DEFAULT_SAMPLER_RADIUS: f64 = 0.5;

/// Start of the default arc window, in degrees.
pub const DEFAULT_ARC_START_DEG: f64 = 0.0;

/// End of the default arc window, in degrees. Together with
/// [`DEFAULT_ARC_START_DEG`] this describes a full circle.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ARC_END_DEG, DEFAULT_ARC_START_DEG};
///
/// assert_eq!(DEFAULT_ARC_END_DEG - DEFAULT_ARC_START_DEG, 360.0);
/// ```
pub const DEFAULT_ARC_END_DEG: f64 = 360.0;

/// Default axis permutation code.
///
/// The sampler's `u` goes to X, `v` to Z and the constant `w` to Y, so
/// circles are drawn upright in the XZ plane.
pub const DEFAULT_AXIS_CODE: &str = "XZY";

// =============================================================================
// STROKE CONSTANTS
// =============================================================================

/// Line width of circle strokes.
pub const DEFAULT_CIRCLE_LINE_WIDTH: u32 = 50;

/// Line width of Bézier strokes.
pub const DEFAULT_BEZIER_LINE_WIDTH: u32 = 10;

/// Material slot used when a stroke does not name one.
pub const DEFAULT_MATERIAL_INDEX: usize = 0;

/// Frame number that draw routines target by default.
pub const DEFAULT_FRAME_NUMBER: i32 = 0;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Name of the canvas object created by `get_grease_pencil` by default.
pub const DEFAULT_OBJECT_NAME: &str = "GPencil";

/// Name of the layer created by `get_grease_pencil_layer` by default.
pub const DEFAULT_LAYER_NAME: &str = "GP_Layer";

/// Canvas object targeted by the shape drawing routines.
pub const DEFAULT_DRAW_OBJECT_NAME: &str = "GLunaPencil";

/// Layer targeted by the shape drawing routines.
pub const DEFAULT_DRAW_LAYER_NAME: &str = "GLunaLayer";

/// Default material fill color (opaque white), RGBA in [0.0, 1.0].
pub const DEFAULT_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Default material stroke color (opaque black), RGBA in [0.0, 1.0].
pub const DEFAULT_STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the sampling defaults that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.circle_segments, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance for arc-window and equality checks.
    pub tolerance: f64,
    /// Segment count used for circles.
    pub circle_segments: u32,
    /// Segment count used for Bézier curves.
    pub bezier_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting a non-positive tolerance and zero
    /// segment counts.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24, 48).expect("valid config");
    /// assert_eq!(cfg.bezier_segments, 48);
    /// ```
    pub fn new(
        tolerance: f64,
        circle_segments: u32,
        bezier_segments: u32,
    ) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if circle_segments == 0 {
            return Err(ConfigError::InvalidSegments(circle_segments));
        }
        if bezier_segments == 0 {
            return Err(ConfigError::InvalidSegments(bezier_segments));
        }
        Ok(Self {
            tolerance,
            circle_segments,
            bezier_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            bezier_segments: DEFAULT_BEZIER_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when a segment count is zero.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segment count must be > 0: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
