//! # Stroke Builder
//!
//! Turns sampled curves into strokes on a scene and transforms existing
//! strokes.
//!
//! ## Pipeline
//!
//! ```text
//! DrawTarget ─▶ object ─▶ layer ─▶ frame ─┐
//! CurveSpec ─▶ stroke_geometry::sample ───┼─▶ Scene::add_stroke ─▶ StrokeId
//! StrokeStyle ────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use grease_pencil::{draw_circle, DrawTarget, Scene, StrokeStyle};
//! use stroke_geometry::CircleParams;
//!
//! let mut scene = Scene::new();
//! let stroke = draw_circle(
//!     &mut scene,
//!     &DrawTarget::default(),
//!     &CircleParams::drawing(),
//!     &StrokeStyle::circle(),
//! )
//! .unwrap();
//! assert_eq!(scene.stroke(stroke).unwrap().points.len(), 64);
//! ```

use config::constants::{
    DEFAULT_BEZIER_LINE_WIDTH, DEFAULT_CIRCLE_LINE_WIDTH, DEFAULT_DRAW_LAYER_NAME,
    DEFAULT_DRAW_OBJECT_NAME, DEFAULT_FRAME_NUMBER, DEFAULT_LAYER_NAME, DEFAULT_MATERIAL_INDEX,
    DEFAULT_OBJECT_NAME,
};
use serde::{Deserialize, Serialize};
use stroke_geometry::{
    rotate_about_centroid, rotate_about_origin, sample, Axis, BezierParams, CircleParams, Curve,
    CurveSpec,
};
use tracing::debug;

use crate::error::{CanvasError, CanvasResult};
use crate::model::{DisplayMode, Stroke};
use crate::scene::{FrameId, LayerId, ObjectId, Scene, StrokeId};

// =============================================================================
// STYLE
// =============================================================================

/// How a stroke picks its material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialRef {
    /// A slot index, used as given.
    Index(usize),
    /// A material name, resolved against the target object's slots.
    Name(String),
}

impl Default for MaterialRef {
    fn default() -> Self {
        MaterialRef::Index(DEFAULT_MATERIAL_INDEX)
    }
}

/// Attributes applied to a new stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub display_mode: DisplayMode,
    pub cyclic: bool,
    pub line_width: u32,
    pub material: MaterialRef,
}

impl StrokeStyle {
    /// Closed, editable, 50 wide.
    pub fn circle() -> Self {
        Self {
            display_mode: DisplayMode::ThreeDSpace,
            cyclic: true,
            line_width: DEFAULT_CIRCLE_LINE_WIDTH,
            material: MaterialRef::default(),
        }
    }

    /// Open, editable, 10 wide.
    pub fn bezier() -> Self {
        Self {
            display_mode: DisplayMode::ThreeDSpace,
            cyclic: false,
            line_width: DEFAULT_BEZIER_LINE_WIDTH,
            material: MaterialRef::default(),
        }
    }

    /// Style matching a curve spec: closed only for full circles.
    pub fn for_spec(spec: &CurveSpec) -> Self {
        match spec {
            CurveSpec::Circle(_) => Self {
                cyclic: spec.is_closed(),
                ..Self::circle()
            },
            CurveSpec::Bezier(_) => Self::bezier(),
        }
    }

    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material = material;
        self
    }

    pub fn with_material_name(self, name: impl Into<String>) -> Self {
        self.with_material(MaterialRef::Name(name.into()))
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::circle()
    }
}

// =============================================================================
// TARGET
// =============================================================================

/// Where a draw call puts its stroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawTarget {
    pub object: String,
    pub layer: String,
    /// Remove the layer's existing frames before drawing.
    pub clear_layer: bool,
    pub frame_number: i32,
}

impl Default for DrawTarget {
    fn default() -> Self {
        Self {
            object: DEFAULT_DRAW_OBJECT_NAME.to_string(),
            layer: DEFAULT_DRAW_LAYER_NAME.to_string(),
            clear_layer: false,
            frame_number: DEFAULT_FRAME_NUMBER,
        }
    }
}

impl DrawTarget {
    pub fn new(object: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            layer: layer.into(),
            ..Self::default()
        }
    }

    pub fn with_frame(mut self, frame_number: i32) -> Self {
        self.frame_number = frame_number;
        self
    }

    pub fn clearing(mut self) -> Self {
        self.clear_layer = true;
        self
    }
}

// =============================================================================
// OBJECT / LAYER ACCESS
// =============================================================================

/// Returns the canvas object called `name`, creating it if needed.
pub fn get_grease_pencil(scene: &mut Scene, name: &str) -> CanvasResult<ObjectId> {
    scene.get_or_create_object(name)
}

/// [`get_grease_pencil`] with the default object name.
pub fn get_default_grease_pencil(scene: &mut Scene) -> CanvasResult<ObjectId> {
    get_grease_pencil(scene, DEFAULT_OBJECT_NAME)
}

/// Returns the layer called `name` on `object`, creating it if needed and
/// optionally clearing its content.
pub fn get_grease_pencil_layer(
    scene: &mut Scene,
    object: ObjectId,
    name: &str,
    clear: bool,
) -> CanvasResult<LayerId> {
    scene.get_or_create_layer(object, name, clear)
}

/// [`get_grease_pencil_layer`] with the default layer name.
pub fn get_default_grease_pencil_layer(
    scene: &mut Scene,
    object: ObjectId,
    clear: bool,
) -> CanvasResult<LayerId> {
    get_grease_pencil_layer(scene, object, DEFAULT_LAYER_NAME, clear)
}

// =============================================================================
// STROKES
// =============================================================================

impl Scene {
    /// Appends a stroke holding the curve's points.
    ///
    /// A material name in `style` must already be attached to the frame's
    /// object.
    pub fn add_stroke(
        &mut self,
        frame: FrameId,
        curve: &Curve,
        style: &StrokeStyle,
    ) -> CanvasResult<StrokeId> {
        let material_index = match &style.material {
            MaterialRef::Index(index) => *index,
            MaterialRef::Name(name) => self.material_index(frame.object(), name)?,
        };
        self.push_stroke(
            frame,
            Stroke {
                display_mode: style.display_mode,
                cyclic: style.cyclic,
                line_width: style.line_width,
                material_index,
                points: curve.points().to_vec(),
            },
        )
    }
}

/// Samples `spec` and appends the result as a stroke at `target`.
///
/// The curve is sampled before the scene is touched, so invalid parameters
/// leave the scene unchanged.
#[tracing::instrument(level = "debug", skip(scene))]
pub fn draw_curve(
    scene: &mut Scene,
    target: &DrawTarget,
    spec: &CurveSpec,
    style: &StrokeStyle,
) -> CanvasResult<StrokeId> {
    let curve = sample(spec)?;

    let object = scene.get_or_create_object(&target.object)?;
    let layer = scene.get_or_create_layer(object, &target.layer, target.clear_layer)?;
    let frame = scene.frame_or_create(layer, target.frame_number)?;
    let stroke = scene.add_stroke(frame, &curve, style)?;

    debug!(
        object = %target.object,
        layer = %target.layer,
        points = curve.len(),
        "drew stroke"
    );
    Ok(stroke)
}

/// Draws a circle (or arc) stroke. See [`draw_curve`].
///
/// [`CircleParams::drawing`] gives the usual radius 5, 64 segment circle.
pub fn draw_circle(
    scene: &mut Scene,
    target: &DrawTarget,
    params: &CircleParams,
    style: &StrokeStyle,
) -> CanvasResult<StrokeId> {
    draw_curve(scene, target, &CurveSpec::Circle(*params), style)
}

/// Draws a cubic Bézier stroke. See [`draw_curve`].
pub fn draw_bezier(
    scene: &mut Scene,
    target: &DrawTarget,
    params: &BezierParams,
    style: &StrokeStyle,
) -> CanvasResult<StrokeId> {
    draw_curve(scene, target, &CurveSpec::Bezier(*params), style)
}

// =============================================================================
// ROTATION
// =============================================================================

/// How [`rotate_stroke`] treats the source stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotateMode {
    /// Spin the stroke about its own centroid.
    InPlace,
    /// Append a copy whose points are rotated about the origin.
    Duplicate,
}

/// Rotates a stroke by `angle_deg` degrees about a world axis.
///
/// Returns the rotated stroke: `stroke` itself for
/// [`RotateMode::InPlace`], the new copy for [`RotateMode::Duplicate`].
#[tracing::instrument(level = "debug", skip(scene))]
pub fn rotate_stroke(
    scene: &mut Scene,
    stroke: StrokeId,
    axis: Axis,
    angle_deg: f64,
    mode: RotateMode,
) -> CanvasResult<StrokeId> {
    if !angle_deg.is_finite() {
        return Err(CanvasError::invalid_argument(format!(
            "rotation angle must be finite, got {angle_deg}"
        )));
    }
    match mode {
        RotateMode::InPlace => {
            let source = scene.stroke_mut(stroke)?;
            rotate_about_centroid(&mut source.points, axis, angle_deg);
            Ok(stroke)
        }
        RotateMode::Duplicate => {
            let mut copy = scene.stroke(stroke)?.clone();
            rotate_about_origin(&mut copy.points, axis, angle_deg);
            scene.push_stroke(stroke.frame(), copy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_style_defaults() {
        let circle = StrokeStyle::circle();
        assert!(circle.cyclic);
        assert_eq!(circle.line_width, 50);
        assert_eq!(circle.display_mode, DisplayMode::ThreeDSpace);
        assert_eq!(circle.material, MaterialRef::Index(0));

        let bezier = StrokeStyle::bezier();
        assert!(!bezier.cyclic);
        assert_eq!(bezier.line_width, 10);
    }

    #[test]
    fn test_style_for_partial_arc_is_open() {
        let arc: CurveSpec = CircleParams::new(1.0).with_arc(0.0, 90.0).into();
        assert!(!StrokeStyle::for_spec(&arc).cyclic);

        let full: CurveSpec = CircleParams::new(1.0).into();
        assert!(StrokeStyle::for_spec(&full).cyclic);
    }

    #[test]
    fn test_target_defaults() {
        let target = DrawTarget::default();
        assert_eq!(target.object, "GLunaPencil");
        assert_eq!(target.layer, "GLunaLayer");
        assert_eq!(target.frame_number, 0);
        assert!(!target.clear_layer);
    }

    #[test]
    fn test_default_accessors_use_default_names() {
        let mut scene = Scene::new();
        let object = get_default_grease_pencil(&mut scene).unwrap();
        let layer = get_default_grease_pencil_layer(&mut scene, object, false).unwrap();

        assert_eq!(scene.object(object).unwrap().name, "GPencil");
        assert_eq!(scene.layer(layer).unwrap().name, "GP_Layer");
    }

    #[test]
    fn test_invalid_curve_leaves_scene_untouched() {
        let mut scene = Scene::new();
        let err = draw_circle(
            &mut scene,
            &DrawTarget::default(),
            &CircleParams::new(-1.0),
            &StrokeStyle::circle(),
        )
        .unwrap_err();

        assert!(matches!(err, CanvasError::InvalidArgument(_)));
        assert!(scene.objects().is_empty());
    }

    #[test]
    fn test_rotate_rejects_non_finite_angle() {
        let mut scene = Scene::new();
        let stroke = draw_bezier(
            &mut scene,
            &DrawTarget::default(),
            &BezierParams::new(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z).with_segments(4),
            &StrokeStyle::bezier(),
        )
        .unwrap();

        let err = rotate_stroke(&mut scene, stroke, Axis::Z, f64::NAN, RotateMode::InPlace);
        assert!(matches!(err, Err(CanvasError::InvalidArgument(_))));
    }
}
