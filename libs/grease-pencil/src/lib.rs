//! # Grease Pencil
//!
//! In-memory grease-pencil scene plus the helpers that draw shapes into it.
//!
//! ## Architecture
//!
//! ```text
//! stroke-geometry (Curve) → grease-pencil (Scene: objects → layers → frames → strokes)
//! ```
//!
//! Every operation receives the [`Scene`] explicitly; nothing reads ambient
//! state. Mutations are not transactional: a call that fails half-way leaves
//! whatever it already created in place.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use grease_pencil::{draw_bezier, DrawTarget, Scene, StrokeStyle};
//! use stroke_geometry::BezierParams;
//!
//! let mut scene = Scene::new();
//! let params = BezierParams::new(
//!     DVec3::ZERO,
//!     DVec3::new(1.0, 1.0, 0.0),
//!     DVec3::new(2.0, 1.0, 0.0),
//!     DVec3::new(3.0, 0.0, 0.0),
//! );
//! let stroke = draw_bezier(&mut scene, &DrawTarget::default(), &params, &StrokeStyle::bezier()).unwrap();
//! assert_eq!(scene.stroke(stroke).unwrap().points.len(), 90);
//! ```

pub mod draw;
pub mod error;
pub mod material;
pub mod model;
pub mod registry;
pub mod scene;

pub use draw::{
    draw_bezier, draw_circle, draw_curve, get_default_grease_pencil,
    get_default_grease_pencil_layer, get_grease_pencil, get_grease_pencil_layer, rotate_stroke,
    DrawTarget, MaterialRef, RotateMode, StrokeStyle,
};
pub use error::{CanvasError, CanvasResult};
pub use material::{
    create_gpencil_material, get_material, index_of_material, index_of_material_or_sentinel,
    NOT_FOUND_INDEX,
};
pub use model::{CanvasObject, DisplayMode, Frame, GpencilStyle, Layer, Material, Stroke};
pub use registry::{Named, Registry};
pub use scene::{FrameId, LayerId, ObjectId, Scene, StrokeId};
