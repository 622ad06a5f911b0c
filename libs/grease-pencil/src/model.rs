//! # Scene Data
//!
//! Canvas objects own layers; layers own frames ordered by frame number;
//! frames own strokes. Materials live at scene level and are attached to
//! objects through a per-object slot list.

use config::constants::{
    DEFAULT_FILL_COLOR, DEFAULT_MATERIAL_INDEX, DEFAULT_STROKE_COLOR,
};
use serde::{Deserialize, Serialize};
use stroke_geometry::Point;

use crate::registry::{Named, Registry};

// =============================================================================
// STROKE
// =============================================================================

/// Space in which a stroke's points are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    /// Screen space.
    Screen,
    /// World space; the only mode that allows editing the points in 3D.
    #[default]
    #[serde(rename = "3DSPACE")]
    ThreeDSpace,
    /// Canvas space.
    #[serde(rename = "2DSPACE")]
    TwoDSpace,
    /// Image space.
    #[serde(rename = "2DIMAGE")]
    TwoDImage,
}

/// A connected line through ordered points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub display_mode: DisplayMode,
    /// Closes the line from the last point back to the first.
    pub cyclic: bool,
    pub line_width: u32,
    /// Slot in the owning object's material list.
    pub material_index: usize,
    pub points: Vec<Point>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            cyclic: false,
            line_width: 0,
            material_index: DEFAULT_MATERIAL_INDEX,
            points: Vec::new(),
        }
    }
}

impl Stroke {
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// Strokes shown at one frame number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_number: i32,
    pub strokes: Vec<Stroke>,
}

impl Frame {
    pub fn new(frame_number: i32) -> Self {
        Self {
            frame_number,
            strokes: Vec::new(),
        }
    }
}

// =============================================================================
// LAYER
// =============================================================================

/// Named stack of frames.
///
/// Loading sorts frames by number and rejects two frames with the same
/// number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayerRecord")]
pub struct Layer {
    pub name: String,
    pub active: bool,
    /// Sorted by `frame_number`, at most one frame per number.
    pub frames: Vec<Frame>,
}

/// Unchecked serialized form of a [`Layer`].
#[derive(Deserialize)]
struct LayerRecord {
    name: String,
    active: bool,
    frames: Vec<Frame>,
}

impl TryFrom<LayerRecord> for Layer {
    type Error = String;

    fn try_from(record: LayerRecord) -> Result<Self, Self::Error> {
        let mut frames = record.frames;
        frames.sort_by_key(|frame| frame.frame_number);
        if let Some(pair) = frames
            .windows(2)
            .find(|pair| pair[0].frame_number == pair[1].frame_number)
        {
            return Err(format!(
                "layer '{}' has more than one frame {}",
                record.name, pair[0].frame_number
            ));
        }
        Ok(Self {
            name: record.name,
            active: record.active,
            frames,
        })
    }
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: false,
            frames: Vec::new(),
        }
    }

    /// Removes every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Position of the frame with this number, or where it would be inserted.
    pub(crate) fn frame_slot(&self, frame_number: i32) -> Result<usize, usize> {
        self.frames
            .binary_search_by_key(&frame_number, |frame| frame.frame_number)
    }

    pub fn frame(&self, frame_number: i32) -> Option<&Frame> {
        self.frame_slot(frame_number)
            .ok()
            .map(|slot| &self.frames[slot])
    }

    pub fn frame_mut(&mut self, frame_number: i32) -> Option<&mut Frame> {
        match self.frame_slot(frame_number) {
            Ok(slot) => Some(&mut self.frames[slot]),
            Err(_) => None,
        }
    }

    /// Total strokes over all frames.
    pub fn stroke_count(&self) -> usize {
        self.frames.iter().map(|frame| frame.strokes.len()).sum()
    }
}

impl Named for Layer {
    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// CANVAS OBJECT
// =============================================================================

/// A grease-pencil object: layers of strokes plus attached materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    pub name: String,
    pub layers: Registry<Layer>,
    /// Names of attached scene materials; a stroke's `material_index`
    /// points into this list.
    pub material_slots: Vec<String>,
}

impl CanvasObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Registry::new(),
            material_slots: Vec::new(),
        }
    }

    /// Slot holding the material called `name`.
    pub fn material_slot(&self, name: &str) -> Option<usize> {
        self.material_slots.iter().position(|slot| slot == name)
    }

    /// The layer currently marked active.
    pub fn active_layer(&self) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.active)
    }
}

impl Named for CanvasObject {
    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// MATERIAL
// =============================================================================

/// Grease-pencil colors of a material, RGBA in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpencilStyle {
    pub fill_color: [f32; 4],
    pub stroke_color: [f32; 4],
}

impl Default for GpencilStyle {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR,
            stroke_color: DEFAULT_STROKE_COLOR,
        }
    }
}

/// A scene material. Only materials carrying grease-pencil data can color
/// strokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub grease_pencil: Option<GpencilStyle>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grease_pencil: None,
        }
    }

    #[inline]
    pub fn is_grease_pencil(&self) -> bool {
        self.grease_pencil.is_some()
    }
}

impl Named for Material {
    fn name(&self) -> &str {
        &self.name
    }
}
