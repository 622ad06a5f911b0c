//! # Scene
//!
//! The explicit context every drawing operation receives. Creation is
//! explicit: `get_or_create_*` makes missing items, while plain lookups fail
//! with [`CanvasError::HostState`].
//!
//! ## Handles
//!
//! ```text
//! ObjectId ─▶ LayerId ─▶ FrameId (frame number) ─▶ StrokeId
//! ```
//!
//! Objects, layers and strokes are only ever appended, so their handles stay
//! valid. Clearing a layer drops its frames; handles into those frames then
//! fail to resolve.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CanvasError, CanvasResult};
use crate::model::{CanvasObject, Frame, Layer, Material, Stroke};
use crate::registry::Registry;

// =============================================================================
// HANDLES
// =============================================================================

/// Handle to a canvas object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Handle to a layer of a canvas object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    object: ObjectId,
    layer: usize,
}

impl LayerId {
    #[inline]
    pub fn object(&self) -> ObjectId {
        self.object
    }
}

/// Handle to the frame with a given number on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId {
    layer: LayerId,
    frame_number: i32,
}

impl FrameId {
    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    #[inline]
    pub fn object(&self) -> ObjectId {
        self.layer.object
    }

    #[inline]
    pub fn frame_number(&self) -> i32 {
        self.frame_number
    }
}

/// Handle to a stroke within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeId {
    frame: FrameId,
    stroke: usize,
}

impl StrokeId {
    #[inline]
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Position of the stroke within its frame.
    #[inline]
    pub fn index(&self) -> usize {
        self.stroke
    }
}

// =============================================================================
// SCENE
// =============================================================================

/// Canvas objects and materials, keyed by name in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    objects: Registry<CanvasObject>,
    materials: Registry<Material>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// All canvas objects in creation order.
    pub fn objects(&self) -> &Registry<CanvasObject> {
        &self.objects
    }

    /// All scene materials in creation order.
    pub fn materials(&self) -> &Registry<Material> {
        &self.materials
    }

    pub(crate) fn materials_mut(&mut self) -> &mut Registry<Material> {
        &mut self.materials
    }

    // -------------------------------------------------------------------------
    // Objects
    // -------------------------------------------------------------------------

    /// Returns the object called `name`, creating an empty one if needed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_or_create_object(&mut self, name: &str) -> CanvasResult<ObjectId> {
        ensure_name("object", name)?;
        let (position, created) = self
            .objects
            .get_or_insert_with(name, || CanvasObject::new(name));
        if created {
            debug!(object = name, "created canvas object");
        }
        Ok(ObjectId(position))
    }

    /// Looks up an existing object.
    pub fn object_id(&self, name: &str) -> CanvasResult<ObjectId> {
        self.objects
            .position(name)
            .map(ObjectId)
            .ok_or_else(|| CanvasError::host_state(format!("no canvas object named '{name}'")))
    }

    pub fn object(&self, id: ObjectId) -> CanvasResult<&CanvasObject> {
        self.objects
            .get(id.0)
            .ok_or_else(|| CanvasError::host_state(format!("stale object handle {}", id.0)))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> CanvasResult<&mut CanvasObject> {
        self.objects
            .get_mut(id.0)
            .ok_or_else(|| CanvasError::host_state(format!("stale object handle {}", id.0)))
    }

    // -------------------------------------------------------------------------
    // Layers
    // -------------------------------------------------------------------------

    /// Returns the layer called `name` on `object`, creating it if needed.
    ///
    /// A newly created layer becomes the object's active layer. With `clear`
    /// set, every frame of the layer is removed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_or_create_layer(
        &mut self,
        object: ObjectId,
        name: &str,
        clear: bool,
    ) -> CanvasResult<LayerId> {
        ensure_name("layer", name)?;
        let canvas = self.object_mut(object)?;
        let (position, created) = canvas.layers.get_or_insert_with(name, || Layer::new(name));
        if created {
            for (index, layer) in canvas.layers.iter_mut().enumerate() {
                layer.active = index == position;
            }
            debug!(object = %canvas.name, layer = name, "created layer");
        }
        let id = LayerId {
            object,
            layer: position,
        };
        if clear {
            self.clear_layer(id)?;
        }
        Ok(id)
    }

    /// Looks up an existing layer.
    pub fn layer_id(&self, object: ObjectId, name: &str) -> CanvasResult<LayerId> {
        let canvas = self.object(object)?;
        canvas
            .layers
            .position(name)
            .map(|layer| LayerId { object, layer })
            .ok_or_else(|| {
                CanvasError::host_state(format!(
                    "no layer named '{name}' on object '{}'",
                    canvas.name
                ))
            })
    }

    pub fn layer(&self, id: LayerId) -> CanvasResult<&Layer> {
        self.object(id.object)?
            .layers
            .get(id.layer)
            .ok_or_else(|| CanvasError::host_state(format!("stale layer handle {}", id.layer)))
    }

    pub fn layer_mut(&mut self, id: LayerId) -> CanvasResult<&mut Layer> {
        self.object_mut(id.object)?
            .layers
            .get_mut(id.layer)
            .ok_or_else(|| CanvasError::host_state(format!("stale layer handle {}", id.layer)))
    }

    /// Removes every frame (and so every stroke) from a layer.
    pub fn clear_layer(&mut self, id: LayerId) -> CanvasResult<()> {
        let layer = self.layer_mut(id)?;
        trace!(layer = %layer.name, frames = layer.frames.len(), "clearing layer");
        layer.clear();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Frames
    // -------------------------------------------------------------------------

    /// Creates a frame; fails if the layer already has one with this number.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn new_frame(&mut self, layer: LayerId, frame_number: i32) -> CanvasResult<FrameId> {
        let entry = self.layer_mut(layer)?;
        match entry.frame_slot(frame_number) {
            Ok(_) => Err(CanvasError::host_state(format!(
                "layer '{}' already has a frame {frame_number}",
                entry.name
            ))),
            Err(slot) => {
                entry.frames.insert(slot, Frame::new(frame_number));
                Ok(FrameId {
                    layer,
                    frame_number,
                })
            }
        }
    }

    /// Returns the frame with this number, creating it if needed.
    pub fn frame_or_create(&mut self, layer: LayerId, frame_number: i32) -> CanvasResult<FrameId> {
        let entry = self.layer_mut(layer)?;
        if let Err(slot) = entry.frame_slot(frame_number) {
            entry.frames.insert(slot, Frame::new(frame_number));
            debug!(layer = %entry.name, frame_number, "created frame");
        }
        Ok(FrameId {
            layer,
            frame_number,
        })
    }

    pub fn frame(&self, id: FrameId) -> CanvasResult<&Frame> {
        let layer = self.layer(id.layer)?;
        layer.frame(id.frame_number).ok_or_else(|| {
            CanvasError::host_state(format!(
                "frame {} no longer exists on layer '{}'",
                id.frame_number, layer.name
            ))
        })
    }

    pub fn frame_mut(&mut self, id: FrameId) -> CanvasResult<&mut Frame> {
        let layer = self.layer_mut(id.layer)?;
        let name = layer.name.clone();
        layer.frame_mut(id.frame_number).ok_or_else(|| {
            CanvasError::host_state(format!(
                "frame {} no longer exists on layer '{name}'",
                id.frame_number
            ))
        })
    }

    // -------------------------------------------------------------------------
    // Strokes
    // -------------------------------------------------------------------------

    /// Appends a fully built stroke to a frame.
    pub fn push_stroke(&mut self, frame: FrameId, stroke: Stroke) -> CanvasResult<StrokeId> {
        let entry = self.frame_mut(frame)?;
        entry.strokes.push(stroke);
        let index = entry.strokes.len() - 1;
        trace!(frame_number = frame.frame_number, stroke = index, "appended stroke");
        Ok(StrokeId {
            frame,
            stroke: index,
        })
    }

    pub fn stroke(&self, id: StrokeId) -> CanvasResult<&Stroke> {
        self.frame(id.frame)?
            .strokes
            .get(id.stroke)
            .ok_or_else(|| CanvasError::host_state(format!("stale stroke handle {}", id.stroke)))
    }

    pub fn stroke_mut(&mut self, id: StrokeId) -> CanvasResult<&mut Stroke> {
        self.frame_mut(id.frame)?
            .strokes
            .get_mut(id.stroke)
            .ok_or_else(|| CanvasError::host_state(format!("stale stroke handle {}", id.stroke)))
    }

    // -------------------------------------------------------------------------
    // Snapshots
    // -------------------------------------------------------------------------

    /// Serializes the whole scene as pretty-printed JSON.
    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds a scene from [`Scene::to_json`] output.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn ensure_name(kind: &str, name: &str) -> CanvasResult<()> {
    if name.trim().is_empty() {
        return Err(CanvasError::invalid_argument(format!(
            "{kind} name must not be empty"
        )));
    }
    Ok(())
}
