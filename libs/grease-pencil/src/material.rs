//! # Material Resolver
//!
//! Creates grease-pencil materials, attaches them to canvas objects and
//! resolves material names to slot indices.
//!
//! ## Example
//!
//! ```rust
//! use grease_pencil::{create_gpencil_material, index_of_material, Scene};
//!
//! let mut scene = Scene::new();
//! scene.get_or_create_object("GPencil").unwrap();
//! let slot = create_gpencil_material(
//!     &mut scene, "GPencil", "Ink", [1.0, 1.0, 1.0, 1.0], [0.0, 0.0, 0.0, 1.0],
//! )
//! .unwrap();
//! assert_eq!(index_of_material(&scene, "GPencil", "Ink").unwrap(), slot);
//! ```

use tracing::debug;

use crate::error::{CanvasError, CanvasResult};
use crate::model::{GpencilStyle, Material};
use crate::scene::{ObjectId, Scene};

/// Index reported by [`index_of_material_or_sentinel`] for absent materials.
pub const NOT_FOUND_INDEX: i64 = -1;

impl Scene {
    /// Returns the scene material called `name`, creating a plain
    /// (non grease-pencil) one if needed.
    pub fn get_or_create_material(&mut self, name: &str) -> CanvasResult<&mut Material> {
        if name.trim().is_empty() {
            return Err(CanvasError::invalid_argument(
                "material name must not be empty",
            ));
        }
        let materials = self.materials_mut();
        let (position, created) = materials.get_or_insert_with(name, || Material::new(name));
        if created {
            debug!(material = name, "created material");
        }
        materials
            .get_mut(position)
            .ok_or_else(|| CanvasError::host_state(format!("material '{name}' vanished")))
    }

    /// Attaches a scene material to an object, returning its slot. A
    /// material that is already attached keeps its existing slot.
    pub fn attach_material(&mut self, object: ObjectId, material: &str) -> CanvasResult<usize> {
        if !self.materials().contains(material) {
            return Err(CanvasError::not_found("material", material));
        }
        let canvas = self.object_mut(object)?;
        if let Some(slot) = canvas.material_slot(material) {
            return Ok(slot);
        }
        canvas.material_slots.push(material.to_string());
        debug!(object = %canvas.name, material, "attached material");
        Ok(canvas.material_slots.len() - 1)
    }

    /// Slot of `material` in an object's material list.
    pub fn material_index(&self, object: ObjectId, material: &str) -> CanvasResult<usize> {
        self.object(object)?
            .material_slot(material)
            .ok_or_else(|| CanvasError::not_found("material", material))
    }
}

/// Creates or fetches a grease-pencil material, sets its colors and attaches
/// it to the named object. Returns the material's slot on that object.
///
/// The object must already exist.
#[tracing::instrument(level = "debug", skip(scene))]
pub fn create_gpencil_material(
    scene: &mut Scene,
    object_name: &str,
    material_name: &str,
    fill_color: [f32; 4],
    stroke_color: [f32; 4],
) -> CanvasResult<usize> {
    let object = scene.object_id(object_name)?;

    let material = scene.get_or_create_material(material_name)?;
    let style = material.grease_pencil.get_or_insert_with(GpencilStyle::default);
    style.fill_color = fill_color;
    style.stroke_color = stroke_color;

    scene.attach_material(object, material_name)
}

/// Slot of `material_name` on the named object.
///
/// Fails with `HostState` when the object is absent and `NotFound` when the
/// material is not attached to it.
pub fn index_of_material(
    scene: &Scene,
    object_name: &str,
    material_name: &str,
) -> CanvasResult<usize> {
    let object = scene.object_id(object_name)?;
    scene.material_index(object, material_name)
}

/// Like [`index_of_material`], but reports an absent material as
/// [`NOT_FOUND_INDEX`] instead of an error.
pub fn index_of_material_or_sentinel(
    scene: &Scene,
    object_name: &str,
    material_name: &str,
) -> CanvasResult<i64> {
    match index_of_material(scene, object_name, material_name) {
        Ok(slot) => i64::try_from(slot)
            .map_err(|_| CanvasError::host_state(format!("material slot {slot} out of range"))),
        Err(CanvasError::NotFound { .. }) => Ok(NOT_FOUND_INDEX),
        Err(err) => Err(err),
    }
}

/// Looks up a scene material by name.
pub fn get_material<'a>(scene: &'a Scene, material_name: &str) -> CanvasResult<&'a Material> {
    scene
        .materials()
        .by_name(material_name)
        .ok_or_else(|| CanvasError::not_found("material", material_name))
}
