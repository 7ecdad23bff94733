//! The boundary between the core and the application that owns the scene

use crate::error::{GeometryError, SelectionError, StackerError};
use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::{BoundingBox, Geometry};
use crate::object::{ObjectId, PlacementObject};

/// Scene access the core needs from its host
///
/// The core only reads through this trait while planning and only calls
/// [`SceneHost::apply_translation`] once a whole plan has been computed.
pub trait SceneHost {
    /// Model-space geometry of an object, `None` if the object does not exist
    fn geometry(&self, object: ObjectId) -> Option<Geometry>;

    /// World matrix of an object, `None` if the object does not exist
    fn world_transform(&self, object: ObjectId) -> Option<Mat4>;

    /// Direct children whose bounds count as part of the object
    fn children(&self, _object: ObjectId) -> Vec<ObjectId> {
        Vec::new()
    }

    /// Move an object by a world-space delta
    fn apply_translation(&mut self, object: ObjectId, translation: &Vec3);
}

/// Capture the world bounds of an object and its descendants
///
/// An object without vertices of its own still has bounds when a descendant
/// does. Only a hierarchy with no vertices anywhere is a geometry error.
pub fn snapshot<H: SceneHost + ?Sized>(host: &H, object: ObjectId) -> Result<PlacementObject, StackerError> {
    let mut visited = Vec::new();
    match hierarchy_bounds(host, object, &mut visited)? {
        Some(bounds) => Ok(PlacementObject::new(object, bounds)),
        None => Err(StackerError::geometry(object, GeometryError::NoVertices)),
    }
}

/// Snapshot several objects, failing on the first problem
pub fn snapshot_all<H: SceneHost + ?Sized>(
    host: &H,
    objects: &[ObjectId],
) -> Result<Vec<PlacementObject>, StackerError> {
    objects.iter().map(|&id| snapshot(host, id)).collect()
}

fn hierarchy_bounds<H: SceneHost + ?Sized>(
    host: &H,
    object: ObjectId,
    visited: &mut Vec<ObjectId>,
) -> Result<Option<BoundingBox>, StackerError> {
    if visited.contains(&object) {
        return Ok(None);
    }
    visited.push(object);

    let geometry = host
        .geometry(object)
        .ok_or(SelectionError::UnknownObject(object))?;
    let world = host
        .world_transform(object)
        .ok_or(SelectionError::UnknownObject(object))?;

    let mut bounds = match geometry.world_bounds(&world) {
        Ok(bounds) => Some(bounds),
        Err(GeometryError::NoVertices) => None,
        Err(source) => return Err(StackerError::geometry(object, source)),
    };

    for child in host.children(object) {
        if let Some(child_bounds) = hierarchy_bounds(host, child, visited)? {
            bounds = Some(match bounds {
                Some(own) => own.union(&child_bounds),
                None => child_bounds,
            });
        }
    }

    Ok(bounds)
}
