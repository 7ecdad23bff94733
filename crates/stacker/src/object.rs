//! Object identities, per-invocation snapshots and placement results

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::math::Vec3;
use crate::geometry::BoundingBox;

/// Host-assigned identifier of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A scene object paired with the world bounds captured at operation start
///
/// Snapshots are never updated in place; solvers track moved bounds locally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementObject {
    /// The object this snapshot belongs to
    pub id: ObjectId,
    /// World-space bounds at operation start
    pub bounds: BoundingBox,
}

impl PlacementObject {
    /// Create a snapshot
    pub fn new(id: impl Into<ObjectId>, bounds: BoundingBox) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// The translation a solver decided for one object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The object to move
    pub object: ObjectId,
    /// World-space delta to add to the object's position
    pub translation: Vec3,
}

impl Placement {
    /// Create a placement
    pub fn new(object: ObjectId, translation: Vec3) -> Self {
        Self {
            object,
            translation,
        }
    }

    /// A placement that leaves the object where it is
    pub fn stay(object: ObjectId) -> Self {
        Self::new(object, Vec3::zeros())
    }
}
