//! World-space bounds extraction
//!
//! Geometry is supplied in model space together with the object's world
//! matrix and transformed on demand, the same way collision templates are.
//! Only the resulting box leaves this module.

use crate::error::GeometryError;
use crate::foundation::math::{Mat4, Point3, Vec3};

use super::BoundingBox;

/// Model-space vertex positions of an object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions in MODEL SPACE
    pub vertices: Vec<Vec3>,
}

impl Mesh {
    /// Create a mesh from model-space vertices
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// What a host can hand over for an object
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Full vertex list; every vertex is transformed
    Mesh(Mesh),
    /// A precomputed model-space box; only its eight corners are transformed
    LocalBounds(BoundingBox),
}

impl Geometry {
    /// Compute the world-space box of this geometry under `world`
    pub fn world_bounds(&self, world: &Mat4) -> Result<BoundingBox, GeometryError> {
        match self {
            Self::Mesh(mesh) => bounds_of_vertices(&mesh.vertices, world),
            Self::LocalBounds(local) => bounds_of_local_box(local, world),
        }
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Self::Mesh(mesh)
    }
}

impl From<BoundingBox> for Geometry {
    fn from(local: BoundingBox) -> Self {
        Self::LocalBounds(local)
    }
}

/// Transform every vertex into world space and take componentwise min/max
pub fn bounds_of_vertices(vertices: &[Vec3], world: &Mat4) -> Result<BoundingBox, GeometryError> {
    bounds_of_points(vertices.iter().map(|v| to_world(world, v)).collect())
}

/// Transform the eight corners of a model-space box into world space
///
/// Exact for any affine transform, since the image of a box is the convex
/// hull of its transformed corners.
pub fn bounds_of_local_box(local: &BoundingBox, world: &Mat4) -> Result<BoundingBox, GeometryError> {
    bounds_of_points(local.corners().iter().map(|c| to_world(world, c)).collect())
}

fn to_world(world: &Mat4, v: &Vec3) -> Vec3 {
    world.transform_point(&Point3::from(*v)).coords
}

// Checked before folding: min/max would silently drop NaN components.
fn bounds_of_points(points: Vec<Vec3>) -> Result<BoundingBox, GeometryError> {
    if points.iter().any(|p| p.iter().any(|c| !c.is_finite())) {
        return Err(GeometryError::NonFiniteVertex);
    }
    BoundingBox::from_points(points).ok_or(GeometryError::NoVertices)
}
