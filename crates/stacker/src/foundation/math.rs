//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the geometry core, the
//! world [`Axis`] selector and a position/rotation/scale [`Transform`] that
//! hosts can turn into a world matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// A world coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis
    X,
    /// The Y axis
    Y,
    /// The Z axis
    Z,
}

impl Axis {
    /// All three axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a [`Vec3`]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The two remaining axes, in ascending index order
    ///
    /// For a Z-up world this is `(X, Y)`, for a Y-up world `(X, Z)`.
    pub const fn others(self) -> (Axis, Axis) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }

    /// Unit vector pointing along this axis
    pub fn unit(self) -> Vec3 {
        let mut v = Vec3::zeros();
        v[self.index()] = 1.0;
        v
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale factors
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Move the position by a world-space delta
    pub fn translate(&mut self, delta: &Vec3) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_others_exclude_self() {
        for axis in Axis::ALL {
            let (a, b) = axis.others();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert!(a.index() < b.index());
        }
    }

    #[test]
    fn test_transform_matrix_applies_scale_then_translation() {
        let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::new(2.0, 2.0, 2.0));
        let point = transform.to_matrix().transform_point(&Point3::new(1.0, 1.0, 1.0));

        assert_relative_eq!(point.coords, Vec3::new(3.0, 4.0, 5.0), epsilon = 1e-6);
    }

    #[test]
    fn test_transform_translate() {
        let mut transform = Transform::identity();
        transform.translate(&Vec3::new(0.5, 0.0, -1.0));
        assert_eq!(transform.position, Vec3::new(0.5, 0.0, -1.0));
    }
}
