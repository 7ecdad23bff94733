//! Axis-aligned bounding box value type

use approx::abs_diff_eq;

use crate::foundation::math::{Axis, Vec3};

/// Axis-aligned bounding box in world space
///
/// `min <= max` componentwise. Zero extent on any axis is legal (flat
/// objects); nothing derived from a box divides by an extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a new box from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "bounding box min {min:?} exceeds max {max:?}"
        );
        Self { min, max }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self { min: first, max: first }, |bounds, p| Self {
            min: bounds.min.inf(&p),
            max: bounds.max.sup(&p),
        }))
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the box
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the full edge lengths of the box
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Lower bound on one axis
    pub fn min_on(&self, axis: Axis) -> f32 {
        self.min[axis.index()]
    }

    /// Upper bound on one axis
    pub fn max_on(&self, axis: Axis) -> f32 {
        self.max[axis.index()]
    }

    /// Edge length on one axis
    pub fn size_on(&self, axis: Axis) -> f32 {
        self.max_on(axis) - self.min_on(axis)
    }

    /// Center coordinate on one axis
    pub fn center_on(&self, axis: Axis) -> f32 {
        (self.min_on(axis) + self.max_on(axis)) * 0.5
    }

    /// Area of the face perpendicular to `axis`
    pub fn face_area(&self, axis: Axis) -> f32 {
        let (a, b) = axis.others();
        self.size_on(a) * self.size_on(b)
    }

    /// True when the box has no extent along `axis`
    pub fn is_flat_on(&self, axis: Axis) -> bool {
        abs_diff_eq!(self.size_on(axis), 0.0)
    }

    /// The eight corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Check if this box contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if the footprints seen along `up` overlap with nonzero area
    ///
    /// Boxes that only touch along an edge do not overlap.
    pub fn footprint_overlaps(&self, other: &BoundingBox, up: Axis) -> bool {
        let (a, b) = up.others();
        let open = |axis: Axis| {
            self.min_on(axis) < other.max_on(axis) && other.min_on(axis) < self.max_on(axis)
        };
        open(a) && open(b)
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// The box moved by `delta`
    pub fn translated(&self, delta: &Vec3) -> BoundingBox {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}
