//! Ordering engine
//!
//! Produces the stacking sequence for a set of objects. Sorting is stable in
//! both directions: objects with equal keys keep their selection order, so
//! re-running an ordering on its own output changes nothing.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Axis;
use crate::geometry::BoundingBox;
use crate::object::{ObjectId, PlacementObject};

/// The scalar a set of objects is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep selection order
    #[default]
    None,
    /// Extent along the up axis
    Height,
    /// Extent along the first lateral axis (X unless X is up)
    Width,
    /// Extent along the second lateral axis
    Depth,
    /// Area of the face perpendicular to the stacking axis
    Area,
    /// Position of the box's lower bound on an axis
    AxisPosition(Axis),
}

/// Which end of the order goes first (nearest the base)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

/// The axes size keys are measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// World up axis; `Height` is measured along it
    pub up: Axis,
    /// The axis objects are chained along; `Area` is measured across it
    pub stacking: Axis,
}

impl Frame {
    /// A frame for vertical work, stacking along `up`
    pub fn vertical(up: Axis) -> Self {
        Self { up, stacking: up }
    }
}

impl SortKey {
    /// The key value of one box, `None` for [`SortKey::None`]
    pub fn value(self, bounds: &BoundingBox, frame: Frame) -> Option<f32> {
        let (width, depth) = frame.up.others();
        match self {
            Self::None => None,
            Self::Height => Some(bounds.size_on(frame.up)),
            Self::Width => Some(bounds.size_on(width)),
            Self::Depth => Some(bounds.size_on(depth)),
            Self::Area => Some(bounds.face_area(frame.stacking)),
            Self::AxisPosition(axis) => Some(bounds.min_on(axis)),
        }
    }
}

/// Objects in stacking order; the first entry goes nearest the base
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedSet {
    objects: Vec<PlacementObject>,
}

impl OrderedSet {
    /// Take a sequence as already ordered
    pub fn from_ordered(objects: Vec<PlacementObject>) -> Self {
        Self { objects }
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when there are no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The objects in order
    pub fn as_slice(&self) -> &[PlacementObject] {
        &self.objects
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, PlacementObject> {
        self.objects.iter()
    }

    /// Object ids in order
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|o| o.id).collect()
    }

    /// Give back the ordered objects
    pub fn into_vec(self) -> Vec<PlacementObject> {
        self.objects
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a PlacementObject;
    type IntoIter = std::slice::Iter<'a, PlacementObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

/// Stable-sort objects by `key` in `direction`
///
/// An empty input gives an empty set; [`SortKey::None`] keeps input order
/// regardless of direction.
pub fn order(
    objects: Vec<PlacementObject>,
    key: SortKey,
    direction: SortDirection,
    frame: Frame,
) -> OrderedSet {
    if key == SortKey::None || objects.len() < 2 {
        return OrderedSet::from_ordered(objects);
    }

    let mut keyed: Vec<(f32, PlacementObject)> = objects
        .into_iter()
        .map(|o| (key.value(&o.bounds, frame).unwrap_or_default(), o))
        .collect();

    // Vec::sort_by is stable, so equal keys stay in selection order
    match direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
    }

    log::debug!(
        "Ordered {} objects by {:?} ({:?})",
        keyed.len(),
        key,
        direction
    );

    OrderedSet::from_ordered(keyed.into_iter().map(|(_, o)| o).collect())
}

/// The object whose box starts lowest on `axis`
///
/// The first such object in input order wins a tie.
pub fn lowest(objects: &[PlacementObject], axis: Axis) -> Option<&PlacementObject> {
    objects.iter().fold(None, |best: Option<&PlacementObject>, o| match best {
        Some(b) if b.bounds.min_on(axis) <= o.bounds.min_on(axis) => Some(b),
        _ => Some(o),
    })
}
