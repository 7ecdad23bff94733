//! Stack placement solver
//!
//! Chains movers along the stacking axis starting at the reference's far
//! face. Each mover's near face is put on the current surface (plus padding)
//! and its far face becomes the next surface, so consecutive movers are
//! contiguous and never overlap on the stacking axis.

use serde::{Deserialize, Serialize};

use crate::error::Warning;
use crate::foundation::math::{Axis, Vec3};
use crate::geometry::BoundingBox;
use crate::object::{Placement, PlacementObject};

use super::ordering::OrderedSet;
use super::Plan;

/// Direction objects are stacked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StackMode {
    /// Along the up axis, on top of the reference
    #[default]
    Vertical,
    /// Edge to edge along a lateral axis
    Horizontal,
}

/// How movers are positioned on the two non-stacking axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Mover centers match the reference center
    #[default]
    Center,
    /// Mover min corners match the reference min corner
    Edge,
    /// Movers keep their own position
    Preserve,
}

/// Inputs of one stacking run that are not boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackParams {
    /// Axis movers are chained along
    pub axis: Axis,
    /// Placement on the other two axes
    pub alignment: Alignment,
    /// Gap before every mover, including the first
    pub padding: f32,
}

impl StackParams {
    /// Centered, unpadded stacking along `axis`
    pub fn along(axis: Axis) -> Self {
        Self {
            axis,
            alignment: Alignment::Center,
            padding: 0.0,
        }
    }

    /// Set the alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

/// Translation that puts `incoming` on the far face of `base` along `axis`
///
/// On the other two axes `incoming` is aligned with `base` as `alignment`
/// says.
pub fn stack_offset(
    base: &BoundingBox,
    incoming: &BoundingBox,
    axis: Axis,
    alignment: Alignment,
    padding: f32,
) -> Vec3 {
    let mut delta = match alignment {
        Alignment::Center => base.center() - incoming.center(),
        Alignment::Edge => base.min - incoming.min,
        Alignment::Preserve => Vec3::zeros(),
    };
    delta[axis.index()] = base.max_on(axis) + padding - incoming.min_on(axis);
    delta
}

/// Stack every mover on `reference` in order
///
/// A flat reference is a valid surface and only produces a warning.
pub fn stack(reference: &PlacementObject, movers: &OrderedSet, params: &StackParams) -> Plan {
    let mut plan = Plan::with_capacity(movers.len());
    let axis = params.axis;

    if reference.bounds.is_flat_on(axis) {
        plan.warn(Warning::DegenerateAxis {
            object: reference.id,
            axis,
        });
    }

    let mut previous = reference.bounds;
    for mover in movers {
        if mover.bounds.is_flat_on(axis) {
            plan.warn(Warning::DegenerateAxis {
                object: mover.id,
                axis,
            });
        }

        let delta = stack_offset(&previous, &mover.bounds, axis, params.alignment, params.padding);
        previous = mover.bounds.translated(&delta);

        log::debug!(
            "Stacking {} on {} at {:.4}..{:.4}",
            mover.id,
            axis,
            previous.min_on(axis),
            previous.max_on(axis)
        );
        plan.placements.push(Placement::new(mover.id, delta));
    }

    plan
}
