//! Drop/align solver
//!
//! Moves objects straight down the up axis until each rests on the base
//! surface or on an object already resting below it. Objects are grouped
//! into columns of transitively overlapping footprints; a column is resolved
//! bottom-first, so an object that started above another overlapping object
//! always ends up above it.

use crate::error::Warning;
use crate::foundation::math::Axis;
use crate::geometry::BoundingBox;
use crate::object::{Placement, PlacementObject};

use super::Plan;

/// Inputs of one drop run that are not boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropParams {
    /// Axis objects fall along
    pub up: Axis,
    /// Gap between an object and the object it rests on. Never applied
    /// against the base surface.
    pub padding: f32,
}

impl DropParams {
    /// Unpadded dropping along `up`
    pub fn along(up: Axis) -> Self {
        Self { up, padding: 0.0 }
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

/// Partition objects into columns of transitively overlapping footprints
///
/// Returns indices into `objects`. Columns are ordered by their first member
/// and members keep input order.
pub fn columns(objects: &[PlacementObject], up: Axis) -> Vec<Vec<usize>> {
    let mut parent: Vec<usize> = (0..objects.len()).collect();

    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            if objects[i].bounds.footprint_overlaps(&objects[j].bounds, up) {
                let (a, b) = (root(&mut parent, i), root(&mut parent, j));
                if a != b {
                    // Keep the smaller index as root so columns stay in input order
                    parent[a.max(b)] = a.min(b);
                }
            }
        }
    }

    let mut grouped: Vec<Vec<usize>> = Vec::new();
    let mut slot_of_root: Vec<Option<usize>> = vec![None; objects.len()];
    for i in 0..objects.len() {
        let r = root(&mut parent, i);
        match slot_of_root[r] {
            Some(slot) => grouped[slot].push(i),
            None => {
                slot_of_root[r] = Some(grouped.len());
                grouped.push(vec![i]);
            }
        }
    }
    grouped
}

/// Drop every object onto the top face of `target`
///
/// A flat target is a valid surface and only produces a warning.
pub fn drop_onto(target: &PlacementObject, objects: &[PlacementObject], params: &DropParams) -> Plan {
    let mut plan = Plan::with_capacity(objects.len());
    if target.bounds.is_flat_on(params.up) {
        plan.warn(Warning::DegenerateAxis {
            object: target.id,
            axis: params.up,
        });
    }
    resolve(target.bounds.max_on(params.up), objects, params, plan)
}

/// Drop every object onto the plane at height `surface` on the up axis
pub fn drop_to_surface(surface: f32, objects: &[PlacementObject], params: &DropParams) -> Plan {
    resolve(surface, objects, params, Plan::with_capacity(objects.len()))
}

fn resolve(surface: f32, objects: &[PlacementObject], params: &DropParams, mut plan: Plan) -> Plan {
    let up = params.up;
    let mut deltas = vec![0.0_f32; objects.len()];

    let partition = columns(objects, up);
    log::debug!(
        "Dropping {} objects in {} columns onto {:.4}",
        objects.len(),
        partition.len(),
        surface
    );

    for mut column in partition {
        // Bottom first; stable, so equal heights keep input order
        column.sort_by(|&a, &b| {
            objects[a].bounds.min_on(up).total_cmp(&objects[b].bounds.min_on(up))
        });

        let mut resting: Vec<BoundingBox> = Vec::with_capacity(column.len());
        for i in column {
            let bounds = &objects[i].bounds;
            if bounds.is_flat_on(up) {
                plan.warn(Warning::DegenerateAxis {
                    object: objects[i].id,
                    axis: up,
                });
            }

            let support = resting
                .iter()
                .filter(|below| below.footprint_overlaps(bounds, up))
                .map(|below| below.max_on(up))
                .reduce(f32::max);

            // Padded against any resting object, flat ones included; never against the surface
            let rest = match support {
                Some(top) if top >= surface => top + params.padding,
                _ => surface,
            };

            let delta = rest - bounds.min_on(up);
            deltas[i] = delta;
            resting.push(bounds.translated(&(up.unit() * delta)));
        }
    }

    plan.placements.extend(
        objects
            .iter()
            .zip(deltas)
            .map(|(object, delta)| Placement::new(object.id, up.unit() * delta)),
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn object(id: u64, x: [f32; 2], y: [f32; 2], z: [f32; 2]) -> PlacementObject {
        PlacementObject::new(
            id,
            BoundingBox::new(Vec3::new(x[0], y[0], z[0]), Vec3::new(x[1], y[1], z[1])),
        )
    }

    fn z_deltas(plan: &Plan) -> Vec<f32> {
        plan.placements.iter().map(|p| p.translation.z).collect()
    }

    fn settle(objects: &[PlacementObject], padding: f32) -> Plan {
        let floor = objects
            .iter()
            .map(|o| o.bounds.min_on(Axis::Z))
            .fold(f32::INFINITY, f32::min);
        drop_to_surface(floor, objects, &DropParams::along(Axis::Z).with_padding(padding))
    }

    #[test]
    fn test_columns_are_transitive() {
        let objects = vec![
            object(0, [0.0, 2.0], [0.0, 2.0], [0.0, 1.0]),
            object(1, [5.0, 6.0], [5.0, 6.0], [0.0, 1.0]),
            object(2, [1.5, 3.5], [0.0, 1.0], [4.0, 5.0]),
            object(3, [3.0, 4.0], [0.5, 1.5], [9.0, 9.5]),
        ];
        // 3 overlaps only 2, 2 overlaps 0: one chain
        assert_eq!(columns(&objects, Axis::Z), vec![vec![0, 2, 3], vec![1]]);
    }

    #[test]
    fn test_stacked_in_columns() {
        let objects = vec![
            object(0, [1.0, 3.0], [1.0, 3.0], [1.0, 2.0]),
            object(1, [2.0, 3.0], [2.0, 4.0], [3.0, 4.0]),
            object(2, [0.0, 2.0], [0.0, 2.0], [5.0, 6.0]),
        ];
        let plan = settle(&objects, 0.0);
        assert_eq!(z_deltas(&plan), vec![0.0, -1.0, -3.0]);
    }

    #[test]
    fn test_not_above_falls_to_floor() {
        let objects = vec![
            object(0, [1.0, 2.0], [1.0, 2.0], [1.0, 2.0]),
            object(1, [2.0, 3.0], [2.0, 3.0], [3.0, 4.0]),
            object(2, [2.0, 3.0], [2.0, 3.0], [4.0, 5.0]),
        ];
        let plan = settle(&objects, 0.0);
        assert_eq!(z_deltas(&plan), vec![0.0, -2.0, -2.0]);
    }

    #[test]
    fn test_non_overlapping_ignored_out_of_order() {
        let objects = vec![
            object(0, [0.0, 1.0], [0.0, 1.0], [0.0, 1.0]),
            object(1, [0.0, 1.0], [1.0, 2.0], [4.0, 5.0]),
            object(2, [0.0, 1.0], [0.0, 1.0], [2.0, 3.0]),
        ];
        let plan = settle(&objects, 0.0);
        assert_eq!(z_deltas(&plan), vec![0.0, -4.0, -1.0]);
    }

    #[test]
    fn test_overlapping_object_can_be_lifted() {
        let objects = vec![
            object(0, [0.0, 1.0], [0.0, 1.0], [0.0, 4.0]),
            object(1, [0.0, 1.0], [2.0, 3.0], [2.0, 3.0]),
            object(2, [0.0, 1.0], [0.0, 1.0], [1.0, 5.0]),
        ];
        let plan = settle(&objects, 0.0);
        assert_eq!(z_deltas(&plan), vec![0.0, -2.0, 3.0]);
    }

    #[test]
    fn test_no_padding_against_floor() {
        let objects = vec![
            object(0, [0.0, 1.0], [0.0, 1.0], [0.0, 4.0]),
            object(1, [0.0, 1.0], [2.0, 3.0], [2.0, 3.0]),
        ];
        let plan = settle(&objects, 1.0);
        assert_eq!(z_deltas(&plan), vec![0.0, -2.0]);
    }

    #[test]
    fn test_padding_between_resting_objects() {
        let objects = vec![
            object(0, [0.0, 1.0], [0.0, 1.0], [0.0, 1.0]),
            object(1, [0.0, 1.0], [0.0, 1.0], [5.0, 6.0]),
        ];
        let plan = settle(&objects, 0.25);
        assert_relative_eq!(plan.placements[1].translation.z, -3.75);
    }

    #[test]
    fn test_padding_above_flat_object_on_surface() {
        let target = object(9, [-1.0, 3.0], [-1.0, 3.0], [-1.0, 0.0]);
        let objects = vec![
            object(0, [0.0, 2.0], [0.0, 2.0], [2.0, 2.0]),
            object(1, [0.5, 1.5], [0.5, 1.5], [5.0, 6.0]),
        ];
        let plan = drop_onto(&target, &objects, &DropParams::along(Axis::Z).with_padding(0.5));

        // The sheet lies on the surface unpadded; the cube keeps its gap above it
        assert_relative_eq!(plan.placements[0].translation.z, -2.0);
        assert_relative_eq!(plan.placements[1].translation.z, -4.5);
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_drop_onto_target_moves_along_up_only() {
        let target = object(9, [0.0, 4.0], [0.0, 4.0], [-1.0, 0.0]);
        let objects = vec![
            object(0, [0.0, 1.0], [0.0, 1.0], [3.0, 4.0]),
            object(1, [2.0, 3.0], [2.0, 3.0], [7.5, 8.0]),
        ];
        let plan = drop_onto(&target, &objects, &DropParams::along(Axis::Z));

        for p in &plan.placements {
            assert_eq!(p.translation.x, 0.0);
            assert_eq!(p.translation.y, 0.0);
        }
        assert_eq!(z_deltas(&plan), vec![-3.0, -7.5]);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_drop_along_y_up() {
        let target = object(9, [0.0, 4.0], [0.0, 1.0], [0.0, 4.0]);
        let objects = vec![
            object(0, [0.0, 1.0], [6.0, 7.0], [0.0, 1.0]),
            object(1, [0.5, 1.5], [3.0, 5.0], [0.5, 1.5]),
        ];
        let plan = drop_onto(&target, &objects, &DropParams::along(Axis::Y));

        // 1 starts lower, lands on the target; 0 lands on 1
        assert_relative_eq!(plan.placements[1].translation, Vec3::new(0.0, -2.0, 0.0));
        assert_relative_eq!(plan.placements[0].translation, Vec3::new(0.0, -3.0, 0.0));
    }

    #[test]
    fn test_flat_object_warns_and_rests() {
        let target = object(9, [0.0, 4.0], [0.0, 4.0], [0.0, 0.0]);
        let sheet = object(1, [0.0, 2.0], [0.0, 2.0], [2.0, 2.0]);
        let plan = drop_onto(&target, &[sheet], &DropParams::along(Axis::Z));

        assert_eq!(z_deltas(&plan), vec![-2.0]);
        assert_eq!(plan.warnings.len(), 2);
    }
}
