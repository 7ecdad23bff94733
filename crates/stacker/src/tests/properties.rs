//! Geometric guarantees every operation has to keep

use approx::assert_relative_eq;

use super::scene::RecordingScene;
use crate::arrange::{self, DropParams, Frame, SortDirection, SortKey};
use crate::core::config::StackerConfig;
use crate::error::Warning;
use crate::foundation::math::{Axis, Point3, Quat, Transform, Vec3};
use crate::geometry::extract::bounds_of_vertices;
use crate::geometry::BoundingBox;
use crate::host::{snapshot_all, Stacker};
use crate::object::PlacementObject;

fn stacker() -> Stacker {
    Stacker::new(StackerConfig::default()).unwrap()
}

#[test]
fn test_bounds_contain_every_vertex() {
    let mut scene = RecordingScene::new();
    let vertices = vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-0.5, 0.8, 0.3),
        Vec3::new(-0.5, -0.8, 0.3),
        Vec3::new(0.0, 0.0, 1.5),
        Vec3::new(0.2, 0.1, -0.7),
    ];
    let id = scene.add_mesh(1, vertices.clone(), Vec3::new(3.0, -2.0, 1.0));

    let rotation = Quat::from_axis_angle(&Vec3::y_axis(), 0.7);
    let transform = Transform::from_position(Vec3::new(3.0, -2.0, 1.0))
        .with_rotation(rotation)
        .with_scale(Vec3::new(2.0, 1.0, 0.5));
    let world = transform.to_matrix();
    let bounds = bounds_of_vertices(&vertices, &world).unwrap();

    for v in &vertices {
        let p = world.transform_point(&Point3::from(*v)).coords;
        assert!(bounds.contains_point(p), "{p:?} outside {bounds:?}");
    }

    // Same check through the host for a translated-only object
    let snap = &snapshot_all(&scene, &[id]).unwrap()[0];
    for v in &vertices {
        assert!(snap.bounds.contains_point(v + Vec3::new(3.0, -2.0, 1.0)));
    }
}

#[test]
fn test_ordering_is_idempotent() {
    let objects: Vec<PlacementObject> = [1.0, 3.0, 2.0, 3.0, 1.0]
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            PlacementObject::new(i as u64, BoundingBox::new(Vec3::zeros(), Vec3::new(1.0, 1.0, h)))
        })
        .collect();
    let frame = Frame::vertical(Axis::Z);

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let once = arrange::order(objects.clone(), SortKey::Height, direction, frame);
        let ids = once.ids();
        let twice = arrange::order(once.into_vec(), SortKey::Height, direction, frame);
        assert_eq!(twice.ids(), ids);
    }
}

#[test]
fn test_vertical_stack_is_contiguous() {
    let mut scene = RecordingScene::new();
    let reference = scene.add_box(1, [0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    let a = scene.add_box(2, [5.0, 5.0, -3.0], [1.0, 1.0, 1.0]);
    let b = scene.add_box(3, [-4.0, 1.0, 7.0], [1.0, 1.0, 2.0]);
    let c = scene.add_box(4, [0.0, 9.0, 0.5], [1.0, 1.0, 1.0]);

    stacker().stack(&mut scene, Some(reference), &[a, b, c]).unwrap();

    let boxes: Vec<BoundingBox> = [a, b, c].iter().map(|&id| scene.world_box(id)).collect();
    assert_relative_eq!(boxes[0].max.z, 3.0);
    assert_relative_eq!(boxes[1].max.z, 5.0);
    assert_relative_eq!(boxes[2].max.z, 6.0);

    assert_relative_eq!(boxes[0].min.z, 2.0);
    for pair in boxes.windows(2) {
        assert_relative_eq!(pair[0].max.z, pair[1].min.z);
    }
}

#[test]
fn test_center_alignment_matches_reference_center() {
    let mut scene = RecordingScene::new();
    let reference = scene.add_box(1, [-1.0, 4.0, 0.0], [4.0, 2.0, 1.0]);
    let movers = [
        scene.add_box(2, [7.0, 7.0, 7.0], [1.0, 1.0, 1.0]),
        scene.add_box(3, [-9.0, 0.0, 2.0], [3.0, 0.5, 2.0]),
    ];

    stacker().stack(&mut scene, Some(reference), &movers).unwrap();

    let center = scene.world_box(reference).center();
    for id in movers {
        let placed = scene.world_box(id).center();
        assert_relative_eq!(placed.x, center.x);
        assert_relative_eq!(placed.y, center.y);
    }
}

#[test]
fn test_drop_keeps_column_order() {
    let objects = vec![
        PlacementObject::new(1, BoundingBox::new(Vec3::new(0.0, 0.0, 8.0), Vec3::new(2.0, 2.0, 9.0))),
        PlacementObject::new(2, BoundingBox::new(Vec3::new(1.0, 1.0, 4.0), Vec3::new(3.0, 3.0, 6.0))),
        PlacementObject::new(3, BoundingBox::new(Vec3::new(1.5, 0.5, 1.0), Vec3::new(2.5, 1.5, 1.5))),
    ];
    let plan = arrange::drop_to_surface(0.0, &objects, &DropParams::along(Axis::Z));

    let rested: Vec<BoundingBox> = objects
        .iter()
        .map(|o| o.bounds.translated(&plan.translation_of(o.id).unwrap()))
        .collect();

    // 3 started lowest, then 2, then 1; all footprints overlap pairwise
    assert_relative_eq!(rested[2].min.z, 0.0);
    assert!(rested[1].min.z >= rested[2].max.z);
    assert!(rested[0].min.z >= rested[1].max.z);
}

#[test]
fn test_single_mover_round_trip() {
    let mut scene = RecordingScene::new();
    let reference = scene.add_box(1, [0.0, 0.0, 1.0], [2.0, 2.0, 3.0]);
    let mover = scene.add_box(2, [4.0, 4.0, 10.0], [1.0, 1.0, 1.5]);

    stacker().stack(&mut scene, Some(reference), &[mover]).unwrap();

    let recorded = snapshot_all(&scene, &[mover]).unwrap()[0].bounds;
    assert_eq!(recorded.max.z, scene.world_box(reference).max.z + 1.5);
}

#[test]
fn test_unit_mover_lands_centered_on_reference() {
    let mut scene = RecordingScene::new();
    let reference = scene.add_box(1, [0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    let mover = scene.add_box(2, [-6.25, 3.5, 11.0], [1.0, 1.0, 1.0]);

    stacker().stack(&mut scene, Some(reference), &[mover]).unwrap();

    let placed = scene.world_box(mover);
    assert_relative_eq!(placed.min, Vec3::new(0.5, 0.5, 2.0));
    assert_relative_eq!(placed.max, Vec3::new(1.5, 1.5, 3.0));
}

#[test]
fn test_separate_footprints_land_on_flat_target() {
    let mut scene = RecordingScene::new();
    let target = scene.add_box(1, [-10.0, -10.0, 0.0], [20.0, 20.0, 0.0]);
    let a = scene.add_box(2, [0.0, 0.0, 3.0], [1.0, 1.0, 1.0]);
    let b = scene.add_box(3, [4.0, 4.0, 12.5], [1.0, 2.0, 1.0]);

    let plan = stacker().drop_onto(&mut scene, Some(target), &[a, b]).unwrap();

    assert_relative_eq!(scene.world_box(a).min.z, 0.0);
    assert_relative_eq!(scene.world_box(b).min.z, 0.0);
    assert_eq!(
        plan.warnings,
        vec![Warning::DegenerateAxis {
            object: target,
            axis: Axis::Z
        }]
    );
}
