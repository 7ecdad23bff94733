//! Stacker demo application
//!
//! Builds a small in-memory scene, then stacks, drops and settles objects in
//! it and logs every planned translation. An optional `.toml` or `.ron`
//! configuration path can be passed as the first argument.

use std::collections::HashMap;

use stacker::foundation::logging;
use stacker::prelude::*;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stacker(#[from] StackerError),
}

struct DemoObject {
    name: &'static str,
    geometry: Geometry,
    transform: Transform,
}

/// Minimal scene owner: objects by id, each with geometry and a transform
#[derive(Default)]
struct DemoScene {
    objects: HashMap<ObjectId, DemoObject>,
}

impl DemoScene {
    fn add_box(&mut self, id: u64, name: &'static str, position: Vec3, size: Vec3) -> ObjectId {
        let local = BoundingBox::new(Vec3::zeros(), size);
        self.insert(id, name, Geometry::from(local), Transform::from_position(position))
    }

    fn add_mesh(&mut self, id: u64, name: &'static str, mesh: Mesh, transform: Transform) -> ObjectId {
        self.insert(id, name, Geometry::from(mesh), transform)
    }

    fn insert(&mut self, id: u64, name: &'static str, geometry: Geometry, transform: Transform) -> ObjectId {
        let id = ObjectId(id);
        self.objects.insert(id, DemoObject { name, geometry, transform });
        id
    }

    fn describe(&self, ids: &[ObjectId]) {
        for id in ids {
            let Some(object) = self.objects.get(id) else {
                continue;
            };
            match object.geometry.world_bounds(&object.transform.to_matrix()) {
                Ok(bounds) => log::info!(
                    "  {} {:<8} min ({:.2}, {:.2}, {:.2}) max ({:.2}, {:.2}, {:.2})",
                    id,
                    object.name,
                    bounds.min.x,
                    bounds.min.y,
                    bounds.min.z,
                    bounds.max.x,
                    bounds.max.y,
                    bounds.max.z
                ),
                Err(e) => log::warn!("  {} {:<8} {}", id, object.name, e),
            }
        }
    }
}

impl SceneHost for DemoScene {
    fn geometry(&self, object: ObjectId) -> Option<Geometry> {
        self.objects.get(&object).map(|o| o.geometry.clone())
    }

    fn world_transform(&self, object: ObjectId) -> Option<Mat4> {
        self.objects.get(&object).map(|o| o.transform.to_matrix())
    }

    fn apply_translation(&mut self, object: ObjectId, translation: &Vec3) {
        if let Some(o) = self.objects.get_mut(&object) {
            o.transform.translate(translation);
        }
    }
}

fn pyramid() -> Mesh {
    Mesh::new(vec![
        Vec3::new(-0.5, -0.5, 0.0),
        Vec3::new(0.5, -0.5, 0.0),
        Vec3::new(0.5, 0.5, 0.0),
        Vec3::new(-0.5, 0.5, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ])
}

fn log_plan(title: &str, plan: &Plan) {
    log::info!("{title}: {} placements, {} warnings", plan.placements.len(), plan.warnings.len());
    for placement in &plan.placements {
        match ron::to_string(placement) {
            Ok(text) => log::debug!("  {text}"),
            Err(e) => log::debug!("  {placement:?} ({e})"),
        }
    }
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => StackerConfig::load_from_file(path)?,
        None => StackerConfig::default(),
    };
    logging::init_with_level(&config.log_level);
    log::info!("Starting stacker demo ({:?}, up {})", config.mode, config.up_axis);

    let stacker = Stacker::new(config)?;
    let mut scene = DemoScene::default();

    let table = scene.add_box(1, "table", Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 4.0, 1.0));
    let crate_a = scene.add_box(2, "crate", Vec3::new(6.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let crate_b = scene.add_box(3, "tall", Vec3::new(-3.0, 2.0, 4.0), Vec3::new(1.0, 1.0, 2.0));
    let spire = scene.add_mesh(
        4,
        "spire",
        pyramid(),
        Transform::from_position(Vec3::new(2.0, -4.0, 7.0)).with_scale(Vec3::new(1.5, 1.5, 2.0)),
    );
    let all = [table, crate_a, crate_b, spire];

    log::info!("Initial scene:");
    scene.describe(&all);

    let plan = stacker.stack(&mut scene, Some(table), &[crate_a, crate_b])?;
    log_plan("Stack on table", &plan);
    scene.describe(&all);

    let plan = stacker.drop_onto(&mut scene, Some(table), &[spire])?;
    log_plan("Drop spire", &plan);
    scene.describe(&all);

    // Lift everything off the floor, then let it fall back together
    for id in all {
        scene.apply_translation(id, &Vec3::new(0.0, 0.0, 3.0));
    }
    let plan = stacker.settle(&mut scene, &all)?;
    log_plan("Settle", &plan);
    scene.describe(&all);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("stacker_demo: {e}");
        std::process::exit(1);
    }
}
