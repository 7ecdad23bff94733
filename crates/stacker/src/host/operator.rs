//! Operation runner
//!
//! One [`Stacker`] call is one user action: snapshot the selection through
//! the host, validate it, order and solve, then apply every translation.
//! Any error is returned before the first translation is applied.

use crate::arrange::{self, Plan};
use crate::core::config::StackerConfig;
use crate::error::{SelectionError, StackerError};
use crate::foundation::math::Axis;
use crate::object::{ObjectId, Placement, PlacementObject};

use super::adapter::{snapshot, snapshot_all, SceneHost};

/// Runs stack and drop operations against a [`SceneHost`]
#[derive(Debug, Clone)]
pub struct Stacker {
    config: StackerConfig,
}

impl Stacker {
    /// Create a runner, rejecting unusable options up front
    pub fn new(config: StackerConfig) -> Result<Self, StackerError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The options every operation uses
    pub fn config(&self) -> &StackerConfig {
        &self.config
    }

    /// Compute the translations that stack `movers` on `reference`
    pub fn plan_stack<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        reference: Option<ObjectId>,
        movers: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        let reference = check_reference(reference, movers)?;
        let base = snapshot(host, reference)?;
        let movers = snapshot_all(host, movers)?;
        Ok(self.solve_stack(&base, movers))
    }

    /// Stack `movers` on `reference` and apply the result
    pub fn stack<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        reference: Option<ObjectId>,
        movers: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        let plan = self.plan_stack(host, reference, movers)?;
        apply(host, &plan.placements);
        log::info!(
            "Stacked {} objects along {}",
            plan.placements.len(),
            self.config.stacking_axis()
        );
        Ok(plan)
    }

    /// Compute the translations that stack a selection on its lowest member
    ///
    /// The lowest object along the stacking axis stays put; every other
    /// selected object is ordered and stacked on it.
    pub fn plan_stack_on_lowest<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        selection: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        check_selection(selection, 2)?;
        let mut objects = snapshot_all(host, selection)?;

        let base_index = lowest_index(&objects, self.config.stacking_axis());
        let base = objects.remove(base_index);
        log::debug!("Using {} as the stack base", base.id);

        Ok(self.solve_stack(&base, objects))
    }

    /// Stack a selection on its lowest member and apply the result
    pub fn stack_on_lowest<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        selection: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        let plan = self.plan_stack_on_lowest(host, selection)?;
        apply(host, &plan.placements);
        log::info!("Stacked {} objects on the lowest selected", plan.placements.len());
        Ok(plan)
    }

    /// Compute the translations that drop `objects` onto `target`
    pub fn plan_drop<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        target: Option<ObjectId>,
        objects: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        let target = check_reference(target, objects)?;
        let target = snapshot(host, target)?;
        let objects = snapshot_all(host, objects)?;
        Ok(arrange::drop_onto(&target, &objects, &self.config.drop_params()))
    }

    /// Drop `objects` onto `target` and apply the result
    pub fn drop_onto<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        target: Option<ObjectId>,
        objects: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        let plan = self.plan_drop(host, target, objects)?;
        apply(host, &plan.placements);
        log::info!("Dropped {} objects along {}", plan.placements.len(), self.config.up_axis);
        Ok(plan)
    }

    /// Compute the translations that settle a selection on its own floor
    ///
    /// The floor is the plane through the bottom of the lowest selected
    /// object, which therefore does not move.
    pub fn plan_settle<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        selection: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        check_selection(selection, 2)?;
        let objects = snapshot_all(host, selection)?;

        let up = self.config.up_axis;
        let floor = objects[lowest_index(&objects, up)].bounds.min_on(up);
        Ok(arrange::drop_to_surface(floor, &objects, &self.config.drop_params()))
    }

    /// Settle a selection on its own floor and apply the result
    pub fn settle<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        selection: &[ObjectId],
    ) -> Result<Plan, StackerError> {
        let plan = self.plan_settle(host, selection)?;
        apply(host, &plan.placements);
        log::info!("Settled {} objects", plan.placements.len());
        Ok(plan)
    }

    fn solve_stack(&self, base: &PlacementObject, movers: Vec<PlacementObject>) -> Plan {
        let ordered = arrange::order(
            movers,
            self.config.sort_key,
            self.config.sort_direction,
            self.config.frame(),
        );
        arrange::stack(base, &ordered, &self.config.stack_params())
    }
}

fn check_reference(reference: Option<ObjectId>, movers: &[ObjectId]) -> Result<ObjectId, SelectionError> {
    let reference = reference.ok_or(SelectionError::MissingReference)?;
    check_selection(movers, 1)?;
    if movers.contains(&reference) {
        return Err(SelectionError::ReferenceAmongMovers(reference));
    }
    Ok(reference)
}

fn check_selection(selection: &[ObjectId], required: usize) -> Result<(), SelectionError> {
    if selection.is_empty() {
        return Err(SelectionError::NoMovers);
    }
    if selection.len() < required {
        return Err(SelectionError::TooFewObjects {
            required,
            found: selection.len(),
        });
    }
    for (i, id) in selection.iter().enumerate() {
        if selection[..i].contains(id) {
            return Err(SelectionError::DuplicateObject(*id));
        }
    }
    Ok(())
}

// Callers have already checked that `objects` is non-empty.
fn lowest_index(objects: &[PlacementObject], axis: Axis) -> usize {
    arrange::lowest(objects, axis)
        .and_then(|lowest| objects.iter().position(|o| o.id == lowest.id))
        .unwrap_or(0)
}

fn apply<H: SceneHost + ?Sized>(host: &mut H, placements: &[Placement]) {
    for placement in placements {
        log::debug!("Moving {} by {:?}", placement.object, placement.translation);
        host.apply_translation(placement.object, &placement.translation);
    }
}
