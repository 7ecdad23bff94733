//! # Stacker
//!
//! Geometric core for stacking and dropping 3D objects by their world-space
//! bounding boxes.
//!
//! ## Features
//!
//! - **Stacking**: Chain a selection on top of (or beside) a reference object
//! - **Dropping**: Let objects fall straight down onto a target, column by column
//! - **Ordering**: Stable sort by height, width, depth, area or position
//! - **Host-agnostic**: Any scene owner implementing [`host::SceneHost`] can drive it
//! - **All-or-nothing**: Every check happens before the first translation is applied
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stacker::prelude::*;
//!
//! fn stack_selection<H: SceneHost>(scene: &mut H) -> Result<(), StackerError> {
//!     let config = StackerConfig::new()
//!         .with_sort(SortKey::Height, SortDirection::Descending)
//!         .with_padding(0.1);
//!     let stacker = Stacker::new(config)?;
//!
//!     let plan = stacker.stack(scene, Some(ObjectId(1)), &[ObjectId(2), ObjectId(3)])?;
//!     for warning in &plan.warnings {
//!         log::warn!("{warning}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

// Options and their file formats
pub mod core;
pub mod config;

pub mod foundation;
pub mod geometry;
pub mod object;
pub mod arrange;
pub mod host;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::{GeometryError, SelectionError, StackerError, Warning};

/// Common imports for hosts
pub mod prelude {
    pub use crate::{
        arrange::{Alignment, Plan, SortDirection, SortKey, StackMode},
        core::config::{Config, ConfigError, StackerConfig},
        error::{GeometryError, SelectionError, StackerError, Warning},
        foundation::math::{Axis, Mat4, Transform, Vec3},
        geometry::{BoundingBox, Geometry, Mesh},
        host::{SceneHost, Stacker},
        object::{ObjectId, Placement, PlacementObject},
    };
}
