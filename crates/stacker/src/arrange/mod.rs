//! Arrangement solvers
//!
//! Pure functions from box snapshots to translations. Nothing here reads or
//! writes host state; [`crate::host`] feeds them and applies their output.
//!
//! # Module Organization
//!
//! - [`ordering`] - Stable size/position ordering of a selection
//! - [`stack`] - Chained placement on top of (or beside) a reference
//! - [`drop`] - Straight-down settling into columns

pub mod ordering;
pub mod stack;
pub mod drop;

pub use ordering::{order, lowest, Frame, OrderedSet, SortDirection, SortKey};
pub use stack::{stack, stack_offset, Alignment, StackMode, StackParams};
pub use drop::{columns, drop_onto, drop_to_surface, DropParams};

use crate::error::Warning;
use crate::foundation::math::Vec3;
use crate::object::{ObjectId, Placement};

/// Output of a solver run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// One translation per moved object
    pub placements: Vec<Placement>,
    /// Non-fatal conditions met while solving
    pub warnings: Vec<Warning>,
}

impl Plan {
    /// An empty plan with room for `n` placements
    pub fn with_capacity(n: usize) -> Self {
        Self {
            placements: Vec::with_capacity(n),
            warnings: Vec::new(),
        }
    }

    /// The translation planned for `object`, if any
    pub fn translation_of(&self, object: ObjectId) -> Option<Vec3> {
        self.placements
            .iter()
            .find(|p| p.object == object)
            .map(|p| p.translation)
    }

    /// Record and log a warning
    pub(crate) fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
