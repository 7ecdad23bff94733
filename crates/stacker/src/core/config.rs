//! # Operation Configuration
//!
//! The user-chosen options of one stack/drop invocation. A host usually keeps
//! one [`StackerConfig`] behind its property panel and passes it with every
//! call; the core never stores it between calls.
//!
//! Configurations serialise to TOML or RON through the [`Config`] trait:
//!
//! ```toml
//! mode = "Vertical"
//! up_axis = "Z"
//! horizontal_axis = "X"
//! sort_key = "Area"
//! sort_direction = "Descending"
//! alignment = "Center"
//! padding = 0.1
//! log_level = "debug"
//! ```

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

use crate::arrange::{Alignment, DropParams, Frame, SortDirection, SortKey, StackMode, StackParams};
use crate::foundation::math::Axis;

/// # Stacker Configuration
///
/// Every field has a default, so a file only needs the options it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackerConfig {
    /// Vertical or horizontal stacking
    pub mode: StackMode,
    /// World up axis, used for vertical stacking and for dropping
    pub up_axis: Axis,
    /// Stacking axis in horizontal mode
    pub horizontal_axis: Axis,
    /// Key movers are ordered by before stacking
    pub sort_key: SortKey,
    /// Direction of that ordering
    pub sort_direction: SortDirection,
    /// Placement on the non-stacking axes
    pub alignment: Alignment,
    /// Gap between successive objects
    pub padding: f32,
    /// Default log level for binaries embedding the core
    pub log_level: String,
}

impl StackerConfig {
    /// Create a configuration with defaults (vertical, Z up, centered)
    pub fn new() -> Self {
        Self {
            mode: StackMode::Vertical,
            up_axis: Axis::Z,
            horizontal_axis: Axis::X,
            sort_key: SortKey::None,
            sort_direction: SortDirection::Ascending,
            alignment: Alignment::Center,
            padding: 0.0,
            log_level: "info".to_string(),
        }
    }

    /// Set the stacking mode
    pub fn with_mode(mut self, mode: StackMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the world up axis
    pub fn with_up_axis(mut self, axis: Axis) -> Self {
        self.up_axis = axis;
        self
    }

    /// Set the horizontal stacking axis
    pub fn with_horizontal_axis(mut self, axis: Axis) -> Self {
        self.horizontal_axis = axis;
        self
    }

    /// Set the ordering key and direction
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
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

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// The axis movers are chained along in the current mode
    pub fn stacking_axis(&self) -> Axis {
        match self.mode {
            StackMode::Vertical => self.up_axis,
            StackMode::Horizontal => self.horizontal_axis,
        }
    }

    /// Axes the ordering keys are measured against
    pub fn frame(&self) -> Frame {
        Frame {
            up: self.up_axis,
            stacking: self.stacking_axis(),
        }
    }

    /// Stack solver inputs for this configuration
    pub fn stack_params(&self) -> StackParams {
        StackParams::along(self.stacking_axis())
            .with_alignment(self.alignment)
            .with_padding(self.padding)
    }

    /// Drop solver inputs for this configuration
    pub fn drop_params(&self) -> DropParams {
        DropParams::along(self.up_axis).with_padding(self.padding)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == StackMode::Horizontal && self.horizontal_axis == self.up_axis {
            return Err(ConfigError::Invalid(format!(
                "horizontal axis {} cannot be the up axis",
                self.horizontal_axis
            )));
        }

        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "padding must be a finite non-negative distance, got {}",
                self.padding
            )));
        }

        Ok(())
    }
}

impl Default for StackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for StackerConfig {}
