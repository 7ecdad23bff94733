//! Bounding geometry
//!
//! - [`bounding_box`] - Plain value-type axis-aligned box
//! - [`extract`] - Model-space geometry to world-space box extraction

pub mod bounding_box;
pub mod extract;

pub use bounding_box::BoundingBox;
pub use extract::{Geometry, Mesh};
