//! Error and warning types reported back to the host
//!
//! Every failure is detected before any translation is computed, so an
//! error always means nothing was applied.

use thiserror::Error;

use crate::config::ConfigError;
use crate::foundation::math::Axis;
use crate::object::ObjectId;

/// Reasons an object's bounds could not be extracted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The mesh has no vertices
    #[error("geometry has no vertices")]
    NoVertices,

    /// A vertex or transformed corner is NaN or infinite
    #[error("geometry contains a non-finite coordinate")]
    NonFiniteVertex,
}

/// Problems with the set of objects an operation was invoked on
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// No objects to move
    #[error("no objects selected to move")]
    NoMovers,

    /// No reference/target object was given
    #[error("no reference object")]
    MissingReference,

    /// The host does not know this object
    #[error("object {0} does not exist in the scene")]
    UnknownObject(ObjectId),

    /// The reference was also listed as a mover
    #[error("reference object {0} is also selected to move")]
    ReferenceAmongMovers(ObjectId),

    /// An object was listed more than once
    #[error("object {0} is selected more than once")]
    DuplicateObject(ObjectId),

    /// The operation needs a minimum number of selected objects
    #[error("at least {required} objects need to be selected, found {found}")]
    TooFewObjects {
        /// Minimum selection size
        required: usize,
        /// Actual selection size
        found: usize,
    },
}

/// The structured failure result of one operation invocation
#[derive(Error, Debug)]
pub enum StackerError {
    /// An object has no usable geometry
    #[error("object {object}: {source}")]
    Geometry {
        /// The offending object
        object: ObjectId,
        /// What was wrong with its geometry
        #[source]
        source: GeometryError,
    },

    /// The selection cannot be operated on
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// The operation options are unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StackerError {
    /// Attach an object identity to a geometry failure
    pub fn geometry(object: ObjectId, source: GeometryError) -> Self {
        Self::Geometry { object, source }
    }
}

/// Non-fatal conditions noticed while solving
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// A box has zero extent along the axis it is stacked or dropped on.
    /// It is treated as a flat surface.
    #[error("object {object} is flat along {axis}; treating it as a surface")]
    DegenerateAxis {
        /// The flat object
        object: ObjectId,
        /// The axis with zero extent
        axis: Axis,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_message() {
        let warning = Warning::DegenerateAxis {
            object: ObjectId(4),
            axis: Axis::Z,
        };
        assert_eq!(warning.to_string(), "object #4 is flat along Z; treating it as a surface");
    }

    #[test]
    fn test_geometry_error_names_object() {
        let err = StackerError::geometry(ObjectId(7), GeometryError::NoVertices);
        assert_eq!(err.to_string(), "object #7: geometry has no vertices");
    }
}
