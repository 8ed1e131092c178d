use rectify_core::{Direction, Point};

use crate::zone::ZoneId;

/// Errors raised by zone lookup, graph edits and graph validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No zone contains the position.
    #[error("position {pos} is not within any zone")]
    OutOfBounds { pos: Point },

    /// A zone id that does not name a live zone was supplied.
    #[error("{id} is not a live zone")]
    UnknownZone { id: ZoneId },

    /// Two zones cover the same cell.
    #[error("{a} overlaps {b}")]
    Overlap { a: ZoneId, b: ZoneId },

    /// A cell inside the mesh extent is covered by no zone.
    #[error("no zone covers {pos}")]
    Gap { pos: Point },

    /// A boundary slot disagrees with the slot facing it.
    #[error("{zone} has an asymmetric {dir:?} slot at {pos}")]
    AsymmetricEdge {
        zone: ZoneId,
        dir: Direction,
        pos: Point,
    },
}

/// Result alias for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
