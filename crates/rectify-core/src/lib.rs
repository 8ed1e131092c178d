//! **rectify-core** — integer geometry shared by the *rectify* crates.
//!
//! Provides the grid [`Point`], the half-open [`BoundingBox`] and the four
//! cardinal [`Direction`]s. Coordinates follow the usual map convention:
//! X grows right, Y grows up, so a box's `min` is its bottom-left corner.

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{BoundingBox, BoundsIter, Point};
