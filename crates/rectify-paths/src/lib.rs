//! **rectify-paths** — a mutable navigation mesh of rectangles and a
//! pathfinder that searches it.
//!
//! The walkable surface is partitioned into axis-aligned [`Zone`]s. Each
//! zone side is cut into unit [`BoundarySlot`]s that record which zone lies
//! across and how the boundary is classified ([`EdgeKind`]). Zones are held
//! by a [`ZoneGraph`], which can carve single cells out of a zone at runtime
//! while keeping every adjacency consistent.
//!
//! Queries go through [`Pathfinder`], which owns the graph and reuses its
//! search buffers between calls. The search jumps across a zone's interior
//! in one step rather than visiting every cell, so its cost grows with the
//! number of zones crossed rather than with path length.
//!
//! | Operation | Entry point |
//! |---|---|
//! | Carve a cell into its own zone | [`ZoneGraph::replace_cell_at`] |
//! | Re-classify one cell edge | [`ZoneGraph::replace_cell_edge_at`] |
//! | Zone-level flood fill | [`ZoneGraph::is_reachable`] |
//! | Least-cost path | [`Pathfinder::calculate_path`] |
//! | Path with diagnostics | [`Pathfinder::calculate_path_with_metrics`] |
//! | Build from a labelled grid | [`ZoneGraph::from_groups`] |

mod builder;
mod config;
mod edge;
mod editor;
mod error;
mod graph;
mod pathfinder;
mod reachability;
mod search;
mod successors;
mod zone;

pub use config::{PathfinderConfig, PathfinderMetrics};
pub use edge::{BoundarySlot, EdgeKind};
pub use error::{MeshError, Result};
pub use graph::ZoneGraph;
pub use pathfinder::Pathfinder;
pub use zone::{Zone, ZoneId};
