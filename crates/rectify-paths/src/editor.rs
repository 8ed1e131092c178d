//! Incremental graph edits: carving a cell out of a zone and re-classifying
//! a single cell edge.

use rectify_core::{BoundingBox, Direction, Point};

use crate::ZoneGraph;
use crate::edge::{BoundarySlot, EdgeKind};
use crate::error::{MeshError, Result};
use crate::zone::{Zone, ZoneId};

/// Order in which the center cell's sides are resolved and reported.
const RESOLVE_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

impl ZoneGraph {
    /// Carve the cell at `pos` out of its zone and give it `path_group`.
    ///
    /// The zone containing `pos` (or `container`, when given) is replaced by
    /// a unit zone at `pos` and up to four remainder zones: a one-column
    /// strip above and one below the cell, and full-height blocks to its
    /// left and right. Remainders keep the original group and base cost and
    /// inherit the original's slot classifications on the sides they share
    /// with it.
    ///
    /// Each side of the new unit zone is then matched against the zone
    /// across it. A different path group walls the boundary off. An equal
    /// path group opens it, but only when `is_center_cell` is set; otherwise
    /// the existing classification is kept, so no new connectivity appears.
    /// Sides on the edge of the mesh become walls.
    ///
    /// Returns the original zone's bounds followed by the bounds of every
    /// zone across the new cell's sides, for cache and render invalidation.
    pub fn replace_cell_at(
        &mut self,
        pos: Point,
        path_group: i32,
        is_center_cell: bool,
        container: Option<ZoneId>,
    ) -> Result<Vec<BoundingBox>> {
        let touched = self.split_cell(pos, path_group, is_center_cell, container)?;
        self.bump_revision();
        Ok(touched)
    }

    /// Set the classification of one edge of the cell at `pos`.
    ///
    /// The cell is first isolated into a unit zone without opening any new
    /// connectivity, then its slot on side `dir` and the neighbor's facing
    /// slot both receive `kind`.
    pub fn replace_cell_edge_at(
        &mut self,
        pos: Point,
        dir: Direction,
        kind: EdgeKind,
    ) -> Result<Vec<BoundingBox>> {
        let container = self.zone_at(pos)?;
        let group = self[container].path_group();
        let touched = self.split_cell(pos, group, false, Some(container))?;

        let cell = self.zone_at(pos)?;
        let neighbor = {
            let slot = &mut self.live_mut(cell).side_mut(dir)[0];
            slot.kind = kind;
            slot.neighbor
        };
        if let Some(n) = neighbor {
            if let Some(facing) = self.live_mut(n).slot_mut(dir.opposite(), pos) {
                facing.kind = kind;
            }
        }

        self.bump_revision();
        log::debug!(
            "edge {dir:?} of {pos} set to {kind:?} (revision {})",
            self.revision()
        );
        Ok(touched)
    }

    fn split_cell(
        &mut self,
        pos: Point,
        path_group: i32,
        is_center_cell: bool,
        container: Option<ZoneId>,
    ) -> Result<Vec<BoundingBox>> {
        let parent_id = match container {
            Some(id) => id,
            None => self.zone_at(pos)?,
        };
        let parent = self
            .zone(parent_id)
            .ok_or(MeshError::UnknownZone { id: parent_id })?
            .clone();
        if !parent.contains(pos) {
            return Err(MeshError::OutOfBounds { pos });
        }

        let b = parent.bounds();
        let cost = parent.base_cost();
        let center_id = self.insert(Zone::new(BoundingBox::cell(pos), path_group).with_base_cost(cost));

        let mut remainders: [Option<ZoneId>; 4] = [None; 4];
        let mut created = vec![center_id];
        for dir in Direction::ALL {
            let Some(bounds) = remainder_bounds(b, pos, dir) else {
                continue;
            };
            let mut zone = Zone::new(bounds, parent.path_group()).with_base_cost(cost);
            zone.inherit_outer_edges(&parent);
            let id = self.insert(zone);
            remainders[dir.index()] = Some(id);
            created.push(id);
        }

        let mut affected = parent.neighbors();
        affected.extend_from_slice(&created);
        self.link(&affected);

        let mut touched = vec![b];
        for dir in RESOLVE_ORDER {
            let across = remainders[dir.index()].or_else(|| self.find_zone(pos + dir.delta()));
            let Some(nid) = across else {
                self.live_mut(center_id).side_mut(dir)[0].kind = EdgeKind::WALL;
                continue;
            };

            let neighbor = self.live_mut(nid);
            let same_group = neighbor.path_group() == path_group;
            let across_bounds = neighbor.bounds();
            let mut kind = EdgeKind::WALL;
            if let Some(facing) = neighbor.slot_mut(dir.opposite(), pos) {
                if !same_group {
                    facing.kind = EdgeKind::WALL;
                } else if is_center_cell {
                    facing.kind = EdgeKind::NONE;
                }
                facing.neighbor = Some(center_id);
                kind = facing.kind;
            }
            self.live_mut(center_id).side_mut(dir)[0] = BoundarySlot {
                kind,
                neighbor: Some(nid),
            };
            touched.push(across_bounds);
        }

        self.remove(parent_id);
        log::debug!(
            "split {parent_id} {b} at {pos}: {} new zones, {} relinked",
            created.len(),
            affected.len() - created.len()
        );
        Ok(touched)
    }
}

/// The part of `b` left on side `dir` of the cell `pos`, if non-empty.
///
/// North and South remainders are one column wide; East and West ones span
/// the full height of `b`.
fn remainder_bounds(b: BoundingBox, pos: Point, dir: Direction) -> Option<BoundingBox> {
    let r = match dir {
        Direction::North => BoundingBox::from_corners(pos.shift(0, 1), Point::new(pos.x + 1, b.max.y)),
        Direction::South => BoundingBox::from_corners(Point::new(pos.x, b.min.y), pos.shift(1, 0)),
        Direction::East => BoundingBox::from_corners(Point::new(pos.x + 1, b.min.y), b.max),
        Direction::West => BoundingBox::from_corners(b.min, Point::new(pos.x, b.max.y)),
    };
    (!r.is_empty()).then_some(r)
}
