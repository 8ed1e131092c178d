//! Zones: the rectangles the navigable surface is partitioned into.

use std::fmt;

use rectify_core::{BoundingBox, Direction, Point};

use crate::edge::{BoundarySlot, EdgeKind};

/// Stable handle of a zone inside a [`ZoneGraph`](crate::ZoneGraph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub(crate) u32);

impl ZoneId {
    /// Arena index of this zone.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone #{}", self.0)
    }
}

/// Coordinate of the line a box's side lies on.
#[inline]
pub(crate) fn edge_line(b: BoundingBox, dir: Direction) -> i32 {
    match dir {
        Direction::North => b.max.y,
        Direction::East => b.max.x,
        Direction::South => b.min.y,
        Direction::West => b.min.x,
    }
}

/// Extent of a box along the side facing `dir`, as `[lo, hi)`.
#[inline]
pub(crate) fn side_span(b: BoundingBox, dir: Direction) -> (i32, i32) {
    if dir.is_vertical() {
        (b.min.x, b.max.x)
    } else {
        (b.min.y, b.max.y)
    }
}

/// An axis-aligned half-open rectangle of the grid.
///
/// Each side carries one [`BoundarySlot`] per unit of length. Slots are
/// ordered by world coordinate starting at the zone's bottom-left corner:
/// left to right on the North and South sides, bottom to top on the East
/// and West sides.
#[derive(Clone, Debug)]
pub struct Zone {
    bounds: BoundingBox,
    path_group: i32,
    base_cost: i32,
    sides: [Vec<BoundarySlot>; 4],
}

impl Zone {
    /// Create an open, unlinked zone with a base cost of 1.
    pub fn new(bounds: BoundingBox, path_group: i32) -> Self {
        let w = bounds.width().max(0) as usize;
        let h = bounds.height().max(0) as usize;
        let slots = |n| vec![BoundarySlot::default(); n];
        Self {
            bounds,
            path_group,
            base_cost: 1,
            sides: [slots(w), slots(h), slots(w), slots(h)],
        }
    }

    /// Set the per-step movement cost inside this zone.
    ///
    /// Values below 1 are raised to 1, the least cost per step the search
    /// heuristic assumes.
    pub fn with_base_cost(mut self, base_cost: i32) -> Self {
        self.base_cost = base_cost.max(1);
        self
    }

    /// Classify every slot on one side.
    pub fn with_edge(mut self, dir: Direction, kind: EdgeKind) -> Self {
        for slot in self.sides[dir.index()].iter_mut() {
            slot.kind = kind;
        }
        self
    }

    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[inline]
    pub fn path_group(&self) -> i32 {
        self.path_group
    }

    #[inline]
    pub fn base_cost(&self) -> i32 {
        self.base_cost
    }

    /// Bottom-left corner.
    #[inline]
    pub fn offset(&self) -> Point {
        self.bounds.min
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.bounds.min.x
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.bounds.max.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bounds.min.y
    }

    /// Exclusive top edge.
    #[inline]
    pub fn top(&self) -> i32 {
        self.bounds.max.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the cell `p` lies inside this zone.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// All slots on the side facing `dir`.
    #[inline]
    pub fn side(&self, dir: Direction) -> &[BoundarySlot] {
        &self.sides[dir.index()]
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, dir: Direction) -> &mut [BoundarySlot] {
        &mut self.sides[dir.index()]
    }

    /// Index into [`side`](Self::side) of the slot at world position `p`.
    #[inline]
    fn slot_index(&self, dir: Direction, p: Point) -> Option<usize> {
        let (lo, hi) = side_span(self.bounds, dir);
        let c = dir.along(p);
        if c < lo || c >= hi {
            return None;
        }
        Some((c - lo) as usize)
    }

    /// The slot on side `dir` at the row or column of `p`.
    ///
    /// Only the coordinate running along the side matters, so `p` may be
    /// inside this zone or just across the side.
    #[inline]
    pub fn slot(&self, dir: Direction, p: Point) -> Option<&BoundarySlot> {
        let i = self.slot_index(dir, p)?;
        self.sides[dir.index()].get(i)
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, dir: Direction, p: Point) -> Option<&mut BoundarySlot> {
        let i = self.slot_index(dir, p)?;
        self.sides[dir.index()].get_mut(i)
    }

    /// The cell inside this zone that owns slot `i` of side `dir`.
    pub fn slot_cell(&self, dir: Direction, i: usize) -> Point {
        let i = i as i32;
        match dir {
            Direction::North => Point::new(self.left() + i, self.top() - 1),
            Direction::East => Point::new(self.right() - 1, self.bottom() + i),
            Direction::South => Point::new(self.left() + i, self.bottom()),
            Direction::West => Point::new(self.left(), self.bottom() + i),
        }
    }

    /// Every distinct zone referenced by any slot, in ascending id order.
    pub fn neighbors(&self) -> Vec<ZoneId> {
        let mut out: Vec<ZoneId> = self
            .sides
            .iter()
            .flatten()
            .filter_map(|s| s.neighbor)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Neighbors reachable through a slot whose classification `mask`
    /// permits. May repeat a zone.
    pub fn passable_neighbors(&self, mask: EdgeKind) -> impl Iterator<Item = ZoneId> + '_ {
        self.sides
            .iter()
            .flatten()
            .filter(move |s| mask.permits(s.kind))
            .filter_map(|s| s.neighbor)
    }

    /// Whether `other` touches this zone across side `dir`.
    #[inline]
    pub(crate) fn faces(&self, other: BoundingBox, dir: Direction) -> bool {
        if edge_line(other, dir.opposite()) != edge_line(self.bounds, dir) {
            return false;
        }
        let (lo, hi) = side_span(self.bounds, dir);
        let (olo, ohi) = side_span(other, dir);
        lo < ohi && hi > olo
    }

    /// Point every slot on side `dir` at whichever candidate lies across it.
    ///
    /// Slots no candidate touches keep their current neighbor.
    pub(crate) fn set_neighbors(&mut self, candidates: &[(ZoneId, BoundingBox)], dir: Direction) {
        let (lo, hi) = side_span(self.bounds, dir);
        for &(id, other) in candidates {
            if !self.faces(other, dir) {
                continue;
            }
            let (olo, ohi) = side_span(other, dir);
            let side = &mut self.sides[dir.index()];
            for c in lo.max(olo)..hi.min(ohi) {
                side[(c - lo) as usize].neighbor = Some(id);
            }
        }
    }

    /// Copy slot classifications from `parent` on every side this zone
    /// shares with it. Neighbor references are left for relinking.
    pub(crate) fn inherit_outer_edges(&mut self, parent: &Zone) {
        for dir in Direction::ALL {
            if edge_line(self.bounds, dir) != edge_line(parent.bounds, dir) {
                continue;
            }
            let (lo, _) = side_span(self.bounds, dir);
            let (plo, _) = side_span(parent.bounds, dir);
            let from = &parent.sides[dir.index()];
            for (i, slot) in self.sides[dir.index()].iter_mut().enumerate() {
                let c = lo + i as i32;
                if let Some(p) = from.get((c - plo) as usize) {
                    slot.kind = p.kind;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zid(i: u32) -> ZoneId {
        ZoneId(i)
    }

    #[test]
    fn sides_have_one_slot_per_unit() {
        let z = Zone::new(BoundingBox::new(2, 3, 7, 5), 0);
        assert_eq!(z.side(Direction::North).len(), 5);
        assert_eq!(z.side(Direction::South).len(), 5);
        assert_eq!(z.side(Direction::East).len(), 2);
        assert_eq!(z.side(Direction::West).len(), 2);
        assert_eq!(z.base_cost(), 1);
    }

    #[test]
    fn base_cost_is_at_least_one() {
        let b = BoundingBox::new(0, 0, 2, 2);
        assert_eq!(Zone::new(b, 0).with_base_cost(5).base_cost(), 5);
        assert_eq!(Zone::new(b, 0).with_base_cost(0).base_cost(), 1);
        assert_eq!(Zone::new(b, 0).with_base_cost(-7).base_cost(), 1);
    }

    #[test]
    fn slot_lookup_uses_world_coordinates() {
        let z = Zone::new(BoundingBox::new(2, 3, 7, 5), 0).with_edge(Direction::East, EdgeKind::WALL);
        assert!(z.slot(Direction::North, Point::new(2, 99)).is_some());
        assert!(z.slot(Direction::North, Point::new(7, 4)).is_none());
        assert_eq!(z.slot(Direction::East, Point::new(7, 4)).map(|s| s.kind), Some(EdgeKind::WALL));
        assert!(z.slot(Direction::East, Point::new(6, 5)).is_none());
    }

    #[test]
    fn slot_cell_sits_on_the_side() {
        let z = Zone::new(BoundingBox::new(2, 3, 7, 5), 0);
        assert_eq!(z.slot_cell(Direction::North, 1), Point::new(3, 4));
        assert_eq!(z.slot_cell(Direction::East, 1), Point::new(6, 4));
        assert_eq!(z.slot_cell(Direction::South, 4), Point::new(6, 3));
        assert_eq!(z.slot_cell(Direction::West, 0), Point::new(2, 3));
    }

    #[test]
    fn faces_requires_shared_line_and_overlap() {
        let z = Zone::new(BoundingBox::new(0, 0, 4, 4), 0);
        assert!(z.faces(BoundingBox::new(4, 2, 6, 8), Direction::East));
        assert!(!z.faces(BoundingBox::new(4, 4, 6, 8), Direction::East));
        assert!(z.faces(BoundingBox::new(-3, 4, 1, 5), Direction::North));
        assert!(!z.faces(BoundingBox::new(-3, 4, 0, 5), Direction::North));
        assert!(!z.faces(BoundingBox::new(5, 0, 6, 4), Direction::East));
    }

    #[test]
    fn set_neighbors_assigns_overlapping_slots() {
        let mut z = Zone::new(BoundingBox::new(0, 0, 4, 4), 0);
        let candidates = [
            (zid(1), BoundingBox::new(4, -2, 6, 1)),
            (zid(2), BoundingBox::new(4, 1, 5, 3)),
            (zid(3), BoundingBox::new(0, 4, 4, 6)),
        ];
        z.set_neighbors(&candidates, Direction::East);
        let east: Vec<_> = z.side(Direction::East).iter().map(|s| s.neighbor).collect();
        assert_eq!(east, vec![Some(zid(1)), Some(zid(2)), Some(zid(2)), None]);
        assert!(z.side(Direction::North).iter().all(|s| s.neighbor.is_none()));

        z.set_neighbors(&candidates, Direction::North);
        assert_eq!(z.neighbors(), vec![zid(1), zid(2), zid(3)]);
    }

    #[test]
    fn passable_neighbors_respects_mask() {
        let mut z = Zone::new(BoundingBox::new(0, 0, 2, 1), 0);
        z.side_mut(Direction::East)[0] = BoundarySlot {
            kind: EdgeKind::WALL,
            neighbor: Some(zid(4)),
        };
        z.side_mut(Direction::North)[1].neighbor = Some(zid(5));
        let open: Vec<_> = z.passable_neighbors(EdgeKind::NONE).collect();
        assert_eq!(open, vec![zid(5)]);
        let all: Vec<_> = z.passable_neighbors(EdgeKind::WALL).collect();
        assert_eq!(all, vec![zid(5), zid(4)]);
    }

    #[test]
    fn inherit_copies_only_shared_sides() {
        let parent = Zone::new(BoundingBox::new(0, 0, 5, 5), 0)
            .with_edge(Direction::North, EdgeKind::WALL)
            .with_edge(Direction::West, EdgeKind::WALL);
        let mut top = Zone::new(BoundingBox::new(2, 3, 3, 5), 0);
        top.inherit_outer_edges(&parent);
        assert_eq!(top.side(Direction::North)[0].kind, EdgeKind::WALL);
        assert!(top.side(Direction::West).iter().all(|s| s.kind == EdgeKind::NONE));

        let mut left = Zone::new(BoundingBox::new(0, 0, 2, 5), 0);
        left.inherit_outer_edges(&parent);
        assert!(left.side(Direction::West).iter().all(|s| s.kind == EdgeKind::WALL));
        assert!(left.side(Direction::East).iter().all(|s| s.kind == EdgeKind::NONE));
    }
}
