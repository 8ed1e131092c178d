use std::collections::VecDeque;

use crate::ZoneGraph;
use crate::edge::EdgeKind;
use crate::zone::ZoneId;

impl ZoneGraph {
    /// Whether `goal` can be reached from `start` through slots whose
    /// classification `allowed` permits.
    ///
    /// Breadth-first over zones; no point geometry is involved, so this is
    /// far cheaper than a search and serves as its pre-filter.
    pub fn is_reachable(&self, start: ZoneId, goal: ZoneId, allowed: EdgeKind) -> bool {
        if start == goal {
            return true;
        }
        if self.zone(start).is_none() || self.zone(goal).is_none() {
            return false;
        }

        let mut seen = vec![false; self.capacity()];
        let mut queue: VecDeque<ZoneId> = VecDeque::new();
        seen[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for n in self[current].passable_neighbors(allowed) {
                if n == goal {
                    log::trace!("{goal} reached from {start} via {current}");
                    return true;
                }
                if !seen[n.index()] {
                    seen[n.index()] = true;
                    queue.push_back(n);
                }
            }
        }
        log::trace!("{goal} unreachable from {start} under {allowed:?}");
        false
    }
}

#[cfg(test)]
mod tests {
    use rectify_core::{BoundingBox, Direction, Point};

    use super::*;
    use crate::zone::Zone;

    fn strip() -> (ZoneGraph, ZoneId, ZoneId, ZoneId) {
        // Three zones side by side, the middle boundary walled.
        let g = ZoneGraph::from_zones(vec![
            Zone::new(BoundingBox::new(0, 0, 2, 3), 0),
            Zone::new(BoundingBox::new(2, 0, 4, 3), 0).with_edge(Direction::East, EdgeKind::WALL),
            Zone::new(BoundingBox::new(4, 0, 6, 3), 0).with_edge(Direction::West, EdgeKind::WALL),
        ])
        .unwrap();
        (g, ZoneId(0), ZoneId(1), ZoneId(2))
    }

    #[test]
    fn same_zone_is_reachable() {
        let (g, a, _, _) = strip();
        assert!(g.is_reachable(a, a, EdgeKind::NONE));
    }

    #[test]
    fn open_neighbors_are_reachable() {
        let (g, a, b, c) = strip();
        assert!(g.is_reachable(a, b, EdgeKind::NONE));
        assert!(!g.is_reachable(a, c, EdgeKind::NONE));
        assert!(!g.is_reachable(c, a, EdgeKind::NONE));
    }

    #[test]
    fn mask_opens_walls() {
        let (g, a, _, c) = strip();
        assert!(g.is_reachable(a, c, EdgeKind::WALL));
    }

    #[test]
    fn application_flags_need_their_bit() {
        let door = EdgeKind::from_bits_retain(1 << 4);
        let mut g = ZoneGraph::filled(BoundingBox::new(0, 0, 5, 1), 0);
        g.replace_cell_edge_at(Point::new(2, 0), Direction::East, door).unwrap();
        let left = g.zone_at(Point::new(0, 0)).unwrap();
        let right = g.zone_at(Point::new(4, 0)).unwrap();
        assert!(!g.is_reachable(left, right, EdgeKind::NONE));
        assert!(!g.is_reachable(left, right, EdgeKind::WALL));
        assert!(g.is_reachable(left, right, door));
        assert!(g.is_reachable(left, right, door | EdgeKind::WALL));
    }

    #[test]
    fn vacant_ids_are_unreachable() {
        let (g, a, _, _) = strip();
        assert!(!g.is_reachable(a, ZoneId(42), EdgeKind::all()));
    }
}
