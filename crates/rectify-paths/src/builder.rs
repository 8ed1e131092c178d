//! Decomposing a labelled grid into zones.

use rectify_core::{BoundingBox, Direction, Point};

use crate::ZoneGraph;
use crate::edge::EdgeKind;
use crate::zone::{Zone, ZoneId};

impl ZoneGraph {
    /// Partition `bounds` into rectangles of uniform path group.
    ///
    /// Cells are visited row by row from the bottom-left. Each uncovered cell
    /// starts a zone that grows right as far as the group allows, then up
    /// while the whole row segment still matches. Boundaries between zones
    /// of different groups are walls; boundaries within a group are open.
    pub fn from_groups(bounds: BoundingBox, group_at: impl Fn(Point) -> i32) -> Self {
        let width = bounds.width().max(0) as usize;
        let mut covered = vec![false; bounds.len()];
        let idx = |p: Point| (p.y - bounds.min.y) as usize * width + (p.x - bounds.min.x) as usize;
        let free = |covered: &[bool], p: Point, g: i32| !covered[idx(p)] && group_at(p) == g;

        let mut zones = Vec::new();
        for p in bounds {
            if covered[idx(p)] {
                continue;
            }
            let g = group_at(p);

            let mut x1 = p.x + 1;
            while x1 < bounds.max.x && free(&covered, Point::new(x1, p.y), g) {
                x1 += 1;
            }
            let mut y1 = p.y + 1;
            while y1 < bounds.max.y && (p.x..x1).all(|x| free(&covered, Point::new(x, y1), g)) {
                y1 += 1;
            }

            let zone = BoundingBox::new(p.x, p.y, x1, y1);
            for q in zone {
                covered[idx(q)] = true;
            }
            zones.push(Zone::new(zone, g));
        }

        let mut graph = Self::from_disjoint(zones);
        graph.wall_group_boundaries();
        log::debug!("decomposed {bounds} into {} zones", graph.len());
        graph
    }

    /// Classify every slot between zones of different groups as a wall.
    fn wall_group_boundaries(&mut self) {
        let mut walls: Vec<(ZoneId, Direction, usize)> = Vec::new();
        for (id, zone) in self.zones() {
            for dir in Direction::ALL {
                for (i, slot) in zone.side(dir).iter().enumerate() {
                    if let Some(n) = slot.neighbor {
                        if self[n].path_group() != zone.path_group() {
                            walls.push((id, dir, i));
                        }
                    }
                }
            }
        }
        for (id, dir, i) in walls {
            self.live_mut(id).side_mut(dir)[i].kind = EdgeKind::WALL;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse rows top-down; digits are path groups.
    fn grid(rows: &[&str]) -> (BoundingBox, Vec<Vec<i32>>) {
        let h = rows.len() as i32;
        let w = rows[0].len() as i32;
        let cells = rows
            .iter()
            .rev()
            .map(|r| r.bytes().map(|b| (b - b'0') as i32).collect::<Vec<_>>())
            .collect();
        (BoundingBox::new(0, 0, w, h), cells)
    }

    #[test]
    fn uniform_grid_is_one_zone() {
        let g = ZoneGraph::from_groups(BoundingBox::new(0, 0, 6, 4), |_| 3);
        assert_eq!(g.len(), 1);
        assert_eq!(g.zone_bounds(Point::new(5, 3)), Some((Point::new(0, 0), Point::new(6, 4))));
        g.validate().unwrap();
    }

    #[test]
    fn decomposition_is_greedy_and_walled() {
        let (bounds, cells) = grid(&[
            "0000", //
            "0110", //
            "0110", //
            "0000",
        ]);
        let g = ZoneGraph::from_groups(bounds, |p| cells[p.y as usize][p.x as usize]);
        g.validate().unwrap();
        // Bottom row, left column up to the top, the block, right column,
        // and what is left of the top row.
        assert_eq!(g.len(), 5);
        assert_eq!(g.zone_bounds(Point::new(3, 0)), Some((Point::new(0, 0), Point::new(4, 1))));
        assert_eq!(g.zone_bounds(Point::new(0, 2)), Some((Point::new(0, 1), Point::new(1, 4))));
        assert_eq!(g.zone_bounds(Point::new(2, 2)), Some((Point::new(1, 1), Point::new(3, 3))));
        assert_eq!(g.zone_bounds(Point::new(1, 3)), Some((Point::new(1, 3), Point::new(3, 4))));

        let block = g.zone_at(Point::new(1, 1)).unwrap();
        for dir in Direction::ALL {
            assert!(g[block].side(dir).iter().all(|s| s.kind == EdgeKind::WALL));
        }
        let bottom = g.zone_at(Point::new(0, 0)).unwrap();
        let north = g[bottom].side(Direction::North);
        assert_eq!(north[0].kind, EdgeKind::NONE);
        assert_eq!(north[1].kind, EdgeKind::WALL);
        assert_eq!(north[3].kind, EdgeKind::NONE);
    }

    #[test]
    fn offset_bounds_are_supported() {
        let bounds = BoundingBox::new(-3, 2, 2, 5);
        let g = ZoneGraph::from_groups(bounds, |p| i32::from(p.x >= 0));
        g.validate().unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.bounds(), bounds);
    }
}
