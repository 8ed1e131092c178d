use rectify_core::{Direction, Point};

use crate::ZoneGraph;
use crate::edge::EdgeKind;
use crate::zone::{Zone, ZoneId};

/// A node reachable in one search step, with the cost of that step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Successor {
    pub(crate) zone: ZoneId,
    pub(crate) pos: Point,
    pub(crate) cost: i64,
}

/// Corner directions as (horizontal, vertical) pairs: top-left, top-right,
/// bottom-right, bottom-left.
const CORNERS: [(Direction, Direction); 4] = [
    (Direction::West, Direction::North),
    (Direction::East, Direction::North),
    (Direction::East, Direction::South),
    (Direction::West, Direction::South),
];

const AXES: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

/// Symmetry-reduced successor generator with a reusable output buffer.
///
/// Inside a zone every cell costs the same to traverse, so rather than
/// stepping cell by cell a node jumps straight to the zone's far side, or
/// diagonally until it meets one. Only on the zone's rim, where crossings
/// into neighbors can happen at any cell, does it fall back to unit steps.
#[derive(Debug, Default)]
pub(crate) struct Successors {
    buf: Vec<Successor>,
}

impl Successors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(9),
        }
    }

    /// Successors of `pos` inside `zone`, in a fixed order: the goal itself
    /// when it lies in the same zone, then the four diagonal jumps, then the
    /// axis moves West, East, North and South.
    pub(crate) fn expand(
        &mut self,
        graph: &ZoneGraph,
        zone: ZoneId,
        pos: Point,
        goal: Point,
        goal_zone: ZoneId,
        allowed: EdgeKind,
    ) -> &[Successor] {
        self.buf.clear();
        let z = &graph[zone];
        let base = i64::from(z.base_cost());

        if zone == goal_zone && pos != goal {
            self.buf.push(Successor {
                zone,
                pos: goal,
                cost: base * i64::from(pos.distance(goal)),
            });
        }

        for (h, v) in CORNERS {
            let steps = reach(z, pos, h).min(reach(z, pos, v));
            if steps > 0 {
                self.buf.push(Successor {
                    zone,
                    pos: pos + (h.delta() + v.delta()) * steps,
                    cost: base * i64::from(steps),
                });
            }
        }

        for dir in AXES {
            let dist = reach(z, pos, dir);
            if dist == 0 {
                let Some(slot) = z.slot(dir, pos) else {
                    continue;
                };
                if let Some(n) = slot.neighbor {
                    if allowed.permits(slot.kind) {
                        self.buf.push(Successor {
                            zone: n,
                            pos: pos + dir.delta(),
                            cost: base,
                        });
                    }
                }
            } else if on_rim(z, pos, dir) {
                self.buf.push(Successor {
                    zone,
                    pos: pos + dir.delta(),
                    cost: base,
                });
            } else {
                self.buf.push(Successor {
                    zone,
                    pos: pos + dir.delta() * dist,
                    cost: base * i64::from(dist),
                });
            }
        }

        &self.buf
    }
}

/// Cells between `pos` and the last cell of `z` in direction `dir`.
#[inline]
fn reach(z: &Zone, pos: Point, dir: Direction) -> i32 {
    match dir {
        Direction::North => z.top() - 1 - pos.y,
        Direction::East => z.right() - 1 - pos.x,
        Direction::South => pos.y - z.bottom(),
        Direction::West => pos.x - z.left(),
    }
}

/// Whether `pos` lies on one of the two sides of `z` parallel to `dir`.
#[inline]
fn on_rim(z: &Zone, pos: Point, dir: Direction) -> bool {
    if dir.is_vertical() {
        pos.x == z.left() || pos.x == z.right() - 1
    } else {
        pos.y == z.bottom() || pos.y == z.top() - 1
    }
}
