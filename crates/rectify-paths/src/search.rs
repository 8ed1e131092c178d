use std::collections::{BinaryHeap, HashMap};

use rectify_core::Point;

use crate::ZoneGraph;
use crate::edge::EdgeKind;
use crate::successors::Successors;
use crate::zone::ZoneId;

const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Debug)]
struct SearchNode {
    zone: ZoneId,
    pos: Point,
    g: i64,
    h: i64,
    parent: usize,
    /// False once the node has been expanded.
    open: bool,
}

/// Heap entry. Ordered so that `BinaryHeap` pops the smallest `f` first and,
/// among equal `f`, the entry pushed first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeRef {
    idx: usize,
    f: i64,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchOutcome {
    /// Waypoints from start to goal, empty when no path exists.
    pub(crate) path: Vec<Point>,
    /// Accumulated cost of the path, 0 when there is none.
    pub(crate) cost: i64,
    /// Nodes expanded.
    pub(crate) visited: usize,
    /// Nodes ever added to the open set, the start excluded.
    pub(crate) frontier: usize,
}

/// Reusable buffers for the best-first search.
///
/// Nodes are keyed by point alone: zones partition the grid, so a point
/// determines the zone it lies in.
#[derive(Debug, Default)]
pub(crate) struct SearchScratch {
    nodes: Vec<SearchNode>,
    index: HashMap<Point, usize>,
    open: BinaryHeap<NodeRef>,
    succ: Successors,
    seq: u64,
}

impl SearchScratch {
    pub(crate) fn new() -> Self {
        Self {
            succ: Successors::new(),
            ..Self::default()
        }
    }

    fn push(&mut self, idx: usize) {
        let n = &self.nodes[idx];
        self.open.push(NodeRef {
            idx,
            f: n.g.saturating_add(n.h),
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Best-first search from `start` to `goal` crossing only slots that
    /// `allowed` permits.
    ///
    /// With `condense`, each run of consecutive waypoints within one zone is
    /// reduced to its first and last point.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn run(
        &mut self,
        graph: &ZoneGraph,
        start: Point,
        start_zone: ZoneId,
        goal: Point,
        goal_zone: ZoneId,
        allowed: EdgeKind,
        condense: bool,
    ) -> SearchOutcome {
        self.nodes.clear();
        self.index.clear();
        self.open.clear();
        self.seq = 0;

        if start == goal {
            return SearchOutcome::default();
        }

        self.nodes.push(SearchNode {
            zone: start_zone,
            pos: start,
            g: 0,
            h: i64::from(start.distance(goal)),
            parent: NO_PARENT,
            open: true,
        });
        self.index.insert(start, 0);
        self.push(0);

        let mut succ = std::mem::take(&mut self.succ);
        let mut visited = 0;

        let found = loop {
            let Some(current) = self.open.pop() else {
                break None;
            };
            let ci = current.idx;
            let node = &self.nodes[ci];

            // Skip closed nodes and entries superseded by a cheaper push.
            if !node.open || node.g.saturating_add(node.h) != current.f {
                continue;
            }
            if node.pos == goal {
                break Some(ci);
            }

            let (zone, pos, g) = (node.zone, node.pos, node.g);
            self.nodes[ci].open = false;
            visited += 1;

            for s in succ.expand(graph, zone, pos, goal, goal_zone, allowed) {
                let tentative = g.saturating_add(s.cost);
                match self.index.get(&s.pos).copied() {
                    Some(ni) => {
                        let n = &mut self.nodes[ni];
                        if !n.open || tentative >= n.g {
                            continue;
                        }
                        n.zone = s.zone;
                        n.g = tentative;
                        n.parent = ci;
                        self.push(ni);
                    }
                    None => {
                        let ni = self.nodes.len();
                        self.nodes.push(SearchNode {
                            zone: s.zone,
                            pos: s.pos,
                            g: tentative,
                            h: i64::from(s.pos.distance(goal)),
                            parent: ci,
                            open: true,
                        });
                        self.index.insert(s.pos, ni);
                        self.push(ni);
                    }
                }
            }
        };

        self.succ = succ;
        let frontier = self.nodes.len() - 1;

        let Some(gi) = found else {
            log::debug!(
                "no path {start} -> {goal}: {visited} visited, {frontier} queued"
            );
            return SearchOutcome {
                visited,
                frontier,
                ..SearchOutcome::default()
            };
        };

        let mut trail = Vec::new();
        let mut ci = gi;
        while ci != NO_PARENT {
            let n = &self.nodes[ci];
            trail.push((n.zone, n.pos));
            ci = n.parent;
        }
        trail.reverse();

        let path = if condense {
            condense_runs(&trail)
        } else {
            trail.into_iter().map(|(_, p)| p).collect()
        };
        let cost = self.nodes[gi].g;
        log::debug!(
            "path {start} -> {goal}: cost {cost}, {} waypoints, {visited} visited, {frontier} queued",
            path.len()
        );
        SearchOutcome {
            path,
            cost,
            visited,
            frontier,
        }
    }
}

/// Keep the first and last waypoint of every run of consecutive waypoints
/// lying in the same zone.
fn condense_runs(trail: &[(ZoneId, Point)]) -> Vec<Point> {
    let mut out = Vec::new();
    for run in trail.chunk_by(|a, b| a.0 == b.0) {
        out.push(run[0].1);
        if run.len() > 1 {
            out.push(run[run.len() - 1].1);
        }
    }
    out
}
