use std::time::Instant;

use rectify_core::{BoundingBox, Direction, Point};

use crate::ZoneGraph;
use crate::config::{PathfinderConfig, PathfinderMetrics};
use crate::edge::EdgeKind;
use crate::error::Result;
use crate::search::{SearchOutcome, SearchScratch};

/// Entry point for path queries and edits on a zone graph.
///
/// `Pathfinder` owns the graph together with the search's node arena and
/// buffers, so repeated queries do not allocate once those have grown to
/// the size of the largest search.
#[derive(Debug)]
pub struct Pathfinder {
    graph: ZoneGraph,
    config: PathfinderConfig,
    scratch: SearchScratch,
}

impl Pathfinder {
    /// Wrap `graph` with the default configuration.
    pub fn new(graph: ZoneGraph) -> Self {
        Self::with_config(graph, PathfinderConfig::default())
    }

    pub fn with_config(graph: ZoneGraph, config: PathfinderConfig) -> Self {
        Self {
            graph,
            config,
            scratch: SearchScratch::new(),
        }
    }

    #[inline]
    pub fn graph(&self) -> &ZoneGraph {
        &self.graph
    }

    /// Mutable access for the lower-level edit operations, such as
    /// [`ZoneGraph::replace_cell_at`] with an explicit container.
    #[inline]
    pub fn graph_mut(&mut self) -> &mut ZoneGraph {
        &mut self.graph
    }

    #[inline]
    pub fn config(&self) -> PathfinderConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PathfinderConfig) {
        self.config = config;
    }

    /// See [`ZoneGraph::revision`].
    #[inline]
    pub fn revision(&self) -> u64 {
        self.graph.revision()
    }

    /// Carve the cell at `pos` into its own zone tagged `path_group`,
    /// opening it towards neighbors of the same group.
    pub fn replace_cell_at(&mut self, pos: Point, path_group: i32) -> Result<Vec<BoundingBox>> {
        self.graph.replace_cell_at(pos, path_group, true, None)
    }

    /// See [`ZoneGraph::replace_cell_edge_at`].
    pub fn replace_cell_edge_at(
        &mut self,
        pos: Point,
        dir: Direction,
        kind: EdgeKind,
    ) -> Result<Vec<BoundingBox>> {
        self.graph.replace_cell_edge_at(pos, dir, kind)
    }

    /// See [`ZoneGraph::zone_bounds`].
    pub fn zone_bounds(&self, pos: Point) -> Option<(Point, Point)> {
        self.graph.zone_bounds(pos)
    }

    /// Whether the zone holding `end` can be reached from the zone holding
    /// `start` under `mask`.
    pub fn is_reachable(&self, start: Point, end: Point, mask: EdgeKind) -> Result<bool> {
        let sz = self.graph.zone_at(start)?;
        let ez = self.graph.zone_at(end)?;
        Ok(self.graph.is_reachable(sz, ez, mask))
    }

    /// Waypoints of a least-cost path from `start` to `end` crossing only
    /// boundary slots whose classification `mask` permits.
    ///
    /// The path is empty when `start == end` or no path exists. Fails only
    /// when either point lies outside every zone.
    pub fn calculate_path(&mut self, start: Point, end: Point, mask: EdgeKind) -> Result<Vec<Point>> {
        Ok(self.query(start, end, mask)?.path)
    }

    /// Like [`calculate_path`](Self::calculate_path), also reporting search
    /// diagnostics.
    pub fn calculate_path_with_metrics(
        &mut self,
        start: Point,
        end: Point,
        mask: EdgeKind,
    ) -> Result<(Vec<Point>, PathfinderMetrics)> {
        let started = Instant::now();
        let out = self.query(start, end, mask)?;
        let metrics = PathfinderMetrics {
            frontier_size: out.frontier,
            visited_nodes: out.visited,
            path_cost: out.cost,
            runtime: started.elapsed(),
        };
        Ok((out.path, metrics))
    }

    fn query(&mut self, start: Point, end: Point, mask: EdgeKind) -> Result<SearchOutcome> {
        if start == end {
            return Ok(SearchOutcome::default());
        }
        let sz = self.graph.zone_at(start)?;
        let ez = self.graph.zone_at(end)?;
        if self.config.reachability_check && !self.graph.is_reachable(sz, ez, mask) {
            log::debug!("{end} unreachable from {start}, search skipped");
            return Ok(SearchOutcome::default());
        }
        Ok(self.scratch.run(
            &self.graph,
            start,
            sz,
            end,
            ez,
            mask,
            self.config.condense_paths,
        ))
    }
}
