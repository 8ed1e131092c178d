use std::time::Duration;

/// Query-time switches for a [`Pathfinder`](crate::Pathfinder).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderConfig {
    /// Run a zone-level flood fill before searching and give up early when
    /// the goal zone cannot be reached.
    pub reachability_check: bool,
    /// Reserved. Has no effect.
    pub uses_lattice: bool,
    /// Reduce each run of waypoints inside one zone to its entry and exit.
    pub condense_paths: bool,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            reachability_check: true,
            uses_lattice: false,
            condense_paths: true,
        }
    }
}

impl PathfinderConfig {
    pub fn with_reachability_check(mut self, on: bool) -> Self {
        self.reachability_check = on;
        self
    }

    pub fn with_lattice(mut self, on: bool) -> Self {
        self.uses_lattice = on;
        self
    }

    pub fn with_condensed_paths(mut self, on: bool) -> Self {
        self.condense_paths = on;
        self
    }
}

/// Diagnostics gathered during one path query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PathfinderMetrics {
    /// Nodes ever added to the search frontier, the start excluded.
    pub frontier_size: usize,
    /// Nodes expanded.
    pub visited_nodes: usize,
    /// Accumulated cost of the returned path, 0 when there is none.
    pub path_cost: i64,
    /// Wall-clock time spent in the query.
    pub runtime: Duration,
}

impl PathfinderMetrics {
    pub fn runtime_millis(&self) -> f64 {
        self.runtime.as_secs_f64() * 1000.0
    }
}
