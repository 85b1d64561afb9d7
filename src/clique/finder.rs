use log::{debug, info};

use super::{Clique, bron_kerbosch, maximal_antichain};
use crate::cli::PivotRule;
use crate::geometry::Rectangle;
use crate::graph::IntersectionGraph;

/// Configuration for finding overlap groups
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupFinder {
    pub pivot: PivotRule,
}

/// Summary numbers for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupStats {
    /// Number of input rectangles (graph vertices)
    pub rectangles: usize,
    /// Number of overlapping pairs (graph edges)
    pub edges: usize,
    /// Cliques reported by the search before filtering
    pub candidates: usize,
    /// Size of the largest group, 0 when there are none
    pub largest: usize,
}

/// Maximal groups of mutually overlapping rectangles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapGroups {
    /// Groups of 0-based rectangle indices, largest first
    pub groups: Vec<Clique>,
    pub stats: GroupStats,
}

impl GroupFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pivot(mut self, pivot: PivotRule) -> Self {
        self.pivot = pivot;
        self
    }

    /// Find every maximal group of rectangles that pairwise overlap
    pub fn find(&self, rectangles: &[Rectangle]) -> OverlapGroups {
        let graph = IntersectionGraph::build(rectangles);

        let candidates = bron_kerbosch(&graph, self.pivot);
        debug!(
            "Search with pivot rule {:?} reported {} cliques",
            self.pivot,
            candidates.len()
        );

        let candidate_count = candidates.len();
        let groups = maximal_antichain(candidates);

        let stats = GroupStats {
            rectangles: graph.len(),
            edges: graph.edge_count(),
            candidates: candidate_count,
            largest: groups.iter().map(Clique::len).max().unwrap_or(0),
        };

        info!(
            "Found {} group(s) among {} rectangles ({} overlapping pairs, largest group {})",
            groups.len(),
            stats.rectangles,
            stats.edges,
            stats.largest
        );

        OverlapGroups { groups, stats }
    }
}
