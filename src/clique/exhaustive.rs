//! Brute-force clique listing used as ground truth in tests.

use super::Clique;
use crate::graph::IntersectionGraph;

/// Largest graph the subset scan is allowed to run on (2^16 subsets)
pub const MAX_EXHAUSTIVE_VERTICES: usize = 16;

/// Every non-empty vertex subset of `graph` that is a clique.
///
/// The result includes non-maximal cliques; run it through
/// [`maximal_antichain`](super::maximal_antichain) to compare against the
/// search.
pub fn all_cliques(graph: &IntersectionGraph) -> Vec<Clique> {
    let n = graph.len();
    assert!(
        n <= MAX_EXHAUSTIVE_VERTICES,
        "subset scan limited to {} vertices, got {}",
        MAX_EXHAUSTIVE_VERTICES,
        n
    );

    (1u32..(1u32 << n))
        .map(|mask| {
            (0..n)
                .filter(|&v| mask & (1u32 << v) != 0)
                .collect::<Clique>()
        })
        .filter(|subset| graph.is_clique(subset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn test_lists_every_sub_clique() {
        let r = Rectangle::new(0, 0, 2, 2);
        let graph = IntersectionGraph::build(&[r, r, r]);

        // all 7 non-empty subsets of a triangle
        assert_eq!(all_cliques(&graph).len(), 7);
    }

    #[test]
    fn test_skips_non_cliques() {
        let graph = IntersectionGraph::build(&[
            Rectangle::new(0, 0, 2, 2),
            Rectangle::new(1, 1, 2, 2),
            Rectangle::new(4, 4, 2, 2),
        ]);
        let cliques = all_cliques(&graph);

        // {0}, {1}, {2}, {0,1}
        assert_eq!(cliques.len(), 4);
        assert!(cliques.iter().all(|c| graph.is_clique(c)));
    }

    #[test]
    fn test_empty_graph() {
        assert!(all_cliques(&IntersectionGraph::build(&[])).is_empty());
    }
}
