use std::cmp::Reverse;

use super::Clique;
use crate::cli::PivotRule;
use crate::graph::IntersectionGraph;

/// Enumerate every maximal clique of `graph`.
///
/// Each maximal clique is reported exactly once. Isolated vertices come back
/// as singletons and an empty graph yields no cliques at all.
pub fn bron_kerbosch(graph: &IntersectionGraph, pivot: PivotRule) -> Vec<Clique> {
    let mut found = Vec::new();
    if graph.is_empty() {
        return found;
    }

    let candidates: Clique = (0..graph.len()).collect();
    extend(graph, pivot, Clique::new(), candidates, Clique::new(), &mut found);

    found
}

/// One level of the search.
///
/// `clique` is the set being grown, `candidates` the vertices adjacent to all
/// of it that may still be added, and `excluded` the vertices adjacent to all
/// of it whose extensions were already explored.
fn extend(
    graph: &IntersectionGraph,
    rule: PivotRule,
    clique: Clique,
    mut candidates: Clique,
    mut excluded: Clique,
    found: &mut Vec<Clique>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() {
            found.push(clique);
        }
        return;
    }

    let branches: Vec<usize> = match rule {
        PivotRule::None => candidates.iter().copied().collect(),
        PivotRule::Tomita => match choose_pivot(graph, &candidates, &excluded) {
            Some(pivot) => candidates
                .iter()
                .copied()
                .filter(|&v| !graph.are_adjacent(pivot, v))
                .collect(),
            None => candidates.iter().copied().collect(),
        },
    };

    for vertex in branches {
        let mut grown = clique.clone();
        grown.insert(vertex);

        extend(
            graph,
            rule,
            grown,
            neighbors_within(graph, vertex, &candidates),
            neighbors_within(graph, vertex, &excluded),
            found,
        );

        candidates.remove(&vertex);
        excluded.insert(vertex);
    }
}

/// Pick the vertex of `candidates ∪ excluded` with the most neighbours among
/// `candidates`. Ties go to the smallest index.
fn choose_pivot(
    graph: &IntersectionGraph,
    candidates: &Clique,
    excluded: &Clique,
) -> Option<usize> {
    candidates
        .union(excluded)
        .copied()
        .max_by_key(|&u| {
            let covered = candidates
                .iter()
                .filter(|&&v| graph.are_adjacent(u, v))
                .count();
            (covered, Reverse(u))
        })
}

fn neighbors_within(graph: &IntersectionGraph, vertex: usize, set: &Clique) -> Clique {
    set.iter()
        .copied()
        .filter(|&v| graph.are_adjacent(vertex, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clique::exhaustive::{MAX_EXHAUSTIVE_VERTICES, all_cliques};
    use crate::clique::maximal_antichain;
    use crate::geometry::Rectangle;
    use std::collections::BTreeSet;

    const RULES: [PivotRule; 2] = [PivotRule::None, PivotRule::Tomita];

    fn clique(members: &[usize]) -> Clique {
        members.iter().copied().collect()
    }

    fn as_set(cliques: Vec<Clique>) -> BTreeSet<Clique> {
        cliques.into_iter().collect()
    }

    /// Small linear congruential generator so layouts are reproducible
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: u32) -> i32 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            i32::try_from((self.0 >> 33) % u64::from(bound)).unwrap()
        }
    }

    fn random_layout(seed: u64, count: usize) -> Vec<Rectangle> {
        let mut rng = Lcg(seed);
        (0..count)
            .map(|_| Rectangle::new(rng.next(12), rng.next(12), 1 + rng.next(6), 1 + rng.next(6)))
            .collect()
    }

    #[test]
    fn test_empty_graph_has_no_cliques() {
        let graph = IntersectionGraph::build(&[]);
        for rule in RULES {
            assert!(bron_kerbosch(&graph, rule).is_empty());
        }
    }

    #[test]
    fn test_single_rectangle_is_a_trivial_clique() {
        let graph = IntersectionGraph::build(&[Rectangle::new(0, 0, 1, 1)]);
        for rule in RULES {
            assert_eq!(bron_kerbosch(&graph, rule), vec![clique(&[0])]);
        }
    }

    #[test]
    fn test_pair_and_isolated_vertex() {
        let graph = IntersectionGraph::build(&[
            Rectangle::new(0, 0, 2, 2),
            Rectangle::new(1, 1, 2, 2),
            Rectangle::new(4, 4, 2, 2),
        ]);
        let expected: BTreeSet<_> = [clique(&[0, 1]), clique(&[2])].into_iter().collect();

        for rule in RULES {
            assert_eq!(as_set(bron_kerbosch(&graph, rule)), expected);
        }
    }

    #[test]
    fn test_chain_yields_overlapping_pairs() {
        // 0-1, 1-2, 2-3 overlap but no three share a point
        let graph = IntersectionGraph::build(&[
            Rectangle::new(0, 0, 3, 1),
            Rectangle::new(2, 0, 3, 1),
            Rectangle::new(4, 0, 3, 1),
            Rectangle::new(6, 0, 3, 1),
        ]);
        let expected: BTreeSet<_> = [clique(&[0, 1]), clique(&[1, 2]), clique(&[2, 3])]
            .into_iter()
            .collect();

        for rule in RULES {
            assert_eq!(as_set(bron_kerbosch(&graph, rule)), expected);
        }
    }

    #[test]
    fn test_nested_bars_and_corner_overlap() {
        // 0 and 1 are bars inside 2; 3 only reaches into 2's far corner
        let graph = IntersectionGraph::build(&[
            Rectangle::new(0, 0, 4, 1),
            Rectangle::new(0, 0, 1, 4),
            Rectangle::new(0, 0, 4, 4),
            Rectangle::new(3, 3, 4, 4),
        ]);

        for rule in RULES {
            let found = as_set(bron_kerbosch(&graph, rule));
            assert!(found.contains(&clique(&[0, 1, 2])));
            assert!(found.contains(&clique(&[2, 3])));
            assert_eq!(found.len(), 2);
        }
    }

    #[test]
    fn test_no_duplicates_reported() {
        let r = Rectangle::new(0, 0, 5, 5);
        let graph = IntersectionGraph::build(&[r, r, r, r]);

        for rule in RULES {
            assert_eq!(bron_kerbosch(&graph, rule), vec![clique(&[0, 1, 2, 3])]);
        }
    }

    #[test]
    fn test_every_result_is_a_maximal_clique() {
        for seed in 0..20 {
            let rects = random_layout(seed, 10);
            let graph = IntersectionGraph::build(&rects);

            for rule in RULES {
                let found = bron_kerbosch(&graph, rule);
                for c in &found {
                    assert!(graph.is_clique(c), "seed {}: {:?} is not a clique", seed, c);
                    let extendable = (0..graph.len())
                        .filter(|v| !c.contains(v))
                        .any(|v| c.iter().all(|&m| graph.are_adjacent(m, v)));
                    assert!(!extendable, "seed {}: {:?} can be extended", seed, c);
                }
                assert_eq!(as_set(found.clone()).len(), found.len());
            }
        }
    }

    #[test]
    fn test_matches_exhaustive_oracle() {
        for seed in 0..40 {
            let count = 1 + usize::try_from(seed % 12).unwrap();
            assert!(count <= MAX_EXHAUSTIVE_VERTICES);
            let rects = random_layout(seed * 7919 + 3, count);
            let graph = IntersectionGraph::build(&rects);

            let expected = as_set(maximal_antichain(all_cliques(&graph)));

            for rule in RULES {
                let found = bron_kerbosch(&graph, rule);
                assert_eq!(as_set(found.clone()).len(), found.len(), "seed {}", seed);
                assert_eq!(as_set(found), expected, "seed {} rule {:?}", seed, rule);
            }
        }
    }

    #[test]
    fn test_pivot_prefers_highest_coverage() {
        // Vertex 1 overlaps both others; 0 and 2 are disjoint
        let graph = IntersectionGraph::build(&[
            Rectangle::new(0, 0, 2, 2),
            Rectangle::new(1, 0, 4, 2),
            Rectangle::new(4, 0, 2, 2),
        ]);
        let candidates = clique(&[0, 1, 2]);

        assert_eq!(choose_pivot(&graph, &candidates, &Clique::new()), Some(1));
        assert_eq!(choose_pivot(&graph, &Clique::new(), &Clique::new()), None);
    }

    #[test]
    fn test_pivot_tie_goes_to_smallest_index() {
        let graph = IntersectionGraph::build(&[
            Rectangle::new(0, 0, 1, 1),
            Rectangle::new(5, 5, 1, 1),
        ]);
        let candidates = clique(&[0, 1]);

        assert_eq!(choose_pivot(&graph, &candidates, &Clique::new()), Some(0));
    }
}
