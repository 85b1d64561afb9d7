use log::debug;

use crate::geometry::Rectangle;

/// Undirected overlap graph over rectangle indices.
///
/// Vertex `i` is the `i`-th input rectangle. An edge joins `i` and `j`
/// (`i != j`) exactly when the two rectangles intersect. The graph is
/// built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionGraph {
    vertex_count: usize,
    /// Row-major `vertex_count * vertex_count` symmetric matrix
    adjacency: Vec<bool>,
    edge_count: usize,
}

impl IntersectionGraph {
    /// Build the graph, testing each unordered pair exactly once.
    pub fn build(rectangles: &[Rectangle]) -> Self {
        let n = rectangles.len();
        let mut adjacency = vec![false; n * n];
        let mut edge_count = 0;

        for i in 0..n {
            for j in (i + 1)..n {
                if rectangles[i].intersects(&rectangles[j]) {
                    adjacency[i * n + j] = true;
                    adjacency[j * n + i] = true;
                    edge_count += 1;
                }
            }
        }

        debug!("Intersection graph: {} vertices, {} edges", n, edge_count);

        Self {
            vertex_count: n,
            adjacency,
            edge_count,
        }
    }

    pub fn len(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// O(1) adjacency lookup. A vertex is never adjacent to itself.
    ///
    /// Out-of-range indices are reported as not adjacent.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        if a == b || a >= self.vertex_count || b >= self.vertex_count {
            return false;
        }
        self.adjacency[a * self.vertex_count + b]
    }

    /// Returns true if every pair of `members` is joined by an edge
    pub fn is_clique<'a>(&self, members: impl IntoIterator<Item = &'a usize> + Clone) -> bool {
        members.clone().into_iter().all(|&a| {
            members
                .clone()
                .into_iter()
                .all(|&b| a == b || self.are_adjacent(a, b))
        })
    }
}
