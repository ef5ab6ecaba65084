//! Path search by repeated distance relaxation.
//!
//! The search walks the graph depth-first from the source. At every step it
//! relaxes the edges leaving the current vertex that the current walk has not
//! used yet (heaviest first), then continues into every neighbour whose best
//! known distance just improved (farthest first). Whenever a walk reaches the
//! target its total weight is compared to the best walk seen so far, and the
//! search keeps going after that.
//!
//! Vertices may be expanded more than once, and on dense graphs the search
//! can take exponential time. The expansion order decides which of several
//! equal-weight paths wins.

use std::collections::HashMap;

use crate::types::{Edge, EdgeId, GraphResult, VertexId};

use super::GraphStore;

/// Outcome of a path search.
///
/// Two results are equal when they take the same stored edges, by id, in the
/// same order and have the same total. Parallel edges between one pair of
/// vertices therefore make different results.
#[derive(Debug, Clone)]
pub struct PathResult {
    /// Edges of the best walk, from source to target.
    pub edges: Vec<Edge>,
    /// Sum of the edge weights.
    pub distance: f64,
}

impl PathResult {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            distance: 0.0,
        }
    }

    /// True when the target was not reached.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Vertices visited by the walk, starting at `source`.
    pub fn vertex_ids(&self, source: VertexId) -> Vec<VertexId> {
        if self.edges.is_empty() {
            return Vec::new();
        }
        let mut ids = Vec::with_capacity(self.edges.len() + 1);
        let mut current = source;
        ids.push(current);
        for edge in &self.edges {
            if edge.id == EdgeId::DETACHED {
                continue;
            }
            current = edge.other_end(current).id;
            ids.push(current);
        }
        ids
    }
}

impl PartialEq for PathResult {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
            && self.edges.len() == other.edges.len()
            && self.edges.iter().zip(&other.edges).all(|(a, b)| a.id == b.id)
    }
}

/// A pending expansion: the vertex to expand and the walk that led there.
struct Frame {
    vertex: VertexId,
    walk: Vec<usize>,
}

/// Find the shortest path from `source` to `target`.
///
/// Fails with `VertexNotFound` if either id is unknown. An unreachable target
/// yields an empty result with distance 0. When `source == target` the result
/// is a single zero-weight edge from the vertex to itself.
pub fn find_path(graph: &GraphStore, source: VertexId, target: VertexId) -> GraphResult<PathResult> {
    let source_vertex = graph.get_vertex(source)?;
    graph.get_vertex(target)?;

    if source == target {
        log::debug!("Search from {} to itself", source);
        return Ok(PathResult {
            edges: vec![Edge::detached_loop(source_vertex)],
            distance: 0.0,
        });
    }

    let edges = graph.edges();
    let mut labels: HashMap<VertexId, f64> = graph
        .vertices()
        .iter()
        .map(|v| (v.id, f64::INFINITY))
        .collect();
    labels.insert(source, 0.0);

    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut stack = vec![Frame {
        vertex: source,
        walk: Vec::new(),
    }];
    let mut expanded = 0usize;

    while let Some(frame) = stack.pop() {
        expanded += 1;
        log::trace!(
            "Expanding vertex {} after {} edge(s)",
            frame.vertex,
            frame.walk.len()
        );

        if frame.vertex == target {
            let total = walk_distance(edges, &frame.walk);
            let improved = match &best {
                Some((_, best_total)) => *best_total > total,
                None => true,
            };
            if improved {
                best = Some((frame.walk.clone(), total));
            }
        }

        let current = label(&labels, frame.vertex);

        // Unused incident edges, heaviest first; stable sort keeps insertion
        // order among equal weights.
        let mut candidates: Vec<usize> = (0..edges.len())
            .filter(|&i| edges[i].touches(frame.vertex) && !frame.walk.contains(&i))
            .collect();
        candidates.sort_by(|&a, &b| edges[b].distance.total_cmp(&edges[a].distance));

        let mut frontier: Vec<(VertexId, usize)> = Vec::new();
        for i in candidates {
            let next = edges[i].other_end(frame.vertex).id;
            let tentative = current + edges[i].distance;
            if tentative < label(&labels, next) {
                labels.insert(next, tentative);
                frontier.push((next, i));
            }
        }

        frontier.retain(|(v, _)| label(&labels, *v).is_finite());
        frontier.sort_by(|(a, _), (b, _)| label(&labels, *b).total_cmp(&label(&labels, *a)));

        // Reverse so the first frontier entry is popped (expanded) first.
        for (next, edge) in frontier.into_iter().rev() {
            let mut walk = Vec::with_capacity(frame.walk.len() + 1);
            walk.extend_from_slice(&frame.walk);
            walk.push(edge);
            stack.push(Frame { vertex: next, walk });
        }
    }

    let result = match best {
        Some((walk, distance)) => PathResult {
            edges: walk.into_iter().map(|i| edges[i]).collect(),
            distance,
        },
        None => PathResult::empty(),
    };

    log::debug!(
        "Search from {} to {} expanded {} frame(s): {} edge(s), distance {}",
        source,
        target,
        expanded,
        result.len(),
        result.distance
    );
    Ok(result)
}

fn label(labels: &HashMap<VertexId, f64>, id: VertexId) -> f64 {
    labels.get(&id).copied().unwrap_or(f64::INFINITY)
}

fn walk_distance(edges: &[Edge], walk: &[usize]) -> f64 {
    walk.iter().map(|&i| edges[i].distance).sum()
}
