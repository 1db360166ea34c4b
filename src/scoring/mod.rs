//! Score post-processing: per-node scalars to edge- and graph-level
//! outputs.
//!
//! A forward pass yields one vector per node; the caller reduces each to
//! a scalar (typically with [`node_scores`], a row sum) and this module
//! folds those scalars into edge scores, edge decisions, a graph score,
//! and a graph decision. The two-argument edge combiner and N-argument
//! graph aggregator are pluggable closures; [`combiners`] provides the
//! stock choices, with product and mean being the conventional defaults.
//!
//! # Example
//!
//! ```
//! use grafo::graph::Graph;
//! use grafo::scoring::{combiners, to_edge_scores, to_graph_score};
//!
//! let mut g = Graph::new(3, 1);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//!
//! let scores = vec![2.0, 3.0, 4.0];
//! let edges = to_edge_scores(&scores, &g, combiners::prod).unwrap();
//! assert_eq!(edges, vec![6.0, 12.0]);
//! assert_eq!(to_graph_score(&scores, combiners::mean_graph), 3.0);
//! ```

use std::collections::HashSet;

use crate::error::{GrafoError, Result};
use crate::graph::Graph;
use crate::primitives::Matrix;

/// One scalar score per node.
pub type NodeScores = Vec<f32>;

/// Stock edge combiners and graph aggregators.
pub mod combiners {
    /// Sum of endpoint scores.
    #[must_use]
    pub fn sum(a: f32, b: f32) -> f32 {
        a + b
    }

    /// Product of endpoint scores (the conventional edge default).
    #[must_use]
    pub fn prod(a: f32, b: f32) -> f32 {
        a * b
    }

    /// Maximum of endpoint scores.
    #[must_use]
    pub fn max(a: f32, b: f32) -> f32 {
        a.max(b)
    }

    /// Minimum of endpoint scores.
    #[must_use]
    pub fn min(a: f32, b: f32) -> f32 {
        a.min(b)
    }

    /// Absolute difference of endpoint scores.
    #[must_use]
    pub fn abs_diff(a: f32, b: f32) -> f32 {
        (a - b).abs()
    }

    /// Sum of all node scores.
    #[must_use]
    pub fn sum_graph(scores: &[f32]) -> f32 {
        scores.iter().sum()
    }

    /// Mean of all node scores (the conventional graph default); 0.0 for
    /// empty input.
    #[must_use]
    pub fn mean_graph(scores: &[f32]) -> f32 {
        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().sum::<f32>() / scores.len() as f32
    }

    /// Maximum node score; 0.0 for empty input.
    #[must_use]
    pub fn max_graph(scores: &[f32]) -> f32 {
        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Minimum node score; 0.0 for empty input.
    #[must_use]
    pub fn min_graph(scores: &[f32]) -> f32 {
        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().copied().fold(f32::INFINITY, f32::min)
    }
}

/// Reduces a forward pass's output to one scalar per node (row sum).
#[must_use]
pub fn node_scores(features: &Matrix<f32>) -> NodeScores {
    (0..features.n_rows())
        .map(|i| features.row(i).iter().sum())
        .collect()
}

fn check_score_len(scores: &[f32], graph: &Graph) -> Result<()> {
    if scores.len() != graph.num_nodes() {
        return Err(GrafoError::DimensionMismatch {
            expected: format!("{} node scores", graph.num_nodes()),
            actual: format!("{}", scores.len()),
        });
    }
    Ok(())
}

/// One combined score per undirected edge, de-duplicated.
///
/// Walks the adjacency in node order and handles each unordered pair
/// once (only `u < v`, with a seen-set guarding repeated insertions), so
/// the symmetric double-insertion of `add_edge` doesn't double-count.
///
/// # Errors
///
/// Returns an error when the score count doesn't match the node count.
pub fn to_edge_scores<F>(scores: &[f32], graph: &Graph, combiner: F) -> Result<Vec<f32>>
where
    F: Fn(f32, f32) -> f32,
{
    check_score_len(scores, graph)?;

    let mut out = Vec::with_capacity(graph.num_edges());
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    for u in 0..graph.num_nodes() {
        for &v in graph.neighbors(u) {
            if u >= v {
                continue;
            }
            if !seen.insert((u, v)) {
                continue;
            }
            out.push(combiner(scores[u], scores[v]));
        }
    }
    Ok(out)
}

/// Per-edge binary decisions: combined score strictly above `threshold`.
///
/// # Errors
///
/// Returns an error when the score count doesn't match the node count.
pub fn to_edge_binary<F>(
    scores: &[f32],
    graph: &Graph,
    threshold: f32,
    combiner: F,
) -> Result<Vec<bool>>
where
    F: Fn(f32, f32) -> f32,
{
    let edge_scores = to_edge_scores(scores, graph, combiner)?;
    Ok(edge_scores.into_iter().map(|s| s > threshold).collect())
}

/// Single graph-level score.
#[must_use]
pub fn to_graph_score<A>(scores: &[f32], aggregator: A) -> f32
where
    A: Fn(&[f32]) -> f32,
{
    aggregator(scores)
}

/// Graph-level binary decision: aggregate strictly above `threshold`.
#[must_use]
pub fn to_graph_binary<A>(scores: &[f32], threshold: f32, aggregator: A) -> bool
where
    A: Fn(&[f32]) -> f32,
{
    aggregator(scores) > threshold
}

#[cfg(test)]
mod tests;
