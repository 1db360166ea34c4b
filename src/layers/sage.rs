//! Mean aggregation + concatenation.

use super::init::{rng_from_seed, uniform_nonneg_with, xavier_limit};
use super::{check_forward_inputs, relu, GnnLayer};
use crate::error::{GrafoError, Result};
use crate::graph::NodeId;
use crate::primitives::Matrix;

/// GraphSAGE layer (Hamilton et al., 2017).
///
/// Aggregates neighboring features by element-wise mean, concatenates
/// the result with the node's own features, and applies a learned
/// projection followed by ReLU:
///
/// ```text
/// h_i' = ReLU([h_i ; mean_j(h_j)] · W)      W: [2*in x out]
/// ```
///
/// A node without neighbors aggregates to the zero vector, so its
/// concatenated input is `[h_i ; 0]`.
#[derive(Debug)]
pub struct SageLayer {
    in_features: usize,
    out_features: usize,
    /// Projection matrix, [2*in_features x out_features]
    weights: Matrix<f32>,
}

impl SageLayer {
    /// Creates a layer with entropy-seeded weights.
    #[must_use]
    pub fn new(in_features: usize, out_features: usize) -> Self {
        Self::with_seed(in_features, out_features, None)
    }

    /// Creates a layer with a specific random seed.
    ///
    /// Weights are drawn from `[0, limit)` with
    /// `limit = sqrt(6 / (2*in_features + out_features))`.
    #[must_use]
    pub fn with_seed(in_features: usize, out_features: usize, seed: Option<u64>) -> Self {
        let limit = xavier_limit(2 * in_features, out_features);
        let mut rng = rng_from_seed(seed);
        Self {
            in_features,
            out_features,
            weights: uniform_nonneg_with(&mut rng, 2 * in_features, out_features, limit),
        }
    }

    /// Creates a layer from an explicit projection matrix. The row count
    /// must be even: rows are the concatenated width `2 * in_features`.
    ///
    /// # Errors
    ///
    /// Returns an error when the row count is odd.
    pub fn from_weights(weights: Matrix<f32>) -> Result<Self> {
        let (rows, out_features) = weights.shape();
        if rows % 2 != 0 {
            return Err(GrafoError::DimensionMismatch {
                expected: "even row count (2 * in_features)".to_string(),
                actual: format!("{rows} rows"),
            });
        }
        Ok(Self {
            in_features: rows / 2,
            out_features,
            weights,
        })
    }

    /// Element-wise mean of the neighbors' features; zero vector when
    /// the node has no neighbors.
    fn aggregate_neighbors_mean(
        &self,
        node: NodeId,
        features: &Matrix<f32>,
        adjacency: &[Vec<NodeId>],
    ) -> Vec<f32> {
        let mut aggregated = vec![0.0f32; self.in_features];
        let neighbor_count = adjacency[node].len();
        if neighbor_count == 0 {
            return aggregated;
        }
        for &neighbor in &adjacency[node] {
            let row = features.row(neighbor);
            for d in 0..self.in_features {
                aggregated[d] += row[d];
            }
        }
        for value in &mut aggregated {
            *value /= neighbor_count as f32;
        }
        aggregated
    }
}

impl GnnLayer for SageLayer {
    fn forward(&self, features: &Matrix<f32>, adjacency: &[Vec<NodeId>]) -> Matrix<f32> {
        check_forward_inputs(features, adjacency, self.in_features);
        let n_nodes = features.n_rows();

        let mut updated = Matrix::zeros(n_nodes, self.out_features);
        for i in 0..n_nodes {
            let aggregated = self.aggregate_neighbors_mean(i, features, adjacency);
            let own = features.row(i);

            for o in 0..self.out_features {
                // Rows [0, in) of W apply to own features, rows
                // [in, 2*in) to the neighbor aggregate.
                let mut val = 0.0f32;
                for d in 0..self.in_features {
                    val += own[d] * self.weights.get(d, o);
                    val += aggregated[d] * self.weights.get(d + self.in_features, o);
                }
                updated.set(i, o, relu(val));
            }
        }
        updated
    }

    fn in_features(&self) -> usize {
        self.in_features
    }

    fn out_features(&self) -> usize {
        self.out_features
    }
}
