//! Degree-normalized graph convolution.

use super::init::{rng_from_seed, uniform_nonneg_with, xavier_limit};
use super::{check_forward_inputs, relu, GnnLayer};
use crate::graph::NodeId;
use crate::primitives::Matrix;

/// Graph Convolutional Network layer (Kipf & Welling, 2017).
///
/// Aggregates neighbor features with symmetric degree normalization:
///
/// ```text
/// h_i' = ReLU(Σ_j (1/√(d_i * d_j)) * h_j · W)
/// ```
///
/// where `d` is the neighbor-list length. Terms whose normalization
/// denominator is zero are dropped rather than propagated as NaN. A node
/// contributes to itself only when it appears in its own neighbor list;
/// no implicit self-loop is added.
#[derive(Debug)]
pub struct GcnLayer {
    in_features: usize,
    out_features: usize,
    /// Projection matrix, [in_features x out_features]
    weights: Matrix<f32>,
}

impl GcnLayer {
    /// Creates a layer with entropy-seeded weights.
    #[must_use]
    pub fn new(in_features: usize, out_features: usize) -> Self {
        Self::with_seed(in_features, out_features, None)
    }

    /// Creates a layer with a specific random seed.
    ///
    /// Weights are drawn from `[0, limit)` with
    /// `limit = sqrt(6 / (in_features + out_features))`.
    #[must_use]
    pub fn with_seed(in_features: usize, out_features: usize, seed: Option<u64>) -> Self {
        let limit = xavier_limit(in_features, out_features);
        let mut rng = rng_from_seed(seed);
        Self {
            in_features,
            out_features,
            weights: uniform_nonneg_with(&mut rng, in_features, out_features, limit),
        }
    }

    /// Creates a layer from an explicit projection matrix. Dimensions
    /// are taken from the matrix shape.
    #[must_use]
    pub fn from_weights(weights: Matrix<f32>) -> Self {
        let (in_features, out_features) = weights.shape();
        Self {
            in_features,
            out_features,
            weights,
        }
    }

    /// Normalized neighbor aggregate for one node.
    fn aggregate_neighbors(
        &self,
        node: NodeId,
        features: &Matrix<f32>,
        adjacency: &[Vec<NodeId>],
        degrees: &[usize],
    ) -> Vec<f32> {
        let mut aggregated = vec![0.0f32; self.in_features];
        for &neighbor in &adjacency[node] {
            let normalization = ((degrees[node] * degrees[neighbor]) as f32).sqrt();
            if normalization == 0.0 {
                continue;
            }
            let row = features.row(neighbor);
            for d in 0..self.in_features {
                aggregated[d] += row[d] / normalization;
            }
        }
        aggregated
    }
}

impl GnnLayer for GcnLayer {
    fn forward(&self, features: &Matrix<f32>, adjacency: &[Vec<NodeId>]) -> Matrix<f32> {
        check_forward_inputs(features, adjacency, self.in_features);
        let n_nodes = features.n_rows();

        let degrees: Vec<usize> = adjacency.iter().map(Vec::len).collect();

        let mut updated = Matrix::zeros(n_nodes, self.out_features);
        for i in 0..n_nodes {
            let aggregated = self.aggregate_neighbors(i, features, adjacency, &degrees);
            for o in 0..self.out_features {
                let mut val = 0.0f32;
                for d in 0..self.in_features {
                    val += aggregated[d] * self.weights.get(d, o);
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
