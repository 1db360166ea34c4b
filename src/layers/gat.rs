//! Attention-weighted aggregation.

use super::init::{rng_from_seed, uniform_nonneg_with, xavier_limit};
use super::{check_forward_inputs, relu, GnnLayer};
use crate::error::{GrafoError, Result};
use crate::graph::NodeId;
use crate::primitives::Matrix;

/// Default negative slope for the attention LeakyReLU.
pub const DEFAULT_NEGATIVE_SLOPE: f32 = 0.2;

/// Graph Attention Network layer (Velickovic et al., 2018), single head.
///
/// Projects every node into the output space, scores each node against
/// its neighbors with a learned attention vector, normalizes the scores
/// with a softmax, and aggregates:
///
/// ```text
/// z_i    = h_i · W
/// e_ij   = LeakyReLU(a_own · z_i + a_nbr · z_j)
/// α_ij   = softmax_j(e_ij)
/// h_i'   = ReLU(Σ_j α_ij * z_j)
/// ```
///
/// The scored set for node `i` is its neighbor list with `i` appended: a
/// self-loop is always added, even when `i` already appears among its
/// own neighbors. An isolated node therefore scores only itself, so
/// `α_ii = 1` and its output is `ReLU(z_i)`.
///
/// # Degenerate softmax
///
/// When every shifted exponential underflows to zero the division is
/// skipped and the raw exponentials are used as weights. Such weights do
/// not sum to 1; this is the contract's explicit corner case, preferred
/// over NaN outputs.
#[derive(Debug)]
pub struct GatLayer {
    in_features: usize,
    out_features: usize,
    /// Projection matrix, [in_features x out_features]
    weights: Matrix<f32>,
    /// Attention vector of length 2*out_features: the first half scores
    /// the node's own projection, the second half the neighbor's.
    attention: Vec<f32>,
    negative_slope: f32,
}

impl GatLayer {
    /// Creates a layer with entropy-seeded parameters.
    #[must_use]
    pub fn new(in_features: usize, out_features: usize) -> Self {
        Self::with_seed(in_features, out_features, None)
    }

    /// Creates a layer with a specific random seed.
    ///
    /// Both the projection matrix and the attention vector are drawn
    /// from `[0, limit)` with
    /// `limit = sqrt(6 / (in_features + out_features))`, from a single
    /// generator (projection first, attention second).
    #[must_use]
    pub fn with_seed(in_features: usize, out_features: usize, seed: Option<u64>) -> Self {
        let limit = xavier_limit(in_features, out_features);
        let mut rng = rng_from_seed(seed);
        let weights = uniform_nonneg_with(&mut rng, in_features, out_features, limit);
        let attention = uniform_nonneg_with(&mut rng, 1, 2 * out_features, limit)
            .as_slice()
            .to_vec();
        Self {
            in_features,
            out_features,
            weights,
            attention,
            negative_slope: DEFAULT_NEGATIVE_SLOPE,
        }
    }

    /// Creates a layer from explicit parameters. Dimensions are taken
    /// from the projection matrix shape.
    ///
    /// # Errors
    ///
    /// Returns an error when the attention vector length is not twice
    /// the projection's output width.
    pub fn from_weights(weights: Matrix<f32>, attention: Vec<f32>) -> Result<Self> {
        let (in_features, out_features) = weights.shape();
        if attention.len() != 2 * out_features {
            return Err(GrafoError::DimensionMismatch {
                expected: format!("attention vector of length {}", 2 * out_features),
                actual: format!("length {}", attention.len()),
            });
        }
        Ok(Self {
            in_features,
            out_features,
            weights,
            attention,
            negative_slope: DEFAULT_NEGATIVE_SLOPE,
        })
    }

    /// Overrides the LeakyReLU negative slope (default 0.2).
    #[must_use]
    pub fn with_negative_slope(mut self, slope: f32) -> Self {
        self.negative_slope = slope;
        self
    }

    /// Current LeakyReLU negative slope.
    #[must_use]
    pub fn negative_slope(&self) -> f32 {
        self.negative_slope
    }

    fn leaky_relu(&self, x: f32) -> f32 {
        if x > 0.0 {
            x
        } else {
            self.negative_slope * x
        }
    }

    /// Projects one node's features into the output space.
    fn project(&self, features: &[f32]) -> Vec<f32> {
        let mut z = vec![0.0f32; self.out_features];
        for o in 0..self.out_features {
            for d in 0..self.in_features {
                z[o] += features[d] * self.weights.get(d, o);
            }
        }
        z
    }

    /// Unnormalized attention logit between the projections of node `i`
    /// and neighbor `j`.
    fn attention_score(&self, z_i: &[f32], z_j: &[f32]) -> f32 {
        let mut score = 0.0f32;
        for o in 0..self.out_features {
            score += self.attention[o] * z_i[o] + self.attention[o + self.out_features] * z_j[o];
        }
        self.leaky_relu(score)
    }
}

/// Numerically stable softmax: shifts by the maximum logit before
/// exponentiating. When the exponential sum is exactly zero the raw
/// exponentials are returned unnormalized.
fn softmax(scores: &[f32]) -> Vec<f32> {
    let max_val = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut exp_scores: Vec<f32> = scores.iter().map(|&s| (s - max_val).exp()).collect();
    let sum_exp: f32 = exp_scores.iter().sum();
    if sum_exp != 0.0 {
        for val in &mut exp_scores {
            *val /= sum_exp;
        }
    }
    exp_scores
}

impl GnnLayer for GatLayer {
    fn forward(&self, features: &Matrix<f32>, adjacency: &[Vec<NodeId>]) -> Matrix<f32> {
        check_forward_inputs(features, adjacency, self.in_features);
        let n_nodes = features.n_rows();

        // Step 1: project every node once.
        let z: Vec<Vec<f32>> = (0..n_nodes).map(|i| self.project(features.row(i))).collect();

        let mut updated = Matrix::zeros(n_nodes, self.out_features);
        for i in 0..n_nodes {
            // Step 2: scored set = neighbors plus an unconditional self-loop.
            let mut scored: Vec<NodeId> = adjacency[i].clone();
            scored.push(i);

            // Step 3-4: logits, then stable softmax.
            let logits: Vec<f32> = scored
                .iter()
                .map(|&j| self.attention_score(&z[i], &z[j]))
                .collect();
            let alpha = softmax(&logits);

            // Step 5: weighted aggregation, then ReLU.
            for o in 0..self.out_features {
                let mut agg = 0.0f32;
                for (idx, &j) in scored.iter().enumerate() {
                    agg += alpha[idx] * z[j][o];
                }
                updated.set(i, o, relu(agg));
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
