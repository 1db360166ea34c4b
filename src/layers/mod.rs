//! Graph neural network layers for inference on graph-structured data.
//!
//! Each layer implements the same contract: given a node-feature table
//! and an adjacency list, produce a new node-feature table. Layers own
//! fixed parameters drawn once at construction; `forward` is a pure
//! function of parameters and inputs.
//!
//! # Layers
//!
//! - [`GcnLayer`] - degree-normalized convolution (Kipf & Welling, 2017)
//! - [`SageLayer`] - mean aggregation + concatenation (Hamilton et al., 2017)
//! - [`GatLayer`] - attention-weighted aggregation (Velickovic et al., 2018)
//!
//! # Self-loop policy
//!
//! The variants deliberately diverge on self-contribution: [`GatLayer`]
//! always appends a self-loop to the set it scores, while [`GcnLayer`]
//! and [`SageLayer`] include a node's own features among the neighbors
//! only when the adjacency list itself contains the self-edge.
//!
//! # Example
//!
//! ```
//! use grafo::layers::{GcnLayer, GnnLayer};
//! use grafo::primitives::Matrix;
//!
//! // 2 input features -> 4 output features, reproducible weights
//! let layer = GcnLayer::with_seed(2, 4, Some(7));
//!
//! let x = Matrix::from_elem(3, 2, 1.0);
//! let adjacency = vec![vec![1], vec![0, 2], vec![1]];
//!
//! let out = layer.forward(&x, &adjacency);
//! assert_eq!(out.shape(), (3, 4));
//! ```
//!
//! # References
//!
//! - Kipf, T. N., & Welling, M. (2017). Semi-Supervised Classification with
//!   Graph Convolutional Networks. ICLR.
//! - Hamilton, W. L., et al. (2017). Inductive Representation Learning on
//!   Large Graphs (GraphSAGE). NeurIPS.
//! - Velickovic, P., et al. (2018). Graph Attention Networks. ICLR.

use crate::graph::NodeId;
use crate::primitives::Matrix;

mod gat;
mod gcn;
pub mod init;
mod sage;

pub use gat::GatLayer;
pub use gcn::GcnLayer;
pub use sage::SageLayer;

/// Shared forward contract for GNN layers.
///
/// Callers hold `Box<dyn GnnLayer>` and invoke [`forward`](Self::forward)
/// without knowing the concrete variant.
pub trait GnnLayer {
    /// Computes updated node features.
    ///
    /// # Arguments
    ///
    /// * `features` - Node features, `[num_nodes x in_features]`
    /// * `adjacency` - One ordered neighbor list per node
    ///
    /// # Returns
    ///
    /// Updated node features, `[num_nodes x out_features]`.
    ///
    /// # Panics
    ///
    /// Panics when the feature width doesn't match the layer's input
    /// dimension, the adjacency length doesn't match the node count, or
    /// a neighbor id is out of range. These are caller precondition
    /// violations, not recoverable conditions.
    fn forward(&self, features: &Matrix<f32>, adjacency: &[Vec<NodeId>]) -> Matrix<f32>;

    /// Input feature dimension.
    fn in_features(&self) -> usize;

    /// Output feature dimension.
    fn out_features(&self) -> usize;
}

/// ReLU activation applied per output entry.
pub(crate) fn relu(x: f32) -> f32 {
    x.max(0.0)
}

/// Shared forward-input precondition checks.
pub(crate) fn check_forward_inputs(
    features: &Matrix<f32>,
    adjacency: &[Vec<NodeId>],
    in_features: usize,
) {
    assert_eq!(
        features.n_cols(),
        in_features,
        "expected {} input features, got {}",
        in_features,
        features.n_cols()
    );
    assert_eq!(
        adjacency.len(),
        features.n_rows(),
        "adjacency length {} doesn't match node count {}",
        adjacency.len(),
        features.n_rows()
    );
}
