//! Grafo: graph neural network inference layers in pure Rust.
//!
//! Grafo computes updated per-node feature vectors over a graph by
//! aggregating information from each node's neighbors. Three
//! interchangeable layer variants implement the same forward contract:
//!
//! - [`layers::GcnLayer`] - degree-normalized convolution (Kipf & Welling, 2017)
//! - [`layers::SageLayer`] - mean aggregation + concatenation (Hamilton et al., 2017)
//! - [`layers::GatLayer`] - attention-weighted aggregation (Velickovic et al., 2018)
//!
//! Weights are initialized once from a seedable random source and never
//! updated: this is an inference-time encoder, not a trainer.
//!
//! # Architecture
//!
//! ```text
//! Node Features    Graph Structure
//!      │                 │
//!      ▼                 ▼
//! ┌────────────────────────────┐
//! │       GNN Layer            │
//! │  (aggregate + transform)   │
//! └────────────────────────────┘
//!            │
//!            ▼
//!    Updated Node Features
//! ```
//!
//! # Quick Start
//!
//! ```
//! use grafo::prelude::*;
//!
//! // 3-node path graph with 2 features per node
//! let mut g = Graph::new(3, 2);
//! g.set_node_feature(0, &[1.0, 0.0]).unwrap();
//! g.set_node_feature(1, &[0.0, 1.0]).unwrap();
//! g.set_node_feature(2, &[1.0, 1.0]).unwrap();
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//!
//! // Degree-normalized layer: 2 input features -> 4 output features
//! let layer = GcnLayer::with_seed(2, 4, Some(42));
//! let out = layer.forward(g.node_features(), g.adjacency());
//! assert_eq!(out.shape(), (3, 4));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: row-major [`Matrix`](primitives::Matrix) storage
//! - [`graph`]: the [`Graph`](graph::Graph) entity (features + adjacency + edge log)
//! - [`layers`]: the [`GnnLayer`](layers::GnnLayer) trait and its three variants
//! - [`io`]: whitespace-separated graph text-file loader
//! - [`scoring`]: node scores -> edge-level and graph-level scores/decisions
//!
//! # References
//!
//! - Kipf, T. N., & Welling, M. (2017). Semi-Supervised Classification with
//!   Graph Convolutional Networks. ICLR.
//! - Hamilton, W. L., et al. (2017). Inductive Representation Learning on
//!   Large Graphs (GraphSAGE). NeurIPS.
//! - Velickovic, P., et al. (2018). Graph Attention Networks. ICLR.

pub mod error;
pub mod graph;
pub mod io;
pub mod layers;
pub mod prelude;
pub mod primitives;
pub mod scoring;

pub use error::{GrafoError, Result};
