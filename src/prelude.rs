//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use grafo::prelude::*;
//! ```

pub use crate::error::{GrafoError, Result};
pub use crate::graph::{Graph, NodeId};
pub use crate::io::read_graph_from_file;
pub use crate::layers::{GatLayer, GcnLayer, GnnLayer, SageLayer};
pub use crate::primitives::Matrix;
pub use crate::scoring::{
    combiners, node_scores, to_edge_binary, to_edge_scores, to_graph_binary, to_graph_score,
};
