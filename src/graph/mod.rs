//! Graph construction for GNN inference.
//!
//! [`Graph`] owns the node-feature table and adjacency connectivity that
//! the [`layers`](crate::layers) operate over. It has no behavior beyond
//! construction and incremental edit: node count and feature width are
//! fixed at creation, features are replaced whole-row, and edges are
//! inserted undirected (one `add_edge` call writes both adjacency
//! directions and appends one entry to the edge log).
//!
//! The type is deliberately not `Clone`: a graph is handed off by move
//! between the loader, the caller, and the scoring step, and borrowed
//! immutably by layer forward passes.
//!
//! # Examples
//!
//! ```
//! use grafo::graph::Graph;
//!
//! let mut g = Graph::new(3, 2);
//! g.set_node_feature(0, &[1.0, 0.5]).unwrap();
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//!
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.degree(1), 2);
//! assert_eq!(g.edge(0).unwrap(), (0, 1));
//! ```

use crate::error::{GrafoError, Result};
use crate::primitives::Matrix;

/// Graph node identifier (contiguous integers for cache efficiency).
pub type NodeId = usize;

/// A graph with dense node features and adjacency-list connectivity.
///
/// Carries two extensibility payloads the core algorithms never read:
/// per-edge feature rows (for edge-conditioned layers) and a graph-level
/// global feature vector.
#[derive(Debug)]
pub struct Graph {
    num_nodes: usize,
    num_node_features: usize,
    /// Feature table: [num_nodes x num_node_features]
    node_features: Matrix<f32>,
    /// One ordered neighbor list per node
    adjacency_list: Vec<Vec<NodeId>>,
    /// (src, dst) for every add_edge call, in insertion order
    edge_list: Vec<(NodeId, NodeId)>,
    /// Optional per-edge features, parallel to edge_list
    edge_features: Vec<Vec<f32>>,
    /// Optional graph-level attributes
    global_features: Vec<f32>,
}

impl Graph {
    /// Creates a graph with `num_nodes` nodes of `num_node_features`
    /// features each. The feature table starts zeroed and the adjacency
    /// lists start empty.
    #[must_use]
    pub fn new(num_nodes: usize, num_node_features: usize) -> Self {
        Self {
            num_nodes,
            num_node_features,
            node_features: Matrix::zeros(num_nodes, num_node_features),
            adjacency_list: vec![Vec::new(); num_nodes],
            edge_list: Vec::new(),
            edge_features: Vec::new(),
            global_features: Vec::new(),
        }
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of features per node.
    #[must_use]
    pub fn num_node_features(&self) -> usize {
        self.num_node_features
    }

    /// Number of logged edges (one per `add_edge` call, not per
    /// adjacency entry).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edge_list.len()
    }

    /// Replaces node `id`'s feature vector.
    ///
    /// # Errors
    ///
    /// Returns an error when `id` is out of range or `features` doesn't
    /// have exactly `num_node_features` entries.
    pub fn set_node_feature(&mut self, id: NodeId, features: &[f32]) -> Result<()> {
        if id >= self.num_nodes {
            return Err(GrafoError::node_out_of_bounds(id, self.num_nodes));
        }
        if features.len() != self.num_node_features {
            return Err(GrafoError::feature_width(
                self.num_node_features,
                features.len(),
            ));
        }
        self.node_features.set_row(id, features)
    }

    /// Adds an undirected edge between `src` and `dst`: `dst` is appended
    /// to `src`'s neighbor list, `src` to `dst`'s, and `(src, dst)` to
    /// the edge log.
    ///
    /// # Errors
    ///
    /// Returns an error when either endpoint is out of range.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) -> Result<()> {
        if src >= self.num_nodes {
            return Err(GrafoError::node_out_of_bounds(src, self.num_nodes));
        }
        if dst >= self.num_nodes {
            return Err(GrafoError::node_out_of_bounds(dst, self.num_nodes));
        }
        self.adjacency_list[src].push(dst);
        self.adjacency_list[dst].push(src);
        self.edge_list.push((src, dst));
        Ok(())
    }

    /// Returns the k-th logged `(src, dst)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error when `k` exceeds the edge log.
    pub fn edge(&self, k: usize) -> Result<(NodeId, NodeId)> {
        self.edge_list
            .get(k)
            .copied()
            .ok_or_else(|| GrafoError::edge_out_of_bounds(k, self.edge_list.len()))
    }

    /// The node-feature table, [num_nodes x num_node_features].
    #[must_use]
    pub fn node_features(&self) -> &Matrix<f32> {
        &self.node_features
    }

    /// All neighbor lists, indexed by node id.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency_list
    }

    /// Neighbor list of a single node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency_list[id]
    }

    /// Degree of a node: the length of its neighbor list.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency_list[id].len()
    }

    /// Attaches a feature row to the k-th logged edge. Unused by the
    /// core layers; carried for edge-conditioned extensions.
    ///
    /// # Errors
    ///
    /// Returns an error when `k` exceeds the edge log.
    pub fn set_edge_feature(&mut self, k: usize, features: Vec<f32>) -> Result<()> {
        if k >= self.edge_list.len() {
            return Err(GrafoError::edge_out_of_bounds(k, self.edge_list.len()));
        }
        if self.edge_features.len() < self.edge_list.len() {
            self.edge_features.resize(self.edge_list.len(), Vec::new());
        }
        self.edge_features[k] = features;
        Ok(())
    }

    /// Per-edge feature rows (empty unless set).
    #[must_use]
    pub fn edge_features(&self) -> &[Vec<f32>] {
        &self.edge_features
    }

    /// Replaces the graph-level attribute vector.
    pub fn set_global_features(&mut self, features: Vec<f32>) {
        self.global_features = features;
    }

    /// Graph-level attributes (empty unless set).
    #[must_use]
    pub fn global_features(&self) -> &[f32] {
        &self.global_features
    }
}

#[cfg(test)]
mod tests;
