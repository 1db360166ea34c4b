use super::*;

#[test]
fn test_new_graph_zeroed() {
    let g = Graph::new(4, 3);
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_node_features(), 3);
    assert_eq!(g.node_features().shape(), (4, 3));
    assert!(g.node_features().as_slice().iter().all(|&x| x == 0.0));
    assert_eq!(g.adjacency().len(), 4);
    assert_eq!(g.num_edges(), 0);
}

#[test]
fn test_set_node_feature() {
    let mut g = Graph::new(2, 3);
    g.set_node_feature(1, &[1.0, 2.0, 3.0]).expect("valid row");
    assert_eq!(g.node_features().row(1), &[1.0, 2.0, 3.0]);
    assert_eq!(g.node_features().row(0), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_set_node_feature_width_mismatch() {
    // A mismatched row is rejected outright and leaves the stored
    // features untouched.
    let mut g = Graph::new(2, 3);
    let err = g.set_node_feature(0, &[1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("dimension mismatch"));
    assert_eq!(g.node_features().row(0), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_set_node_feature_bad_id() {
    let mut g = Graph::new(2, 3);
    assert!(g.set_node_feature(2, &[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn test_add_edge_symmetric() {
    let mut g = Graph::new(3, 1);
    g.add_edge(0, 1).expect("valid endpoints");
    assert_eq!(g.neighbors(0), &[1]);
    assert_eq!(g.neighbors(1), &[0]);
    assert_eq!(g.neighbors(2), &[] as &[usize]);
}

#[test]
fn test_add_edge_bad_endpoint() {
    let mut g = Graph::new(3, 1);
    assert!(g.add_edge(0, 3).is_err());
    assert!(g.add_edge(5, 0).is_err());
    // A failed insert must leave no partial state behind.
    assert_eq!(g.num_edges(), 0);
    assert!(g.adjacency().iter().all(Vec::is_empty));
}

#[test]
fn test_edge_log_invariant() {
    // k add_edge calls => k log entries and 2k adjacency entries.
    let mut g = Graph::new(4, 1);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3).unwrap();

    assert_eq!(g.num_edges(), 3);
    let total_adj: usize = g.adjacency().iter().map(Vec::len).sum();
    assert_eq!(total_adj, 6);
}

#[test]
fn test_edge_lookup() {
    let mut g = Graph::new(3, 1);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    assert_eq!(g.edge(0).unwrap(), (0, 1));
    assert_eq!(g.edge(1).unwrap(), (1, 2));
    assert!(g.edge(2).is_err());
}

#[test]
fn test_degree() {
    let mut g = Graph::new(3, 1);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    assert_eq!(g.degree(0), 1);
    assert_eq!(g.degree(1), 2);
    assert_eq!(g.degree(2), 1);
}

#[test]
fn test_self_loop_counts_twice() {
    let mut g = Graph::new(2, 1);
    g.add_edge(0, 0).unwrap();
    assert_eq!(g.neighbors(0), &[0, 0]);
    assert_eq!(g.num_edges(), 1);
}

#[test]
fn test_edge_features() {
    let mut g = Graph::new(3, 1);
    g.add_edge(0, 1).unwrap();
    g.set_edge_feature(0, vec![0.5, 0.5]).expect("edge exists");
    assert_eq!(g.edge_features()[0], vec![0.5, 0.5]);
    assert!(g.set_edge_feature(1, vec![1.0]).is_err());
}

#[test]
fn test_global_features() {
    let mut g = Graph::new(1, 1);
    assert!(g.global_features().is_empty());
    g.set_global_features(vec![3.0, 1.0]);
    assert_eq!(g.global_features(), &[3.0, 1.0]);
}
