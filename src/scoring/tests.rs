use super::*;

fn path_graph() -> Graph {
    let mut g = Graph::new(3, 1);
    g.add_edge(0, 1).expect("valid edge");
    g.add_edge(1, 2).expect("valid edge");
    g
}

#[test]
fn test_edge_scores_product_default() {
    // Node scores [2,3,4] over edges (0,1) and (1,2): [6, 12], no
    // double-counting despite symmetric adjacency entries.
    let g = path_graph();
    let edges = to_edge_scores(&[2.0, 3.0, 4.0], &g, combiners::prod).expect("lengths match");
    assert_eq!(edges, vec![6.0, 12.0]);
}

#[test]
fn test_graph_score_mean_default() {
    let score = to_graph_score(&[2.0, 3.0, 4.0], combiners::mean_graph);
    assert!((score - 3.0).abs() < 1e-6);
}

#[test]
fn test_edge_scores_other_combiners() {
    let g = path_graph();
    let scores = [2.0, 3.0, 4.0];
    assert_eq!(
        to_edge_scores(&scores, &g, combiners::sum).unwrap(),
        vec![5.0, 7.0]
    );
    assert_eq!(
        to_edge_scores(&scores, &g, combiners::max).unwrap(),
        vec![3.0, 4.0]
    );
    assert_eq!(
        to_edge_scores(&scores, &g, combiners::min).unwrap(),
        vec![2.0, 3.0]
    );
    assert_eq!(
        to_edge_scores(&scores, &g, combiners::abs_diff).unwrap(),
        vec![1.0, 1.0]
    );
}

#[test]
fn test_edge_scores_closure_combiner() {
    let g = path_graph();
    let edges = to_edge_scores(&[2.0, 3.0, 4.0], &g, |a, b| a - b).expect("lengths match");
    assert_eq!(edges, vec![-1.0, -1.0]);
}

#[test]
fn test_edge_scores_duplicate_edges_deduplicated() {
    let mut g = Graph::new(2, 1);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 1).unwrap();
    let edges = to_edge_scores(&[2.0, 5.0], &g, combiners::prod).expect("lengths match");
    assert_eq!(edges, vec![10.0]);
}

#[test]
fn test_edge_scores_length_mismatch() {
    let g = path_graph();
    assert!(to_edge_scores(&[1.0, 2.0], &g, combiners::prod).is_err());
}

#[test]
fn test_edge_binary_threshold() {
    let g = path_graph();
    let flags = to_edge_binary(&[2.0, 3.0, 4.0], &g, 10.0, combiners::prod)
        .expect("lengths match");
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn test_graph_binary_threshold() {
    assert!(to_graph_binary(&[2.0, 3.0, 4.0], 2.5, combiners::mean_graph));
    assert!(!to_graph_binary(&[2.0, 3.0, 4.0], 3.0, combiners::mean_graph));
}

#[test]
fn test_empty_score_aggregators() {
    assert_eq!(combiners::mean_graph(&[]), 0.0);
    assert_eq!(combiners::max_graph(&[]), 0.0);
    assert_eq!(combiners::min_graph(&[]), 0.0);
    assert_eq!(combiners::sum_graph(&[]), 0.0);
}

#[test]
fn test_graph_aggregators() {
    let scores = [2.0, 3.0, 4.0];
    assert_eq!(combiners::sum_graph(&scores), 9.0);
    assert_eq!(combiners::max_graph(&scores), 4.0);
    assert_eq!(combiners::min_graph(&scores), 2.0);
}

#[test]
fn test_node_scores_row_sums() {
    let features = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("2x3 table");
    assert_eq!(node_scores(&features), vec![6.0, 15.0]);
}
