//! Command-line driver: load a graph, run one GNN forward pass, print
//! node-, edge-, and graph-level results.
//!
//! ```text
//! gnn_forward <graph-file> [gcn|sage|gat]
//! ```
//!
//! The desired output width is read interactively from stdin. Exits
//! non-zero when the file cannot be opened or parsed.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use grafo::prelude::*;

const THRESHOLD: f32 = 0.5;

fn build_layer(variant: &str, in_features: usize, out_features: usize) -> Result<Box<dyn GnnLayer>> {
    match variant {
        "gcn" => Ok(Box::new(GcnLayer::new(in_features, out_features))),
        "sage" => Ok(Box::new(SageLayer::new(in_features, out_features))),
        "gat" => Ok(Box::new(GatLayer::new(in_features, out_features))),
        other => Err(format!("unknown layer variant {other:?} (expected gcn, sage, gat)").into()),
    }
}

fn prompt_output_width() -> Result<usize> {
    print!("output width: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| format!("invalid output width: {trimmed:?}").into())
}

fn run(path: &str, variant: &str) -> Result<()> {
    let graph = read_graph_from_file(path)?;

    let out_width = prompt_output_width()?;
    let layer = build_layer(variant, graph.num_node_features(), out_width)?;

    let features = layer.forward(graph.node_features(), graph.adjacency());

    println!("=== Node-Level ===");
    for i in 0..features.n_rows() {
        let row: Vec<String> = features.row(i).iter().map(|v| format!("{v:.4}")).collect();
        println!("node {i} | {}", row.join(" "));
    }

    let scores = node_scores(&features);
    let edge_scores = to_edge_scores(&scores, &graph, combiners::prod)?;
    let edge_flags = to_edge_binary(&scores, &graph, THRESHOLD, combiners::prod)?;

    println!("\n=== Edge-Level ===");
    for (k, (score, flag)) in edge_scores.iter().zip(&edge_flags).enumerate() {
        println!("edge {k} | score = {score:.4} | above threshold = {flag}");
    }

    let graph_score = to_graph_score(&scores, combiners::mean_graph);
    let graph_flag = to_graph_binary(&scores, THRESHOLD, combiners::mean_graph);

    println!("\n=== Graph-Level ===");
    println!("score = {graph_score:.4} | above threshold = {graph_flag}");

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <graph-file> [gcn|sage|gat]", args[0]);
        return ExitCode::FAILURE;
    }
    let variant = args.get(2).map_or("gcn", String::as_str);

    match run(&args[1], variant) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
