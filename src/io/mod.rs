//! Graph text-file loader.
//!
//! Reads the whitespace-separated format consumed by the drivers:
//!
//! ```text
//! <num_nodes> <num_features>
//! <node_id> <f_1> <f_2> ... <f_F>     (num_nodes lines)
//! <src> <dst>                          (remaining lines)
//! ```
//!
//! In the edge section, blank lines and lines starting with `#` are
//! ignored. Parse failures carry the 1-based line number; node-id and
//! feature-width validation is delegated to the [`Graph`] entity's
//! checked operations.
//!
//! The core layers never touch the filesystem; this module is the only
//! place I/O happens in the library.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GrafoError, Result};
use crate::graph::Graph;

fn parse_err(line: usize, message: impl Into<String>) -> GrafoError {
    GrafoError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_usize(token: &str, line: usize, what: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| parse_err(line, format!("invalid {what}: {token:?}")))
}

fn parse_f32(token: &str, line: usize, what: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|_| parse_err(line, format!("invalid {what}: {token:?}")))
}

/// Parses a graph from any buffered reader.
///
/// # Errors
///
/// Returns `GrafoError::Io` on read failure and `GrafoError::Parse`
/// (with a line number) on malformed content. Out-of-range node ids and
/// wrong feature widths surface as the Graph entity's own errors.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = reader.lines().enumerate();

    // Header: <num_nodes> <num_features>
    let (_, header) = lines
        .next()
        .ok_or_else(|| parse_err(1, "missing header line"))?;
    let header = header?;
    let mut tokens = header.split_whitespace();
    let num_nodes = parse_usize(
        tokens.next().ok_or_else(|| parse_err(1, "missing node count"))?,
        1,
        "node count",
    )?;
    let num_features = parse_usize(
        tokens
            .next()
            .ok_or_else(|| parse_err(1, "missing feature count"))?,
        1,
        "feature count",
    )?;

    let mut graph = Graph::new(num_nodes, num_features);

    // Node-feature section: exactly num_nodes lines.
    let mut rows_read = 0;
    while rows_read < num_nodes {
        let (idx, line) = lines
            .next()
            .ok_or_else(|| parse_err(rows_read + 2, "unexpected end of node-feature section"))?;
        let line = line?;
        let line_no = idx + 1;

        let mut tokens = line.split_whitespace();
        let node_id = parse_usize(
            tokens.next().ok_or_else(|| parse_err(line_no, "missing node id"))?,
            line_no,
            "node id",
        )?;
        let features: Vec<f32> = tokens
            .map(|t| parse_f32(t, line_no, "feature value"))
            .collect::<Result<_>>()?;

        graph
            .set_node_feature(node_id, &features)
            .map_err(|e| parse_err(line_no, e.to_string()))?;
        rows_read += 1;
    }

    // Edge section: <src> <dst> pairs until EOF; comments and blanks skipped.
    for (idx, line) in lines {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(parse_err(
                line_no,
                format!("expected '<src> <dst>', got {} tokens", tokens.len()),
            ));
        }
        let src = parse_usize(tokens[0], line_no, "edge source")?;
        let dst = parse_usize(tokens[1], line_no, "edge destination")?;
        graph
            .add_edge(src, dst)
            .map_err(|e| parse_err(line_no, e.to_string()))?;
    }

    Ok(graph)
}

/// Reads a graph from a file on disk.
///
/// # Errors
///
/// Returns `GrafoError::Io` when the file cannot be opened and parse
/// errors as [`read_graph`] does.
pub fn read_graph_from_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}
