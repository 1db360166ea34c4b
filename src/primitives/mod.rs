//! Core compute primitives.
//!
//! Row-major 2-D storage backing node-feature tables and layer weights.

mod matrix;

pub use matrix::Matrix;
