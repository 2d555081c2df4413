//! Matrix containers used by the multiplication operations.
//!
//! `RowMatrix` is the caller-facing input shape: nested rows that may be
//! jagged or missing. `Array2` is the dense row-major result, which is
//! rectangular by construction.
pub mod matrix;

pub use matrix::{Array2, RowMatrix, ShapeError};
