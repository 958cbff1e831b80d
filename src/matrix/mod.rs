//! Matrix types and operations
//!
//! This module provides the core `Matrix` type, a fixed-shape two-dimensional
//! array whose dimensions are const-generic parameters, together with its
//! full arithmetic surface.

mod arith;
mod core;

pub use self::core::{ColVector, Matrix, RowVector};
