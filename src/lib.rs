//! # lazymat
//!
//! **Fixed-shape matrices with compile-time-checked dimensions, plus a lazy
//! expression graph that recomputes from live values on every evaluation.**
//!
//! lazymat provides two coupled building blocks:
//!
//! - [`matrix::Matrix`]: a generic matrix whose row and column counts are
//!   const-generic parameters. Shape errors - mismatched element-wise
//!   operands, incompatible product dimensions, identity of a non-square
//!   shape, scalar decay of a non-1x1 - are compile errors, not runtime
//!   failures. Mixed element types promote through a NumPy-like table.
//! - [`graph`]: mutable [`graph::Variable`] cells, [`graph::Source`] leaves
//!   watching them, and [`graph::Composite`] nodes combining other nodes
//!   through stored functions. Every evaluation is a full recomputation
//!   from the cells' current values; nothing is cached.
//!
//! ## Quick Start
//!
//! ```
//! use lazymat::prelude::*;
//!
//! let a = Matrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 1.0]]);
//! let b = Matrix::<f64, 2, 2>::identity();
//! assert_eq!(&a * &b, a);
//! assert_eq!((&a + &b).as_slice(), &[2.0, 2.0, 2.0, 2.0]);
//!
//! // graph: rebuilt results observe mutations, lazily
//! let v = Variable::new(a);
//! let w = Variable::new(b);
//! let e = v.source() * w.source();
//! assert_eq!(e.eval().as_slice(), &[1.0, 2.0, 2.0, 1.0]);
//!
//! w.borrow_mut()[(0, 0)] = 3.0;
//! assert_eq!(e.eval().as_slice(), &[3.0, 2.0, 6.0, 1.0]);
//! ```
//!
//! ## Design Notes
//!
//! - Operations are value-producing: every arithmetic operator allocates a
//!   fresh matrix. Only the compound-assignment operators mutate in place.
//! - Graph nodes own their children (copies, not references); source leaves
//!   share the watched cell, so one mutation is visible through every copy.
//! - Single-threaded by construction: cells use `Rc<RefCell<_>>`, so graphs
//!   cannot cross threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod graph;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{promote, DType, Element, Promote};
    pub use crate::error::{Error, Result};
    pub use crate::graph::{Composite, Expression, Source, Variable};
    pub use crate::matrix::{ColVector, Matrix, RowVector};
}
