//! Lazy expression graph
//!
//! This module provides the computation-graph layer built on top of the
//! matrix container: [`Variable`] cells hold mutable values, [`Source`]
//! nodes watch them, and [`Composite`] nodes combine other nodes through
//! stored functions. Evaluating any node recomputes from the current cell
//! values - there is no caching, no dirty tracking, and no differentiation.
//!
//! # Example
//!
//! ```
//! use lazymat::graph::{Expression, Variable};
//! use lazymat::matrix::Matrix;
//!
//! let v1 = Variable::new(Matrix::<f64, 3, 3>::random());
//! let v2 = Variable::new(2.0f64 * &Matrix::<f64, 3, 3>::identity());
//!
//! let e = v1.source() * v2.source();
//! let before = e.eval();
//!
//! v2.borrow_mut()[(0, 0)] = 4.0;
//! let after = e.eval();
//!
//! // the first column doubled, the rest is unchanged
//! assert_eq!(after[(0, 0)], 2.0 * before[(0, 0)]);
//! assert_eq!(after[(1, 1)], before[(1, 1)]);
//! ```

mod node;
mod node_ops;
mod variable;

pub use node::{Composite, Expression, Source};
pub use variable::Variable;
