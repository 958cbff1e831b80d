//! Operators on graph nodes that build new composite nodes
//!
//! Each binary operator between two nodes produces a [`Composite`] owning
//! the corresponding binary combinator and copies of both operand nodes.
//! The composite's output type is what the combinator returns for the
//! operands' output types, resolved statically: multiplying two
//! matrix-producing nodes yields a node producing the product-shaped matrix,
//! multiplying two scalar-producing nodes yields a scalar-producing node.
//!
//! Operands are taken by value; clone a node to keep using it after
//! combining it into a larger expression.
//!
//! There is no unary negation and no comparison operator on nodes.

use std::ops::{Add, Div, Mul, Sub};

use super::node::{Composite, Expression, Source};

// ============================================================================
// Binary combinators
//
// Stored in composites as fn pointers so the node's type stays nameable.
// ============================================================================

fn binary_add<A: Add<B>, B>(lhs: A, rhs: B) -> <A as Add<B>>::Output {
    lhs + rhs
}

fn binary_sub<A: Sub<B>, B>(lhs: A, rhs: B) -> <A as Sub<B>>::Output {
    lhs - rhs
}

fn binary_mul<A: Mul<B>, B>(lhs: A, rhs: B) -> <A as Mul<B>>::Output {
    lhs * rhs
}

fn binary_div<A: Div<B>, B>(lhs: A, rhs: B) -> <A as Div<B>>::Output {
    lhs / rhs
}

// ============================================================================
// Operator overloads
// ============================================================================

macro_rules! impl_node_op {
    ($trait:ident, $method:ident, $combine:ident) => {
        impl<T, Rhs> $trait<Rhs> for Source<T>
        where
            T: Clone + $trait<Rhs::Output>,
            Rhs: Expression,
        {
            type Output = Composite<
                fn(T, Rhs::Output) -> <T as $trait<Rhs::Output>>::Output,
                (Source<T>, Rhs),
            >;

            fn $method(self, rhs: Rhs) -> Self::Output {
                Composite::new($combine as fn(_, _) -> _, (self, rhs))
            }
        }

        impl<F, Args, Rhs> $trait<Rhs> for Composite<F, Args>
        where
            Self: Expression,
            <Self as Expression>::Output: $trait<Rhs::Output>,
            Rhs: Expression,
        {
            type Output = Composite<
                fn(
                    <Self as Expression>::Output,
                    Rhs::Output,
                )
                    -> <<Self as Expression>::Output as $trait<Rhs::Output>>::Output,
                (Self, Rhs),
            >;

            fn $method(self, rhs: Rhs) -> Self::Output {
                Composite::new($combine as fn(_, _) -> _, (self, rhs))
            }
        }
    };
}

impl_node_op!(Add, add, binary_add);
impl_node_op!(Sub, sub, binary_sub);
impl_node_op!(Mul, mul, binary_mul);
impl_node_op!(Div, div, binary_div);

#[cfg(test)]
mod tests {
    use super::super::variable::Variable;
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_scalar_nodes_produce_scalars() {
        let a = Variable::new(6.0f64);
        let b = Variable::new(3.0f64);

        let sum = a.source() + b.source();
        assert_eq!(sum.eval(), 9.0);

        let quotient = a.source() / b.source();
        assert_eq!(quotient.eval(), 2.0);
    }

    #[test]
    fn test_matrix_nodes_produce_matrices() {
        let a = Variable::new(Matrix::<f64, 2, 3>::ones());
        let b = Variable::new(Matrix::<f64, 3, 2>::ones());

        // product of a 2x3 node and a 3x2 node is a 2x2 node
        let prod = a.source() * b.source();
        let out: Matrix<f64, 2, 2> = prod.eval();
        assert_eq!(out.as_slice(), &[3.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_chained_operators() {
        let a = Variable::new(2.0f64);
        let b = Variable::new(3.0f64);
        let c = Variable::new(4.0f64);

        // (a * b) + c, built from two operator applications
        let expr = a.source() * b.source() + c.source();
        assert_eq!(expr.eval(), 10.0);

        c.set(0.5);
        assert_eq!(expr.eval(), 6.5);
    }

    #[test]
    fn test_operands_are_copied_in() {
        let a = Variable::new(5.0f64);
        let s = a.source();

        let doubled = s.clone() + s;
        assert_eq!(doubled.eval(), 10.0);
        a.set(1.0);
        assert_eq!(doubled.eval(), 2.0);
    }
}
