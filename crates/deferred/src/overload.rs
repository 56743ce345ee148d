//! Operator syntax for nodes
//!
//! The `std::ops` traits are implemented only where at least one operand is
//! a node: every node type accepts any [`IntoExpr`] right operand, and every
//! primitive scalar accepts a node right operand. Arithmetic on plain values
//! keeps using std's own impls.
//!
//! Comparison, logical, assignment-style, subscript and call operators cannot
//! return a node through std's traits; those live on [`Expr`](crate::Expr) as
//! methods.

use std::ops;

use crate::expr::IntoExpr;
use crate::node::{Op, Slot, Value};
use crate::op;

macro_rules! node_binary {
    ($bound:ident, $method:ident, $tag:ident; [$($g:tt)*] $node:ty) => {
        impl<$($g)* Rhs: IntoExpr> ops::$bound<Rhs> for $node {
            type Output = Op<op::$tag, ($node, Rhs::Node)>;

            fn $method(self, rhs: Rhs) -> Self::Output {
                Op::new(op::$tag, (self, rhs.into_expr()))
            }
        }
    };
}

macro_rules! node_unary {
    ($bound:ident, $method:ident, $tag:ident; [$($g:tt)*] $node:ty) => {
        impl<$($g)*> ops::$bound for $node {
            type Output = Op<op::$tag, ($node,)>;

            fn $method(self) -> Self::Output {
                Op::new(op::$tag, (self,))
            }
        }
    };
}

macro_rules! node_operators {
    ([$($g:tt)*] $node:ty) => {
        node_binary!(Add, add, Plus; [$($g)*] $node);
        node_binary!(Sub, sub, Subtract; [$($g)*] $node);
        node_binary!(Mul, mul, Times; [$($g)*] $node);
        node_binary!(Div, div, Divide; [$($g)*] $node);
        node_binary!(Rem, rem, Mod; [$($g)*] $node);
        node_binary!(BitXor, bitxor, BitXor; [$($g)*] $node);
        node_binary!(BitAnd, bitand, BitAnd; [$($g)*] $node);
        node_binary!(BitOr, bitor, BitOr; [$($g)*] $node);
        node_binary!(Shl, shl, Shl; [$($g)*] $node);
        node_binary!(Shr, shr, Shr; [$($g)*] $node);
        node_unary!(Neg, neg, Minus; [$($g)*] $node);
        node_unary!(Not, not, BitNot; [$($g)*] $node);
    };
}

node_operators!([T,] Value<T>);
node_operators!([const I: usize,] Slot<I>);
node_operators!([T, C,] Op<T, C>);

// Scalar on the left, node on the right.
macro_rules! scalar_binary {
    ($bound:ident, $method:ident, $tag:ident; $scalar:ty; [$($g:tt)*] $node:ty) => {
        impl<$($g)*> ops::$bound<$node> for $scalar {
            type Output = Op<op::$tag, (Value<$scalar>, $node)>;

            fn $method(self, rhs: $node) -> Self::Output {
                Op::new(op::$tag, (Value::new(self), rhs))
            }
        }
    };
}

macro_rules! scalar_node_operators {
    ($scalar:ty; [$($g:tt)*] $node:ty) => {
        scalar_binary!(Add, add, Plus; $scalar; [$($g)*] $node);
        scalar_binary!(Sub, sub, Subtract; $scalar; [$($g)*] $node);
        scalar_binary!(Mul, mul, Times; $scalar; [$($g)*] $node);
        scalar_binary!(Div, div, Divide; $scalar; [$($g)*] $node);
        scalar_binary!(Rem, rem, Mod; $scalar; [$($g)*] $node);
        scalar_binary!(BitXor, bitxor, BitXor; $scalar; [$($g)*] $node);
        scalar_binary!(BitAnd, bitand, BitAnd; $scalar; [$($g)*] $node);
        scalar_binary!(BitOr, bitor, BitOr; $scalar; [$($g)*] $node);
        scalar_binary!(Shl, shl, Shl; $scalar; [$($g)*] $node);
        scalar_binary!(Shr, shr, Shr; $scalar; [$($g)*] $node);
    };
}

macro_rules! scalar_operators {
    ($($scalar:ty),*) => {
        $(
            scalar_node_operators!($scalar; [T,] Value<T>);
            scalar_node_operators!($scalar; [const I: usize,] Slot<I>);
            scalar_node_operators!($scalar; [T, C,] Op<T, C>);
        )*
    };
}

scalar_operators!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

#[cfg(test)]
mod tests {
    use crate::expr::{Eval, Expr};
    use crate::node::{_1, _2, by_val};

    #[test]
    fn node_on_the_left() {
        assert_eq!((_1 + _2 * 2).eval(&(3, 4)), 11);
        assert_eq!((_1 - 1).eval(&(3,)), 2);
        assert_eq!((_1 % 4).eval(&(10,)), 2);
        assert_eq!((_1 << 4).eval(&(1,)), 16);
        assert_eq!((_1 & _2).eval(&(5, 3)), 1);
        assert_eq!((-_1).eval(&(5,)), -5);
        assert_eq!((!_1).eval(&(0u8,)), 255);
        assert_eq!((by_val(2.5) * _1).eval(&(2.0,)), 5.0);
    }

    #[test]
    fn scalar_on_the_left() {
        assert_eq!((10i32 - _1).eval(&(3,)), 7);
        assert_eq!((2.0f64 * _1).eval(&(1.5,)), 3.0);
        assert_eq!((1u32 << _1).eval(&(3u32,)), 8);
        assert!((true ^ _1).eval(&(false,)));
        assert_eq!((100i32 / (_1 + 1)).eval(&(4,)), 20);
    }

    #[test]
    fn composed_operators_keep_arity() {
        fn arity_of<E: Expr>(_: &E) -> usize {
            E::ARITY
        }
        assert_eq!(arity_of(&(1i32 + _2 * _1)), 2);
        assert_eq!(arity_of(&(-by_val(1i32))), 0);
    }
}
