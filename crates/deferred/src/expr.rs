//! Classifier, factory and evaluation protocol
//!
//! - [`Expr`] marks the three node kinds and carries the member-style
//!   operators (comparison, assignment, increment, subscript, call, ...)
//! - [`IntoExpr`] / [`IntoExprs`] wrap plain operands into [`Value`] nodes
//! - [`Eval`] threads a fill collection through a tree

use crate::node::{Op, Value};
use crate::op;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

// ============ Member-style operators ============

macro_rules! unary_members {
    ($($(#[$meta:meta])* $name:ident => $tag:ident;)*) => {
        $(
            $(#[$meta])*
            fn $name(self) -> Op<op::$tag, (Self,)> {
                Op::new(op::$tag, (self,))
            }
        )*
    };
}

macro_rules! binary_members {
    ($($(#[$meta:meta])* $name:ident => $tag:ident;)*) => {
        $(
            $(#[$meta])*
            fn $name<R: IntoExpr>(self, rhs: R) -> Op<op::$tag, (Self, R::Node)> {
                Op::new(op::$tag, (self, rhs.into_expr()))
            }
        )*
    };
}

/// A node of the expression algebra: [`Value`], [`Slot`](crate::Slot) or [`Op`]
///
/// Sealed. Anything else is an ordinary value and gets wrapped into a
/// [`Value`] when it meets a node.
pub trait Expr: Sized + Sealed {
    /// Highest slot index referenced anywhere in the tree, 0 when none
    const ARITY: usize;

    unary_members! {
        /// `!x` after conversion to `bool`
        logic_not => LogicNot;
        /// Address of a by-reference operand
        address => Address;
        /// `*x`
        deref => Deref;
        /// `++x`
        pre_inc => PreInc;
        /// `x++`
        post_inc => PostInc;
        /// `--x`
        pre_dec => PreDec;
        /// `x--`
        post_dec => PostDec;
        /// `x as i32`
        to_int => ToInt;
        /// `x as f32`
        to_float => ToFloat;
        /// `x as f64`
        to_double => ToDouble;
    }

    binary_members! {
        /// `x > y`
        greater => Greater;
        /// `x < y`
        less => Less;
        /// `x >= y`
        greater_eq => GreaterEq;
        /// `x <= y`
        less_eq => LessEq;
        /// `x == y`
        equal => Equal;
        /// `x != y`
        unequal => Unequal;
        /// `x && y`
        and => LogicAnd;
        /// `x || y`
        or => LogicOr;
        /// `x = y`
        set => Set;
        /// `x += y`
        add_to => AddTo;
        /// `x -= y`
        sub_from => SubFrom;
        /// `x *= y`
        times_by => TimesBy;
        /// `x /= y`
        divide_by => DivideBy;
        /// `x %= y`
        mod_by => ModBy;
        /// `x ^= y`
        xor_by => XorBy;
        /// `x &= y`
        and_by => AndBy;
        /// `x |= y`
        or_by => OrBy;
        /// `x <<= y`
        shl_by => ShlBy;
        /// `x >>= y`
        shr_by => ShrBy;
        /// `x[y]`
        at => Subscript;
    }

    /// Applies `projection` to this node's value (pointer-to-member)
    fn member<P>(self, projection: P) -> Op<op::Member, (Self, Value<P>)> {
        Op::new(op::Member, (self, Value::new(projection)))
    }

    /// Calls this node's value with `args`
    ///
    /// ```ignore
    /// let apply = lambda(_1.call((_2, 10)));
    /// assert_eq!(apply.call((i32::max, 3)), 10);
    /// ```
    fn call<A: IntoExprs>(self, args: A) -> Op<op::FunCall, A::WithHead<Self>> {
        Op::new(op::FunCall, args.with_head(self))
    }
}

// ============ Evaluation ============

/// Evaluates a node against a fill collection
///
/// `F` is a tuple `(A, B, ...)` of fill values, or a slice `[T]` for
/// runtime-length fills. Slices are not length-checked here; a slot past the
/// end panics.
pub trait Eval<F: ?Sized>: Expr {
    type Output;

    fn eval(&self, fills: &F) -> Self::Output;
}

/// A tuple of nodes, the children of an [`Op`]
pub trait Nodes {
    const ARITY: usize;
}

/// Evaluates every child of an [`Op`] against the same fills, left to right
pub trait Children<F: ?Sized>: Nodes {
    type Values;

    fn eval_children(&self, fills: &F) -> Self::Values;
}

const fn max_arity(arities: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < arities.len() {
        if arities[i] > max {
            max = arities[i];
        }
        i += 1;
    }
    max
}

macro_rules! children_arity {
    ($($A:ident $a:ident),*) => {
        impl<$($A: Expr),*> Nodes for ($($A,)*) {
            const ARITY: usize = max_arity(&[$($A::ARITY),*]);
        }

        impl<Fs: ?Sized, $($A: Eval<Fs>),*> Children<Fs> for ($($A,)*) {
            type Values = ($($A::Output,)*);

            #[allow(unused_variables, clippy::unused_unit)]
            fn eval_children(&self, fills: &Fs) -> Self::Values {
                let ($($a,)*) = self;
                ($($a.eval(fills),)*)
            }
        }
    };
}

children_arity!();
children_arity!(A a);
children_arity!(A a, B b);
children_arity!(A a, B b, C c);
children_arity!(A a, B b, C c, D d);
children_arity!(A a, B b, C c, D d, E e);
children_arity!(A a, B b, C c, D d, E e, G g);
children_arity!(A a, B b, C c, D d, E e, G g, H h);
children_arity!(A a, B b, C c, D d, E e, G g, H h, J j);
children_arity!(A a, B b, C c, D d, E e, G g, H h, J j, K k);

// ============ Factory ============

/// Converts an operand into a node
///
/// Nodes pass through unchanged. Scalars, `bool`, `char`, `&str`, `String`,
/// `Vec<T>`, `[T; N]` and `Option<T>` are captured by value; references to
/// scalars and `&String` / `&[T]` are captured by reference. Anything else
/// goes through [`crate::by_val`] or [`crate::by_ref`] explicitly.
///
/// A literal operand picks its type when the tree is built, before the fills
/// are known, so an unsuffixed `2` is an `i32` and `2.0` an `f64`. Suffix
/// literals that meet other types:
///
/// ```ignore
/// let f = lambda(_1 + _2 * 2i64);
/// assert_eq!(f.call((3i64, 4i64)), 11);
/// ```
pub trait IntoExpr {
    type Node: Expr;

    fn into_expr(self) -> Self::Node;
}

impl<N: Expr> IntoExpr for N {
    type Node = N;

    fn into_expr(self) -> N {
        self
    }
}

macro_rules! capture_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoExpr for $t {
                type Node = Value<$t>;

                fn into_expr(self) -> Value<$t> {
                    Value::new(self)
                }
            }

            impl<'a> IntoExpr for &'a $t {
                type Node = Value<&'a $t>;

                fn into_expr(self) -> Value<&'a $t> {
                    Value::new(self)
                }
            }
        )*
    };
}

capture_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String
);

impl<'a> IntoExpr for &'a str {
    type Node = Value<&'a str>;

    fn into_expr(self) -> Value<&'a str> {
        Value::new(self)
    }
}

impl<'a, T> IntoExpr for &'a [T] {
    type Node = Value<&'a [T]>;

    fn into_expr(self) -> Value<&'a [T]> {
        Value::new(self)
    }
}

impl<T> IntoExpr for Vec<T> {
    type Node = Value<Vec<T>>;

    fn into_expr(self) -> Value<Vec<T>> {
        Value::new(self)
    }
}

impl<T, const N: usize> IntoExpr for [T; N] {
    type Node = Value<[T; N]>;

    fn into_expr(self) -> Value<[T; N]> {
        Value::new(self)
    }
}

impl<T> IntoExpr for Option<T> {
    type Node = Value<Option<T>>;

    fn into_expr(self) -> Value<Option<T>> {
        Value::new(self)
    }
}

/// A tuple of operands, each converted with [`IntoExpr`]
pub trait IntoExprs {
    type Exprs: Nodes;
    /// The converted operands behind a leading node (the callee of a call)
    type WithHead<Head: Expr>: Nodes;

    fn into_exprs(self) -> Self::Exprs;

    fn with_head<Head: Expr>(self, head: Head) -> Self::WithHead<Head>;
}

macro_rules! operands_arity {
    ($($A:ident $a:ident),*) => {
        impl<$($A: IntoExpr),*> IntoExprs for ($($A,)*) {
            type Exprs = ($($A::Node,)*);
            type WithHead<Head: Expr> = (Head, $($A::Node,)*);

            #[allow(clippy::unused_unit)]
            fn into_exprs(self) -> Self::Exprs {
                let ($($a,)*) = self;
                ($($a.into_expr(),)*)
            }

            fn with_head<Head: Expr>(self, head: Head) -> Self::WithHead<Head> {
                let ($($a,)*) = self;
                (head, $($a.into_expr(),)*)
            }
        }
    };
}

operands_arity!();
operands_arity!(A a);
operands_arity!(A a, B b);
operands_arity!(A a, B b, C c);
operands_arity!(A a, B b, C c, D d);
operands_arity!(A a, B b, C c, D d, E e);
operands_arity!(A a, B b, C c, D d, E e, G g);
operands_arity!(A a, B b, C c, D d, E e, G g, H h);
operands_arity!(A a, B b, C c, D d, E e, G g, H h, J j);

/// Builds an operator node from a tag and a tuple of operands
///
/// Operands that are not nodes yet are captured by value.
pub fn make_op<T, A: IntoExprs>(tag: T, operands: A) -> Op<T, A::Exprs> {
    Op::new(tag, operands.into_exprs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{_1, _2, _3, Slot};

    #[test]
    fn arity_is_highest_slot() {
        assert_eq!(<Slot<3> as Expr>::ARITY, 3);
        assert_eq!(<Value<i32> as Expr>::ARITY, 0);

        fn arity_of<E: Expr>(_: &E) -> usize {
            E::ARITY
        }
        assert_eq!(arity_of(&_1.add_to(_3).less(_2)), 3);
        assert_eq!(arity_of(&make_op(op::Plus, (1, 2))), 0);
    }

    #[test]
    fn factory_wraps_plain_operands() {
        let node = make_op(op::Plus, (_2, 40));
        assert_eq!(node.eval(&(0, 2)), 42);

        let greeting = make_op(op::Plus, (String::from("hello "), _1));
        assert_eq!(greeting.eval(&("world",)), "hello world");
    }

    #[test]
    fn factory_captures_references_and_containers() {
        let offset = 10i32;
        assert_eq!(make_op(op::Plus, (_1, &offset)).eval(&(1,)), 11);
        assert!(make_op(op::Less, (_1, &offset)).eval(&(&3,)));

        let name = String::from("ada");
        assert!(_1.equal(&name).eval(&(&String::from("ada"),)));

        let table = [10, 20, 30];
        assert_eq!(make_op(op::Subscript, (&table[..], _1)).eval(&(2usize,)), 30);

        assert!(_1.equal(vec![1, 2]).eval(&(vec![1, 2],)));
        assert_eq!(make_op(op::Subscript, (vec![10, 20], _1)).eval(&(1usize,)), 20);
        assert!(_1.equal([1, 2, 3]).eval(&([1, 2, 3],)));
        assert!(_1.unequal(Some(3)).eval(&(None,)));
        assert!(_1.equal(Some('x')).eval(&(Some('x'),)));
    }

    #[test]
    fn member_operators_build_nodes() {
        assert!(_1.greater(2).eval(&(3,)));
        assert!(_1.equal(_2).eval(&('a', 'a')));
        assert!(_1.and(_2.logic_not()).eval(&(true, false)));
        assert_eq!(_1.add_to(5).eval(&(1,)), 6);
        assert_eq!(_1.at(1usize).eval(&(vec![1, 2, 3],)), 2);
        assert_eq!(_1.member(|p: (i32, i32)| p.0).eval(&((7, 8),)), 7);
    }

    #[test]
    fn children_evaluate_left_to_right() {
        use std::cell::RefCell;

        let log = RefCell::new(Vec::new());
        let record = |tag: char| {
            log.borrow_mut().push(tag);
            tag
        };
        let node = make_op(
            op::FunCall,
            (
                Value::new(|a: char, b: char, c: char| [a, b, c]),
                Value::new(&record).call(('a',)),
                Value::new(&record).call(('b',)),
                Value::new(&record).call(('c',)),
            ),
        );
        assert_eq!(node.eval(&()), ['a', 'b', 'c']);
        assert_eq!(*log.borrow(), vec!['a', 'b', 'c']);
    }
}
