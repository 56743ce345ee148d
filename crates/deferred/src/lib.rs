//! Deferred - expression trees built from operator syntax
//!
//! Write an expression once with placeholders for the arguments, then call it
//! as often as needed with concrete values.
//!
//! ## Quick Start
//!
//! ```ignore
//! use deferred::{_1, _2, lambda, Expr};
//!
//! let f = lambda(_1 + _2 * 2);
//! assert_eq!(f.call((3, 4)), 11);
//! assert_eq!(deferred::call!(f, 1, 1), 3);
//!
//! // Operators std cannot overload to return a tree are methods
//! let in_range = lambda(_1.greater_eq(0).and(_1.less(10)));
//! assert!(in_range.call((7,)));
//! ```
//!
//! ## Nodes
//!
//! - [`Value`]: a captured datum, by value ([`by_val`]) or by reference
//!   ([`by_ref`])
//! - [`Slot`]: the `I`-th argument, predeclared as `_1` .. `_8` (and `__`)
//! - [`Op`]: an operator tag from [`op`] applied to child nodes
//!
//! Plain values only turn into nodes when they meet one, so `2 + 3` is still
//! native integer addition.
//!
//! ## Literals
//!
//! A literal operand gets its type when the tree is built, not from the
//! fills, so `_1 * 2` multiplies by an `i32`. Suffix literals that meet other
//! types: `lambda(_1 * 2i64)`, `lambda(_1 * 0.5f32)`.
//!
//! ## Arity
//!
//! Slot indices are const generics. Calling with too few arguments is a type
//! error; [`Lambda::call_slice`] checks runtime-length arguments against
//! [`Expr::ARITY`] and returns [`ExprError::SlotOutOfRange`].

mod expr;
pub mod functional;
mod lambda;
mod node;
pub mod op;
mod overload;

use thiserror::Error;

// ============ Primary Public API ============

pub use expr::{Children, Eval, Expr, IntoExpr, IntoExprs, Nodes, make_op};
pub use lambda::{Lambda, lambda};
pub use node::{Fill, Op, Slot, Value, by_fn, by_ref, by_val};

// ============ Placeholders ============

pub use node::{_1, _2, _3, _4, _5, _6, _7, _8, __};

// ============ Errors ============

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("slot _{index} is out of range for {len} argument(s)")]
    SlotOutOfRange { index: usize, len: usize },
}
