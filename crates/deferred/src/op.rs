//! Operator tags
//!
//! Each tag is a stateless unit struct that applies one native operator to
//! operands that have already been evaluated. Tags never see slots or fills:
//! `Op` evaluates its children first and hands the resulting tuple to
//! [`Operator::apply`].
//!
//! Operand constraints come straight from the native operator. Applying
//! `BitXor` to two `f64`s fails to compile because `f64: BitXor` does not
//! hold; dividing an integer by zero panics exactly like `/` does.
//!
//! ```compile_fail
//! use deferred::{_1, _2, lambda};
//!
//! let xor = lambda(_1 ^ _2);
//! let _ = xor.call((1.5f64, 2.5f64));
//! ```

use std::cell::Cell;
use std::ops;
use std::ptr;

/// Applies one operator to a tuple of evaluated operands
pub trait Operator<Args> {
    type Output;

    fn apply(&self, args: Args) -> Self::Output;
}

// ============ Macros ============

macro_rules! unary_operator {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $method:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<X: ops::$bound> Operator<(X,)> for $name {
            type Output = <X as ops::$bound>::Output;

            fn apply(&self, (x,): (X,)) -> Self::Output {
                ops::$bound::$method(x)
            }
        }
    };
}

macro_rules! binary_operator {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $method:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<X: ops::$bound<Y>, Y> Operator<(X, Y)> for $name {
            type Output = <X as ops::$bound<Y>>::Output;

            fn apply(&self, (x, y): (X, Y)) -> Self::Output {
                ops::$bound::$method(x, y)
            }
        }
    };
}

macro_rules! comparison_operator {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<X: $bound<Y>, Y> Operator<(X, Y)> for $name {
            type Output = bool;

            fn apply(&self, (x, y): (X, Y)) -> bool {
                x $op y
            }
        }
    };
}

// Compound assignment runs on the owned left operand and yields it.
macro_rules! assign_operator {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $method:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<X: ops::$bound<Y>, Y> Operator<(X, Y)> for $name {
            type Output = X;

            fn apply(&self, (mut x, y): (X, Y)) -> X {
                ops::$bound::$method(&mut x, y);
                x
            }
        }
    };
}

macro_rules! step_operator {
    ($(#[$meta:meta])* $name:ident, $method:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<X: Step> Operator<(X,)> for $name {
            type Output = X::Output;

            fn apply(&self, (x,): (X,)) -> X::Output {
                x.$method()
            }
        }
    };
}

macro_rules! cast_operator {
    ($(#[$meta:meta])* $name:ident, $method:ident -> $out:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<X: Cast> Operator<(X,)> for $name {
            type Output = $out;

            fn apply(&self, (x,): (X,)) -> $out {
                x.$method()
            }
        }
    };
}

// ============ Unary ============

unary_operator!(
    /// `-x`
    Minus, Neg, neg
);
unary_operator!(
    /// `!x` on integers (bitwise complement); `!b` on `bool`
    BitNot, Not, not
);

/// `!x` after converting the operand to `bool`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicNot;

impl<X: Into<bool>> Operator<(X,)> for LogicNot {
    type Output = bool;

    fn apply(&self, (x,): (X,)) -> bool {
        !x.into()
    }
}

/// Address of a referenced operand
///
/// Only reference operands have an address; owned temporaries are rejected
/// at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Address;

impl<'a, T: ?Sized> Operator<(&'a T,)> for Address {
    type Output = *const T;

    fn apply(&self, (x,): (&'a T,)) -> *const T {
        ptr::from_ref(x)
    }
}

/// `*x`, cloning the target out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deref;

impl<X> Operator<(X,)> for Deref
where
    X: ops::Deref,
    X::Target: Clone,
{
    type Output = X::Target;

    fn apply(&self, (x,): (X,)) -> X::Target {
        (*x).clone()
    }
}

step_operator!(
    /// `++x`
    PreInc, pre_inc
);
step_operator!(
    /// `x++`
    PostInc, post_inc
);
step_operator!(
    /// `--x`
    PreDec, pre_dec
);
step_operator!(
    /// `x--`
    PostDec, post_dec
);

cast_operator!(
    /// `x as i32`
    ToInt, to_int -> i32
);
cast_operator!(
    /// `x as f32`
    ToFloat, to_float -> f32
);
cast_operator!(
    /// `x as f64`
    ToDouble, to_double -> f64
);

// ============ Binary ============

binary_operator!(Plus, Add, add);
binary_operator!(Subtract, Sub, sub);
binary_operator!(Times, Mul, mul);
binary_operator!(Divide, Div, div);
binary_operator!(Mod, Rem, rem);
binary_operator!(BitXor, BitXor, bitxor);
binary_operator!(BitAnd, BitAnd, bitand);
binary_operator!(BitOr, BitOr, bitor);
binary_operator!(Shl, Shl, shl);
binary_operator!(Shr, Shr, shr);

comparison_operator!(Greater, PartialOrd, >);
comparison_operator!(Less, PartialOrd, <);
comparison_operator!(GreaterEq, PartialOrd, >=);
comparison_operator!(LessEq, PartialOrd, <=);
comparison_operator!(Equal, PartialEq, ==);
comparison_operator!(Unequal, PartialEq, !=);

/// `x && y`
///
/// Both operands are evaluated before the tag runs, so there is no short
/// circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicAnd;

impl<X: Into<bool>, Y: Into<bool>> Operator<(X, Y)> for LogicAnd {
    type Output = bool;

    fn apply(&self, (x, y): (X, Y)) -> bool {
        x.into() && y.into()
    }
}

/// `x || y`, with both operands already evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LogicOr;

impl<X: Into<bool>, Y: Into<bool>> Operator<(X, Y)> for LogicOr {
    type Output = bool;

    fn apply(&self, (x, y): (X, Y)) -> bool {
        x.into() || y.into()
    }
}

/// `x = y`, yielding the assigned value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Set;

impl<X, Y: Into<X>> Operator<(X, Y)> for Set {
    type Output = X;

    fn apply(&self, (_, y): (X, Y)) -> X {
        y.into()
    }
}

assign_operator!(AddTo, AddAssign, add_assign);
assign_operator!(SubFrom, SubAssign, sub_assign);
assign_operator!(TimesBy, MulAssign, mul_assign);
assign_operator!(DivideBy, DivAssign, div_assign);
assign_operator!(ModBy, RemAssign, rem_assign);
assign_operator!(XorBy, BitXorAssign, bitxor_assign);
assign_operator!(AndBy, BitAndAssign, bitand_assign);
assign_operator!(OrBy, BitOrAssign, bitor_assign);
assign_operator!(ShlBy, ShlAssign, shl_assign);
assign_operator!(ShrBy, ShrAssign, shr_assign);

/// Pointer-to-member: applies a projection to the left operand
///
/// `x.member(|p: Point| p.x)` or `cell.member(Cell::get)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Member;

impl<X, Fun, R> Operator<(X, Fun)> for Member
where
    Fun: FnOnce(X) -> R,
{
    type Output = R;

    fn apply(&self, (x, f): (X, Fun)) -> R {
        f(x)
    }
}

/// `x[y]`, looking through `Deref` and cloning the element out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Subscript;

impl<X, Y> Operator<(X, Y)> for Subscript
where
    X: ops::Deref,
    X::Target: ops::Index<Y>,
    <X::Target as ops::Index<Y>>::Output: Clone,
{
    type Output = <X::Target as ops::Index<Y>>::Output;

    fn apply(&self, (x, y): (X, Y)) -> Self::Output {
        (*x)[y].clone()
    }
}

// ============ Variadic ============

/// `f(args...)`: the first operand is the callee
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FunCall;

/// A caller-supplied function used as an operator tag (see [`crate::by_fn`])
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByFn<F>(pub(crate) F);

macro_rules! call_arity {
    ($($A:ident $a:ident),*) => {
        impl<Fun, R, $($A),*> Operator<(Fun, $($A,)*)> for FunCall
        where
            Fun: FnOnce($($A),*) -> R,
        {
            type Output = R;

            fn apply(&self, (f, $($a,)*): (Fun, $($A,)*)) -> R {
                f($($a),*)
            }
        }

        impl<Fun, R, $($A),*> Operator<($($A,)*)> for ByFn<Fun>
        where
            Fun: Fn($($A),*) -> R,
        {
            type Output = R;

            fn apply(&self, ($($a,)*): ($($A,)*)) -> R {
                (self.0)($($a),*)
            }
        }
    };
}

call_arity!();
call_arity!(A a);
call_arity!(A a, B b);
call_arity!(A a, B b, C c);
call_arity!(A a, B b, C c, D d);
call_arity!(A a, B b, C c, D d, E e);
call_arity!(A a, B b, C c, D d, E e, G g);
call_arity!(A a, B b, C c, D d, E e, G g, H h);
call_arity!(A a, B b, C c, D d, E e, G g, H h, J j);

// ============ Helper traits ============

/// Increment and decrement
///
/// Primitive numbers have value semantics: the tree holds its own copy, so
/// `post_inc` yields the operand unchanged. A `&Cell<T>` operand is updated
/// in place and yields the new (pre) or previous (post) value.
pub trait Step {
    type Output;

    fn pre_inc(self) -> Self::Output;
    fn post_inc(self) -> Self::Output;
    fn pre_dec(self) -> Self::Output;
    fn post_dec(self) -> Self::Output;
}

macro_rules! step_primitive {
    ($one:literal => $($t:ty),*) => {
        $(
            impl Step for $t {
                type Output = $t;

                fn pre_inc(self) -> $t {
                    self + $one
                }

                fn post_inc(self) -> $t {
                    self
                }

                fn pre_dec(self) -> $t {
                    self - $one
                }

                fn post_dec(self) -> $t {
                    self
                }
            }
        )*
    };
}

step_primitive!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
step_primitive!(1.0 => f32, f64);

impl<T> Step for &Cell<T>
where
    T: Step<Output = T> + Copy,
{
    type Output = T;

    fn pre_inc(self) -> T {
        let next = self.get().pre_inc();
        self.set(next);
        next
    }

    fn post_inc(self) -> T {
        let prev = self.get();
        self.set(prev.pre_inc());
        prev
    }

    fn pre_dec(self) -> T {
        let next = self.get().pre_dec();
        self.set(next);
        next
    }

    fn post_dec(self) -> T {
        let prev = self.get();
        self.set(prev.pre_dec());
        prev
    }
}

/// Numeric conversion with `as` semantics
pub trait Cast: Copy {
    fn to_int(self) -> i32;
    fn to_float(self) -> f32;
    fn to_double(self) -> f64;
}

macro_rules! cast_primitive {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl Cast for $t {
                fn to_int(self) -> i32 {
                    self as i32
                }

                fn to_float(self) -> f32 {
                    self as f32
                }

                fn to_double(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

cast_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
