//! Node kinds: captured values, slots and operator applications

use crate::expr::{Children, Eval, Expr, IntoExprs, Nodes, Sealed, make_op};
use crate::op::{ByFn, Operator};

// ============ Value ============

/// Leaf node holding a captured datum
///
/// `Value<T>` owns its datum; `Value<&T>` aliases a caller-owned one. Either
/// way evaluation ignores the fills and returns a clone of what is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct Value<T>(T);

impl<T> Value<T> {
    pub fn new(value: T) -> Self {
        Value(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Sealed for Value<T> {}

impl<T> Expr for Value<T> {
    const ARITY: usize = 0;
}

impl<T: Clone, F: ?Sized> Eval<F> for Value<T> {
    type Output = T;

    fn eval(&self, _fills: &F) -> T {
        self.0.clone()
    }
}

/// Captures `value` by value, even where a reference would do
pub fn by_val<T>(value: T) -> Value<T> {
    Value(value)
}

/// Captures a reference to `value`
///
/// The tree observes later changes made through interior mutability:
///
/// ```ignore
/// let limit = Cell::new(10);
/// let under = lambda(_1.less(by_ref(&limit).member(Cell::get)));
/// limit.set(3);
/// assert!(!under.call((5,)));
/// ```
pub fn by_ref<T: ?Sized>(value: &T) -> Value<&T> {
    Value(value)
}

// ============ Slot ============

/// Placeholder for the `I`-th fill value (1-based)
///
/// Index 0 is reserved; `Slot::<0>::new()` does not compile.
///
/// ```compile_fail
/// const ZERO: deferred::Slot<0> = deferred::Slot::new();
/// let _ = ZERO;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot<const I: usize>(());

impl<const I: usize> Slot<I> {
    pub const fn new() -> Self {
        const { assert!(I != 0, "slot 0 is reserved") };
        Slot(())
    }

    pub const fn index(&self) -> usize {
        I
    }
}

impl<const I: usize> Default for Slot<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const I: usize> Sealed for Slot<I> {}

impl<const I: usize> Expr for Slot<I> {
    const ARITY: usize = I;
}

impl<const I: usize, F: Fill<I> + ?Sized> Eval<F> for Slot<I> {
    type Output = F::Output;

    fn eval(&self, fills: &F) -> F::Output {
        fills.fill()
    }
}

/// Fill collections that have an `I`-th element
///
/// Implemented for tuples of up to eight values, only for indices within
/// the tuple, so evaluating a slot against too few fills is a type error.
///
/// ```compile_fail
/// use deferred::{_3, lambda};
///
/// let third = lambda(_3);
/// let _ = third.call((1, 2));
/// ```
pub trait Fill<const I: usize> {
    type Output;

    fn fill(&self) -> Self::Output;
}

macro_rules! fill {
    ([$($T:ident),+] $I:literal => $idx:tt $Out:ident) => {
        impl<$($T),+> Fill<$I> for ($($T,)+)
        where
            $Out: Clone,
        {
            type Output = $Out;

            fn fill(&self) -> $Out {
                self.$idx.clone()
            }
        }
    };
}

fill!([A] 1 => 0 A);

fill!([A, B] 1 => 0 A);
fill!([A, B] 2 => 1 B);

fill!([A, B, C] 1 => 0 A);
fill!([A, B, C] 2 => 1 B);
fill!([A, B, C] 3 => 2 C);

fill!([A, B, C, D] 1 => 0 A);
fill!([A, B, C, D] 2 => 1 B);
fill!([A, B, C, D] 3 => 2 C);
fill!([A, B, C, D] 4 => 3 D);

fill!([A, B, C, D, E] 1 => 0 A);
fill!([A, B, C, D, E] 2 => 1 B);
fill!([A, B, C, D, E] 3 => 2 C);
fill!([A, B, C, D, E] 4 => 3 D);
fill!([A, B, C, D, E] 5 => 4 E);

fill!([A, B, C, D, E, G] 1 => 0 A);
fill!([A, B, C, D, E, G] 2 => 1 B);
fill!([A, B, C, D, E, G] 3 => 2 C);
fill!([A, B, C, D, E, G] 4 => 3 D);
fill!([A, B, C, D, E, G] 5 => 4 E);
fill!([A, B, C, D, E, G] 6 => 5 G);

fill!([A, B, C, D, E, G, H] 1 => 0 A);
fill!([A, B, C, D, E, G, H] 2 => 1 B);
fill!([A, B, C, D, E, G, H] 3 => 2 C);
fill!([A, B, C, D, E, G, H] 4 => 3 D);
fill!([A, B, C, D, E, G, H] 5 => 4 E);
fill!([A, B, C, D, E, G, H] 6 => 5 G);
fill!([A, B, C, D, E, G, H] 7 => 6 H);

fill!([A, B, C, D, E, G, H, J] 1 => 0 A);
fill!([A, B, C, D, E, G, H, J] 2 => 1 B);
fill!([A, B, C, D, E, G, H, J] 3 => 2 C);
fill!([A, B, C, D, E, G, H, J] 4 => 3 D);
fill!([A, B, C, D, E, G, H, J] 5 => 4 E);
fill!([A, B, C, D, E, G, H, J] 6 => 5 G);
fill!([A, B, C, D, E, G, H, J] 7 => 6 H);
fill!([A, B, C, D, E, G, H, J] 8 => 7 J);

/// Runtime-length fills
///
/// Panics when the slice is shorter than `I`. [`crate::Lambda::call_slice`]
/// is the only slice entry point on a lambda and checks the length up front.
impl<T: Clone, const I: usize> Fill<I> for [T] {
    type Output = T;

    fn fill(&self) -> T {
        self[I - 1].clone()
    }
}

// Placeholders
pub const _1: Slot<1> = Slot::new();
pub const _2: Slot<2> = Slot::new();
pub const _3: Slot<3> = Slot::new();
pub const _4: Slot<4> = Slot::new();
pub const _5: Slot<5> = Slot::new();
pub const _6: Slot<6> = Slot::new();
pub const _7: Slot<7> = Slot::new();
pub const _8: Slot<8> = Slot::new();
/// The single-argument placeholder, same as `_1`
pub const __: Slot<1> = Slot::new();

// ============ Op ============

/// Interior node: an operator tag applied to a tuple of child nodes
#[derive(Debug, Clone, Copy)]
pub struct Op<T, C> {
    tag: T,
    children: C,
}

impl<T, C> Op<T, C> {
    pub(crate) fn new(tag: T, children: C) -> Self {
        Op { tag, children }
    }

    pub fn tag(&self) -> &T {
        &self.tag
    }

    pub fn children(&self) -> &C {
        &self.children
    }
}

impl<T, C> Sealed for Op<T, C> {}

impl<T, C: Nodes> Expr for Op<T, C> {
    const ARITY: usize = C::ARITY;
}

impl<T, C, F> Eval<F> for Op<T, C>
where
    F: ?Sized,
    C: Children<F>,
    T: Operator<C::Values>,
{
    type Output = T::Output;

    fn eval(&self, fills: &F) -> T::Output {
        self.tag.apply(self.children.eval_children(fills))
    }
}

// ============ Lifted functions ============

/// Lifts `f` into an operator tag
///
/// ```ignore
/// let clamp_low = lambda(by_fn(i32::max).bind((_1, 0)));
/// assert_eq!(clamp_low.call((-4,)), 0);
/// ```
pub fn by_fn<F>(f: F) -> ByFn<F> {
    ByFn(f)
}

impl<F: Clone> ByFn<F> {
    /// Builds a node applying the function to `operands`
    pub fn bind<A: IntoExprs>(&self, operands: A) -> Op<ByFn<F>, A::Exprs> {
        make_op(self.clone(), operands)
    }
}
