//! Expression objects: a root node wrapped into a reusable callable

use std::any::type_name;

use crate::ExprError;
use crate::expr::{Eval, Expr};

/// A reusable callable built from an expression tree
///
/// Invocation packages the arguments into a fill collection, evaluates the
/// root against it and returns the result untouched.
#[derive(Debug, Clone, Copy)]
pub struct Lambda<E: Expr> {
    expr: E,
}

/// Wraps `expr` into a [`Lambda`]
pub fn lambda<E: Expr>(expr: E) -> Lambda<E> {
    log::trace!(
        "built lambda of arity {} over {}",
        E::ARITY,
        type_name::<E>()
    );
    Lambda { expr }
}

impl<E: Expr> Lambda<E> {
    /// Number of arguments an invocation must supply
    pub const ARITY: usize = E::ARITY;

    pub fn arity(&self) -> usize {
        E::ARITY
    }

    /// Invokes with an owned tuple of arguments
    pub fn call<F>(&self, args: F) -> E::Output
    where
        E: Eval<F>,
    {
        self.expr.eval(&args)
    }

    /// Invokes with a borrowed tuple of arguments
    ///
    /// Runtime-length slices go through [`Lambda::call_slice`] instead:
    ///
    /// ```compile_fail
    /// use deferred::{_1, _3, lambda};
    ///
    /// let f = lambda(_1 + _3);
    /// let args = [1, 2];
    /// let _ = f.eval(&args[..]);
    /// ```
    pub fn eval<F>(&self, fills: &F) -> E::Output
    where
        E: Eval<F>,
    {
        self.expr.eval(fills)
    }

    /// Checks that `len` arguments cover every slot in the tree
    pub fn check_arity(&self, len: usize) -> Result<(), ExprError> {
        if len < E::ARITY {
            return Err(ExprError::SlotOutOfRange {
                index: E::ARITY,
                len,
            });
        }
        Ok(())
    }

    /// Invokes with a runtime-length slice of arguments
    pub fn call_slice<T>(&self, args: &[T]) -> Result<E::Output, ExprError>
    where
        E: Eval<[T]>,
    {
        if let Err(err) = self.check_arity(args.len()) {
            log::debug!("rejected call on {}: {err}", type_name::<E>());
            return Err(err);
        }
        Ok(self.expr.eval(args))
    }

    /// Adapts a one-argument lambda into a closure
    pub fn as_fn<A>(&self) -> impl Fn(A) -> <E as Eval<(A,)>>::Output + '_
    where
        E: Eval<(A,)>,
    {
        move |a| self.expr.eval(&(a,))
    }

    /// Adapts a two-argument lambda into a closure
    pub fn as_fn2<A, B>(&self) -> impl Fn(A, B) -> <E as Eval<(A, B)>>::Output + '_
    where
        E: Eval<(A, B)>,
    {
        move |a, b| self.expr.eval(&(a, b))
    }

    pub fn expr(&self) -> &E {
        &self.expr
    }

    pub fn into_inner(self) -> E {
        self.expr
    }
}

/// Invokes a [`Lambda`] with positional arguments
///
/// `call!(f, a, b)` is `f.call((a, b))`.
#[macro_export]
macro_rules! call {
    ($lambda:expr $(, $arg:expr)* $(,)?) => {
        $lambda.call(($($arg,)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{_1, _2, _3};

    #[test]
    fn call_forms_agree() {
        let f = lambda(_1 * 10 + _2);
        assert_eq!(f.call((4, 2)), 42);
        assert_eq!(f.eval(&(4, 2)), 42);
        assert_eq!(crate::call!(f, 4, 2), 42);
        assert_eq!(f.call_slice(&[4, 2]), Ok(42));
    }

    #[test]
    fn slice_calls_check_arity() {
        let f = lambda(_1 + _3);
        assert_eq!(f.arity(), 3);
        assert_eq!(Lambda::<crate::Slot<2>>::ARITY, 2);
        assert_eq!(
            f.call_slice(&[1, 2]),
            Err(ExprError::SlotOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(f.call_slice(&[1, 2, 3, 4]), Ok(4));
        assert!(f.check_arity(3).is_ok());
    }

    #[test]
    fn short_slices_are_rejected_without_panicking() {
        let f = lambda(_1 + _3);
        let args = vec![1, 2];
        let result = std::panic::catch_unwind(|| f.call_slice(&args));
        assert_eq!(
            result.ok(),
            Some(Err(ExprError::SlotOutOfRange { index: 3, len: 2 }))
        );
        assert_eq!(
            f.call_slice(&args[..0]),
            Err(ExprError::SlotOutOfRange { index: 3, len: 0 })
        );
    }

    #[test]
    fn adapters_produce_closures() {
        let square = lambda(_1 * _1);
        let squared: Vec<i32> = [1, 2, 3].into_iter().map(square.as_fn()).collect();
        assert_eq!(squared, vec![1, 4, 9]);

        let sub = lambda(_1 - _2);
        let diff = sub.as_fn2();
        assert_eq!(diff(10, 4), 6);
    }
}
