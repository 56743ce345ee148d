//! Sequence utilities over any callable
//!
//! Elements are handed to the callable by value (cloned out of the slice),
//! so a [`Lambda`](crate::Lambda) plugs in directly through
//! [`Lambda::as_fn`](crate::Lambda::as_fn) and
//! [`Lambda::as_fn2`](crate::Lambda::as_fn2).

/// Calls `f` on every element in order
pub fn scan<T, F>(mut f: F, items: &[T])
where
    T: Clone,
    F: FnMut(T),
{
    for item in items {
        f(item.clone());
    }
}

/// New vector with `f` applied to each element
pub fn map<T, U, F>(f: F, items: &[T]) -> Vec<U>
where
    T: Clone,
    F: FnMut(T) -> U,
{
    items.iter().cloned().map(f).collect()
}

/// Like [`map`], consuming the input and reusing its allocation
pub fn map_in_place<T, F>(f: F, items: Vec<T>) -> Vec<T>
where
    F: FnMut(T) -> T,
{
    items.into_iter().map(f).collect()
}

/// Left fold: `f(... f(f(seed, x0), x1) ..., xn)`
pub fn fold<T, F>(mut f: F, seed: T, items: &[T]) -> T
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let mut acc = seed;
    for item in items {
        acc = f(acc, item.clone());
    }
    acc
}

/// Applies `f` to `seed` `n` times and returns the last result
///
/// `n == 0` still applies `f` once.
pub fn nest<T, F>(mut f: F, seed: T, n: usize) -> T
where
    F: FnMut(T) -> T,
{
    let mut acc = f(seed);
    for _ in 1..n {
        acc = f(acc);
    }
    acc
}

/// `[seed, f(seed), f(f(seed)), ...]`, `n + 1` elements long
///
/// Storage grows with each step; nothing is reserved from `n` up front.
pub fn nest_list<T, F>(mut f: F, seed: T, n: usize) -> Vec<T>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    let mut out = vec![seed];
    for i in 0..n {
        let next = f(out[i].clone());
        out.push(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_visits_in_order() {
        let mut seen = Vec::new();
        scan(|x: i32| seen.push(x), &[3, 1, 2]);
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn map_both_forms_agree() {
        let items = vec![1, 2, 3];
        assert_eq!(map(|x: i32| x * x, &items), vec![1, 4, 9]);
        assert_eq!(map_in_place(|x: i32| x * x, items), vec![1, 4, 9]);
        assert_eq!(map(|x: i32| x.to_string(), &[7]), vec!["7".to_string()]);
    }

    #[test]
    fn fold_accumulates_left_to_right() {
        assert_eq!(fold(|acc: i32, x| acc + x, 0, &[1, 2, 3, 4]), 10);
        assert_eq!(fold(|acc: i32, x| acc * 10 + x, 0, &[1, 2, 3]), 123);
        assert_eq!(fold(|acc: i32, x| acc + x, 5, &[]), 5);
    }

    #[test]
    fn nest_applies_n_times() {
        assert_eq!(nest(|x: i32| x * 2, 1, 3), 8);
        assert_eq!(nest(|x: i32| x * 2, 1, 1), 2);
    }

    #[test]
    fn nest_zero_still_applies_once() {
        assert_eq!(nest(|x: i32| x + 1, 5, 0), 6);
    }

    #[test]
    fn nest_list_keeps_every_step() {
        assert_eq!(nest_list(|x: i32| x * 2, 1, 3), vec![1, 2, 4, 8]);
        assert_eq!(nest_list(|x: i32| x * 2, 1, 0), vec![1]);
    }

    #[test]
    fn nest_list_grows_with_the_steps_taken() {
        let stopped = std::panic::catch_unwind(|| {
            nest_list(
                |x: i32| {
                    if x >= 4 {
                        panic!("stop");
                    }
                    x * 2
                },
                1,
                usize::MAX,
            )
        });
        let payload = stopped.expect_err("stepping never ends on its own");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"stop"));
    }
}
