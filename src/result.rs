//! Parsers produce [`Result`]s, and the single-result operations (`map`, `and_then`, `map_err`, `is_ok`, ...) are
//! already provided by the standard library. The functions here cover the operations that act on *several* results at
//! once.

use alloc::vec::Vec;

/// Succeed with `f(a, b)` if both results succeed, otherwise yield the first failure in left-to-right order.
///
/// # Examples
///
/// ```
/// # use parsnip::result::combine;
/// assert_eq!(combine(Ok::<_, ()>(2), Ok(3), |a, b| a * b), Ok(6));
/// assert_eq!(combine(Err::<i32, _>("a"), Err::<i32, _>("b"), |a, b| a * b), Err("a"));
/// ```
pub fn combine<A, B, C, E>(a: Result<A, E>, b: Result<B, E>, f: impl FnOnce(A, B) -> C) -> Result<C, E> {
    Ok(f(a?, b?))
}

/// Collect every success, or yield the first failure encountered when scanning in order.
///
/// An empty input yields an empty success.
///
/// # Examples
///
/// ```
/// # use parsnip::result::all;
/// assert_eq!(all(vec![Ok::<_, &str>(1), Ok(2)]), Ok(vec![1, 2]));
/// assert_eq!(all(vec![Ok(1), Err("first"), Err("second")]), Err("first"));
/// assert_eq!(all(Vec::<Result<i32, ()>>::new()), Ok(vec![]));
/// ```
pub fn all<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    // `collect` stops pulling from the iterator at the first failure
    results.into_iter().collect()
}

/// Collect only the successes, ignoring failures.
///
/// Unlike [`all`], this cannot fail.
///
/// # Examples
///
/// ```
/// # use parsnip::result::any;
/// assert_eq!(any(vec![Err("no"), Ok(1), Err("nope"), Ok(2)]), vec![1, 2]);
/// ```
pub fn any<T, E, I>(results: I) -> Vec<T>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().filter_map(Result::ok).collect()
}

/// Yield the first success among `head` and `tail`, in order, or the last failure if none succeed.
///
/// # Examples
///
/// ```
/// # use parsnip::result::first;
/// assert_eq!(first(Err("a"), vec![Ok(1), Ok(2)]), Ok(1));
/// assert_eq!(first(Err::<i32, _>("a"), vec![Err("b"), Err("c")]), Err("c"));
/// assert_eq!(first(Ok::<_, &str>(0), vec![]), Ok(0));
/// ```
pub fn first<T, E, I>(head: Result<T, E>, tail: I) -> Result<T, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut last = head;
    for res in tail {
        if last.is_ok() {
            break;
        }
        last = res;
    }
    last
}

/// Partition results into their failure payloads and their success payloads.
///
/// Both halves preserve the relative order of the input.
///
/// # Examples
///
/// ```
/// # use parsnip::result::split;
/// let (errs, oks) = split(vec![Ok(1), Err("a"), Ok(2), Err("b")]);
///
/// assert_eq!(errs, vec!["a", "b"]);
/// assert_eq!(oks, vec![1, 2]);
/// ```
pub fn split<T, E, I>(results: I) -> (Vec<E>, Vec<T>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut errs = Vec::new();
    let mut oks = Vec::new();
    for res in results {
        match res {
            Ok(x) => oks.push(x),
            Err(e) => errs.push(e),
        }
    }
    (errs, oks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;

    fn half(x: i32) -> Result<i32, &'static str> {
        if x % 2 == 0 {
            Ok(x / 2)
        } else {
            Err("odd")
        }
    }

    fn dec(x: i32) -> Result<i32, &'static str> {
        if x > 0 {
            Ok(x - 1)
        } else {
            Err("zero")
        }
    }

    #[test]
    fn map_laws() {
        let f = |x: i32| x + 1;
        assert_eq!(Ok::<_, ()>(1).map(f), Ok(f(1)));
        assert_eq!(Err::<i32, _>("e").map(f), Err("e"));
        assert_eq!(Err::<i32, _>("e").map_err(str::len), Err(1));
        assert_eq!(Ok::<i32, &str>(5).map_err(str::len), Ok(5));
    }

    #[test]
    fn bind_is_associative() {
        for x in [-3, 0, 1, 4, 8, 9] {
            let m = Ok::<_, &str>(x);
            assert_eq!(
                m.and_then(half).and_then(dec),
                m.and_then(|y| half(y).and_then(dec)),
            );
        }
    }

    #[test]
    fn all_short_circuits() {
        let pulled = Cell::new(0);
        let results = [Ok(1), Err("a"), Ok(2), Err("b")]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));
        assert_eq!(all(results), Err("a"));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn any_never_fails() {
        assert_eq!(any(vec![Err::<i32, _>("a"), Err("b")]), Vec::<i32>::new());
        assert_eq!(any(vec![Ok::<_, ()>(3)]), vec![3]);
    }

    #[test]
    fn first_prefers_earliest_success() {
        assert_eq!(first(Ok::<_, &str>(1), vec![Ok(2)]), Ok(1));
        assert_eq!(first(Err("a"), vec![Err("b"), Ok(3), Ok(4)]), Ok(3));
        assert_eq!(first(Err::<i32, _>("a"), vec![]), Err("a"));
    }

    #[test]
    fn split_preserves_order() {
        let (errs, oks) = split(vec![Err('x'), Ok(1), Ok(2), Err('y'), Ok(3)]);
        assert_eq!(errs, vec!['x', 'y']);
        assert_eq!(oks, vec![1, 2, 3]);
    }

    #[test]
    fn combine_takes_first_failure() {
        assert_eq!(combine(Ok::<_, &str>(1), Err("b"), |a, b: i32| a + b), Err("b"));
        assert_eq!(combine(Err("a"), Ok::<i32, _>(2), |a: i32, b| a + b), Err("a"));
    }
}
