//! Bulk combinators over sequences of containers.
//!
//! Every combinator here skips failed containers, and for
//! [`Wrapper`]s also those with an absent handle:
//!
//! - [`filter_chains`] / [`filter_wrappers`] keep the survivors accepted by a
//!   predicate, in order.
//! - [`map_reduce_chains`] / [`map_reduce_wrappers`] map every survivor and
//!   fold the results left to right.
//! - [`collect_errors`] gathers the errors of the failed ones.
//!
//! # Map-reduce seeding
//!
//! The fold is seeded with the first mapped survivor, not with `zero`.
//! `zero` is only returned when the map or reduce function is absent. When
//! nothing survives, the result is `R::default()`.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{map_reduce_chains, Chain, ChainError};
//!
//! let chains: Vec<Chain<i32>> = vec![
//!     Chain::wrap(1),
//!     Chain::wrap(2),
//!     Chain::wrap(3),
//!     Chain::failed(ChainError::new("skip me"), 4),
//! ];
//!
//! let sum = map_reduce_chains(&chains, Some(|v: &i32| *v), Some(|a, b| a + b), -1);
//! assert_eq!(sum, 6);
//! ```

use crate::traits::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::{Chain, ErrorVec, Ref, Wrapper};

/// Keeps the successful chains whose value satisfies `predicate`.
///
/// Without a predicate every chain is returned unchanged, failed ones
/// included.
///
/// # Examples
///
/// ```
/// use chain_rail::{filter_chains, Chain, ChainError};
///
/// let chains: Vec<Chain<i32>> =
///     vec![Chain::wrap(1), Chain::wrap(2), Chain::failed(ChainError::new("odd"), 4)];
///
/// let even = filter_chains(chains, Some(|v: &i32| v % 2 == 0));
/// assert_eq!(even, vec![Chain::wrap(2)]);
/// ```
pub fn filter_chains<T, E, I, P>(chains: I, predicate: Option<P>) -> Vec<Chain<T, E>>
where
    I: IntoIterator<Item = Chain<T, E>>,
    P: FnMut(&T) -> bool,
{
    let Some(mut predicate) = predicate else {
        return chains.into_iter().collect();
    };

    chains
        .into_iter()
        .filter(|chain| chain.as_success().is_some_and(&mut predicate))
        .collect()
}

/// Keeps the successful wrappers with a present handle whose value satisfies
/// `predicate`.
///
/// Without a predicate every wrapper is returned unchanged.
///
/// # Panics
///
/// Panics if a referenced value is mutably borrowed while the predicate runs.
pub fn filter_wrappers<T, E, I, P>(wrappers: I, predicate: Option<P>) -> Vec<Wrapper<T, E>>
where
    I: IntoIterator<Item = Wrapper<T, E>>,
    P: FnMut(&T) -> bool,
{
    let Some(mut predicate) = predicate else {
        return wrappers.into_iter().collect();
    };

    wrappers
        .into_iter()
        .filter(|wrapper| {
            surviving_handle(wrapper).is_some_and(|handle| handle.with(&mut predicate))
        })
        .collect()
}

/// Maps every successful chain with `map_fn` and folds the results with
/// `reduce_fn`.
///
/// Returns `zero` if either function is absent and `R::default()` if no
/// chain succeeded. See the [module docs](self) for the seeding rule.
pub fn map_reduce_chains<'a, T, E, I, R, M, F>(
    chains: I,
    map_fn: Option<M>,
    reduce_fn: Option<F>,
    zero: R,
) -> R
where
    T: 'a,
    E: 'a,
    I: IntoIterator<Item = &'a Chain<T, E>>,
    R: Default,
    M: FnMut(&T) -> R,
    F: FnMut(R, R) -> R,
{
    let (Some(map_fn), Some(reduce_fn)) = (map_fn, reduce_fn) else {
        return zero;
    };

    chains
        .into_iter()
        .filter_map(Chain::as_success)
        .map(map_fn)
        .reduce(reduce_fn)
        .unwrap_or_default()
}

/// Maps every successful wrapper with a present handle and folds the results.
///
/// Same contract as [`map_reduce_chains`].
///
/// # Examples
///
/// ```
/// use chain_rail::{map_reduce_wrappers, ChainError, Wrapper};
///
/// let wrappers: Vec<Wrapper<i32>> = vec![
///     Wrapper::from_value(5),
///     Wrapper::new(None, None),
///     Wrapper::from_value(7).with_error(ChainError::new("skip")),
/// ];
///
/// let total = map_reduce_wrappers(&wrappers, Some(|v: &i32| *v), Some(|a, b| a + b), 0);
/// assert_eq!(total, 5);
/// ```
pub fn map_reduce_wrappers<'a, T, E, I, R, M, F>(
    wrappers: I,
    map_fn: Option<M>,
    reduce_fn: Option<F>,
    zero: R,
) -> R
where
    T: 'a,
    E: 'a,
    I: IntoIterator<Item = &'a Wrapper<T, E>>,
    R: Default,
    M: FnMut(&T) -> R,
    F: FnMut(R, R) -> R,
{
    let (Some(mut map_fn), Some(reduce_fn)) = (map_fn, reduce_fn) else {
        return zero;
    };

    wrappers
        .into_iter()
        .filter_map(surviving_handle)
        .map(|handle| handle.with(&mut map_fn))
        .reduce(reduce_fn)
        .unwrap_or_default()
}

/// Clones the error of every failed container, in order.
///
/// # Examples
///
/// ```
/// use chain_rail::{collect_errors, Chain, ChainError};
///
/// let chains: Vec<Chain<i32>> = vec![
///     Chain::wrap(1),
///     Chain::failed(ChainError::new("first"), 2),
///     Chain::failed(ChainError::new("second"), 3),
/// ];
///
/// let errors = collect_errors(&chains);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].message(), "first");
/// ```
pub fn collect_errors<'a, C, E, I>(items: I) -> ErrorVec<E>
where
    C: Outcome<E> + 'a,
    E: Clone + 'a,
    I: IntoIterator<Item = &'a C>,
{
    items
        .into_iter()
        .filter_map(|item| item.error().cloned())
        .collect()
}

fn surviving_handle<T, E>(wrapper: &Wrapper<T, E>) -> Option<&Ref<T>> {
    if wrapper.is_failure() {
        return None;
    }
    wrapper.handle()
}
