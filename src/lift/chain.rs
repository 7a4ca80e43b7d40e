//! Lift, bind and apply for [`Chain`].
//!
//! # Examples
//!
//! ```
//! use chain_rail::lift::chain::{apply, lift, lift_m};
//! use chain_rail::Chain;
//!
//! let to_len = lift_m(Some(|s: &str| s.len()));
//! let length: Chain<usize> = to_len(lift("four"));
//! assert_eq!(length.unwrap(), 4);
//!
//! let upper: fn(&str) -> String = |s| s.to_uppercase();
//! let shout: Chain<Option<fn(&str) -> String>> = lift(Some(upper));
//! let loud: Chain<String> = apply(lift("hey"), shout);
//! assert_eq!(loud.unwrap(), "HEY");
//! ```

use crate::types::Chain;

/// Wraps a plain value into a successful chain.
#[inline]
pub fn lift<T, E>(value: T) -> Chain<T, E> {
    Chain::wrap(value)
}

/// Runs `producer` once and wraps its outcome.
///
/// The producer's value is kept whether or not it reports an error. An absent
/// producer yields a successful chain with a default value.
///
/// # Examples
///
/// ```
/// use chain_rail::lift::chain::lift_result;
/// use chain_rail::{Chain, ChainError};
///
/// let partial: Chain<Vec<u8>> =
///     lift_result(Some(|| (vec![1, 2], Some(ChainError::new("truncated")))));
/// assert_eq!(partial.result(), (vec![1, 2], Some(ChainError::new("truncated"))));
/// ```
pub fn lift_result<T, E, F>(producer: Option<F>) -> Chain<T, E>
where
    T: Default,
    F: FnOnce() -> (T, Option<E>),
{
    match producer {
        Some(producer) => Chain::from(producer()),
        None => Chain::wrap(T::default()),
    }
}

/// Lifts a pure function into a reusable chain adapter.
///
/// The adapter propagates the error of a failed input with a default `U`
/// value. When `f` is absent the adapter yields a successful chain with a
/// default `U` value.
///
/// # Examples
///
/// ```
/// use chain_rail::lift::chain::lift_m;
/// use chain_rail::{Chain, ChainError};
///
/// let double = lift_m(Some(|x: i32| x * 2));
///
/// assert_eq!(double(Chain::wrap(4)), Chain::<i32>::wrap(8));
/// let failed: Chain<i32> = double(Chain::failed(ChainError::new("bad"), 4));
/// assert_eq!(failed.result(), (0, Some(ChainError::new("bad"))));
/// ```
pub fn lift_m<T, U, E, F>(f: Option<F>) -> impl Fn(Chain<T, E>) -> Chain<U, E>
where
    U: Default,
    F: Fn(T) -> U,
{
    move |chain| match chain {
        Chain::Failed { error, .. } => Chain::Failed { error, value: U::default() },
        Chain::Success(value) => match &f {
            Some(f) => Chain::wrap(f(value)),
            None => Chain::wrap(U::default()),
        },
    }
}

/// Sequences a chain with a function that itself returns a chain.
///
/// A failed input propagates its error with a default `U` value and `f` is
/// not called. An absent `f` yields a successful chain with a default `U`
/// value rather than an error.
pub fn bind<T, U, E, F>(chain: Chain<T, E>, f: Option<F>) -> Chain<U, E>
where
    U: Default,
    F: FnOnce(T) -> Chain<U, E>,
{
    match chain {
        Chain::Failed { error, .. } => Chain::Failed { error, value: U::default() },
        Chain::Success(value) => match f {
            Some(f) => f(value),
            None => Chain::wrap(U::default()),
        },
    }
}

/// Applies the function held by `function` to the value held by `chain`.
///
/// Errors propagate with a default `U` value, checking `chain` before
/// `function`. An absent function payload yields a successful chain with a
/// default `U` value.
pub fn apply<T, U, E, F>(chain: Chain<T, E>, function: Chain<Option<F>, E>) -> Chain<U, E>
where
    U: Default,
    F: FnOnce(T) -> U,
{
    let value = match chain {
        Chain::Failed { error, .. } => return Chain::Failed { error, value: U::default() },
        Chain::Success(value) => value,
    };

    match function {
        Chain::Failed { error, .. } => Chain::Failed { error, value: U::default() },
        Chain::Success(None) => Chain::wrap(U::default()),
        Chain::Success(Some(f)) => Chain::wrap(f(value)),
    }
}

/// Collapses a nested chain; see [`Chain::flatten`].
#[inline]
pub fn flatten<U, E>(chain: Chain<Chain<U, E>, E>) -> Chain<U, E>
where
    U: Default,
{
    chain.flatten()
}
