use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::Vec;
use crate::types::chain_error::ChainError;

/// Value-semantics pipeline that short-circuits on the first error.
///
/// A `Chain` is either [`Success`](Chain::Success) holding the current value,
/// or [`Failed`](Chain::Failed) holding the error together with the last value
/// set before or at the point of failure. Every combinator consumes the chain
/// and returns a new one; clone a chain to branch a pipeline from an earlier
/// point.
///
/// Once failed, a chain stays failed: `then`, `map`, `filter` and `recover`
/// return it unchanged without calling their functions, and
/// [`or_else`](Chain::or_else) replaces the value but keeps the error.
///
/// # Type Parameters
///
/// * `T` - The payload type
/// * `E` - The error type, [`ChainError`] unless stated otherwise
///
/// # Examples
///
/// ```
/// use chain_rail::{Chain, ChainError};
///
/// fn add_one(x: i32) -> (i32, Option<ChainError>) {
///     (x + 1, None)
/// }
///
/// fn fail_if_three(x: i32) -> (i32, Option<ChainError>) {
///     if x == 3 {
///         return (x, Some(ChainError::new("val cannot be 3")));
///     }
///     (x, None)
/// }
///
/// fn double(x: i32) -> (i32, Option<ChainError>) {
///     (x * 2, None)
/// }
///
/// let (value, error) = Chain::wrap(2)
///     .then(Some(add_one))
///     .then(Some(fail_if_three))
///     .then(Some(double))
///     .result();
///
/// assert_eq!(value, 3);
/// assert_eq!(error.unwrap().message(), "val cannot be 3");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Chain<T, E = ChainError> {
    Success(T),
    Failed { error: E, value: T },
}

/// Plain step signature accepted by [`Chain::then`].
///
/// A step reports the next value together with an optional error. Handy for
/// spelling an absent step: `None::<Step<i32>>`.
pub type Step<T, E = ChainError> = fn(T) -> (T, Option<E>);

impl<T, E> Chain<T, E> {
    /// Wraps `value` into a successful chain.
    #[inline]
    pub fn wrap(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed chain that still carries `value`.
    #[inline]
    pub fn failed(error: E, value: T) -> Self {
        Self::Failed { error, value }
    }

    /// Sets the error slot, keeping the current value.
    ///
    /// Replaces any error already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Chain, ChainError};
    ///
    /// let chain: Chain<i32> = Chain::wrap(5).with_error(ChainError::new("seeded"));
    /// assert_eq!(chain.value(), &5);
    /// assert!(chain.is_failure());
    /// ```
    #[inline]
    pub fn with_error(self, error: E) -> Self {
        Self::Failed { error, value: self.into_value() }
    }

    /// Runs `step` on the value unless the chain already failed.
    ///
    /// An absent step (`None`) leaves the chain unchanged. The value returned
    /// by the step becomes the chain's value, and the returned error, if any,
    /// becomes its error. Panics raised by `step` are not caught; see
    /// [`recover`](Chain::recover).
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Chain, ChainError, Step};
    ///
    /// let chain: Chain<i32> = Chain::wrap(1)
    ///     .then(Some(|x: i32| (x + 1, None)))
    ///     .then(None::<Step<i32>>);
    /// assert_eq!(chain.result(), (2, None));
    ///
    /// let failed: Chain<i32> =
    ///     Chain::wrap(1).then(Some(|_| (-1, Some(ChainError::new("rejected")))));
    /// assert_eq!(failed.result(), (-1, Some(ChainError::new("rejected"))));
    /// ```
    pub fn then<F>(self, step: Option<F>) -> Self
    where
        F: FnOnce(T) -> (T, Option<E>),
    {
        let value = match self {
            Self::Success(value) => value,
            failed => {
                rail_event!(trace, op = "then", "skipped: chain already failed");
                return failed;
            },
        };

        let Some(step) = step else {
            return Self::Success(value);
        };

        let next = Self::from(step(value));
        if next.is_failure() {
            rail_event!(debug, op = "then", "step failed");
        }
        next
    }

    /// Transforms the value with an infallible function unless the chain failed.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(f(value)),
            failed => failed,
        }
    }

    /// Fails the chain with `error` when `predicate` rejects the value.
    ///
    /// A chain that already failed is returned unchanged and `predicate` is
    /// not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Chain, ChainError};
    ///
    /// let rejected: Chain<i32> = Chain::wrap(3).filter(|x| x % 2 == 0, ChainError::new("odd"));
    /// assert_eq!(rejected.value(), &3);
    /// assert_eq!(rejected.has_error().unwrap().message(), "odd");
    /// ```
    pub fn filter<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failed { error, value }
                }
            },
            failed => failed,
        }
    }

    /// Invokes exactly one of the callbacks depending on the current state.
    ///
    /// A missing callback is skipped.
    pub fn match_with<S, F>(&self, on_success: Option<S>, on_failure: Option<F>)
    where
        S: FnOnce(&T),
        F: FnOnce(&E),
    {
        match self {
            Self::Success(value) => {
                if let Some(on_success) = on_success {
                    on_success(value);
                }
            },
            Self::Failed { error, .. } => {
                if let Some(on_failure) = on_failure {
                    on_failure(error);
                }
            },
        }
    }

    /// Replaces the value of a failed chain with `fallback`.
    ///
    /// The error is retained: a value chain never returns to success.
    /// Successful chains are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{Chain, ChainError};
    ///
    /// let chain: Chain<i32> = Chain::failed(ChainError::new("boom"), 1).or_else(42);
    /// assert_eq!(chain.value(), &42);
    /// assert!(chain.is_failure());
    /// ```
    #[inline]
    pub fn or_else(self, fallback: T) -> Self {
        match self {
            Self::Failed { error, .. } => Self::Failed { error, value: fallback },
            success => success,
        }
    }

    /// Runs `producer`, converting a panic into an error.
    ///
    /// Skipped when the chain already failed or `producer` is absent. A panic
    /// becomes a [`ChainError`] reading `panic recovered: <payload>` with a
    /// default value. Otherwise the producer's value and error replace the
    /// chain's, like [`then`](Chain::then) with a producer that ignores the
    /// current value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::Chain;
    ///
    /// let chain: Chain<i32> = Chain::wrap(0).recover(Some(|| -> (i32, Option<_>) { panic!("ouch") }));
    /// assert_eq!(chain.has_error().unwrap().message(), "panic recovered: ouch");
    /// assert_eq!(chain.value(), &0);
    /// ```
    #[cfg(feature = "std")]
    pub fn recover<F>(self, producer: Option<F>) -> Self
    where
        T: Default,
        E: From<ChainError>,
        F: FnOnce() -> (T, Option<E>),
    {
        if self.is_failure() {
            rail_event!(trace, op = "recover", "skipped: chain already failed");
            return self;
        }
        let Some(producer) = producer else {
            return self;
        };

        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(producer)) {
            Ok(outcome) => Self::from(outcome),
            Err(payload) => {
                let error = ChainError::from_panic(payload);
                rail_event!(warn, op = "recover", error = %error, "converted panic into error");
                Self::Failed { error: error.into(), value: T::default() }
            },
        }
    }

    /// Returns the value, panicking if the chain failed.
    ///
    /// # Panics
    ///
    /// Panics with `called Unwrap on error: <error>` when the chain failed.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failed { error, .. } => panic!("called Unwrap on error: {error}"),
        }
    }

    /// Extracts the final value and error.
    #[inline]
    pub fn result(self) -> (T, Option<E>) {
        match self {
            Self::Success(value) => (value, None),
            Self::Failed { error, value } => (value, Some(error)),
        }
    }

    /// Converts into a `Result`, dropping the value of a failed chain.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Returns the current value, whatever the state.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) | Self::Failed { value, .. } => value,
        }
    }

    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) | Self::Failed { value, .. } => value,
        }
    }

    /// Returns the value only if the chain succeeded.
    #[inline]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the error, if any.
    #[inline]
    pub fn has_error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

impl<U, E> Chain<Chain<U, E>, E> {
    /// Collapses a nested chain.
    ///
    /// The outer error wins over the inner one; either way the result carries
    /// a default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::Chain;
    ///
    /// let nested: Chain<Chain<i32>> = Chain::wrap(Chain::wrap(7));
    /// assert_eq!(nested.flatten(), Chain::wrap(7));
    /// ```
    pub fn flatten(self) -> Chain<U, E>
    where
        U: Default,
    {
        match self {
            Self::Failed { error, .. } | Self::Success(Chain::Failed { error, .. }) => {
                Chain::Failed { error, value: U::default() }
            },
            Self::Success(Chain::Success(value)) => Chain::Success(value),
        }
    }
}

impl<T: Default, E> From<Result<T, E>> for Chain<T, E> {
    /// `Err` becomes a failed chain with a default value.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failed { error, value: T::default() },
        }
    }
}

/// A step outcome: the value, plus the error if the step failed.
impl<T, E> From<(T, Option<E>)> for Chain<T, E> {
    #[inline]
    fn from(outcome: (T, Option<E>)) -> Self {
        match outcome {
            (value, Some(error)) => Self::Failed { error, value },
            (value, None) => Self::Success(value),
        }
    }
}

impl<T, E> From<Chain<T, E>> for Result<T, E> {
    #[inline]
    fn from(chain: Chain<T, E>) -> Self {
        chain.into_result()
    }
}

/// Collects successful values; the first failure wins and carries the values
/// gathered before it. Containers after the first failure are not inspected.
impl<T, E> FromIterator<Chain<T, E>> for Chain<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Chain<T, E>>>(iter: I) -> Self {
        let mut values = Vec::new();
        for chain in iter {
            match chain {
                Chain::Success(value) => values.push(value),
                Chain::Failed { error, .. } => return Chain::Failed { error, value: values },
            }
        }
        Chain::Success(values)
    }
}
