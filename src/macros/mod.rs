//! Macros for building pipelines.
//!
//! - [`macro@crate::chain`] - Wraps an initial value and threads it through a list
//!   of fallible steps, short-circuiting on the first failure.
//!
//! The crate also carries an internal event macro that forwards to `tracing`
//! when the `tracing` feature is enabled and expands to nothing otherwise.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{chain, ChainError};
//!
//! fn add_one(x: i32) -> (i32, Option<ChainError>) {
//!     (x + 1, None)
//! }
//!
//! fn double(x: i32) -> (i32, Option<ChainError>) {
//!     (x * 2, None)
//! }
//!
//! let (value, error) = chain!(1 => add_one => double).result();
//! assert_eq!(value, 4);
//! assert!(error.is_none());
//! ```

/// Wraps a value into a [`Chain`](crate::Chain) and pipes it through each step.
///
/// `chain!(init => step1 => step2)` is shorthand for
/// `Chain::wrap(init).then(Some(step1)).then(Some(step2))`. Every step must
/// have the shape `FnOnce(T) -> (T, Option<E>)`.
///
/// # Examples
///
/// ```rust
/// use chain_rail::{chain, ChainError};
///
/// let failed = chain!(2
///     => |x: i32| (x + 1, None::<ChainError>)
///     => |x: i32| if x == 3 { (x, Some(ChainError::new("val cannot be 3"))) } else { (x, None) }
///     => |x: i32| (x * 2, None));
///
/// assert_eq!(failed.value(), &3);
/// assert_eq!(failed.has_error().unwrap().message(), "val cannot be 3");
/// ```
#[macro_export]
macro_rules! chain {
    ($init:expr $(=> $step:expr)* $(,)?) => {{
        let chain = $crate::Chain::wrap($init);
        $(let chain = chain.then(::core::option::Option::Some($step));)*
        chain
    }};
}

#[cfg(feature = "tracing")]
macro_rules! rail_event {
    (trace, $($arg:tt)+) => {
        ::tracing::trace!(target: "chain_rail", $($arg)+)
    };
    (debug, $($arg:tt)+) => {
        ::tracing::debug!(target: "chain_rail", $($arg)+)
    };
    (warn, $($arg:tt)+) => {
        ::tracing::warn!(target: "chain_rail", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {};
}
