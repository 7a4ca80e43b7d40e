//! Short-circuiting computation pipelines.
//!
//! A container carries either a value or a terminal error. Steps composed over
//! it run only while no error has occurred; after the first failure every
//! later step is skipped and the error reaches the end of the pipeline
//! unchanged.
//!
//! A step reports its next value together with an optional error, as a
//! `(T, Option<E>)` pair. Fallible `Result` code enters a pipeline through
//! [`ChainResultExt`].
//!
//! Two container kinds are provided:
//!
//! - [`Chain`] has value semantics. Every combinator returns a new chain.
//! - [`Wrapper`] has reference semantics. It holds a nullable shared handle
//!   ([`Ref`]) that [`Wrapper::map`] mutates in place, plus an optional
//!   [`Hook`] that may rewrite or suppress step errors.
//!
//! Free functions in [`collections`] and [`lift`] work over sequences of
//! containers and provide lift/bind/apply sequencing.
//!
//! # Examples
//!
//! ## Sequencing fallible steps
//!
//! ```
//! use chain_rail::{Chain, ChainError};
//!
//! fn add_one(x: i32) -> (i32, Option<ChainError>) {
//!     (x + 1, None)
//! }
//!
//! fn double(x: i32) -> (i32, Option<ChainError>) {
//!     (x * 2, None)
//! }
//!
//! let chain: Chain<i32> = Chain::wrap(1).then(Some(add_one)).then(Some(double));
//! assert_eq!(chain.result(), (4, None));
//! ```
//!
//! ## Intercepting errors
//!
//! ```
//! use chain_rail::{hook, ChainError, Ref, Wrapper};
//!
//! let rename = hook(|e: ChainError| Some(ChainError::new(format!("step: {e}"))));
//!
//! let (handle, error) = Wrapper::new(Some(Ref::new(3)), Some(rename))
//!     .then(Some(|_| (None, Some(ChainError::new("val cannot be 3")))))
//!     .result();
//!
//! assert_eq!(handle.unwrap().get(), 3);
//! assert_eq!(error.unwrap().message(), "step: val cannot be 3");
//! ```
//!
//! ## Recovering from panics
//!
//! ```
//! use chain_rail::Chain;
//!
//! let chain: Chain<i32> = Chain::wrap(0).recover(Some(|| -> (i32, Option<_>) { panic!("ouch") }));
//! assert_eq!(chain.has_error().unwrap().message(), "panic recovered: ouch");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Pipeline macros and the internal tracing shim
#[macro_use]
pub mod macros;

/// Filtering and map-reduce over sequences of containers
pub mod collections;
/// Lift, bind and apply helpers per container kind
pub mod lift;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits shared by both container kinds
pub mod traits;
/// Container types, handles and the default error
pub mod types;

pub use collections::*;
pub use traits::*;
pub use types::{
    hook, Chain, ChainError, ErrorVec, HandleStep, Hook, Ref, Step, Wrapper,
    PANIC_RECOVERED_PREFIX,
};
