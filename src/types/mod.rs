//! Container types and their building blocks.
//!
//! - [`Chain`]: value-semantics pipeline, every combinator returns a new chain.
//! - [`Wrapper`]: reference-semantics pipeline over a nullable [`Ref`] handle,
//!   with an optional error-interception [`Hook`].
//! - [`ChainError`]: the default "an error occurred" type.
//!
//! # Examples
//!
//! ```
//! use chain_rail::{Chain, ChainError};
//!
//! let chain: Chain<i32> = Chain::wrap(10)
//!     .map(|x| x / 2)
//!     .filter(|x| *x > 10, ChainError::new("too small"));
//!
//! assert_eq!(chain.result(), (5, Some(ChainError::new("too small"))));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod chain;
pub mod chain_error;
pub mod handle;
pub mod wrapper;

pub use chain::*;
pub use chain_error::*;
pub use handle::*;
pub use wrapper::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case when a batch has a
/// single failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
