//! Traits shared by both container kinds.
//!
//! - [`Outcome`]: state queries common to [`Chain`](crate::Chain) and
//!   [`Wrapper`](crate::Wrapper), used by the collection combinators.
//! - [`ChainResultExt`]: lifts a plain `Result` into either container, the
//!   usual way collaborator calls (I/O, decoding) enter a pipeline.
//!
//! # Examples
//!
//! ```
//! use chain_rail::traits::ChainResultExt;
//! use chain_rail::ChainError;
//!
//! let parsed = "42".parse::<i32>().map_err(ChainError::from_source).into_chain();
//! assert!(parsed.is_success());
//! assert_eq!(parsed.into_value(), 42);
//! ```

pub mod outcome;
pub mod result_ext;

pub use outcome::Outcome;
pub use result_ext::ChainResultExt;
