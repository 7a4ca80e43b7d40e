//! Lifting, monadic and applicative helpers.
//!
//! The helpers come in two flavours with identical names, one per container
//! kind:
//!
//! - [`chain`]: `lift`, `lift_result`, `lift_m`, `bind`, `apply`, `flatten`
//!   for [`Chain`](crate::Chain).
//! - [`wrapper`]: `lift`, `lift_m`, `bind`, `apply`, `flat_map_u`, `flatten`
//!   for [`Wrapper`](crate::Wrapper).
//!
//! An absent function never fails a container: helpers that take one as an
//! `Option` produce a successful container with a default payload instead.
//!
//! # Examples
//!
//! ```
//! use chain_rail::lift::chain::{bind, lift};
//! use chain_rail::{Chain, ChainError};
//!
//! fn parse(text: &'static str) -> Chain<i32> {
//!     text.parse::<i32>()
//!         .map_err(ChainError::from_source)
//!         .into()
//! }
//!
//! let parsed = bind(lift("21"), Some(parse)).map(|x| x * 2);
//! assert_eq!(parsed.unwrap(), 42);
//! ```

pub mod chain;
pub mod wrapper;
