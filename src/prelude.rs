//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use chain_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`]
//! - **Types**: [`Chain`], [`Wrapper`], [`Ref`], [`Hook`], [`ChainError`]
//! - **Traits**: [`ChainResultExt`], [`Outcome`]
//! - **Functions**: [`hook`], [`filter_chains`], [`filter_wrappers`],
//!   [`map_reduce_chains`], [`map_reduce_wrappers`], [`collect_errors`]
//!
//! # Examples
//!
//! ```
//! use chain_rail::prelude::*;
//!
//! fn load(raw: &str) -> Chain<u16> {
//!     raw.trim().parse::<u16>().map_err(ChainError::from_source).into_chain()
//! }
//!
//! let port = load(" 8080 ")
//!     .filter(|p| *p >= 1024, ChainError::new("privileged port"))
//!     .or_else(8080);
//!
//! assert_eq!(port.into_value(), 8080);
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::types::{hook, Chain, ChainError, Hook, Ref, Step, Wrapper};

// Traits
pub use crate::traits::{ChainResultExt, Outcome};

// Collection combinators
pub use crate::collections::{
    collect_errors, filter_chains, filter_wrappers, map_reduce_chains, map_reduce_wrappers,
};
