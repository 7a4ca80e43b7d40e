//! Extension trait lifting `Result` values into containers.
//!
//! # Examples
//!
//! ```
//! use chain_rail::traits::ChainResultExt;
//! use chain_rail::{Chain, ChainError};
//!
//! fn read_config() -> Result<String, ChainError> {
//!     std::fs::read_to_string("missing.toml").map_err(ChainError::from_source)
//! }
//!
//! let chain: Chain<String> = read_config().into_chain();
//! assert!(chain.is_failure());
//! assert_eq!(chain.value(), "");
//! ```

use crate::types::{Chain, Hook, Ref, Wrapper};

/// Extension trait for entering a pipeline from a `Result`.
pub trait ChainResultExt<T, E> {
    /// Lifts into a [`Chain`]; `Err` carries a default value.
    fn into_chain(self) -> Chain<T, E>
    where
        T: Default;

    /// Lifts into a [`Wrapper`] over a fresh handle; `Err` carries an absent
    /// handle. The error is stored as-is, the hook only applies to later steps.
    fn into_wrapper(self, hook: Option<Hook<E>>) -> Wrapper<T, E>;
}

impl<T, E> ChainResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_chain(self) -> Chain<T, E>
    where
        T: Default,
    {
        Chain::from(self)
    }

    #[inline]
    fn into_wrapper(self, hook: Option<Hook<E>>) -> Wrapper<T, E> {
        match self {
            Ok(value) => Wrapper::new(Some(Ref::new(value)), hook),
            Err(error) => Wrapper::new(None, hook).with_error(error),
        }
    }
}
