use crate::types::{Chain, Wrapper};

/// Read-only view of a container's state.
///
/// Implemented by [`Chain`] and [`Wrapper`] so code that only needs to know
/// whether a step failed, such as [`collect_errors`](crate::collect_errors),
/// works with either kind.
///
/// # Examples
///
/// ```
/// use chain_rail::traits::Outcome;
/// use chain_rail::{Chain, ChainError};
///
/// fn describe<O: Outcome<ChainError>>(outcome: &O) -> &str {
///     outcome.error().map_or("ok", ChainError::message)
/// }
///
/// let chain: Chain<i32> = Chain::wrap(1).with_error(ChainError::new("boom"));
/// assert_eq!(describe(&chain), "boom");
/// ```
pub trait Outcome<E> {
    /// Returns the error, if the container failed.
    fn error(&self) -> Option<&E>;

    #[inline]
    fn has_succeeded(&self) -> bool {
        self.error().is_none()
    }

    #[inline]
    fn has_failed(&self) -> bool {
        self.error().is_some()
    }
}

impl<T, E> Outcome<E> for Chain<T, E> {
    #[inline]
    fn error(&self) -> Option<&E> {
        self.has_error()
    }
}

impl<T, E> Outcome<E> for Wrapper<T, E> {
    #[inline]
    fn error(&self) -> Option<&E> {
        self.has_error()
    }
}
