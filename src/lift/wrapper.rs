//! Lift, bind and apply for [`Wrapper`].
//!
//! Every helper that derives a new wrapper from an existing one keeps the
//! source wrapper's hook. Failed inputs propagate their error with an absent
//! handle.
//!
//! # Examples
//!
//! ```
//! use chain_rail::lift::wrapper::{bind, lift};
//! use chain_rail::{Ref, Wrapper};
//!
//! let name = lift(Some(Ref::new("ada")), None);
//! let greeting: Wrapper<String> = bind(name, Some(|handle: Option<Ref<&str>>| {
//!     let name = handle.map(|h| h.get()).unwrap_or("nobody");
//!     Wrapper::from_value(format!("hello {name}"))
//! }));
//!
//! assert_eq!(greeting.get().as_deref(), Some("hello ada"));
//! ```

use crate::types::{Chain, Hook, Ref, Wrapper};

/// Wraps a handle and a hook into a successful wrapper.
#[inline]
pub fn lift<T, E>(handle: Option<Ref<T>>, hook: Option<Hook<E>>) -> Wrapper<T, E> {
    Wrapper::new(handle, hook)
}

/// Lifts a handle function into a reusable wrapper adapter.
///
/// When `f` is absent the adapter yields a successful wrapper over a fresh
/// default-valued handle.
pub fn lift_m<T, U, E, F>(f: Option<F>) -> impl Fn(Wrapper<T, E>) -> Wrapper<U, E>
where
    U: Default,
    F: Fn(Option<Ref<T>>) -> Option<Ref<U>>,
{
    move |wrapper| {
        let (state, hook) = wrapper.into_parts();
        let state = match state {
            Chain::Failed { error, .. } => Chain::Failed { error, value: None },
            Chain::Success(handle) => match &f {
                Some(f) => Chain::Success(f(handle)),
                None => Chain::Success(Some(Ref::default())),
            },
        };
        Wrapper::from_parts(state, hook)
    }
}

/// Sequences a wrapper with a function returning a wrapper of another type.
///
/// An absent `f` yields a successful wrapper with an absent handle.
pub fn bind<T, U, E, F>(wrapper: Wrapper<T, E>, f: Option<F>) -> Wrapper<U, E>
where
    F: FnOnce(Option<Ref<T>>) -> Wrapper<U, E>,
{
    let (state, hook) = wrapper.into_parts();
    match state {
        Chain::Failed { error, .. } => Wrapper::from_parts(Chain::Failed { error, value: None }, hook),
        Chain::Success(handle) => match f {
            Some(f) => f(handle),
            None => Wrapper::new(None, hook),
        },
    }
}

/// Like [`bind`], but an absent `f` yields a fresh default-valued handle.
pub fn flat_map_u<T, U, E, F>(wrapper: Wrapper<T, E>, f: Option<F>) -> Wrapper<U, E>
where
    U: Default,
    F: FnOnce(Option<Ref<T>>) -> Wrapper<U, E>,
{
    let (state, hook) = wrapper.into_parts();
    match state {
        Chain::Failed { error, .. } => Wrapper::from_parts(Chain::Failed { error, value: None }, hook),
        Chain::Success(handle) => match f {
            Some(f) => f(handle),
            None => Wrapper::new(Some(Ref::default()), hook),
        },
    }
}

/// Applies the step held by `function` to the handle held by `wrapper`.
///
/// Errors propagate checking `wrapper` before `function`. An absent step
/// handle yields a successful wrapper with an absent handle. Otherwise the
/// handle and error returned by the step become the new state. The result
/// keeps `wrapper`'s hook, which is not consulted for the step's error.
///
/// # Examples
///
/// ```
/// use chain_rail::lift::wrapper::apply;
/// use chain_rail::{ChainError, Ref, Wrapper};
///
/// type Halve = fn(Option<Ref<i32>>) -> (Option<Ref<i32>>, Option<ChainError>);
///
/// let halve: Halve = |handle| match handle {
///     Some(h) if h.get() % 2 == 0 => (Some(Ref::new(h.get() / 2)), None),
///     other => (other, Some(ChainError::new("not even"))),
/// };
///
/// let function = Wrapper::from_value(halve);
/// let halved = apply(Wrapper::from_value(10), function);
/// assert_eq!(halved.get(), Some(5));
/// ```
pub fn apply<T, U, E, F>(wrapper: Wrapper<T, E>, function: Wrapper<F, E>) -> Wrapper<U, E>
where
    F: Fn(Option<Ref<T>>) -> (Option<Ref<U>>, Option<E>),
{
    let (state, hook) = wrapper.into_parts();
    let handle = match state {
        Chain::Failed { error, .. } => {
            return Wrapper::from_parts(Chain::Failed { error, value: None }, hook);
        },
        Chain::Success(handle) => handle,
    };

    let state = match function.into_parts().0 {
        Chain::Failed { error, .. } => Chain::Failed { error, value: None },
        Chain::Success(None) => Chain::Success(None),
        Chain::Success(Some(step)) => Chain::from(step.with(|step| step(handle))),
    };
    Wrapper::from_parts(state, hook)
}

/// Collapses a nested wrapper; see [`Wrapper::flatten`].
#[inline]
pub fn flatten<U, E: Clone>(wrapper: Wrapper<Wrapper<U, E>, E>) -> Wrapper<U, E> {
    wrapper.flatten()
}
