use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::Rc;
use crate::types::chain::Chain;
use crate::types::chain_error::ChainError;
use crate::types::handle::Ref;

/// Error-interception hook carried by a [`Wrapper`].
///
/// Called with the error of every failing [`Wrapper::then`] step. Returning
/// `Some` makes that error (possibly rewritten) the wrapper's error; returning
/// `None` suppresses it and the wrapper continues with its previous value.
pub type Hook<E = ChainError> = Rc<dyn Fn(E) -> Option<E>>;

/// Builds a [`Hook`] from a closure.
///
/// # Examples
///
/// ```
/// use chain_rail::{hook, ChainError, Hook};
///
/// let ignore_timeouts: Hook = hook(|e: ChainError| {
///     if e.message().contains("timeout") { None } else { Some(e) }
/// });
/// assert!(ignore_timeouts(ChainError::new("timeout")).is_none());
/// ```
#[inline]
pub fn hook<E, F>(f: F) -> Hook<E>
where
    F: Fn(E) -> Option<E> + 'static,
{
    Rc::new(f)
}

/// Plain step signature accepted by [`Wrapper::then`].
///
/// A step reports the next handle together with an optional error.
pub type HandleStep<T, E = ChainError> = fn(Option<Ref<T>>) -> (Option<Ref<T>>, Option<E>);

/// Reference-semantics pipeline over a nullable shared handle.
///
/// A `Wrapper` holds an optional [`Ref<T>`], the pipeline state and an optional
/// [`Hook`]. Combinators return new wrappers, but the value behind the handle
/// is shared: [`map`](Wrapper::map) mutates it in place and every wrapper
/// built on the same handle sees the change. Nothing is locked; aliasing
/// wrappers across call sites is the caller's responsibility.
///
/// Compared to [`Chain`]:
/// - failing [`then`](Wrapper::then) steps are routed through the hook, which
///   may rewrite or suppress the error;
/// - [`or_else`](Wrapper::or_else) clears the error;
/// - the hook travels unchanged through every combinator.
///
/// # Examples
///
/// ```
/// use chain_rail::{ChainError, Ref, Wrapper};
///
/// let counter = Ref::new(1);
/// let (handle, error) = Wrapper::<i32>::new(Some(counter.clone()), None)
///     .map(|v| *v += 10)
///     .result();
///
/// assert!(error.is_none());
/// assert_eq!(handle.unwrap().get(), 11);
/// assert_eq!(counter.get(), 11);
/// ```
#[must_use]
pub struct Wrapper<T, E = ChainError> {
    state: Chain<Option<Ref<T>>, E>,
    hook: Option<Hook<E>>,
}

impl<T, E> Wrapper<T, E> {
    /// Creates a successful wrapper over `handle` with an optional hook.
    #[inline]
    pub fn new(handle: Option<Ref<T>>, hook: Option<Hook<E>>) -> Self {
        Self { state: Chain::Success(handle), hook }
    }

    /// Creates a successful wrapper over a fresh handle to `value`, without hook.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::new(Some(Ref::new(value)), None)
    }

    #[inline]
    pub(crate) fn from_parts(state: Chain<Option<Ref<T>>, E>, hook: Option<Hook<E>>) -> Self {
        Self { state, hook }
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Chain<Option<Ref<T>>, E>, Option<Hook<E>>) {
        (self.state, self.hook)
    }

    /// Sets the error slot, keeping the handle and hook.
    #[inline]
    pub fn with_error(self, error: E) -> Self {
        Self { state: self.state.with_error(error), hook: self.hook }
    }

    /// Runs `step` on the handle unless the wrapper already failed.
    ///
    /// An absent step leaves the wrapper unchanged. Without an error the
    /// returned handle replaces the current one. With an error the returned
    /// handle is dropped and the error goes through the hook: if the hook keeps
    /// an error, the wrapper fails with it and keeps its previous handle; if
    /// the hook suppresses it, the wrapper is returned as it was before the
    /// step.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{hook, ChainError, Ref, Wrapper};
    ///
    /// let suppress_all = hook(|_: ChainError| None);
    /// let wrapper = Wrapper::new(Some(Ref::new(2)), Some(suppress_all))
    ///     .then(Some(|_| (None, Some(ChainError::new("ignored")))));
    ///
    /// assert!(wrapper.is_success());
    /// assert_eq!(wrapper.get(), Some(2));
    /// ```
    pub fn then<F>(self, step: Option<F>) -> Self
    where
        F: FnOnce(Option<Ref<T>>) -> (Option<Ref<T>>, Option<E>),
    {
        if self.is_failure() {
            rail_event!(trace, op = "then", "skipped: wrapper already failed");
            return self;
        }
        let Some(step) = step else {
            return self;
        };

        match step(self.state.value().clone()) {
            (next, None) => Self { state: Chain::Success(next), hook: self.hook },
            (_, Some(error)) => self.intercept(error),
        }
    }

    /// Routes a step error through the hook.
    fn intercept(self, error: E) -> Self {
        let routed = match &self.hook {
            Some(hook) => hook(error),
            None => Some(error),
        };

        match routed {
            Some(error) => {
                rail_event!(debug, op = "then", "step failed");
                Self { state: self.state.with_error(error), hook: self.hook }
            },
            None => {
                rail_event!(debug, op = "then", "step error suppressed by hook");
                self
            },
        }
    }

    /// Mutates the referenced value in place unless the wrapper failed.
    ///
    /// Skipped when the handle is absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is already borrowed through another handle.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut T),
    {
        if let Chain::Success(Some(handle)) = &self.state {
            handle.update(f);
        }
        self
    }

    /// Monadic sequencing with a function returning a wrapper of the same type.
    ///
    /// A failed wrapper is returned unchanged.
    pub fn flat_map<F>(self, f: F) -> Self
    where
        F: FnOnce(Option<Ref<T>>) -> Wrapper<T, E>,
    {
        match self.state {
            Chain::Success(handle) => f(handle),
            Chain::Failed { .. } => self,
        }
    }

    /// Fails the wrapper with `error` when `predicate` rejects the value.
    ///
    /// An absent handle counts as rejected. A failed wrapper is returned
    /// unchanged without calling `predicate`.
    pub fn filter<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let accepted = match &self.state {
            Chain::Success(Some(handle)) => handle.with(predicate),
            Chain::Success(None) => false,
            Chain::Failed { .. } => return self,
        };

        if accepted {
            self
        } else {
            self.with_error(error)
        }
    }

    /// Invokes exactly one of the callbacks depending on the current state.
    ///
    /// A missing callback is skipped.
    pub fn match_with<S, F>(&self, on_success: Option<S>, on_failure: Option<F>)
    where
        S: FnOnce(Option<&Ref<T>>),
        F: FnOnce(&E),
    {
        self.state
            .match_with(on_success.map(|s| move |handle: &Option<Ref<T>>| s(handle.as_ref())), on_failure);
    }

    /// Replaces the handle of a failed wrapper with `fallback` and clears the
    /// error. Successful wrappers are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::{ChainError, Ref, Wrapper};
    ///
    /// let wrapper = Wrapper::<i32>::from_value(1)
    ///     .with_error(ChainError::new("boom"))
    ///     .or_else(Some(Ref::new(42)));
    ///
    /// assert!(wrapper.is_success());
    /// assert_eq!(wrapper.get(), Some(42));
    /// ```
    #[inline]
    pub fn or_else(self, fallback: Option<Ref<T>>) -> Self {
        if self.is_failure() {
            return Self { state: Chain::Success(fallback), hook: self.hook };
        }
        self
    }

    /// Runs `producer`, converting a panic into an error.
    ///
    /// Skipped when the wrapper already failed or `producer` is absent. The
    /// producer's outcome is handled exactly like a [`then`](Wrapper::then)
    /// step, so a returned error goes through the hook.
    /// A panic becomes a [`ChainError`] reading `panic recovered: <payload>`
    /// with an absent handle; the hook is kept.
    #[cfg(feature = "std")]
    pub fn recover<F>(self, producer: Option<F>) -> Self
    where
        E: From<ChainError>,
        F: FnOnce() -> (Option<Ref<T>>, Option<E>),
    {
        if self.is_failure() {
            rail_event!(trace, op = "recover", "skipped: wrapper already failed");
            return self;
        }
        let Some(producer) = producer else {
            return self;
        };

        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(producer)) {
            Ok((handle, None)) => Self { state: Chain::Success(handle), hook: self.hook },
            Ok((_, Some(error))) => self.intercept(error),
            Err(payload) => {
                let error = ChainError::from_panic(payload);
                rail_event!(warn, op = "recover", error = %error, "converted panic into error");
                Self { state: Chain::Failed { error: error.into(), value: None }, hook: self.hook }
            },
        }
    }

    /// Returns the handle, panicking if the wrapper failed.
    ///
    /// # Panics
    ///
    /// Panics with `called Unwrap on error: <error>` when the wrapper failed.
    #[track_caller]
    pub fn unwrap(self) -> Option<Ref<T>>
    where
        E: Display,
    {
        self.state.unwrap()
    }

    /// Extracts the final handle and error.
    #[inline]
    pub fn result(self) -> (Option<Ref<T>>, Option<E>) {
        self.state.result()
    }

    /// Converts into a `Result`, dropping the handle of a failed wrapper.
    #[inline]
    pub fn into_result(self) -> Result<Option<Ref<T>>, E> {
        self.state.into_result()
    }

    /// Returns the current handle, whatever the state.
    #[inline]
    pub fn handle(&self) -> Option<&Ref<T>> {
        self.state.value().as_ref()
    }

    /// Returns a copy of the referenced value, whatever the state.
    #[inline]
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.handle().map(Ref::get)
    }

    #[inline]
    pub fn hook(&self) -> Option<&Hook<E>> {
        self.hook.as_ref()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.state.is_success()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.state.is_failure()
    }

    /// Returns the error, if any.
    #[inline]
    pub fn has_error(&self) -> Option<&E> {
        self.state.has_error()
    }
}

impl<U, E: Clone> Wrapper<Wrapper<U, E>, E> {
    /// Collapses a nested wrapper.
    ///
    /// The outer error wins over the inner one. Otherwise the result holds the
    /// inner handle. The outer hook is kept in every case; an absent outer
    /// handle yields a successful wrapper with an absent handle.
    pub fn flatten(self) -> Wrapper<U, E> {
        let state = match self.state {
            Chain::Failed { error, .. } => Chain::Failed { error, value: None },
            Chain::Success(None) => Chain::Success(None),
            Chain::Success(Some(inner)) => inner.with(|nested| match &nested.state {
                Chain::Failed { error, .. } => Chain::Failed { error: error.clone(), value: None },
                Chain::Success(handle) => Chain::Success(handle.clone()),
            }),
        };
        Wrapper { state, hook: self.hook }
    }
}

impl<T, E: Clone> Clone for Wrapper<T, E> {
    fn clone(&self) -> Self {
        Self { state: self.state.clone(), hook: self.hook.clone() }
    }
}

impl<T: Debug, E: Debug> Debug for Wrapper<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper")
            .field("state", &self.state)
            .field("hook", &self.hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
