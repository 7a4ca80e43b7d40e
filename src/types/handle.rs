use core::cell::{Ref as Borrowed, RefCell, RefMut};
use core::fmt::{self, Debug};

use crate::types::alloc_type::Rc;

/// Shared, mutable handle to a value held by a [`Wrapper`](crate::Wrapper).
///
/// Cloning a `Ref` clones the handle, not the value: every clone observes
/// mutations made through any other. The handle is single-threaded
/// (`!Send`); containers never lock it, so two wrappers built on the same
/// handle alias the same value.
///
/// # Panics
///
/// [`borrow`](Ref::borrow) and [`borrow_mut`](Ref::borrow_mut) follow
/// [`RefCell`] rules and panic on a conflicting live borrow.
///
/// # Examples
///
/// ```
/// use chain_rail::Ref;
///
/// let a = Ref::new(1);
/// let b = a.clone();
/// *b.borrow_mut() += 1;
///
/// assert_eq!(a.get(), 2);
/// assert!(a.ptr_eq(&b));
/// ```
pub struct Ref<T>(Rc<RefCell<T>>);

impl<T> Ref<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Borrowed<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Runs `f` against the referenced value and returns its result.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.0.borrow())
    }

    /// Mutates the referenced value in place.
    #[inline]
    pub fn update<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.0.borrow_mut())
    }

    /// Replaces the referenced value, returning the old one.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }

    /// Returns `true` if both handles point at the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a copy of the referenced value.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    /// Unwraps the value if this is the only handle left, otherwise gives the
    /// handle back.
    pub fn try_unwrap(self) -> Result<T, Self> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(Self)
    }
}

impl<T> Clone for Ref<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Ref<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Ref<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Debug> Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(value) => f.debug_tuple("Ref").field(&*value).finish(),
            Err(_) => f.write_str("Ref(<borrowed>)"),
        }
    }
}
