#[cfg(feature = "std")]
pub use std::{boxed::Box, rc::Rc, string::String, string::ToString, sync::Arc, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{boxed::Box, rc::Rc, string::String, string::ToString, sync::Arc, vec::Vec};

#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;
