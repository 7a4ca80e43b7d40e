use core::error::Error;
use core::fmt::{self, Debug, Display};

#[cfg(feature = "std")]
use crate::types::alloc_type::Box;
use crate::types::alloc_type::{Arc, Cow, String, ToString};

/// Prefix attached to errors produced by [`Chain::recover`](crate::Chain::recover)
/// and [`Wrapper::recover`](crate::Wrapper::recover) when the producer panics.
pub const PANIC_RECOVERED_PREFIX: &str = "panic recovered: ";

type SharedSource = Arc<dyn Error + Send + Sync + 'static>;

/// The default error carried by [`Chain`](crate::Chain) and [`Wrapper`](crate::Wrapper).
///
/// `ChainError` only records that *an* error occurred: a human readable message
/// and, optionally, the collaborator error it was created from. There is no
/// error hierarchy to match on.
///
/// The source is reference counted so the error stays cheap to clone, which
/// value-semantics containers rely on.
///
/// # Examples
///
/// ```
/// use chain_rail::ChainError;
///
/// let err = ChainError::new("val cannot be 3");
/// assert_eq!(err.to_string(), "val cannot be 3");
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
/// let err = ChainError::from_source(io);
/// assert_eq!(err.message(), "missing file");
/// assert!(std::error::Error::source(&err).is_some());
/// ```
#[derive(Clone)]
pub struct ChainError {
    message: Cow<'static, str>,
    source: Option<SharedSource>,
}

impl ChainError {
    /// Creates an error from a message.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into(), source: None }
    }

    /// Adapts a collaborator error (I/O, decoding, ...) into a `ChainError`.
    ///
    /// The message is the source's `Display` output and the source stays
    /// reachable through [`Error::source`].
    #[inline]
    pub fn from_source<S>(source: S) -> Self
    where
        S: Error + Send + Sync + 'static,
    {
        let message = Cow::Owned(source.to_string());
        Self { message, source: Some(Arc::new(source)) }
    }

    /// Attaches `source` as the cause of this error, keeping the message.
    #[inline]
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds the error reported when a recovered producer panicked.
    ///
    /// String payloads (`panic!("...")` with or without format arguments) are
    /// rendered verbatim; anything else is rendered as `Box<dyn Any>`.
    #[cfg(feature = "std")]
    pub fn from_panic(payload: Box<dyn core::any::Any + Send>) -> Self {
        let detail = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "Box<dyn Any>".to_string()
        };
        Self::new(format!("{PANIC_RECOVERED_PREFIX}{detail}"))
    }
}

impl Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainError")
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl Error for ChainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

impl PartialEq for ChainError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for ChainError {}

impl From<&'static str> for ChainError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ChainError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChainError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.message)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChainError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let message = String::deserialize(deserializer)?;
        Ok(Self::new(message))
    }
}
