//! Error types for contract violations.
//!
//! Expected absence is modelled as data (`OptionalValue::Absent`), so the
//! only error in this crate is the one raised when calling code asks an
//! absent value for its contents.

/// Represents an attempt to extract the value of an `Absent` container.
///
/// This is a programming error rather than a domain failure: `get` panics
/// with this error's message, and `try_get` returns it for callers that
/// prefer to propagate it.
///
/// # Examples
///
/// ```rust
/// use monads::control::IllegalStateAccess;
///
/// let error = IllegalStateAccess { operation: "get" };
/// assert_eq!(format!("{error}"), "called get() on an Absent value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalStateAccess {
    /// The name of the accessor that was called.
    pub operation: &'static str,
}

impl std::fmt::Display for IllegalStateAccess {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "called {}() on an Absent value", self.operation)
    }
}

impl std::error::Error for IllegalStateAccess {}
