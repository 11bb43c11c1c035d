//! `OptionalValue` - a value that may or may not be present.
//!
//! `OptionalValue<T>` is either `Present(T)` or `Absent`. It is built with
//! [`optional_of`], which maps Rust's absence marker (`None`) to `Absent`,
//! and consumed with [`map`](OptionalValue::map),
//! [`flat_map`](OptionalValue::flat_map) and
//! [`get_or_else`](OptionalValue::get_or_else).
//!
//! # Examples
//!
//! ```rust
//! use monads::control::optional_of;
//!
//! fn greet(name: Option<&str>) -> String {
//!     optional_of(name)
//!         .flat_map(|name| optional_of(Some(format!("Hello, {name}"))))
//!         .get_or_else("Hello, guest".to_string())
//! }
//!
//! assert_eq!(greet(Some("Prem")), "Hello, Prem");
//! assert_eq!(greet(None), "Hello, guest");
//! ```

use super::error::IllegalStateAccess;
use crate::typeclass::{Monad, TypeConstructor};

/// A value that is either `Present` or `Absent`.
///
/// Equality is structural: two values are equal when they are the same
/// variant holding equal contents. Every operation consumes the receiver
/// and returns a new value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum OptionalValue<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

/// Lifts a possibly-missing value into an [`OptionalValue`].
///
/// `Some(value)` becomes `Present(value)`; `None` becomes `Absent`.
///
/// # Examples
///
/// ```rust
/// use monads::control::{OptionalValue, optional_of};
///
/// assert_eq!(optional_of(Some(3)), OptionalValue::Present(3));
/// assert_eq!(optional_of::<i32>(None), OptionalValue::Absent);
/// ```
#[inline]
pub fn optional_of<T>(value: Option<T>) -> OptionalValue<T> {
    OptionalValue::of(value)
}

impl<T> OptionalValue<T> {
    /// Associated form of [`optional_of`].
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Applies `function` to the contained value and returns its result
    /// without re-wrapping it.
    ///
    /// `Absent` is returned as is and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{OptionalValue, optional_of};
    ///
    /// let half = |n: i32| optional_of((n % 2 == 0).then_some(n / 2));
    ///
    /// assert_eq!(optional_of(Some(8)).flat_map(half), OptionalValue::Present(4));
    /// assert_eq!(optional_of(Some(7)).flat_map(half), OptionalValue::Absent);
    /// assert_eq!(optional_of(None).flat_map(half), OptionalValue::Absent);
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> OptionalValue<R>
    where
        F: FnOnce(T) -> OptionalValue<R>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn bind<R, F>(self, function: F) -> OptionalValue<R>
    where
        F: FnOnce(T) -> OptionalValue<R>,
    {
        self.flat_map(function)
    }

    /// Transforms the contained value.
    ///
    /// Equivalent to `flat_map(|value| optional_of(Some(function(value))))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{OptionalValue, optional_of};
    ///
    /// assert_eq!(optional_of(Some("abc")).map(str::len), OptionalValue::Present(3));
    /// assert_eq!(optional_of::<&str>(None).map(str::len), OptionalValue::Absent);
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> OptionalValue<R>
    where
        F: FnOnce(T) -> R,
    {
        self.flat_map(|value| optional_of(Some(function(value))))
    }

    /// Returns the contained value, or `default` if absent.
    ///
    /// The default is evaluated by the caller before the call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::optional_of;
    ///
    /// assert_eq!(optional_of(Some(1)).get_or_else(0), 1);
    /// assert_eq!(optional_of(None).get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value, or [`IllegalStateAccess`] if absent.
    ///
    /// # Errors
    ///
    /// Returns `IllegalStateAccess` when called on `Absent`.
    #[inline]
    pub fn try_get(self) -> Result<T, IllegalStateAccess> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(IllegalStateAccess { operation: "get" }),
        }
    }

    /// Returns the contained value.
    ///
    /// Calling this on `Absent` is a contract violation. Prefer
    /// [`get_or_else`](Self::get_or_else) or [`try_get`](Self::try_get).
    ///
    /// # Panics
    ///
    /// Panics with the [`IllegalStateAccess`] message if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::optional_of;
    ///
    /// assert_eq!(optional_of(Some("value")).get(), "value");
    /// ```
    ///
    /// ```rust,should_panic
    /// use monads::control::optional_of;
    ///
    /// optional_of::<i32>(None).get();
    /// ```
    #[track_caller]
    pub fn get(self) -> T {
        match self.try_get() {
            Ok(value) => value,
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    operation = error.operation,
                    type_name = std::any::type_name::<T>(),
                    "contract violation on OptionalValue"
                );
                panic!("{error}")
            }
        }
    }
}

impl<T> TypeConstructor for OptionalValue<T> {
    type Inner = T;
    type WithType<B> = OptionalValue<B>;
}

impl<T> Monad for OptionalValue<T> {
    #[inline]
    fn unit<B>(value: B) -> OptionalValue<B> {
        OptionalValue::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> OptionalValue<B>
    where
        F: FnOnce(T) -> OptionalValue<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    #[inline]
    fn from(value: OptionalValue<T>) -> Self {
        match value {
            OptionalValue::Present(value) => Some(value),
            OptionalValue::Absent => None,
        }
    }
}

static_assertions::assert_impl_all!(OptionalValue<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(OptionalValue<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OptionalValue<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(1), OptionalValue::Present(1))]
    #[case(None, OptionalValue::Absent)]
    fn optional_of_classifies_input(
        #[case] input: Option<i32>,
        #[case] expected: OptionalValue<i32>,
    ) {
        assert_eq!(optional_of(input), expected);
        assert_eq!(OptionalValue::from(input), expected);
    }

    #[rstest]
    fn predicates_are_exclusive() {
        let present = optional_of(Some('x'));
        let absent = optional_of::<char>(None);
        assert!(present.is_present() && !present.is_absent());
        assert!(absent.is_absent() && !absent.is_present());
    }

    #[rstest]
    fn map_skips_function_on_absent() {
        let calls = Cell::new(0);
        let result = optional_of::<i32>(None).map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(result, OptionalValue::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn bind_matches_flat_map() {
        let function = |n: i32| optional_of(n.checked_mul(3));
        assert_eq!(
            optional_of(Some(4)).bind(function),
            optional_of(Some(4)).flat_map(function)
        );
    }

    #[rstest]
    fn try_get_reports_absence() {
        assert_eq!(optional_of(Some(9)).try_get(), Ok(9));
        assert_eq!(
            optional_of::<i32>(None).try_get(),
            Err(IllegalStateAccess { operation: "get" })
        );
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let present: Option<i32> = optional_of(Some(5)).into();
        let absent: Option<i32> = optional_of::<i32>(None).into();
        assert_eq!(present, Some(5));
        assert_eq!(absent, None);
    }
}
