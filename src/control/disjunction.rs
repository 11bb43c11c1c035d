//! `Disjunction` - a value that is one of two types.
//!
//! `Disjunction<L, R>` is either a `Left(L)` or a `Right(R)`. By convention
//! `Left` carries an error or annotation and `Right` the success payload.
//! Composition is right-biased: [`flat_map`](Disjunction::flat_map) only
//! continues from a `Right`, and [`fold`](Disjunction::fold) is the single
//! place where calling code branches on the variant.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{Disjunction, left_of, right_of};
//!
//! fn age_of(id: u32) -> Disjunction<&'static str, u32> {
//!     match id {
//!         1 => right_of(17),
//!         2 => right_of(21),
//!         _ => left_of("no such user"),
//!     }
//! }
//!
//! let describe = |id| {
//!     age_of(id)
//!         .flat_map(|age| right_of(age >= 18))
//!         .fold(|reason| reason.to_string(), |adult| format!("adult: {adult}"))
//! };
//!
//! assert_eq!(describe(1), "adult: false");
//! assert_eq!(describe(2), "adult: true");
//! assert_eq!(describe(9), "no such user");
//! ```

use crate::typeclass::{Monad, TypeConstructor};

/// A value that can be one of two types.
///
/// Exactly one payload is populated, and which one is fixed at construction.
///
/// # Type Parameters
///
/// * `L` - The type of the left value, carried unchanged through `flat_map`
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Disjunction<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

/// Constructs a `Left` disjunction.
#[inline]
pub const fn left_of<L, R>(value: L) -> Disjunction<L, R> {
    Disjunction::Left(value)
}

/// Constructs a `Right` disjunction.
#[inline]
pub const fn right_of<L, R>(value: R) -> Disjunction<L, R> {
    Disjunction::Right(value)
}

impl<L, R> Disjunction<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Associated form of [`left_of`].
    #[inline]
    pub const fn left_of(value: L) -> Self {
        Self::Left(value)
    }

    /// Associated form of [`right_of`].
    #[inline]
    pub const fn right_of(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Disjunction, left_of};
    ///
    /// let left: Disjunction<i32, String> = left_of(42);
    /// assert!(left.is_left());
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Continues the computation with the right value.
    ///
    /// If this is `Right(r)`, returns `function(r)`. If this is `Left(l)`,
    /// returns `Left(l)` retyped to the new right type; `function` is not
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Disjunction, left_of, right_of};
    ///
    /// let parse = |s: &str| match s.parse::<i32>() {
    ///     Ok(n) => right_of(n),
    ///     Err(_) => left_of("not a number"),
    /// };
    ///
    /// assert_eq!(right_of("12").flat_map(parse), Disjunction::Right(12));
    /// assert_eq!(right_of("twelve").flat_map(parse), Disjunction::Left("not a number"));
    /// assert_eq!(left_of("missing").flat_map(parse), Disjunction::Left("missing"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Disjunction<L, U>
    where
        F: FnOnce(R) -> Disjunction<L, U>,
    {
        match self {
            Self::Left(value) => Disjunction::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Disjunction<L, U>
    where
        F: FnOnce(R) -> Disjunction<L, U>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the disjunction by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Disjunction, left_of, right_of};
    ///
    /// let left: Disjunction<i32, String> = left_of(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Disjunction<i32, String> = right_of("hello".to_string());
    /// assert_eq!(right.fold(|x| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<L, R> TypeConstructor for Disjunction<L, R> {
    type Inner = R;
    type WithType<B> = Disjunction<L, B>;
}

impl<L, R> Monad for Disjunction<L, R> {
    #[inline]
    fn unit<B>(value: B) -> Disjunction<L, B> {
        Disjunction::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Disjunction<L, B>
    where
        F: FnOnce(R) -> Disjunction<L, B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Disjunction<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Disjunction<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(disjunction: Disjunction<L, R>) -> Self {
        match disjunction {
            Disjunction::Left(value) => Err(value),
            Disjunction::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Disjunction<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Disjunction<&'static str, u8>: Copy);
static_assertions::assert_not_impl_any!(Disjunction<std::rc::Rc<str>, i32>: Send, Sync);
