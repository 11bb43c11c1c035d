//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` lifts a plain value into a container with [`Monad::unit`] and
//! chains container-producing steps with [`Monad::flat_map`], where each step
//! can depend on the value produced by the previous one.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws, where `==` is
//! structural equality:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::unit(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::higher::TypeConstructor;

/// A type class for types that support sequencing of computations.
///
/// Implementors decide what "failure" means: a short-circuiting variant
/// (such as `Absent` or `Left`) is returned unchanged by `flat_map` without
/// calling the supplied function.
///
/// # Examples
///
/// ```rust
/// use monads::control::{OptionalValue, optional_of};
/// use monads::typeclass::Monad;
///
/// let lifted: OptionalValue<i32> = <OptionalValue<()> as Monad>::unit(5);
/// let chained = Monad::flat_map(lifted, |n| optional_of(Some(n * 2)));
/// assert_eq!(chained, OptionalValue::Present(10));
/// ```
pub trait Monad: TypeConstructor {
    /// Lifts a plain value into the "successful" variant of the container.
    ///
    /// This is the smart constructor restricted to a value that is known to
    /// be there, so it never produces the short-circuiting variant.
    fn unit<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Cell<A>(A);

    impl<A> TypeConstructor for Cell<A> {
        type Inner = A;
        type WithType<B> = Cell<B>;
    }

    impl<A> Monad for Cell<A> {
        fn unit<B>(value: B) -> Cell<B> {
            Cell(value)
        }

        fn flat_map<B, F>(self, function: F) -> Cell<B>
        where
            F: FnOnce(A) -> Cell<B>,
        {
            function(self.0)
        }
    }

    #[rstest]
    fn unit_wraps_the_value() {
        assert_eq!(<Cell<()> as Monad>::unit(7), Cell(7));
    }

    #[rstest]
    fn flat_map_passes_the_inner_value() {
        let result = Cell(3).flat_map(|n| Cell(n.to_string()));
        assert_eq!(result, Cell("3".to_string()));
    }

    #[rstest]
    #[case(0)]
    #[case(-12)]
    #[case(i32::MAX)]
    fn bind_is_flat_map(#[case] value: i32) {
        let function = |n: i32| Cell(n.wrapping_add(1));
        assert_eq!(Cell(value).bind(function), Cell(value).flat_map(function));
    }
}
