//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `OptionalValue<_>`
//! directly. `TypeConstructor` works around this by pairing each concrete
//! container with the type it holds (`Inner`) and a way to name the same
//! container holding something else (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use monads::control::{Disjunction, OptionalValue};
//! use monads::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//!
//! assert_inner::<OptionalValue<i32>>();
//! assert_inner::<Disjunction<String, i32>>();
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `OptionalValue<A>` or `Disjunction<L, A>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Disjunction<L, R>` this is `R`; the left type is fixed.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a valid type constructor, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default, PartialEq)]
    struct Cell<A>(A);

    impl<A> TypeConstructor for Cell<A> {
        type Inner = A;
        type WithType<B> = Cell<B>;
    }

    #[rstest]
    fn inner_type_is_the_applied_parameter() {
        fn assert_inner<T: TypeConstructor<Inner = u8>>() {}
        assert_inner::<Cell<u8>>();
    }

    #[rstest]
    fn with_type_swaps_the_parameter() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Cell<String> = transform(Cell(42));
        assert_eq!(result, Cell(String::new()));
    }

    #[rstest]
    fn chained_with_type_transformations() {
        type Step1 = <Cell<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool_cell<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool_cell::<Step2>();
    }
}
