//! Type class traits shared by the containers.
//!
//! - [`TypeConstructor`]: Emulates higher-kinded types with a GAT
//! - [`Monad`]: Lifting a value with `unit` and sequencing with `flat_map`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! `TypeConstructor::WithType<B>` names "the same container holding a `B`",
//! which is all `Monad` needs to describe `flat_map` once for every
//! container.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{Disjunction, OptionalValue, left_of, optional_of};
//! use monads::typeclass::Monad;
//!
//! fn double<M: Monad<Inner = i32>>(value: M) -> M::WithType<i32> {
//!     value.flat_map(|n| M::unit(n * 2))
//! }
//!
//! assert_eq!(double(optional_of(Some(21))), OptionalValue::Present(42));
//! assert_eq!(double(left_of::<&str, i32>("boom")), Disjunction::Left("boom"));
//! ```

mod higher;
mod monad;

pub use higher::TypeConstructor;
pub use monad::Monad;
