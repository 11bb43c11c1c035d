//! # monads
//!
//! Two small immutable containers with lawful monadic composition.
//!
//! ## Overview
//!
//! - **[`OptionalValue`](control::OptionalValue)**: a value that is either
//!   `Present` or `Absent`.
//! - **[`Disjunction`](control::Disjunction)**: a value that is either a `Left`
//!   (conventionally an error or annotation) or a `Right` (a success payload).
//! - **[`Monad`](typeclass::Monad)**: the shared `unit` / `flat_map`
//!   capability both containers implement.
//!
//! Absence and failure are data. Chained `flat_map` calls short-circuit on
//! `Absent` and `Left` without invoking the supplied functions, and only
//! `fold` or `get_or_else` turn the chain into a plain value.
//!
//! ## Feature Flags
//!
//! - `typeclass`: The `TypeConstructor` and `Monad` traits
//! - `control`: `OptionalValue` and `Disjunction`
//! - `tracing`: Log contract violations through the `tracing` crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monads::prelude::*;
//!
//! let greeting = optional_of(Some("Prem"))
//!     .flat_map(|name| optional_of(Some(format!("Hello, {name}"))))
//!     .get_or_else("Hello, guest".to_string());
//! assert_eq!(greeting, "Hello, Prem");
//!
//! let verdict = right_of::<&str, i32>(19)
//!     .flat_map(|age| right_of(age >= 18))
//!     .fold(|_| false, |allowed| allowed);
//! assert!(verdict);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their smart constructors and the `Monad` trait.
///
/// # Usage
///
/// ```rust
/// use monads::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
