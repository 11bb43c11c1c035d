//! Containers for absence and failure.
//!
//! - [`OptionalValue`]: A value that is `Present` or `Absent`
//! - [`Disjunction`]: A value that is a `Left` (failure) or a `Right` (success)
//! - [`IllegalStateAccess`]: The contract violation raised by
//!   [`OptionalValue::get`] on an absent value
//!
//! Both containers are created through smart constructors and implement
//! [`Monad`](crate::typeclass::Monad), so chains of `flat_map` short-circuit
//! on the first `Absent` or `Left`.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{optional_of, right_of, Disjunction};
//!
//! let name = optional_of(Some("Emily")).map(str::to_uppercase);
//! assert_eq!(name.get_or_else(String::new()), "EMILY");
//!
//! let checked: Disjunction<String, u8> = right_of(200).flat_map(|n: u8| {
//!     n.checked_add(100)
//!         .map_or_else(|| Disjunction::Left(format!("{n} overflows")), right_of)
//! });
//! assert_eq!(checked, Disjunction::Left("200 overflows".to_string()));
//! ```

mod disjunction;
mod error;
mod optional_value;

pub use disjunction::{Disjunction, left_of, right_of};
pub use error::IllegalStateAccess;
pub use optional_value::{OptionalValue, optional_of};
