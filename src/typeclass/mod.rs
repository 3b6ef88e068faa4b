//! Type class traits for functional programming abstractions.
//!
//! This module provides the traits the persistent structures in this crate
//! implement:
//!
//! - [`Functor`]: mapping over container values
//! - [`Foldable`]: folding a structure to a summary value
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroup with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which lets `Functor` and `Foldable` talk about "the same
//! container holding a different element type".
//!
//! ## Monoid Wrappers
//!
//! [`Sum`], [`Product`], [`Max`], and [`Min`] are newtype wrappers that give
//! a numeric type a specific monoid: the same `i32` can be folded additively
//! through `Sum<i32>` or multiplicatively through `Product<i32>`. [`Bounded`]
//! supplies the identity elements for `Max` and `Min`.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use catafold::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use catafold::typeclass::{Monoid, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```
//!
//! ## Using Foldable
//!
//! ```rust
//! use catafold::typeclass::Foldable;
//!
//! let sum = vec![1, 2, 3, 4, 5].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Bounded;
pub use wrappers::Max;
pub use wrappers::Min;
pub use wrappers::Product;
pub use wrappers::Sum;
