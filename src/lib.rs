//! # catafold
//!
//! Persistent cons lists and binary trees built around structural-recursion
//! folds.
//!
//! ## Overview
//!
//! This crate provides two immutable, structurally-shared data structures
//! together with the canonical fold-based operations over them:
//!
//! - [`persistent::ConsList`]: a persistent singly-linked list with
//!   `cons`/`head`/`tail`, left and right folds, `map`, `filter`,
//!   `flat_map`, `zip_with`, and friends.
//! - [`persistent::BinaryTree`]: a persistent binary tree whose values live
//!   only at leaves, with a generalized fold (catamorphism) from which
//!   `size`, `depth`, `maximum`, and `map` are derived.
//!
//! Both structures implement the type classes in [`typeclass`]: `Functor`,
//! `Foldable`, and (for the list) `Semigroup` and `Monoid`.
//!
//! All operations are pure: they return new values and never mutate their
//! input. Suffixes and subtrees are shared between versions through reference
//! counting, so `cons` and `tail` are O(1) in time and space.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the type class traits (`Functor`, `Foldable`, ...)
//! - `persistent`: the data structures (implies `typeclass`)
//! - `arc`: share structure with `Arc` instead of `Rc` (thread-safe)
//! - `serde`: `Serialize`/`Deserialize` for [`persistent::ConsList`]
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use catafold::persistent::ConsList;
//!
//! let list: ConsList<i32> = (1..=5).collect();
//! assert_eq!(list.sum(), 15);
//! assert_eq!(list.len(), 5);
//!
//! let reversed = list.reverse();
//! assert_eq!(reversed.head(), Some(&5));
//! // The original list is untouched
//! assert_eq!(list.head(), Some(&1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use catafold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
