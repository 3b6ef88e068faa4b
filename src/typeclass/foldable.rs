//! Foldable type class - folding over data structures.
//!
//! A `Foldable` can have its elements reduced into a single summary value.
//!
//! # Laws
//!
//! `Foldable` has no formal laws as strict as other type classes, but
//! implementations should satisfy:
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative operations with a neutral seed:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! ## Consistency with `to_vec`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_vec().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use catafold::typeclass::Foldable;
//!
//! let sum = vec![1, 2, 3, 4, 5].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none: Option<i32> = None;
//! assert_eq!(none.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - [`fold_left`](Self::fold_left): left-associative fold
/// - [`fold_right`](Self::fold_right): right-associative fold
///
/// All other methods have default implementations based on `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catafold::typeclass::Foldable;
    ///
    /// let sum = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catafold::typeclass::Foldable;
    ///
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let rendered = vec![1, 2, 3].fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(rendered, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catafold::typeclass::{Foldable, Sum};
    ///
    /// let sum: Sum<i32> = vec![1, 2, 3].fold_map(Sum::new);
    /// assert_eq!(sum, Sum::new(6));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Counts the elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catafold::typeclass::Foldable;
    ///
    /// assert_eq!(vec![10, 20, 30].length(), 3);
    /// assert_eq!(None::<i32>.length(), 0);
    /// ```
    fn length(self) -> usize
    where
        Self: Sized,
    {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for empty structures.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(true, |all, element| all && predicate(&element))
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}
