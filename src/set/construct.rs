//! Hasher-generic constructors.
//!
//! [`Set::new`], [`Set::with_capacity`], [`Set::of`] and [`Set::from_seq`]
//! are defined for the default [`RandomState`](std::collections::hash_map::RandomState)
//! so that `Set::of(&[1, 2])` needs no annotation. [`SetConstruct`] provides
//! the same constructors for any hasher that implements [`Default`], which is
//! what the `FxSet` and `ASet` aliases use.
//!
//! When both apply, the inherent constructors take precedence.

use std::hash::{BuildHasher, Hash};

use super::Set;

/// Constructors for a [`Set`] whose hasher can be built with [`Default`].
///
/// # Examples
///
/// ```rust
/// use std::hash::BuildHasherDefault;
/// use std::collections::hash_map::DefaultHasher;
/// use valueset::{Set, SetConstruct};
///
/// type Seeded<T> = Set<T, BuildHasherDefault<DefaultHasher>>;
///
/// let mut set = Seeded::with_capacity(4);
/// set.add([1, 2]);
/// assert_eq!(set, Seeded::of(&[2, 1]));
/// assert_eq!(Seeded::from_seq(0..3).len(), 3);
/// ```
pub trait SetConstruct<T>: Sized {
    /// Creates an empty set.
    fn new() -> Self;

    /// Creates an empty set pre-allocated for `size_hint` elements.
    fn with_capacity(size_hint: usize) -> Self;

    /// Creates a set holding the distinct values of `items`.
    fn of(items: &[T]) -> Self
    where
        T: Clone;

    /// Creates a set by consuming a finite sequence exactly once.
    fn from_seq<I: IntoIterator<Item = T>>(sequence: I) -> Self;
}

impl<T, S> SetConstruct<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn new() -> Self {
        Self::with_hasher(S::default())
    }

    fn with_capacity(size_hint: usize) -> Self {
        Self::with_capacity_and_hasher(size_hint, S::default())
    }

    fn of(items: &[T]) -> Self
    where
        T: Clone,
    {
        items.iter().cloned().collect()
    }

    fn from_seq<I: IntoIterator<Item = T>>(sequence: I) -> Self {
        sequence.into_iter().collect()
    }
}
