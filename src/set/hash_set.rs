//! Hash-backed set of unique values.
//!
//! This module provides [`Set`], a mutable set that stores each element as
//! a key of a `HashMap<T, ()>`. Only key presence matters; the unit value
//! carries no information.
//!
//! # Overview
//!
//! - O(1) expected `contains`, `insert` and `discard`
//! - O(1) `len` and `is_empty`
//! - Mutation happens in place and the bulk forms return `&mut Self`
//! - Set algebra allocates a new set and leaves both operands untouched
//!
//! # Examples
//!
//! ```rust
//! use valueset::Set;
//!
//! let mut set = Set::with_capacity(4);
//! set.add([1, 2, 3]).remove(&[2]);
//!
//! assert!(set.contains(&1));
//! assert!(!set.contains(&2));
//! assert_eq!(set.len(), 2);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use valueset::Set;
//!
//! let set_a = Set::of(&[1, 2, 3]);
//! let set_b = Set::of(&[2, 3, 4]);
//!
//! assert_eq!(set_a.union(&set_b), Set::of(&[1, 2, 3, 4]));
//! assert_eq!(set_a.intersection(&set_b), Set::of(&[2, 3]));
//! assert_eq!(set_a.difference(&set_b), Set::of(&[1]));
//! assert_eq!(set_a.symmetric_difference(&set_b), Set::of(&[1, 4]));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::iter::{IntoIter, Iter};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of distinct values.
///
/// `T` must implement [`Hash`] and [`Eq`]; `S` selects the hashing
/// strategy and defaults to the standard library's [`RandomState`].
///
/// Two sets are equal when they hold the same elements, regardless of
/// insertion order, capacity or hasher state.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `contains`             | O(1) expected     |
/// | `insert` / `discard`   | O(1) expected     |
/// | `add` / `remove`       | O(k) expected     |
/// | `len` / `is_empty`     | O(1)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
/// | `is_subset`            | O(n)              |
///
/// # Examples
///
/// ```rust
/// use valueset::Set;
///
/// let set = Set::of(&["apple", "pear", "apple"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("pear"));
/// ```
#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    inner: HashMap<T, (), S>,
}

static_assertions::assert_impl_all!(Set<i32>: Clone, Default, Eq, Extend<i32>, FromIterator<i32>);
static_assertions::assert_impl_all!(Set<String>: Clone, Default, Eq, fmt::Debug, fmt::Display);

impl<T> Set<T, RandomState> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Creates an empty set pre-allocated for `size_hint` elements.
    ///
    /// The hint only affects allocation; a set created with any hint
    /// behaves exactly like one created with [`Set::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(size_hint: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(size_hint),
        }
    }
}

impl<T: Hash + Eq> Set<T, RandomState> {
    /// Creates a set holding the distinct values of `items`.
    ///
    /// Duplicates in `items` collapse into a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let set = Set::of(&[1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn of(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_seq(items.iter().cloned())
    }

    /// Creates a set by consuming a finite sequence exactly once.
    ///
    /// The sequence may be lazy. The order in which it yields values does
    /// not affect the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let evens = Set::from_seq((0..10).filter(|number| number % 2 == 0));
    /// assert_eq!(evens, Set::of(&[0, 2, 4, 6, 8]));
    /// ```
    #[must_use]
    pub fn from_seq<I: IntoIterator<Item = T>>(sequence: I) -> Self {
        sequence.into_iter().collect()
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set that hashes its elements with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use valueset::Set;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `size_hint` elements that hashes
    /// with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(size_hint: usize, hasher: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(size_hint, hasher),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// assert!(Set::<i32>::new().is_empty());
    /// assert!(!Set::of(&[1]).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hasher.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns a lazy iterator over the elements.
    ///
    /// The iteration order is unspecified. Each call starts a fresh,
    /// independent traversal, and the borrow keeps the set from being
    /// mutated while the traversal is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let set = Set::of(&[1, 2, 3]);
    /// let sum: i32 = set.all().sum();
    /// assert_eq!(sum, 6);
    /// assert_eq!(set.all().count(), 3);
    /// ```
    #[inline]
    pub fn all(&self) -> Iter<'_, T> {
        Iter::new(self.inner.keys())
    }

    /// Returns a lazy iterator over the elements.
    ///
    /// Equivalent to [`Set::all`].
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.all()
    }

    /// Materializes the elements into a `Vec`, in unspecified order.
    ///
    /// The returned vector has exactly [`Set::len`] elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let mut items = Set::of(&[3, 1, 2]).to_vec();
    /// items.sort_unstable();
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.all().cloned().collect()
    }

    /// Consumes the set and returns its elements in unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Removes every element. The allocated capacity is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let mut set = Set::of(&[1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let mut set = Set::from_seq(1..=6);
    /// set.retain(|number| number % 3 == 0);
    /// assert_eq!(set, Set::of(&[3, 6]));
    /// ```
    pub fn retain<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
        self
    }
}

// =============================================================================
// Membership and Mutation
// =============================================================================

impl<T, S> Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if `item` is a member of the set.
    ///
    /// The item may be any borrowed form of the element type, but `Hash`
    /// and `Eq` on the borrowed form must match those of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let set = Set::of(&["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Inserts a single element, returning `true` if it was not present.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes a single element, returning `true` if it was present.
    pub fn discard<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Inserts every item, leaving already-present items untouched.
    ///
    /// Returns the set to allow chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add([1, 2]).add(vec![2, 3]);
    /// assert_eq!(set, Set::of(&[1, 2, 3]));
    /// ```
    pub fn add<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend(items.into_iter().map(|item| (item, ())));
        self
    }

    /// Removes every item that is present; absent items are ignored.
    ///
    /// Returns the set to allow chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let mut set = Set::of(&[1, 2, 3]);
    /// set.remove(&[2, 9]);
    /// assert_eq!(set, Set::of(&[1, 3]));
    /// ```
    pub fn remove<'a, Q, I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        for item in items {
            self.inner.remove(item);
        }
        self
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Shrinks the backing storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// Returns `true` if every element of `self` is contained in `other`.
    ///
    /// The empty set is a subset of every set, and every set is a subset
    /// of itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// assert!(Set::of(&[1, 2, 3]).is_subset(&Set::of(&[1, 2, 3, 4, 5])));
    /// assert!(!Set::of(&[4, 5, 6]).is_subset(&Set::of(&[1, 2, 3, 4, 5])));
    /// ```
    #[must_use]
    pub fn is_subset<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        self.len() <= other.len() && self.all().all(|item| other.contains(item))
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    #[must_use]
    pub fn is_superset<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no element in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// assert!(Set::of(&[1, 2]).is_disjoint(&Set::of(&[3, 4])));
    /// assert!(!Set::of(&[1, 2]).is_disjoint(&Set::of(&[2, 3])));
    /// ```
    #[must_use]
    pub fn is_disjoint<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        if self.len() <= other.len() {
            self.all().all(|item| !other.contains(item))
        } else {
            other.all().all(|item| !self.contains(item))
        }
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T, S> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set holding the elements present in either operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let union = Set::of(&[1, 2, 3]).union(&Set::of(&[2, 3, 4]));
    /// assert_eq!(union, Set::of(&[1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn union<S2: BuildHasher>(&self, other: &Set<T, S2>) -> Self {
        let mut result = self.clone();
        result.add(other.all().cloned());
        result
    }

    /// Returns a new set holding the elements present in both operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let intersection = Set::of(&[1, 2, 3]).intersection(&Set::of(&[4, 5, 6]));
    /// assert!(intersection.is_empty());
    /// ```
    #[must_use]
    pub fn intersection<S2: BuildHasher>(&self, other: &Set<T, S2>) -> Self {
        let mut result = self.empty_like(self.len().min(other.len()));
        // Walk the smaller operand and probe the larger one.
        if self.len() <= other.len() {
            result.add(self.all().filter(|item| other.contains(*item)).cloned());
        } else {
            result.add(other.all().filter(|item| self.contains(*item)).cloned());
        }
        result
    }

    /// Returns a new set holding the elements of `self` that are absent
    /// from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let difference = Set::of(&[1, 2, 3]).difference(&Set::of(&[2, 3]));
    /// assert_eq!(difference, Set::of(&[1]));
    /// ```
    #[must_use]
    pub fn difference<S2: BuildHasher>(&self, other: &Set<T, S2>) -> Self {
        let mut result = self.empty_like(self.len());
        result.add(self.all().filter(|item| !other.contains(*item)).cloned());
        result
    }

    /// Returns a new set holding the elements present in exactly one
    /// operand, that is `(self - other) | (other - self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::Set;
    ///
    /// let symmetric = Set::of(&[1, 2, 3]).symmetric_difference(&Set::of(&[2, 3, 4]));
    /// assert_eq!(symmetric, Set::of(&[1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference<S2: BuildHasher>(&self, other: &Set<T, S2>) -> Self {
        let mut result = self.difference(other);
        result.add(other.all().filter(|item| !self.contains(*item)).cloned());
        result
    }

    fn empty_like(&self, size_hint: usize) -> Self {
        Self::with_capacity_and_hasher(size_hint, self.hasher().clone())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T, RandomState> {
    fn from(items: [T; N]) -> Self {
        Self::from_seq(items)
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.inner.into_keys())
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.all()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
