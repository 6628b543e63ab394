//! Iterators over the elements of a [`Set`](super::Set).

use std::collections::hash_map;
use std::fmt;
use std::iter::FusedIterator;

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// A lazy iterator over the elements of a [`Set`](super::Set).
///
/// Created by [`Set::all`](super::Set::all) and
/// [`Set::iter`](super::Set::iter). Order is unspecified.
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(inner: hash_map::Keys<'a, T, ()>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// Keys<'_, T, ()> is Clone for every T; a derive would demand T: Clone.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.clone()).finish()
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the elements of a [`Set`](super::Set).
pub struct IntoIter<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> IntoIter<T> {
    pub(super) const fn new(inner: hash_map::IntoKeys<T, ()>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
