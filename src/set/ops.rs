//! Operator forms of the set algebra.
//!
//! Each operator borrows both operands and returns a new [`Set`]:
//!
//! | Operator  | Method                                          |
//! |-----------|-------------------------------------------------|
//! | `&a \| &b` | [`Set::union`]                                 |
//! | `&a & &b` | [`Set::intersection`]                           |
//! | `&a - &b` | [`Set::difference`]                             |
//! | `&a ^ &b` | [`Set::symmetric_difference`]                   |
//!
//! ```rust
//! use valueset::Set;
//!
//! let set_a = Set::of(&[1, 2, 3]);
//! let set_b = Set::of(&[2, 3, 4]);
//!
//! assert_eq!(&set_a | &set_b, Set::of(&[1, 2, 3, 4]));
//! assert_eq!(&set_a & &set_b, Set::of(&[2, 3]));
//! assert_eq!(&set_a - &set_b, Set::of(&[1]));
//! assert_eq!(&set_a ^ &set_b, Set::of(&[1, 4]));
//! ```

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Set;

impl<T, S> BitOr<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitor(self, other: &Set<T, S>) -> Set<T, S> {
        self.union(other)
    }
}

impl<T, S> BitAnd<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitand(self, other: &Set<T, S>) -> Set<T, S> {
        self.intersection(other)
    }
}

impl<T, S> Sub<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn sub(self, other: &Set<T, S>) -> Set<T, S> {
        self.difference(other)
    }
}

impl<T, S> BitXor<&Set<T, S>> for &Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<T, S>;

    fn bitxor(self, other: &Set<T, S>) -> Set<T, S> {
        self.symmetric_difference(other)
    }
}
