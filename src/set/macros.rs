//! The [`set!`](crate::set!) construction macro.

/// Builds a [`Set`](crate::Set) from a list of values.
///
/// `set![]` creates an empty set; `set![a, b, c]` creates a set holding the
/// distinct values listed. Duplicates collapse and a trailing comma is
/// accepted.
///
/// # Examples
///
/// ```
/// use valueset::{Set, set};
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 2, 2, 3,];
/// assert_eq!(numbers, Set::of(&[1, 2, 3]));
/// ```
#[macro_export]
macro_rules! set {
    // No items: an empty set
    () => {
        $crate::Set::new()
    };

    // One or more items, moved into the set
    ($($item:expr),+ $(,)?) => {
        $crate::Set::from_seq([$($item),+])
    };
}
