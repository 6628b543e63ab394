//! Generic hash set with value equality and set algebra.
//!
//! - [`Set`]: the set itself
//! - [`Iter`] / [`IntoIter`]: borrowing and owning iterators
//! - [`SetConstruct`]: `new`, `with_capacity`, `of` and `from_seq` for any
//!   hasher that implements `Default`
//! - `FxSet` / `ASet`: `Set` with a faster hashing strategy
//!   (behind the `fxhash` and `ahash` features)
//!
//! # Examples
//!
//! ```rust
//! use valueset::Set;
//!
//! let mut visited = Set::new();
//! for node in ["a", "b", "a", "c"] {
//!     visited.insert(node);
//! }
//! assert_eq!(visited.len(), 3);
//!
//! let frontier = Set::of(&["c", "d"]);
//! assert_eq!(frontier.difference(&visited), Set::of(&["d"]));
//! ```

mod construct;
mod hash_set;
mod iter;
mod macros;
mod ops;

pub use construct::SetConstruct;
pub use hash_set::Set;
pub use iter::IntoIter;
pub use iter::Iter;

/// A [`Set`] hashed with `rustc-hash`'s `FxHasher`.
///
/// Fast for small keys such as integers, but not resistant to
/// hash-flooding input.
///
/// ```rust
/// # #[cfg(feature = "fxhash")]
/// # {
/// use valueset::{FxSet, SetConstruct};
///
/// let set = FxSet::from_seq(0..4_u64);
/// assert!(set.contains(&3));
/// assert_eq!(set, FxSet::of(&[3, 2, 1, 0]));
/// # }
/// ```
#[cfg(feature = "fxhash")]
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

/// A [`Set`] hashed with `ahash`.
///
/// ```rust
/// # #[cfg(feature = "ahash")]
/// # {
/// use valueset::{ASet, SetConstruct};
///
/// let mut set = ASet::with_capacity(2);
/// set.add(["x", "y"]);
/// assert!(set.contains("x"));
/// # }
/// ```
#[cfg(feature = "ahash")]
pub type ASet<T> = Set<T, ahash::RandomState>;
