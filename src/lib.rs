//! # valueset
//!
//! A generic, in-memory set of unique values with value-level equality and
//! the classical set algebra.
//!
//! ## Overview
//!
//! - **Construction**: [`Set::new`], [`Set::with_capacity`], [`Set::of`],
//!   [`Set::from_seq`] and the [`set!`] macro
//! - **Mutation**: `add`, `remove`, `insert`, `discard`, `clear`, `retain`
//! - **Query**: `contains`, `len`, `is_empty`, `all`, `to_vec`
//! - **Relations**: `==`, `is_subset`, `is_superset`, `is_disjoint`
//! - **Algebra**: `union`, `intersection`, `difference`,
//!   `symmetric_difference` and their `|`, `&`, `-`, `^` operators
//!
//! Every operation is total: empty sets, absent elements and a set combined
//! with itself are ordinary inputs.
//!
//! ## Feature Flags
//!
//! - `fxhash`: `FxSet<T>`, a `Set` hashed with `rustc-hash`
//! - `ahash`: `ASet<T>`, a `Set` hashed with `ahash`
//!
//! Both aliases are built with the [`SetConstruct`] constructors.
//!
//! ## Example
//!
//! ```rust
//! use valueset::prelude::*;
//!
//! let mut primes = set![2, 3, 5, 7];
//! let odds = Set::from_seq((1..10).filter(|number| number % 2 == 1));
//!
//! assert_eq!(primes.intersection(&odds), set![3, 5, 7]);
//! assert!(set![3, 5].is_subset(&primes));
//!
//! primes.add([11, 13]).remove(&[2]);
//! assert!(primes.is_subset(&Set::from_seq(3..14)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type, its iterators, [`SetConstruct`] and the [`set!`] macro.
///
/// # Usage
///
/// ```rust
/// use valueset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set;
    pub use crate::set::*;
}

pub mod set;

pub use set::{IntoIter, Iter, Set, SetConstruct};

#[cfg(feature = "ahash")]
pub use set::ASet;
#[cfg(feature = "fxhash")]
pub use set::FxSet;
