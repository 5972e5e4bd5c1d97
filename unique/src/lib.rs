//! Helpers for removing duplicates from ordered sequences.
//!
//! Every function here keeps the *first* occurrence of each value and drops
//! the later ones, so the output is ordered by where each value first
//! appeared in the input:
//!
//! ```
//! use ordered_unique::unique;
//!
//! assert_eq!(unique(&[1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
//! ```
//!
//! [`unique`] only needs [`PartialEq`] and does a quadratic scan, which is
//! what you want for the short lists that build tooling usually deals with.
//! When the elements are hashable, [`unique_hashed`] does the same thing in
//! linear time, and [`unique_with`] picks between the two according to a
//! [`Strategy`].
//!
//! Equality is value equality. To deduplicate shared pointers by the
//! allocation they point to instead, use [`unique_by_address`] or wrap the
//! elements in [`ByAddress`].

pub mod check;
pub mod identity;
pub mod retain;
pub mod strategy;
pub mod unique;

pub use check::{ensure_unique, find_duplicate, is_unique, Duplicate, DuplicateError};
pub use identity::{unique_by_address, ByAddress};
pub use retain::RetainUnique;
pub use strategy::{ParseStrategyError, Strategy};
pub use unique::{unique, unique_by_key, unique_hashed, unique_with};
