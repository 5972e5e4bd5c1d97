use std::{collections::HashSet, hash::Hash};

use indexmap::IndexSet;

use crate::Strategy;

/// Returns the distinct elements of `seq`, in order of first occurrence.
///
/// An element is kept if and only if no earlier element compares equal to
/// it. This needs only [`PartialEq`], at the cost of a quadratic scan. Values
/// that aren't equal to themselves (like `f64::NAN`) are never considered
/// duplicates, so every occurrence of them is kept.
///
/// Pointers like `Rc` and `Arc` are compared by the value they point to, so
/// two separate allocations holding equal values count as duplicates. Use
/// [`unique_by_address`](crate::unique_by_address) to compare them by
/// identity instead.
///
/// ```
/// use ordered_unique::unique;
///
/// assert_eq!(unique(&["a", "b", "a", "a", "c"]), vec!["a", "b", "c"]);
/// assert_eq!(unique::<u8>(&[]), Vec::<u8>::new());
/// ```
pub fn unique<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter(|(i, elt)| !seq[..*i].contains(*elt))
        .map(|(_, elt)| elt.clone())
        .collect()
}

/// Like [`unique`], but runs in linear time by remembering the elements it
/// has already seen.
///
/// The output is identical to the one of [`unique`].
pub fn unique_hashed<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    // `IndexSet` iterates in insertion order, and inserting a value that's
    // already present doesn't move it.
    seq.iter()
        .collect::<IndexSet<&T>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Returns the elements of `seq` whose key hasn't been produced by an
/// earlier element.
///
/// `key` is called exactly once per element, in order.
///
/// ```
/// use ordered_unique::unique_by_key;
///
/// let files = ["main.js", "vendor.js", "MAIN.JS"];
/// let deduped = unique_by_key(&files, |f| f.to_lowercase());
/// assert_eq!(deduped, vec!["main.js", "vendor.js"]);
/// ```
pub fn unique_by_key<T, K, F>(seq: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|elt| seen.insert(key(*elt)))
        .cloned()
        .collect()
}

/// Deduplicates `seq` with the algorithm chosen by `strategy`.
///
/// All strategies produce the same output; they only differ in how they get
/// there.
pub fn unique_with<T: Eq + Hash + Clone>(seq: &[T], strategy: Strategy) -> Vec<T> {
    let hashed = strategy.uses_hashing(seq.len());
    let ret = if hashed {
        unique_hashed(seq)
    } else {
        unique(seq)
    };

    log::trace!(
        "deduplicated {} elements down to {} ({strategy}: {})",
        seq.len(),
        ret.len(),
        if hashed { "hashed" } else { "scan" }
    );

    ret
}
