//! Deduplication by identity rather than by value.
//!
//! Two `Rc`s pointing at equal but separately allocated values are different
//! as far as this module is concerned; two clones of the same `Rc` are the
//! same.

use std::{
    hash::{Hash, Hasher},
    ops::Deref,
};

/// Compares and hashes a pointer by the address it points to.
///
/// ```
/// use ordered_unique::{unique, ByAddress};
/// use std::rc::Rc;
///
/// let a = Rc::new("chunk");
/// let b = Rc::new("chunk");
/// let seq = [ByAddress(a.clone()), ByAddress(b.clone()), ByAddress(a.clone())];
/// assert_eq!(unique(&seq).len(), 2);
/// ```
///
/// Zero-sized values can share an address, so references to them are not
/// guaranteed to be told apart.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByAddress<P>(pub P);

// Only the data part of a possibly-fat pointer is compared: the same slice
// can be reached through vtables or lengths that aren't guaranteed to match.
fn address<P: Deref>(ptr: &P) -> *const () {
    (&**ptr as *const P::Target).cast::<()>()
}

impl<P: Deref> ByAddress<P> {
    /// Unwraps the pointer.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: Deref> Deref for ByAddress<P> {
    type Target = P::Target;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<P: Deref> PartialEq for ByAddress<P> {
    fn eq(&self, other: &Self) -> bool {
        address(&self.0) == address(&other.0)
    }
}

impl<P: Deref> Eq for ByAddress<P> {}

impl<P: Deref> Hash for ByAddress<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        address(&self.0).hash(state)
    }
}

/// Returns the pointers in `seq` whose pointee hasn't been pointed to by an
/// earlier element, in order of first occurrence.
pub fn unique_by_address<P: Deref + Clone>(seq: &[P]) -> Vec<P> {
    crate::unique_by_key(seq, address::<P>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::{rc::Rc, sync::Arc};

    #[test]
    fn equal_values_in_different_allocations_are_kept() {
        let a = Rc::new(String::from("main.js"));
        let b = Rc::new(String::from("main.js"));
        let seq = [a.clone(), b.clone(), a.clone(), b.clone()];

        let deduped = unique_by_address(&seq);
        assert_eq!(deduped.len(), 2);
        assert!(Rc::ptr_eq(&deduped[0], &a));
        assert!(Rc::ptr_eq(&deduped[1], &b));

        // By value, they're the same.
        assert_eq!(crate::unique(&seq).len(), 1);
    }

    #[test]
    fn references() {
        let values = [1, 1, 2];
        let seq = [&values[0], &values[1], &values[0], &values[2]];
        let deduped = unique_by_address(&seq);

        assert_eq!(deduped.len(), 3);
        assert!(std::ptr::eq(deduped[0], &values[0]));
        assert!(std::ptr::eq(deduped[1], &values[1]));
        assert!(std::ptr::eq(deduped[2], &values[2]));
    }

    #[test]
    fn unsized_pointees() {
        let a: Arc<str> = Arc::from("vendor");
        let b: Arc<str> = Arc::from("vendor");
        let seq = [a.clone(), a.clone(), b];
        assert_eq!(unique_by_address(&seq).len(), 2);
    }

    #[test]
    fn wrapper_works_with_hashing() {
        let a = Rc::new(0u8);
        let b = Rc::new(0u8);
        let seq = [
            ByAddress(a.clone()),
            ByAddress(a.clone()),
            ByAddress(b.clone()),
        ];
        let deduped = crate::unique_hashed(&seq);
        assert_eq!(deduped.len(), 2);
        assert_eq!(*deduped[1], 0);
        assert!(Rc::ptr_eq(&deduped[1].clone().into_inner(), &b));
    }
}
