//! Checking that a sequence has no duplicates, without building a new one.

/// A pair of positions holding equal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Duplicate {
    /// The position of the earliest equal value.
    pub first: usize,
    /// The position of the repeated value, `first < repeat`.
    pub repeat: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("element at index {repeat} duplicates the element at index {first}")]
pub struct DuplicateError {
    pub first: usize,
    pub repeat: usize,
}

impl From<Duplicate> for DuplicateError {
    fn from(Duplicate { first, repeat }: Duplicate) -> Self {
        DuplicateError { first, repeat }
    }
}

/// Finds the earliest element of `seq` that is equal to an element before
/// it.
///
/// This is the first element that [`unique`](crate::unique) would drop.
pub fn find_duplicate<T: PartialEq>(seq: &[T]) -> Option<Duplicate> {
    seq.iter().enumerate().find_map(|(repeat, elt)| {
        seq[..repeat]
            .iter()
            .position(|earlier| earlier == elt)
            .map(|first| Duplicate { first, repeat })
    })
}

/// Returns true if no two elements of `seq` are equal.
pub fn is_unique<T: PartialEq>(seq: &[T]) -> bool {
    find_duplicate(seq).is_none()
}

/// Like [`is_unique`], but reports where the duplicate is.
///
/// ```
/// use ordered_unique::ensure_unique;
///
/// let err = ensure_unique(&["a.js", "b.js", "a.js"]).unwrap_err();
/// assert_eq!(err.to_string(), "element at index 2 duplicates the element at index 0");
/// ```
pub fn ensure_unique<T: PartialEq>(seq: &[T]) -> Result<(), DuplicateError> {
    match find_duplicate(seq) {
        Some(dup) => Err(dup.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn earliest_repeat_wins() {
        // Both 2 and 1 repeat, but the second 2 comes first.
        assert_eq!(
            find_duplicate(&[1, 2, 2, 3, 1]),
            Some(Duplicate {
                first: 1,
                repeat: 2
            })
        );
        assert_eq!(
            find_duplicate(&[7, 8, 9, 7, 7]),
            Some(Duplicate {
                first: 0,
                repeat: 3
            })
        );
    }

    #[test]
    fn no_duplicates() {
        assert_eq!(find_duplicate::<u8>(&[]), None);
        assert_eq!(find_duplicate(&[1, 2, 3]), None);
        assert!(is_unique(&["x"]));
        assert!(!is_unique(&["x", "x"]));
        assert_matches!(ensure_unique(&[3, 2, 1]), Ok(()));
    }

    #[test]
    fn nan_is_unique() {
        assert!(is_unique(&[f64::NAN, f64::NAN]));
    }

    #[test]
    fn error() {
        assert_matches!(
            ensure_unique(&['a', 'b', 'c', 'b']),
            Err(DuplicateError {
                first: 1,
                repeat: 3
            })
        );
    }
}
