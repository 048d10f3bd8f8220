//! One-based list index.

use std::fmt;

/// A one-based index into the currently displayed patient list.
///
/// Users type one-based positions; the model stores patients zero-based.
/// Keeping the conversion in one place avoids off-by-one mistakes at the
/// call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    /// Create an Index from a one-based position. Returns `None` for zero.
    pub fn from_one_based(index: usize) -> Option<Self> {
        if index == 0 {
            return None;
        }
        Some(Self(index - 1))
    }

    /// The zero-based position, for indexing into a list.
    pub fn zero_based(self) -> usize {
        self.0
    }

    /// The one-based position, for display to the user.
    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_from_one_based() {
        let index = Index::from_one_based(1).unwrap();
        assert_eq!(index.zero_based(), 0);
        assert_eq!(index.one_based(), 1);

        let index = Index::from_one_based(5).unwrap();
        assert_eq!(index.zero_based(), 4);
    }

    #[test]
    fn test_index_rejects_zero() {
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn test_index_display_is_one_based() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(format!("{}", index), "3");
    }
}
