//! Display index as typed by the user (1-based) and as used internally
//! (0-based).

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for zero.
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion_rejects_zero() {
        assert_eq!(Index::from_one_based(0), None);
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.to_string(), "3");
    }
}
