// Jaccard similarity over word sets.
//
//   |A ∩ B| / |A ∪ B|
//
// The score keeps the two integer counts rather than a bare f64, so that the
// two-decimal rendering can round the exact ratio. Rounding is half-up on the
// exact value: 1/8 = 0.125 renders as "0.13", 3/40 = 0.075 renders as "0.08",
// and no binary floating-point representation error can push a tie either way.
//
// Two empty sets have an empty union; that case is defined as 0.0.

use std::collections::HashSet;
use std::fmt;

/// Intersection and union sizes for one pair of word sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jaccard {
    pub intersection: usize,
    pub union: usize,
}

impl Jaccard {
    /// Compare two word sets.
    pub fn between(a: &HashSet<String>, b: &HashSet<String>) -> Self {
        // Look up the smaller set's words in the larger one
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let intersection = small.iter().filter(|w| large.contains(*w)).count();

        Self {
            intersection,
            union: a.len() + b.len() - intersection,
        }
    }

    /// The similarity as a float in [0.0, 1.0].
    pub fn similarity(&self) -> f64 {
        if self.union == 0 {
            0.0
        } else {
            self.intersection as f64 / self.union as f64
        }
    }

    /// The similarity in hundredths, rounded half-up (0..=100).
    pub fn hundredths(&self) -> usize {
        if self.union == 0 {
            return 0;
        }
        // floor(100 * i / u + 1/2) without leaving integer arithmetic
        (200 * self.intersection + self.union) / (2 * self.union)
    }
}

/// Renders with exactly two decimal places, e.g. `0.50`.
impl fmt::Display for Jaccard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.hundredths();
        write!(f, "{}.{:02}", h / 100, h % 100)
    }
}

/// Shorthand for `Jaccard::between(a, b).similarity()`.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    Jaccard::between(a, b).similarity()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_sets() {
        let a = set(&["the", "cat", "sat"]);
        let score = Jaccard::between(&a, &a);
        assert_eq!(score.similarity(), 1.0);
        assert_eq!(score.to_string(), "1.00");
    }

    #[test]
    fn test_no_overlap() {
        let score = Jaccard::between(&set(&["a", "b"]), &set(&["c", "d"]));
        assert_eq!(score, Jaccard { intersection: 0, union: 4 });
        assert_eq!(score.to_string(), "0.00");
    }

    #[test]
    fn test_partial_overlap() {
        let score = Jaccard::between(&set(&["the", "cat", "sat"]), &set(&["the", "dog", "sat"]));
        assert_eq!(score, Jaccard { intersection: 2, union: 4 });
        assert_eq!(score.similarity(), 0.5);
    }

    #[test]
    fn test_both_empty_is_zero() {
        let empty = HashSet::new();
        let score = Jaccard::between(&empty, &empty);
        assert_eq!(score.union, 0);
        assert_eq!(score.similarity(), 0.0);
        assert_eq!(score.to_string(), "0.00");
    }

    #[test]
    fn test_one_empty_is_zero() {
        assert_eq!(jaccard(&HashSet::new(), &set(&["a"])), 0.0);
    }

    #[test]
    fn test_rounding_ties_go_up() {
        // 1/8 = 0.125 exactly
        assert_eq!(Jaccard { intersection: 1, union: 8 }.to_string(), "0.13");
        // 3/40 = 0.075, stored as 0.07499999... in binary
        assert_eq!(Jaccard { intersection: 3, union: 40 }.to_string(), "0.08");
        // 1/40 = 0.025
        assert_eq!(Jaccard { intersection: 1, union: 40 }.to_string(), "0.03");
    }

    #[test]
    fn test_rounding_non_ties() {
        // 1/3 = 0.333..
        assert_eq!(Jaccard { intersection: 1, union: 3 }.to_string(), "0.33");
        // 2/3 = 0.666..
        assert_eq!(Jaccard { intersection: 2, union: 3 }.to_string(), "0.67");
        // 5/9 = 0.555..
        assert_eq!(Jaccard { intersection: 5, union: 9 }.to_string(), "0.56");
        // 1/201 = 0.00497..
        assert_eq!(Jaccard { intersection: 1, union: 201 }.to_string(), "0.00");
        // 199/200 = 0.995, a tie just under 1
        assert_eq!(Jaccard { intersection: 199, union: 200 }.to_string(), "1.00");
    }
}
