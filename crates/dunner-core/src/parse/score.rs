//! Best-candidate selection shared by the scoring locators.

/// Keeps the highest-scoring candidate seen so far.
///
/// Replacement is strictly greater-than: an equal score never displaces
/// an earlier candidate, so ties resolve to the first candidate found.
/// The amount, debtor-block and company-name selections all reduce
/// through this type.
#[derive(Debug, Clone)]
pub struct Best<T> {
    value: Option<T>,
    score: i32,
}

impl<T> Best<T> {
    /// Empty selection; any candidate beats it.
    pub fn new() -> Self {
        Self {
            value: None,
            score: i32::MIN,
        }
    }

    /// Offer a candidate; returns true if it became the new best.
    pub fn offer(&mut self, value: T, score: i32) -> bool {
        if score > self.score {
            self.value = Some(value);
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Score of the current best, `i32::MIN` when empty.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Borrow the current best.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume into the winning candidate.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Best<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_greater_replaces() {
        let mut best = Best::new();
        assert!(best.offer("a", 1));
        assert!(best.offer("b", 3));
        assert_eq!(best.into_inner(), Some("b"));
    }

    #[test]
    fn test_equal_score_keeps_first() {
        let mut best = Best::new();
        assert!(best.offer("first", 2));
        assert!(!best.offer("second", 2));
        assert_eq!(best.into_inner(), Some("first"));
    }

    #[test]
    fn test_negative_scores_still_win_over_empty() {
        let mut best = Best::new();
        assert!(best.offer("bank block", -4));
        assert_eq!(best.score(), -4);
        assert_eq!(best.into_inner(), Some("bank block"));
    }
}
