//! Line-clear scoring
//!
//! Flat rate per cleared line: clearing four lines at once is worth
//! exactly four singles.

/// Points awarded for each cleared line
pub const POINTS_PER_LINE: u64 = 10;

/// Scoring calculation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a lock that cleared `lines` rows, returns the points gained
    pub fn add_clear(&mut self, lines: usize) -> u64 {
        let gained = lines as u64 * POINTS_PER_LINE;
        self.points += gained;
        self.lines += lines as u32;
        gained
    }

    /// Back to zero for a new session
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clear() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(1), 10);
        assert_eq!(score.points, 10);
        assert_eq!(score.lines, 1);
    }

    #[test]
    fn test_four_lines_has_no_bonus() {
        let mut score = Score::new();
        score.add_clear(4);
        assert_eq!(score.points, 40);
    }

    #[test]
    fn test_separate_clears_sum() {
        let mut score = Score::new();
        score.add_clear(1);
        score.add_clear(2);
        score.add_clear(4);
        assert_eq!(score.points, 70);
        assert_eq!(score.lines, 7);
    }

    #[test]
    fn test_empty_lock_scores_nothing() {
        let mut score = Score::new();
        assert_eq!(score.add_clear(0), 0);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_reset() {
        let mut score = Score::new();
        score.add_clear(3);
        score.reset();
        assert_eq!(score.points, 0);
        assert_eq!(score.lines, 0);
    }
}
