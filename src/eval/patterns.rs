//! Pattern weights for position evaluation
//!
//! Runs of two and three marks are scored by how many of their ends are
//! open. Own patterns are rewarded more than opponent patterns are
//! penalised, so the evaluation is deliberately asymmetric.

use super::Score;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Immediate four in a row
    pub const WIN: Score = Score::INFINITY;

    /// Two-side-open three: _XXX_
    pub const OPEN_THREE: Score = 200.0;
    /// One-side-open three: |XXX_ or OXXX_
    pub const CLOSED_THREE: Score = 150.0;
    /// Two-side-open two: _XX_
    pub const OPEN_TWO: Score = 20.0;
    /// One-side-open two: |XX_ or OXX_
    pub const CLOSED_TWO: Score = 5.0;

    // Penalties applied to the opponent's patterns
    pub const OPP_OPEN_THREE: Score = 80.0;
    pub const OPP_CLOSED_THREE: Score = 40.0;
    pub const OPP_OPEN_TWO: Score = 15.0;
    pub const OPP_CLOSED_TWO: Score = 2.0;
}

/// Classification of a counted run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    OpenThree,
    ClosedThree,
    OpenTwo,
    ClosedTwo,
}

impl PatternKind {
    /// Classify a run of `len` marks with `open_ends` empty neighbours.
    /// Runs with no open end, or of a length other than 2 or 3, are ignored.
    #[inline]
    pub fn classify(len: usize, open_ends: u8) -> Option<PatternKind> {
        match (len, open_ends) {
            (3, 2) => Some(PatternKind::OpenThree),
            (3, 1) => Some(PatternKind::ClosedThree),
            (2, 2) => Some(PatternKind::OpenTwo),
            (2, 1) => Some(PatternKind::ClosedTwo),
            _ => None,
        }
    }

    /// Weight when the pattern belongs to the evaluating side
    #[inline]
    pub fn own_weight(self) -> Score {
        match self {
            PatternKind::OpenThree => PatternScore::OPEN_THREE,
            PatternKind::ClosedThree => PatternScore::CLOSED_THREE,
            PatternKind::OpenTwo => PatternScore::OPEN_TWO,
            PatternKind::ClosedTwo => PatternScore::CLOSED_TWO,
        }
    }

    /// Penalty when the pattern belongs to the opponent
    #[inline]
    pub fn opponent_weight(self) -> Score {
        match self {
            PatternKind::OpenThree => PatternScore::OPP_OPEN_THREE,
            PatternKind::ClosedThree => PatternScore::OPP_CLOSED_THREE,
            PatternKind::OpenTwo => PatternScore::OPP_OPEN_TWO,
            PatternKind::ClosedTwo => PatternScore::OPP_CLOSED_TWO,
        }
    }
}

/// Pattern census for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternCounts {
    pub open_three: u32,
    pub closed_three: u32,
    pub open_two: u32,
    pub closed_two: u32,
}

impl PatternCounts {
    /// Record one occurrence of `kind`
    #[inline]
    pub fn add(&mut self, kind: PatternKind) {
        match kind {
            PatternKind::OpenThree => self.open_three += 1,
            PatternKind::ClosedThree => self.closed_three += 1,
            PatternKind::OpenTwo => self.open_two += 1,
            PatternKind::ClosedTwo => self.closed_two += 1,
        }
    }

    fn weighted(&self, weight: fn(PatternKind) -> Score) -> Score {
        Score::from(self.open_three) * weight(PatternKind::OpenThree)
            + Score::from(self.closed_three) * weight(PatternKind::ClosedThree)
            + Score::from(self.open_two) * weight(PatternKind::OpenTwo)
            + Score::from(self.closed_two) * weight(PatternKind::ClosedTwo)
    }

    /// Score contribution when these are the evaluating side's patterns
    pub fn own_score(&self) -> Score {
        self.weighted(PatternKind::own_weight)
    }

    /// Penalty when these are the opponent's patterns
    pub fn opponent_score(&self) -> Score {
        self.weighted(PatternKind::opponent_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_opponent_penalties_smaller_than_rewards() {
        for kind in [
            PatternKind::OpenThree,
            PatternKind::ClosedThree,
            PatternKind::OpenTwo,
            PatternKind::ClosedTwo,
        ] {
            assert!(kind.opponent_weight() < kind.own_weight(), "{:?}", kind);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(PatternKind::classify(3, 2), Some(PatternKind::OpenThree));
        assert_eq!(PatternKind::classify(3, 1), Some(PatternKind::ClosedThree));
        assert_eq!(PatternKind::classify(2, 2), Some(PatternKind::OpenTwo));
        assert_eq!(PatternKind::classify(2, 1), Some(PatternKind::ClosedTwo));
        assert_eq!(PatternKind::classify(3, 0), None);
        assert_eq!(PatternKind::classify(4, 2), None);
    }

    #[test]
    fn test_counts_weighted() {
        let mut counts = PatternCounts::default();
        counts.add(PatternKind::OpenThree);
        counts.add(PatternKind::ClosedTwo);
        counts.add(PatternKind::ClosedTwo);
        assert_eq!(counts.own_score(), 210.0);
        assert_eq!(counts.opponent_score(), 84.0);
    }
}
