use serde::{Deserialize, Serialize};

use super::score::Score;

/// A difficulty level.
///
/// Levels form a fixed ladder of [`Level::COUNT`] steps. Reaching level `i`
/// requires a cumulative score of `R(i)`, where `R(0) = 0` and each step costs
/// 1.5 times the previous one, starting at 8 points: 0, 8, 20, 38, 65, ...
/// Thresholds that fall between integers are rounded up, so a score reaches a
/// level exactly when it is at least the fractional threshold.
///
/// Higher levels drop pieces faster: level index `i` waits `COUNT - i` ticks.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Level, Score};
///
/// let level = Level::for_score(Score::with_points(20));
/// assert_eq!(level.index(), 2);
/// assert_eq!(level.level_no(), 3);
/// assert_eq!(level.drop_period_ticks(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Level {
    index: usize,
    required_score: u32,
    drop_period_ticks: i32,
}

/// Fixed-point scale that keeps every `8 * 1.5^k` step exact for `k < COUNT - 1`.
const SCALE: u32 = 1 << (Level::COUNT - 2);

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const LEVELS: [Level; Level::COUNT] = {
    let mut levels = [Level {
        index: 0,
        required_score: 0,
        drop_period_ticks: 0,
    }; Level::COUNT];
    let mut required_scaled: u32 = 0;
    let mut delta_scaled = 8 * SCALE;
    let mut index = 0;
    while index < Level::COUNT {
        let period = (Level::COUNT - index) as i32;
        levels[index] = Level {
            index,
            required_score: required_scaled.div_ceil(SCALE),
            drop_period_ticks: if period < 1 { 1 } else { period },
        };
        required_scaled += delta_scaled;
        delta_scaled = delta_scaled / 2 * 3;
        index += 1;
    }
    levels
};

impl Level {
    /// Number of levels in the ladder.
    pub const COUNT: usize = 10;

    /// All levels, lowest first.
    pub const LEVELS: [Self; Self::COUNT] = LEVELS;

    /// Returns the level at `index`, or the last level if `index` is past the ladder.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index < Self::COUNT {
            LEVELS[index]
        } else {
            LEVELS[Self::COUNT - 1]
        }
    }

    /// Returns the highest level whose required score is at most `score`.
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        LEVELS
            .iter()
            .rev()
            .find(|level| level.required_score <= score.points())
            .copied()
            .unwrap_or(LEVELS[0])
    }

    /// Zero-based index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// One-based number for display.
    #[must_use]
    pub const fn level_no(&self) -> usize {
        self.index + 1
    }

    /// Points needed to reach this level.
    #[must_use]
    pub const fn required_score(&self) -> u32 {
        self.required_score
    }

    /// Ticks between gravity drops, and before a resting piece freezes.
    #[must_use]
    pub const fn drop_period_ticks(&self) -> i32 {
        self.drop_period_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_scores() {
        let required: Vec<_> = Level::LEVELS.iter().map(Level::required_score).collect();
        // 0, 8, 20, 38, 65, 105.5, 166.25, 257.375, 394.0625, 599.09375
        assert_eq!(required, [0, 8, 20, 38, 65, 106, 167, 258, 395, 600]);
    }

    #[test]
    fn test_for_score() {
        for (points, expected_index) in [
            (0, 0),
            (7, 0),
            (8, 1),
            (19, 1),
            (20, 2),
            (37, 2),
            (38, 3),
            (105, 4),
            (106, 5),
            (599, 8),
            (600, 9),
            (100_000, 9),
        ] {
            let level = Level::for_score(Score::with_points(points));
            assert_eq!(level.index(), expected_index, "score {points}");
        }
    }

    #[test]
    fn test_drop_period_ticks() {
        for (index, expected) in [(0, 10), (1, 9), (2, 8), (9, 1)] {
            assert_eq!(Level::for_index(index).drop_period_ticks(), expected);
        }
        for pair in Level::LEVELS.windows(2) {
            assert_eq!(pair[0].drop_period_ticks() - 1, pair[1].drop_period_ticks());
        }
    }

    #[test]
    fn test_level_no_is_one_based() {
        assert_eq!(Level::for_index(0).level_no(), 1);
        assert_eq!(Level::for_index(9).level_no(), 10);
    }

    #[test]
    fn test_for_index_past_ladder() {
        assert_eq!(Level::for_index(42), Level::for_index(Level::COUNT - 1));
    }
}
