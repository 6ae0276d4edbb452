use serde::{Deserialize, Serialize};

/// Points earned by a single freeze, indexed by the number of rows it completed.
const POINTS_EARNED: [u32; 5] = [0, 1, 3, 6, 10];

/// The largest number of rows one freeze is expected to complete.
pub const MAX_COMPLETED_ROWS: usize = POINTS_EARNED.len() - 1;

/// The player's total points.
///
/// Scores are immutable; [`Self::update`] returns a new score.
///
/// # Example
///
/// ```
/// use blockfall_engine::Score;
///
/// let score = Score::new().update(2).update(4);
/// assert_eq!(score.points(), 13);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Score {
    points: u32,
}

impl Score {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_points(0)
    }

    #[must_use]
    pub const fn with_points(points: u32) -> Self {
        Self { points }
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Adds the points for one freeze that completed `completed_rows` rows.
    ///
    /// Counts above [`MAX_COMPLETED_ROWS`] cannot happen with four-cell pieces;
    /// they are clamped to the maximum and reported as a warning on stderr.
    #[must_use]
    pub fn update(self, completed_rows: usize) -> Self {
        let rows = if completed_rows > MAX_COMPLETED_ROWS {
            eprintln!(
                "warning: impossible number of completed rows: {completed_rows} (counting {MAX_COMPLETED_ROWS})"
            );
            MAX_COMPLETED_ROWS
        } else {
            completed_rows
        };
        Self::with_points(self.points.saturating_add(POINTS_EARNED[rows]))
    }
}
