use serde::{Deserialize, Serialize};

use super::level::Level;

/// Countdowns, in ticks, until the next gravity drop and the next freeze.
///
/// Exactly one counter advances per game tick: `until_drop` while the current
/// piece can fall, `until_freeze` while it is resting on something. Counters
/// may go below zero; [`Self::should_drop`] and [`Self::should_freeze`] test
/// `<= 0` so a late check never misses an event.
///
/// # Example
///
/// ```
/// use blockfall_engine::Ticks;
///
/// let ticks = Ticks::new(1, 3).decrement_drop();
/// assert!(ticks.should_drop());
/// assert!(!ticks.reset_drop(5).should_drop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ticks {
    until_drop: i32,
    until_freeze: i32,
}

impl Default for Ticks {
    fn default() -> Self {
        Self::for_level(Level::for_index(0))
    }
}

impl Ticks {
    #[must_use]
    pub const fn new(until_drop: i32, until_freeze: i32) -> Self {
        Self {
            until_drop,
            until_freeze,
        }
    }

    /// Both counters set to the level's period.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        let period = level.drop_period_ticks();
        Self::new(period, period)
    }

    #[must_use]
    pub const fn until_drop(&self) -> i32 {
        self.until_drop
    }

    #[must_use]
    pub const fn until_freeze(&self) -> i32 {
        self.until_freeze
    }

    #[must_use]
    pub const fn decrement_drop(self) -> Self {
        Self::new(self.until_drop - 1, self.until_freeze)
    }

    #[must_use]
    pub const fn decrement_freeze(self) -> Self {
        Self::new(self.until_drop, self.until_freeze - 1)
    }

    #[must_use]
    pub const fn should_drop(&self) -> bool {
        self.until_drop <= 0
    }

    #[must_use]
    pub const fn should_freeze(&self) -> bool {
        self.until_freeze <= 0
    }

    #[must_use]
    pub const fn reset_drop(self, period: i32) -> Self {
        Self::new(period, self.until_freeze)
    }

    #[must_use]
    pub const fn reset_freeze(self, period: i32) -> Self {
        Self::new(self.until_drop, period)
    }
}
