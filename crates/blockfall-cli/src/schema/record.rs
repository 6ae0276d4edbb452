use blockfall_engine::{Game, GameConfig, ShapeSeed};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A headless game run with everything needed to replay it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Timestamp when the record was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Board dimensions
    pub config: GameConfig,
    /// Where the shapes of new pieces came from
    pub shapes: ShapeSpec,
    /// Per-frame input script (`.LRUD`)
    pub script: String,
    /// Upper bound on the number of ticks to run
    pub max_ticks: usize,
    /// How the run ended
    pub outcome: SimulationOutcome,
}

/// Source of piece shapes for a recorded run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeSpec {
    /// Random shapes from a seeded generator
    Seed(ShapeSeed),
    /// A fixed cycle of shape letters (`IJLOSZT`)
    Sequence(String),
}

/// Final state of a run, compared field by field on replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub ticks_run: usize,
    pub score: u32,
    pub level_no: usize,
    pub is_over: bool,
    /// Text dump of the final board, one string per row
    pub board: Vec<String>,
}

impl SimulationOutcome {
    pub fn from_game<S>(game: &Game<S>, ticks_run: usize) -> Self {
        Self {
            ticks_run,
            score: game.score().points(),
            level_no: game.level_no(),
            is_over: game.is_over(),
            board: game.board().to_string().lines().map(str::to_owned).collect(),
        }
    }
}
