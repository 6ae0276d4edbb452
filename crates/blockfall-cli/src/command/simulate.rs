use std::path::PathBuf;

use blockfall_engine::{GameConfig, ShapeSeed};
use rand::Rng as _;

use crate::{
    schema::record::{ShapeSpec, SimulationRecord},
    script::Script,
    simulation, util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of rows on the board
    #[clap(long, default_value_t = 20)]
    height: usize,
    /// Number of columns on the board
    #[clap(long, default_value_t = 10)]
    width: usize,
    /// Seed for random shapes (32 hex digits); random if omitted
    #[clap(long, conflicts_with = "sequence")]
    seed: Option<ShapeSeed>,
    /// Fixed cycle of shape letters (`IJLOSZT`) instead of random shapes
    #[clap(long)]
    sequence: Option<String>,
    /// Per-frame input script: `.` idle, `L` left, `R` right, `U` rotate, `D` soft drop
    #[clap(long, default_value = "")]
    script: Script,
    /// Maximum number of ticks to run
    #[clap(long, default_value_t = 1000)]
    ticks: usize,
    /// Output file for the JSON record (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        height,
        width,
        seed,
        sequence,
        script,
        ticks,
        output,
    } = arg;

    let config = GameConfig {
        height: *height,
        width: *width,
    };
    let shapes = match (seed, sequence) {
        (_, Some(letters)) => ShapeSpec::Sequence(letters.clone()),
        (Some(seed), None) => ShapeSpec::Seed(*seed),
        (None, None) => ShapeSpec::Seed(rand::rng().random()),
    };
    if let ShapeSpec::Seed(seed) = &shapes {
        eprintln!("Using seed {seed}");
    }

    let outcome = simulation::run(&config, &shapes, script, *ticks)?;

    eprintln!(
        "Ran {} ticks: score {}, level {}{}",
        outcome.ticks_run,
        outcome.score,
        outcome.level_no,
        if outcome.is_over { ", game over" } else { "" }
    );
    util::print_board(&outcome.board);

    let record = SimulationRecord {
        recorded_at: chrono::Utc::now(),
        config,
        shapes,
        script: script.to_string(),
        max_ticks: *ticks,
        outcome,
    };
    if let Some(path) = output {
        eprintln!("Saving record to {}", path.display());
    }
    util::save_json(&record, output.as_deref())?;

    Ok(())
}
