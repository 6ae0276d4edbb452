use std::path::PathBuf;

use anyhow::{Context as _, bail};

use crate::{schema::record::SimulationRecord, script::Script, simulation, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// Path to the record file (JSON format)
    record_file: PathBuf,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg { record_file } = arg;

    eprintln!("Loading record from {}", record_file.display());
    let record: SimulationRecord = util::read_json_file("record", record_file)?;
    let script: Script = record
        .script
        .parse()
        .with_context(|| format!("invalid script in {}", record_file.display()))?;

    let outcome = simulation::run(&record.config, &record.shapes, &script, record.max_ticks)?;
    util::print_board(&outcome.board);

    if outcome != record.outcome {
        bail!(
            "replay diverged from the record made at {}: expected {:?}, got {:?}",
            record.recorded_at,
            record.outcome,
            outcome
        );
    }
    eprintln!(
        "Replay matches: {} ticks, score {}, level {}",
        outcome.ticks_run, outcome.score, outcome.level_no
    );

    Ok(())
}
