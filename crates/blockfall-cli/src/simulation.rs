use anyhow::{Context as _, anyhow};
use blockfall_engine::{Game, GameConfig, RandomShapes, ShapeKind, ShapeSequence, ShapeSource};

use crate::{
    schema::record::{ShapeSpec, SimulationOutcome},
    script::Script,
};

/// Plays a game from `config` until it is over or `max_ticks` ticks have run.
pub fn run(
    config: &GameConfig,
    shapes: &ShapeSpec,
    script: &Script,
    max_ticks: usize,
) -> anyhow::Result<SimulationOutcome> {
    let outcome = match shapes {
        ShapeSpec::Seed(seed) => {
            let game = config.new_game(RandomShapes::with_seed(*seed))?;
            play(game, script, max_ticks)
        }
        ShapeSpec::Sequence(letters) => {
            let game = config.new_game(parse_sequence(letters)?)?;
            play(game, script, max_ticks)
        }
    };
    Ok(outcome)
}

fn play<S>(mut game: Game<S>, script: &Script, max_ticks: usize) -> SimulationOutcome
where
    S: ShapeSource,
{
    let mut ticks_run = 0;
    while ticks_run < max_ticks && !game.is_over() {
        game = script
            .input_at(ticks_run)
            .apply(&game)
            .drop_or_freeze_current_piece();
        ticks_run += 1;
    }
    SimulationOutcome::from_game(&game, ticks_run)
}

pub fn parse_sequence(letters: &str) -> anyhow::Result<ShapeSequence> {
    let kinds = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            ShapeKind::from_char(c)
                .ok_or_else(|| anyhow!("unknown shape letter {c:?} (expected one of `IJLOSZT`)"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    ShapeSequence::new(kinds).with_context(|| format!("invalid shape sequence {letters:?}"))
}

#[cfg(test)]
mod tests {
    use blockfall_engine::ShapeSeed;

    use super::*;

    fn small_config() -> GameConfig {
        GameConfig {
            height: 4,
            width: 4,
        }
    }

    #[test]
    fn test_scripted_double_clear() {
        let script: Script = "LL".parse().unwrap();
        let shapes = ShapeSpec::Sequence("O".to_owned());
        let outcome = run(&small_config(), &shapes, &script, 60).unwrap();

        assert_eq!(outcome.ticks_run, 60);
        assert_eq!(outcome.score, 3, "two squares side by side clear two rows");
        assert_eq!(outcome.level_no, 1);
        assert!(!outcome.is_over);
        assert_eq!(outcome.board, ["..YY", "..YY", "....", "...."]);
    }

    #[test]
    fn test_stops_at_game_over() {
        let shapes = ShapeSpec::Sequence("O".to_owned());
        let outcome = run(&small_config(), &shapes, &Script::default(), 10_000).unwrap();
        assert!(outcome.is_over);
        assert!(outcome.ticks_run < 10_000);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let shapes = ShapeSpec::Seed(ShapeSeed::from_bytes([42; 16]));
        let script: Script = "LLU.RRD.UUL".parse().unwrap();
        let config = GameConfig::default();
        let first = run(&config, &shapes, &script, 2000).unwrap();
        let second = run(&config, &shapes, &script, 2000).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_sequence() {
        let sequence = parse_sequence("I O T").unwrap();
        assert_eq!(
            sequence.kinds().collect::<Vec<_>>(),
            [ShapeKind::Line, ShapeKind::Square, ShapeKind::Pyramid]
        );
        assert!(parse_sequence("IX").is_err());
        assert!(parse_sequence("").is_err());
    }
}
