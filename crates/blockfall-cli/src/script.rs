use std::{fmt, str::FromStr};

use blockfall_engine::{Game, ShapeSource};

/// One frame of player input, applied before that frame's tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Idle,
    Left,
    Right,
    Rotate,
    SoftDrop,
}

impl Input {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Input::Idle),
            'L' => Some(Input::Left),
            'R' => Some(Input::Right),
            'U' => Some(Input::Rotate),
            'D' => Some(Input::SoftDrop),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Input::Idle => '.',
            Input::Left => 'L',
            Input::Right => 'R',
            Input::Rotate => 'U',
            Input::SoftDrop => 'D',
        }
    }

    pub fn apply<S>(self, game: &Game<S>) -> Game<S>
    where
        S: ShapeSource,
    {
        match self {
            Input::Idle => game.clone(),
            Input::Left => game.move_current_piece_left(),
            Input::Right => game.move_current_piece_right(),
            Input::Rotate => game.rotate_current_piece(),
            Input::SoftDrop => game.move_current_piece_down(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unexpected input {found:?} at position {index} (expected one of `.LRUD`)")]
pub struct ScriptParseError {
    index: usize,
    found: char,
}

/// Per-frame inputs, written one character per frame: `.` idle, `L` left,
/// `R` right, `U` rotate, `D` soft drop. Whitespace is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    inputs: Vec<Input>,
}

impl Script {
    /// Input for `frame`; frames past the end of the script are idle.
    pub fn input_at(&self, frame: usize) -> Input {
        self.inputs.get(frame).copied().unwrap_or(Input::Idle)
    }
}

impl FromStr for Script {
    type Err = ScriptParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inputs = s
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(index, found)| Input::from_char(found).ok_or(ScriptParseError { index, found }))
            .collect::<Result<_, _>>()?;
        Ok(Self { inputs })
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inputs
            .iter()
            .try_for_each(|input| write!(f, "{}", input.as_char()))
    }
}
