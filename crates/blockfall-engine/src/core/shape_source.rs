use std::{fmt, str::FromStr, sync::Arc};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::EmptyShapeSequenceError;

use super::shape::{Shape, ShapeKind};

/// Supplies the shape of each newly spawned piece.
///
/// A source is carried by value inside every board snapshot. Spawning clones
/// the source, draws from the clone, and stores the advanced clone in the new
/// board, so earlier snapshots are never affected and a replay from any
/// snapshot yields the same shapes.
pub trait ShapeSource: Clone + fmt::Debug {
    /// Draws the next shape, advancing this source.
    fn next_shape(&mut self) -> Shape;
}

/// Uniformly random shapes from a seeded PCG generator.
///
/// # Example
///
/// ```
/// use blockfall_engine::{RandomShapes, ShapeSeed, ShapeSource as _};
/// use rand::Rng as _;
///
/// let seed: ShapeSeed = rand::rng().random();
/// let mut a = RandomShapes::with_seed(seed);
/// let mut b = RandomShapes::with_seed(seed);
/// assert_eq!(a.next_shape(), b.next_shape());
/// ```
#[derive(Debug, Clone)]
pub struct RandomShapes {
    rng: Pcg32,
}

impl Default for RandomShapes {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomShapes {
    /// Creates a source with a random seed.
    ///
    /// For a reproducible sequence, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl ShapeSource for RandomShapes {
    fn next_shape(&mut self) -> Shape {
        self.rng.random::<ShapeKind>().shape()
    }
}

/// Cycles through a fixed list of shapes, for tests and scripted runs.
#[derive(Debug, Clone)]
pub struct ShapeSequence {
    kinds: Arc<[ShapeKind]>,
    next: usize,
}

impl ShapeSequence {
    pub fn new<I>(kinds: I) -> Result<Self, EmptyShapeSequenceError>
    where
        I: IntoIterator<Item = ShapeKind>,
    {
        let kinds: Arc<[ShapeKind]> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return Err(EmptyShapeSequenceError);
        }
        Ok(Self { kinds, next: 0 })
    }

    /// A sequence that always yields the same shape.
    #[must_use]
    pub fn repeat(kind: ShapeKind) -> Self {
        Self {
            kinds: Arc::new([kind]),
            next: 0,
        }
    }

    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl ShapeSource for ShapeSequence {
    fn next_shape(&mut self) -> Shape {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind.shape()
    }
}

/// Seed for deterministic shape generation.
///
/// This is a 128-bit (16-byte) seed for [`RandomShapes`]. It serializes as a
/// 32-digit lowercase hex string and can be parsed back from one.
///
/// ```
/// use blockfall_engine::ShapeSeed;
///
/// let seed: ShapeSeed = "000000000000000000000000000000ff".parse().unwrap();
/// assert_eq!(seed.to_string(), "000000000000000000000000000000ff");
/// assert!("xyz".parse::<ShapeSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSeed([u8; 16]);

impl ShapeSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 32 hex digits")]
pub struct InvalidSeedError {
    input: String,
}

impl FromStr for ShapeSeed {
    type Err = InvalidSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl fmt::Display for ShapeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for ShapeSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShapeSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `ShapeSeed` values with `rng.random()`.
impl Distribution<ShapeSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ShapeSeed(seed)
    }
}
