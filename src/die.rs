// die.rs - The data half of a die: its face value, its identity, and the
// one place randomness comes from.

use std::fmt;

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::TrayConfig;

/// Number of faces on every die in the tray.
pub const FACES: u8 = 6;

/// A face value that is always in `1..=FACES`.
///
/// The field is private, so the only ways to get one are `new` (checked)
/// and `roll` (sampled). Code holding a `DieValue` never has to re-check
/// the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieValue(u8);

impl DieValue {
    pub fn new(value: u8) -> Option<Self> {
        (1..=FACES).contains(&value).then_some(DieValue(value))
    }

    /// Samples a face uniformly from `1..=FACES`.
    ///
    /// Generating a new die and re-rolling an existing one both go through
    /// here, so there is exactly one sampling code path.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        DieValue(rng.gen_range(1..=FACES))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable handle for one die. Allocated by the tray and never reused,
/// so two dice showing the same value are still told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Die {
    pub id: DieId,
    pub value: DieValue,
}

impl Die {
    /// Resample this die's value in place. Landing on the same face again
    /// is allowed (and happens 1 time in 6).
    pub fn roll<R: Rng>(&mut self, rng: &mut R) -> DieValue {
        self.value = DieValue::roll(rng);
        self.value
    }
}

/// The random source every roll draws from.
///
/// Held as a Resource instead of calling `thread_rng()` inline so a seed
/// from the config (or a test) makes a whole session reproducible.
#[derive(Resource)]
pub struct DiceRng(pub StdRng);

impl DiceRng {
    pub fn seeded(seed: u64) -> Self {
        DiceRng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        DiceRng(StdRng::from_entropy())
    }

    pub fn from_config(config: &TrayConfig) -> Self {
        match config.rng_seed {
            Some(seed) => {
                info!("Rolling with fixed seed {}", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}
