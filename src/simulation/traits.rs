//! Heritable creature traits.
//!
//! Traits are fixed at birth. Offspring draw each enabled trait uniformly from
//! a window around the parent's value and clamp it to the trait's floor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{Result, SimulationError};
use super::params::{CostModel, MutationFlags};

/// Lowest speed a creature can have.
pub const MIN_SPEED: f32 = 0.5;
/// Lowest sight a creature can have.
pub const MIN_SIGHT: f32 = 0.5;
/// Lowest size a creature can have.
pub const MIN_SIZE: f32 = 0.5;
/// Half-width of the window an offspring trait is drawn from.
pub const MUTATION_RANGE: f32 = 0.5;
/// Trait value of creatures created at the start of a run.
pub const DEFAULT_TRAIT: f32 = 1.0;

/// Speed, sight and size of a creature.
///
/// Deserialization goes through [`Traits::new`], so a snapshot can never load a
/// creature below a trait floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTraits")]
pub struct Traits {
    speed: f32,
    sight: f32,
    size: f32,
}

impl Default for Traits {
    fn default() -> Self {
        Self {
            speed: DEFAULT_TRAIT,
            sight: DEFAULT_TRAIT,
            size: DEFAULT_TRAIT,
        }
    }
}

impl Traits {
    /// Creates a trait set, rejecting any value below its floor.
    pub fn new(speed: f32, sight: f32, size: f32) -> Result<Self> {
        check_floor("speed", speed, MIN_SPEED)?;
        check_floor("sight", sight, MIN_SIGHT)?;
        check_floor("size", size, MIN_SIZE)?;
        Ok(Self { speed, sight, size })
    }

    /// Raw speed trait.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Raw sight trait.
    pub fn sight(&self) -> f32 {
        self.sight
    }

    /// Raw size trait.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Energy spent per movement step: `speed^a * size^b + sight^c`.
    pub fn movement_cost(&self, cost: &CostModel) -> f32 {
        cost.speed.apply(self.speed) * cost.size.apply(self.size) + cost.sight.apply(self.sight)
    }

    /// Derives an offspring's traits.
    ///
    /// Disabled traits are copied unchanged.
    pub fn mutate<R: Rng + ?Sized>(&self, flags: &MutationFlags, rng: &mut R) -> Self {
        Self {
            speed: inherit(self.speed, MIN_SPEED, flags.speed, rng),
            sight: inherit(self.sight, MIN_SIGHT, flags.sight, rng),
            size: inherit(self.size, MIN_SIZE, flags.size, rng),
        }
    }
}

#[derive(Deserialize)]
struct RawTraits {
    speed: f32,
    sight: f32,
    size: f32,
}

impl TryFrom<RawTraits> for Traits {
    type Error = SimulationError;

    fn try_from(raw: RawTraits) -> Result<Self> {
        Self::new(raw.speed, raw.sight, raw.size)
    }
}

fn check_floor(name: &'static str, value: f32, floor: f32) -> Result<()> {
    if value.is_finite() && value >= floor {
        Ok(())
    } else {
        Err(SimulationError::TraitBelowFloor { name, value, floor })
    }
}

fn inherit<R: Rng + ?Sized>(parent: f32, floor: f32, enabled: bool, rng: &mut R) -> f32 {
    if !enabled {
        return parent;
    }
    let drawn = rng.random_range(parent - MUTATION_RANGE..=parent + MUTATION_RANGE);
    drawn.max(floor)
}
