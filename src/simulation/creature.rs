//! Creature behavior, state, and reproduction.
//!
//! A creature owns its position, its heritable traits and its per-generation
//! counters. It never holds a reference into the registry; the cached target
//! and threat are identifiers that the tick engine revalidates before use.

use std::fmt;

use log::info;
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::food::{Food, FoodId};
use super::geometric_utils::{clamp_to_arena, close_enough, distance, movement_delta, reverse};
use super::locatable::Locatable;
use super::params::{CostModel, Params};
use super::traits::Traits;

/// Energy a creature starts every generation with.
pub const STARTING_ENERGY: f32 = 1500.0;
/// A larger creature is only fled from when it is this close.
pub const DANGER_ZONE: f32 = 150.0;
/// Food needed within one generation to reproduce.
pub const FULL: u32 = 2;
/// Converts the speed trait into distance per tick.
pub const SPEED_MODIFIER: f32 = 2.0;
/// Converts the sight trait into viewing distance.
pub const SIGHT_MODIFIER: f32 = 200.0;
/// Size ratio a predator needs over its prey (20% larger).
pub const EAT_SIZE: f32 = 1.2;

/// Stable identifier of a creature within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub u64);

/// Something a creature can forage for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A food item.
    Food(FoodId),
    /// A creature small enough to be eaten.
    Creature(CreatureId),
}

/// Returns `true` if `predator` is large enough to eat `prey`.
///
/// The same rule decides both what a creature hunts and what it flees from.
pub fn can_eat(predator: &Creature, prey: &Creature) -> bool {
    predator.size() / prey.size() >= EAT_SIZE
}

/// A foraging creature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier for this creature.
    pub id: CreatureId,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    traits: Traits,
    /// Remaining energy; the creature stops once this reaches zero.
    pub energy: f32,
    /// Food eaten in the current generation.
    pub food_eaten: u32,
    /// Cached foraging target, revalidated before use.
    #[serde(skip)]
    pub closest_food: Option<Target>,
    /// Cached nearby predator, refreshed periodically.
    #[serde(skip)]
    pub threat: Option<CreatureId>,
}

impl Creature {
    /// Creates a creature at `(x, y)` with birth defaults for energy and counters.
    pub fn new(id: CreatureId, x: f32, y: f32, traits: Traits) -> Self {
        Self {
            id,
            pos: Array1::from_vec(vec![x, y]),
            traits,
            energy: STARTING_ENERGY,
            food_eaten: 0,
            closest_food: None,
            threat: None,
        }
    }

    /// Creates an offspring of `self` at `(x, y)`.
    ///
    /// Each trait enabled in `params.mutation` is redrawn around the parent's
    /// value; the rest are inherited exactly.
    pub fn offspring<R: Rng + ?Sized>(
        &self,
        id: CreatureId,
        x: f32,
        y: f32,
        params: &Params,
        rng: &mut R,
    ) -> Self {
        let child = Self::new(id, x, y, self.traits.mutate(&params.mutation, rng));
        info!("{child} born from parent {self}");
        child
    }

    /// Heritable traits.
    pub fn traits(&self) -> &Traits {
        &self.traits
    }

    /// Raw speed trait.
    pub fn speed(&self) -> f32 {
        self.traits.speed()
    }

    /// Raw sight trait.
    pub fn sight(&self) -> f32 {
        self.traits.sight()
    }

    /// Raw size trait.
    pub fn size(&self) -> f32 {
        self.traits.size()
    }

    /// Distance covered in one tick.
    pub fn movement_speed(&self) -> f32 {
        self.speed() * SPEED_MODIFIER
    }

    /// Distance beyond which objects cannot be tracked.
    pub fn seeing_distance(&self) -> f32 {
        self.sight() * SIGHT_MODIFIER
    }

    /// Finds the nearest food item or edible creature.
    ///
    /// Food is scanned first, then creatures; a creature only replaces the
    /// current best if it is strictly closer and small enough to eat. Equal
    /// distances keep the earlier candidate.
    ///
    /// # Arguments
    ///
    /// * `food` - Food items in the arena
    /// * `creatures` - Creatures in the arena (`self` is skipped)
    ///
    /// # Returns
    ///
    /// The closest target, or `None` if there is nothing to pursue.
    pub fn find_closest_target(&self, food: &[Food], creatures: &[Creature]) -> Option<Target> {
        let mut best: Option<(Target, f32)> = None;

        for item in food {
            let d = distance(&self.pos, &item.pos);
            if best.is_none_or(|(_, closest)| d < closest) {
                best = Some((Target::Food(item.id), d));
            }
        }

        for other in creatures {
            if other.id == self.id {
                continue;
            }
            let d = distance(&self.pos, &other.pos);
            if best.is_none_or(|(_, closest)| d < closest) && can_eat(self, other) {
                best = Some((Target::Creature(other.id), d));
            }
        }

        best.map(|(target, _)| target)
    }

    /// Finds the first creature that could eat `self` and is close enough to matter.
    ///
    /// This is a cheap check: the first match wins, there is no distance
    /// minimization.
    pub fn find_hostile(&self, creatures: &[Creature]) -> Option<CreatureId> {
        let range = self.seeing_distance().min(DANGER_ZONE);
        creatures
            .iter()
            .filter(|other| other.id != self.id)
            .find(|other| can_eat(other, self) && close_enough(&self.pos, &other.pos, range))
            .map(|other| other.id)
    }

    /// Steps toward `destination` and pays the movement cost.
    ///
    /// The position is clamped to the arena; the cost is charged for the full
    /// attempted step regardless.
    ///
    /// # Returns
    ///
    /// The attempted displacement.
    pub fn move_toward(&mut self, destination: &Array1<f32>, params: &Params) -> Array1<f32> {
        let delta = movement_delta(&self.pos, destination, self.movement_speed());
        self.apply_step(&delta, params);
        delta
    }

    /// Steps directly away from `threat` and pays the movement cost.
    pub fn move_away_from(&mut self, threat: &Array1<f32>, params: &Params) -> Array1<f32> {
        let delta = reverse(&movement_delta(&self.pos, threat, self.movement_speed()));
        self.apply_step(&delta, params);
        delta
    }

    fn apply_step(&mut self, delta: &Array1<f32>, params: &Params) {
        self.pos += delta;
        clamp_to_arena(&mut self.pos, params.arena_width, params.arena_height);
        self.expend_energy(&params.cost);
    }

    /// Deducts the cost of one movement step.
    ///
    /// Energy may become negative; the creature is inactive from then on.
    pub fn expend_energy(&mut self, cost: &CostModel) {
        self.energy -= self.traits.movement_cost(cost);
    }

    /// Records one successful meal.
    pub fn eat(&mut self) {
        self.food_eaten += 1;
    }

    /// Restores the start-of-generation state.
    pub fn reset_state(&mut self) {
        self.energy = STARTING_ENERGY;
        self.food_eaten = 0;
        self.closest_food = None;
        self.threat = None;
    }

    /// `true` once energy has run out.
    pub fn is_out_of_energy(&self) -> bool {
        self.energy <= 0.0
    }

    /// `true` once the creature has eaten enough to reproduce.
    pub fn is_full(&self) -> bool {
        self.food_eaten >= FULL
    }

    /// `true` while the creature can still move and wants to eat.
    pub fn is_active(&self) -> bool {
        !self.is_out_of_energy() && !self.is_full()
    }
}

impl Locatable for Creature {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "creature {} (speed={:.3} size={:.3} sight={:.3} energy={:.1} food={})",
            self.id.0,
            self.speed(),
            self.size(),
            self.sight(),
            self.energy,
            self.food_eaten
        )
    }
}
