//! Registry of every creature and food item in a run.
//!
//! The ecosystem exclusively owns both collections. Creatures and food never
//! point back into it; anything that needs the registry receives it as a
//! parameter. Registry order is the scan order of the tick engine and so
//! decides tie-breaks.

use log::info;
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::creature::{Creature, CreatureId, Target};
use super::error::Result;
use super::food::{Food, FoodId};
use super::params::Params;
use super::stats::TraitMeans;
use super::traits::Traits;

/// The state of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecosystem {
    /// All creatures, in scan order.
    pub creatures: Vec<Creature>,
    /// All food items currently in the arena.
    pub food: Vec<Food>,
    /// Completed generations.
    pub generation: u32,
    params: Params,
    next_id: u64,
}

impl Ecosystem {
    /// Creates a run with `params.initial_creatures` default creatures on the
    /// perimeter and `params.food_per_generation` food items.
    pub fn new<R: Rng + ?Sized>(params: Params, rng: &mut R) -> Result<Self> {
        let mut ecosystem = Self::empty(params)?;

        for _ in 0..ecosystem.params.initial_creatures {
            let (x, y) = ecosystem.random_perimeter_position(rng);
            let id = ecosystem.next_creature_id();
            ecosystem.add_creature(Creature::new(id, x, y, Traits::default()));
        }
        ecosystem.spawn_food(ecosystem.params.food_per_generation, rng);

        info!(
            "created ecosystem with {} creatures and {} food",
            ecosystem.creatures.len(),
            ecosystem.food.len()
        );
        Ok(ecosystem)
    }

    /// Creates a run with no creatures and no food.
    pub fn empty(params: Params) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            creatures: Vec::new(),
            food: Vec::new(),
            generation: 0,
            params,
            next_id: 0,
        })
    }

    /// Parameters of this run.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access to one creature alongside the run parameters.
    pub fn creature_mut_with_params(&mut self, index: usize) -> (&mut Creature, &Params) {
        (&mut self.creatures[index], &self.params)
    }

    /// Reserves an identifier for a new creature.
    pub fn next_creature_id(&mut self) -> CreatureId {
        CreatureId(self.bump_id())
    }

    /// Reserves an identifier for a new food item.
    pub fn next_food_id(&mut self) -> FoodId {
        FoodId(self.bump_id())
    }

    fn bump_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a creature to the registry.
    pub fn add_creature(&mut self, creature: Creature) {
        self.next_id = self.next_id.max(creature.id.0 + 1);
        self.creatures.push(creature);
    }

    /// Appends a food item to the registry.
    pub fn add_food(&mut self, food: Food) {
        self.next_id = self.next_id.max(food.id.0 + 1);
        self.food.push(food);
    }

    /// Spawns `count` food items at random positions inside the food inset.
    pub fn spawn_food<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let id = self.next_food_id();
            let item = Food::new_random(
                id,
                self.params.arena_width,
                self.params.arena_height,
                self.params.food_inset,
                rng,
            );
            self.food.push(item);
        }
    }

    /// Number of creatures alive.
    pub fn population_size(&self) -> usize {
        self.creatures.len()
    }

    /// Looks up a creature by id.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    /// Looks up a food item by id.
    pub fn food_item(&self, id: FoodId) -> Option<&Food> {
        self.food.iter().find(|f| f.id == id)
    }

    /// `true` if the target is still present in the registry.
    pub fn contains(&self, target: Target) -> bool {
        self.target_pos(target).is_some()
    }

    /// Position of a target that is still present.
    pub fn target_pos(&self, target: Target) -> Option<&Array1<f32>> {
        match target {
            Target::Food(id) => self.food_item(id).map(|f| &f.pos),
            Target::Creature(id) => self.creature(id).map(|c| &c.pos),
        }
    }

    /// Removes a target from the registry.
    ///
    /// # Returns
    ///
    /// For a creature, the index it occupied, so callers iterating by index
    /// can adjust. `None` for food or if the target was already gone.
    pub fn remove_target(&mut self, target: Target) -> Option<usize> {
        match target {
            Target::Food(id) => {
                self.food.retain(|f| f.id != id);
                None
            }
            Target::Creature(id) => {
                let index = self.creatures.iter().position(|c| c.id == id)?;
                self.creatures.remove(index);
                Some(index)
            }
        }
    }

    /// Center of the arena; creatures that see no food drift toward it.
    pub fn center(&self) -> Array1<f32> {
        Array1::from_vec(vec![
            self.params.arena_width / 2.0,
            self.params.arena_height / 2.0,
        ])
    }

    /// A random point on the arena boundary.
    pub fn random_perimeter_position<R: Rng + ?Sized>(&self, rng: &mut R) -> (f32, f32) {
        let w = self.params.arena_width;
        let h = self.params.arena_height;
        match rng.random_range(0..4) {
            0 => (rng.random_range(0.0..=w), 0.0),
            1 => (w, rng.random_range(0.0..=h)),
            2 => (rng.random_range(0.0..=w), h),
            _ => (0.0, rng.random_range(0.0..=h)),
        }
    }

    /// Mean of every mutating trait, or `None` when no creature is alive.
    pub fn trait_means(&self) -> Option<TraitMeans> {
        TraitMeans::of(&self.creatures, &self.params.mutation)
    }

    /// Saves the ecosystem state to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads an ecosystem state from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let ecosystem: Self = serde_json::from_str(&json)?;
        ecosystem.params.validate()?;
        Ok(ecosystem)
    }
}
