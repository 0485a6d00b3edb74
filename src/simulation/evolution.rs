//! End-of-generation reconciliation.
//!
//! Runs once the tick engine reports that nothing moved: clears and restocks
//! food, moves survivors back to the perimeter, lets full creatures reproduce,
//! culls creatures that ate nothing and advances the generation counter.

use log::{info, warn};
use rand::Rng;

use super::ecosystem::Ecosystem;
use super::events::{EventQueue, SimulationEvent};
use super::locatable::Locatable;

/// What the driver should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Creatures remain; resume ticking.
    Continue,
    /// The registry is empty; the run is over.
    Extinct,
}

/// Moves the ecosystem into its next generation.
///
/// Survival and reproduction are decided from each creature's food count as it
/// stood before the transition. Offspring are appended after every parent has
/// been processed, so they are never culled by the transition that created them.
///
/// # Arguments
///
/// * `ecosystem` - Registry to update
/// * `food_count` - Food items to spawn for the new generation
/// * `rng` - Random number source for positions and mutation
/// * `events` - Receives births, deaths and the generation change
pub fn advance_generation<R: Rng + ?Sized>(
    ecosystem: &mut Ecosystem,
    food_count: usize,
    rng: &mut R,
    events: &mut EventQueue,
) -> GenerationOutcome {
    ecosystem.food.clear();
    ecosystem.spawn_food(food_count, rng);
    events.push(SimulationEvent::FoodSpawned { count: food_count });

    let previous = std::mem::take(&mut ecosystem.creatures);
    let mut survivors = Vec::with_capacity(previous.len());
    let mut offspring = Vec::new();

    for mut creature in previous {
        if creature.food_eaten == 0 {
            info!("{creature} has perished");
            events.push(SimulationEvent::CreaturePerished {
                creature_id: creature.id,
            });
            continue;
        }

        let (x, y) = ecosystem.random_perimeter_position(rng);
        creature.set_pos(x, y);

        if creature.is_full() {
            let (x, y) = ecosystem.random_perimeter_position(rng);
            let id = ecosystem.next_creature_id();
            let child = creature.offspring(id, x, y, ecosystem.params(), rng);
            events.push(SimulationEvent::CreatureBorn {
                creature_id: child.id,
                parent_id: creature.id,
            });
            offspring.push(child);
        }

        creature.reset_state();
        survivors.push(creature);
    }

    survivors.append(&mut offspring);
    ecosystem.creatures = survivors;
    ecosystem.generation += 1;

    if ecosystem.creatures.is_empty() {
        warn!("no creatures left after generation {}", ecosystem.generation);
        events.push(SimulationEvent::Extinction {
            generation: ecosystem.generation,
        });
        return GenerationOutcome::Extinct;
    }

    info!(
        "generation {} starts with {} creatures",
        ecosystem.generation,
        ecosystem.creatures.len()
    );
    events.push(SimulationEvent::GenerationAdvanced {
        generation: ecosystem.generation,
        population: ecosystem.creatures.len(),
    });
    GenerationOutcome::Continue
}
