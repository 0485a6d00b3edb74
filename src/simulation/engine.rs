//! Tick engine: advances every creature by one discrete time step.
//!
//! Each tick visits creatures in registry order and runs their state machine:
//!
//! - out of energy: skip
//! - every few ticks: look for a nearby predator
//! - threatened by an active predator: flee
//! - full: idle
//! - otherwise forage: approach the closest visible target and eat it once in
//!   reach, or drift toward the arena center if nothing is visible
//!
//! When no creature moved during a tick the engine stops its own clock and
//! reports the end of the generation once.

use log::{debug, info};

use super::creature::Target;
use super::ecosystem::Ecosystem;
use super::events::{EventQueue, SimulationEvent};
use super::geometric_utils::{close_enough, distance};
use super::params::Params;

/// Result of a single call to [`TickEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one creature moved.
    Advanced,
    /// Nothing moved; the generation is over and the engine has stopped.
    GenerationEnded,
    /// The engine is stopped and did nothing.
    Stopped,
}

#[derive(Debug, Default)]
struct CreatureStep {
    moved: bool,
    /// Registry index of a creature removed during the step.
    removed: Option<usize>,
}

/// Drives ticks for one ecosystem.
#[derive(Debug, Clone)]
pub struct TickEngine {
    frames: u64,
    running: bool,
    threat_interval: u64,
}

impl TickEngine {
    /// Creates a running engine.
    pub fn new(params: &Params) -> Self {
        Self {
            frames: 0,
            running: true,
            threat_interval: params.threat_interval(),
        }
    }

    /// Ticks executed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// `true` while the engine's clock is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the clock; further ticks do nothing until [`Self::resume`].
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Restarts the clock.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Advances the ecosystem by one tick.
    ///
    /// # Arguments
    ///
    /// * `ecosystem` - Registry to update
    /// * `events` - Receives a notification for every eat, flee and generation end
    pub fn tick(&mut self, ecosystem: &mut Ecosystem, events: &mut EventQueue) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }

        self.frames += 1;
        let refresh_threats = self.frames % self.threat_interval == 0;

        let mut creature_moved = false;
        let mut index = 0;
        while index < ecosystem.creatures.len() {
            let step = update_creature(ecosystem, index, refresh_threats, events);
            creature_moved |= step.moved;

            // an earlier creature was eaten, so this one shifted down a slot
            if !step.removed.is_some_and(|removed| removed < index) {
                index += 1;
            }
        }

        if creature_moved {
            return TickOutcome::Advanced;
        }

        self.running = false;
        info!("generation {} ended after {} ticks", ecosystem.generation, self.frames);
        events.push(SimulationEvent::GenerationEnded {
            generation: ecosystem.generation,
        });
        TickOutcome::GenerationEnded
    }
}

fn update_creature(
    ecosystem: &mut Ecosystem,
    index: usize,
    refresh_threats: bool,
    events: &mut EventQueue,
) -> CreatureStep {
    let creature = &ecosystem.creatures[index];
    if creature.is_out_of_energy() {
        return CreatureStep::default();
    }

    if refresh_threats {
        let threat = creature.find_hostile(&ecosystem.creatures);
        ecosystem.creatures[index].threat = threat;
    }

    if let Some(threat_id) = ecosystem.creatures[index].threat {
        match ecosystem.creature(threat_id) {
            Some(threat) if threat.is_active() => {
                let threat_pos = threat.pos.clone();
                let (creature, params) = ecosystem.creature_mut_with_params(index);
                creature.move_away_from(&threat_pos, params);
                creature.closest_food = None;
                debug!("{creature} running away from creature {}", threat_id.0);
                events.push(SimulationEvent::Fled {
                    creature_id: creature.id,
                    threat_id,
                });
                return CreatureStep {
                    moved: true,
                    removed: None,
                };
            }
            Some(_) => {}
            None => ecosystem.creatures[index].threat = None,
        }
    }

    let creature = &ecosystem.creatures[index];
    if creature.is_full() {
        return CreatureStep::default();
    }

    let target = creature
        .closest_food
        .filter(|&cached| ecosystem.contains(cached))
        .or_else(|| creature.find_closest_target(&ecosystem.food, &ecosystem.creatures));
    let sight = creature.seeing_distance();
    let target_pos = target.and_then(|t| ecosystem.target_pos(t)).cloned();

    ecosystem.creatures[index].closest_food = target;

    match (target, target_pos) {
        (Some(target), Some(target_pos))
            if distance(&ecosystem.creatures[index].pos, &target_pos) < sight =>
        {
            let (creature, params) = ecosystem.creature_mut_with_params(index);
            creature.move_toward(&target_pos, params);

            let reach = creature.movement_speed() + params.reach_buffer;
            if !close_enough(&creature.pos, &target_pos, reach) {
                return CreatureStep {
                    moved: true,
                    removed: None,
                };
            }

            creature.eat();
            creature.closest_food = None;
            let creature_id = creature.id;
            debug!("{creature} ate {target:?}");

            let removed = ecosystem.remove_target(target);
            events.push(match target {
                Target::Food(food_id) => SimulationEvent::FoodEaten {
                    creature_id,
                    food_id,
                },
                Target::Creature(prey_id) => SimulationEvent::CreatureEaten {
                    predator_id: creature_id,
                    prey_id,
                },
            });
            CreatureStep {
                moved: true,
                removed,
            }
        }
        _ => {
            let center = ecosystem.center();
            let (creature, params) = ecosystem.creature_mut_with_params(index);
            if close_enough(&creature.pos, &center, creature.movement_speed()) {
                return CreatureStep::default();
            }
            creature.move_toward(&center, params);
            CreatureStep {
                moved: true,
                removed: None,
            }
        }
    }
}
