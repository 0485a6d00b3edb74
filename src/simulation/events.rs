//! Notifications emitted by the engine and the generation transition.
//!
//! The core never draws anything. Collaborators that mirror the registry (a
//! renderer, a chart, a log panel) drain the queue after each tick and update
//! their own view of the arena.

use super::creature::CreatureId;
use super::food::FoodId;

/// Events describing changes to the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// A creature ate a food item, which was removed.
    FoodEaten {
        /// The creature that ate.
        creature_id: CreatureId,
        /// The food item that was removed.
        food_id: FoodId,
    },
    /// A creature ate another creature, which was removed.
    CreatureEaten {
        /// The predator.
        predator_id: CreatureId,
        /// The prey that was removed.
        prey_id: CreatureId,
    },
    /// A creature ran away from a threat.
    Fled {
        /// The creature that moved.
        creature_id: CreatureId,
        /// The creature it fled from.
        threat_id: CreatureId,
    },
    /// No creature moved during a tick.
    GenerationEnded {
        /// Generation that just finished.
        generation: u32,
    },
    /// An offspring was added to the registry.
    CreatureBorn {
        /// The new creature.
        creature_id: CreatureId,
        /// Its parent.
        parent_id: CreatureId,
    },
    /// A creature that ate nothing was culled.
    CreaturePerished {
        /// The removed creature.
        creature_id: CreatureId,
    },
    /// A fresh batch of food was spawned.
    FoodSpawned {
        /// Number of items added.
        count: usize,
    },
    /// The generation counter was incremented.
    GenerationAdvanced {
        /// The new generation number.
        generation: u32,
        /// Creatures alive at its start.
        population: usize,
    },
    /// No creatures survived the transition.
    Extinction {
        /// Generation at which the population died out.
        generation: u32,
    },
}

/// Queue collecting events until a collaborator drains them.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }

    /// Events currently queued.
    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }
}
