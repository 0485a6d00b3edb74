//! Event logging system for displaying recent simulation events.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::events::SimulationEvent;

/// A logged event for display in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Generation in which the event occurred
    pub generation: u32,
    /// Human-readable description of the event
    pub description: String,
    /// Color hint for the event (for UI display)
    pub color: EventColor,
}

/// Color categories for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventColor {
    /// Births (green)
    Birth,
    /// Predation and fleeing (red)
    Predation,
    /// Deaths and extinction (gray)
    Death,
    /// Food consumption (yellow)
    Food,
    /// Generation boundaries (blue)
    Generation,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, generation: u32, description: String, color: EventColor) {
        self.events.push_front(LoggedEvent {
            generation,
            description,
            color,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Records a simulation event, skipping the ones too frequent to be useful.
    pub fn record(&mut self, generation: u32, event: &SimulationEvent) {
        let (description, color) = match event {
            SimulationEvent::FoodEaten { .. } | SimulationEvent::Fled { .. } => return,
            SimulationEvent::CreatureEaten {
                predator_id,
                prey_id,
            } => (
                format!("creature {} ate creature {}", predator_id.0, prey_id.0),
                EventColor::Predation,
            ),
            SimulationEvent::GenerationEnded { generation } => (
                format!("generation {generation} ended"),
                EventColor::Generation,
            ),
            SimulationEvent::CreatureBorn {
                creature_id,
                parent_id,
            } => (
                format!("creature {} born to {}", creature_id.0, parent_id.0),
                EventColor::Birth,
            ),
            SimulationEvent::CreaturePerished { creature_id } => (
                format!("creature {} perished", creature_id.0),
                EventColor::Death,
            ),
            SimulationEvent::FoodSpawned { count } => {
                (format!("{count} food spawned"), EventColor::Food)
            }
            SimulationEvent::GenerationAdvanced {
                generation,
                population,
            } => (
                format!("generation {generation} starts with {population} creatures"),
                EventColor::Generation,
            ),
            SimulationEvent::Extinction { generation } => (
                format!("no creatures left after generation {generation}"),
                EventColor::Death,
            ),
        };
        self.log(generation, description, color);
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::creature::CreatureId;

    #[test]
    fn keeps_newest_events() {
        let mut log = EventLog::new(2);
        for i in 0..3u64 {
            log.record(
                0,
                &SimulationEvent::CreaturePerished {
                    creature_id: CreatureId(i),
                },
            );
        }
        assert_eq!(log.events().len(), 2);
        assert_eq!(log.events()[0].description, "creature 2 perished");
    }
}
