//! Driver facade used by the windowed and headless binaries.
//!
//! A [`Simulation`] owns the registry, the tick engine, the event queue and
//! the telemetry, and turns the engine's "generation ended" signal into a
//! generation transition.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::ecosystem::Ecosystem;
use super::engine::{TickEngine, TickOutcome};
use super::error::Result;
use super::event_log::EventLog;
use super::events::{EventQueue, SimulationEvent};
use super::evolution::{GenerationOutcome, advance_generation};
use super::params::Params;
use super::stats::TraitHistory;

/// State of a run as seen by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Ticking normally.
    Running,
    /// Halted by the driver.
    Paused,
    /// Every creature has died; the run cannot continue.
    Extinct,
}

/// One simulation run plus everything needed to drive it.
pub struct Simulation {
    /// Registry of creatures and food.
    pub ecosystem: Ecosystem,
    /// Per-generation trait means.
    pub history: TraitHistory,
    /// Recent human-readable events.
    pub log: EventLog,
    engine: TickEngine,
    events: EventQueue,
    rng: StdRng,
    food_per_generation: usize,
    status: RunStatus,
}

impl Simulation {
    /// Starts a new run.
    ///
    /// # Arguments
    ///
    /// * `params` - Run configuration
    /// * `seed` - Seed for every random draw of the run
    pub fn new(params: Params, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let ecosystem = Ecosystem::new(params, &mut rng)?;
        Ok(Self::from_parts(ecosystem, TraitHistory::new(), rng))
    }

    /// Resumes a run from a saved ecosystem.
    ///
    /// Telemetry starts at the snapshot's generation.
    pub fn from_ecosystem(ecosystem: Ecosystem, seed: u64) -> Self {
        let history = TraitHistory::starting_at(&ecosystem);
        Self::from_parts(ecosystem, history, StdRng::seed_from_u64(seed))
    }

    fn from_parts(ecosystem: Ecosystem, history: TraitHistory, rng: StdRng) -> Self {
        let engine = TickEngine::new(ecosystem.params());
        let food_per_generation = ecosystem.params().food_per_generation;
        let status = if ecosystem.creatures.is_empty() {
            RunStatus::Extinct
        } else {
            RunStatus::Running
        };
        Self {
            ecosystem,
            history,
            log: EventLog::default(),
            engine,
            events: EventQueue::new(),
            rng,
            food_per_generation,
            status,
        }
    }

    /// Advances the run by one tick, running a generation transition when
    /// the engine reports that nothing moved.
    pub fn tick(&mut self) -> RunStatus {
        if self.status != RunStatus::Running {
            return self.status;
        }

        match self.engine.tick(&mut self.ecosystem, &mut self.events) {
            TickOutcome::Advanced | TickOutcome::Stopped => {}
            TickOutcome::GenerationEnded => self.next_generation(),
        }
        self.status
    }

    fn next_generation(&mut self) {
        let outcome = advance_generation(
            &mut self.ecosystem,
            self.food_per_generation,
            &mut self.rng,
            &mut self.events,
        );
        self.history.record(&self.ecosystem);

        match outcome {
            GenerationOutcome::Continue => self.engine.resume(),
            GenerationOutcome::Extinct => {
                info!("run ended at generation {}", self.ecosystem.generation);
                self.status = RunStatus::Extinct;
            }
        }
    }

    /// Halts ticking until [`Self::resume`].
    pub fn pause(&mut self) {
        if self.status == RunStatus::Running {
            self.engine.pause();
            self.status = RunStatus::Paused;
        }
    }

    /// Continues a paused run.
    pub fn resume(&mut self) {
        if self.status == RunStatus::Paused {
            self.engine.resume();
            self.status = RunStatus::Running;
        }
    }

    /// Current run status.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Completed generations.
    pub fn generation(&self) -> u32 {
        self.ecosystem.generation
    }

    /// Number of creatures alive.
    pub fn population_size(&self) -> usize {
        self.ecosystem.population_size()
    }

    /// Ticks executed so far.
    pub fn frames(&self) -> u64 {
        self.engine.frames()
    }

    /// Changes how much food the next generations receive.
    pub fn set_food_per_generation(&mut self, count: usize) {
        self.food_per_generation = count;
    }

    /// Takes every event queued since the last drain, recording them in the log.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        let generation = self.ecosystem.generation;
        let drained: Vec<_> = self.events.drain().collect();
        for event in &drained {
            self.log.record(generation, event);
        }
        drained
    }
}
