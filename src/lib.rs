//! # Forage - Generational Foraging Simulation
//!
//! A population of creatures forages for food inside a bounded arena. Every
//! step costs energy depending on the creature's heritable traits, and at the
//! end of each generation the creatures that ate survive, the ones that ate
//! enough reproduce with mutated traits, and the rest are culled.
//!
//! ## Features
//!
//! - Per-creature behavior state machine (forage, flee, drift to center, idle)
//! - Configurable energy cost curves per trait (constant to cubic)
//! - Predation between creatures of sufficiently different size
//! - Heritable speed, sight and size traits with optional mutation
//! - Trait telemetry per generation
//! - Save/load of simulation snapshots
//!
//! ## Core Modules
//!
//! - [`simulation::creature`] - Creature state and behavior
//! - [`simulation::ecosystem`] - Registry of creatures and food
//! - [`simulation::engine`] - Tick engine driving one time step
//! - [`simulation::evolution`] - Generation transition
//! - [`simulation::runner`] - Driver facade used by the binaries

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature behavior, state, and reproduction.
    pub mod creature;
    /// Registry of all creatures and food for one run.
    pub mod ecosystem;
    /// Discrete tick engine.
    pub mod engine;
    /// Error type shared by the simulation.
    pub mod error;
    /// Recent event log for display.
    pub mod event_log;
    /// Notifications emitted to rendering collaborators.
    pub mod events;
    /// End-of-generation culling and reproduction.
    pub mod evolution;
    /// Food items that creatures can consume.
    pub mod food;
    /// Geometric utility functions for distance and movement.
    pub mod geometric_utils;
    /// Trait for entities that have a position in the arena.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity the
    /// arena holds (Food, Creature) so relocation and drawing can treat them alike.
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Driver facade combining registry, engine and telemetry.
    pub mod runner;
    /// Per-generation trait telemetry.
    pub mod stats;
    /// Heritable creature traits and mutation.
    pub mod traits;
}
