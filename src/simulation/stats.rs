//! Per-generation telemetry of the population's traits.

use serde::{Deserialize, Serialize};

use super::creature::Creature;
use super::ecosystem::Ecosystem;
use super::params::MutationFlags;

/// Mean trait values of the current population.
///
/// Traits whose mutation is disabled never change, so they are reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitMeans {
    /// Mean speed, if speed mutates.
    pub speed: Option<f32>,
    /// Mean sight, if sight mutates.
    pub sight: Option<f32>,
    /// Mean size, if size mutates.
    pub size: Option<f32>,
}

impl TraitMeans {
    /// Computes the means over `creatures`.
    ///
    /// # Returns
    ///
    /// `None` for an empty population.
    pub fn of(creatures: &[Creature], flags: &MutationFlags) -> Option<Self> {
        if creatures.is_empty() {
            return None;
        }
        let n = creatures.len() as f32;
        let mean = |enabled: bool, get: fn(&Creature) -> f32| {
            enabled.then(|| creatures.iter().map(get).sum::<f32>() / n)
        };
        Some(Self {
            speed: mean(flags.speed, Creature::speed),
            sight: mean(flags.sight, Creature::sight),
            size: mean(flags.size, Creature::size),
        })
    }
}

/// Series plotted by the trait chart, one point per generation.
///
/// Every series starts at generation 0 with the default trait value of 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitHistory {
    /// `(generation, mean speed)`
    pub speed: Vec<(f64, f64)>,
    /// `(generation, mean sight)`
    pub sight: Vec<(f64, f64)>,
    /// `(generation, mean size)`
    pub size: Vec<(f64, f64)>,
    /// `(generation, population)`
    pub population: Vec<(f64, f64)>,
}

impl Default for TraitHistory {
    fn default() -> Self {
        Self {
            speed: vec![(0.0, 1.0)],
            sight: vec![(0.0, 1.0)],
            size: vec![(0.0, 1.0)],
            population: Vec::new(),
        }
    }
}

impl TraitHistory {
    /// Creates a history seeded at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history for a run resumed from `ecosystem`.
    ///
    /// The trait series start at the snapshot's generation with its current
    /// means instead of the generation-0 defaults.
    pub fn starting_at(ecosystem: &Ecosystem) -> Self {
        let mut history = Self {
            speed: Vec::new(),
            sight: Vec::new(),
            size: Vec::new(),
            population: Vec::new(),
        };
        if let Some(means) = ecosystem.trait_means() {
            history.push_means(f64::from(ecosystem.generation), means);
        }
        history
    }

    /// Appends the current means. Does nothing for an empty population.
    pub fn record(&mut self, ecosystem: &Ecosystem) {
        let Some(means) = ecosystem.trait_means() else {
            return;
        };
        let generation = f64::from(ecosystem.generation);
        self.push_means(generation, means);
        self.population
            .push((generation, ecosystem.population_size() as f64));
    }

    fn push_means(&mut self, generation: f64, means: TraitMeans) {
        let series = [
            (&mut self.speed, means.speed),
            (&mut self.sight, means.sight),
            (&mut self.size, means.size),
        ];
        for (history, value) in series {
            if let Some(value) = value {
                history.push((generation, f64::from(value)));
            }
        }
    }

    /// Latest recorded population, if any.
    pub fn latest_population(&self) -> Option<usize> {
        self.population.last().map(|&(_, n)| n as usize)
    }
}
