use serde::{Deserialize, Serialize};

use super::error::{Result, SimulationError};

/// Shape of the energy cost curve for one trait.
///
/// The discriminant is the exponent applied to the trait value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostFunction {
    /// `n^0`, the trait has no influence on cost.
    Constant,
    /// `n^1`
    Linear,
    /// `n^2`
    Quadratic,
    /// `n^3`
    Cubic,
}

impl CostFunction {
    /// All cost functions in exponent order.
    pub const ALL: [CostFunction; 4] = [
        CostFunction::Constant,
        CostFunction::Linear,
        CostFunction::Quadratic,
        CostFunction::Cubic,
    ];

    /// Exponent applied to the trait value.
    pub fn exponent(self) -> i32 {
        match self {
            CostFunction::Constant => 0,
            CostFunction::Linear => 1,
            CostFunction::Quadratic => 2,
            CostFunction::Cubic => 3,
        }
    }

    /// Selects a cost function from its exponent.
    pub fn from_exponent(exponent: u8) -> Result<Self> {
        Self::ALL
            .get(exponent as usize)
            .copied()
            .ok_or(SimulationError::InvalidCostExponent(exponent))
    }

    /// Evaluates the curve for a trait value.
    pub fn apply(self, value: f32) -> f32 {
        value.powi(self.exponent())
    }

    /// Short label shown in selectors.
    pub fn label(self) -> &'static str {
        match self {
            CostFunction::Constant => "1",
            CostFunction::Linear => "n",
            CostFunction::Quadratic => "n²",
            CostFunction::Cubic => "n³",
        }
    }
}

/// Which traits may change between parent and offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationFlags {
    /// Allow speed to mutate.
    pub speed: bool,
    /// Allow sight to mutate.
    pub sight: bool,
    /// Allow size to mutate.
    pub size: bool,
}

impl Default for MutationFlags {
    fn default() -> Self {
        Self {
            speed: true,
            sight: true,
            size: true,
        }
    }
}

/// Cost curve selected for each trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    /// Curve applied to speed.
    pub speed: CostFunction,
    /// Curve applied to sight.
    pub sight: CostFunction,
    /// Curve applied to size.
    pub size: CostFunction,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            speed: CostFunction::Quadratic,
            sight: CostFunction::Linear,
            size: CostFunction::Cubic,
        }
    }
}

/// Simulation parameters, fixed for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Arena width.
    pub arena_width: f32,
    /// Arena height.
    pub arena_height: f32,
    /// Traits allowed to mutate on reproduction.
    pub mutation: MutationFlags,
    /// Energy cost curve per trait.
    pub cost: CostModel,
    /// Creatures placed on the perimeter when a run starts.
    pub initial_creatures: usize,
    /// Food items spawned at the start of every generation.
    pub food_per_generation: usize,
    /// Food never spawns closer than this to an arena edge.
    pub food_inset: f32,
    /// Extra reach added to a creature's step when deciding whether it eats.
    pub reach_buffer: f32,
    /// Ticks per second of the driving clock.
    pub ticks_per_second: u32,
    /// How often per second threats are re-evaluated.
    pub threat_refresh_per_second: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            mutation: MutationFlags::default(),
            cost: CostModel::default(),
            initial_creatures: 10,
            food_per_generation: 50,
            food_inset: 25.0,
            reach_buffer: 20.0,
            ticks_per_second: 30,
            threat_refresh_per_second: 4,
        }
    }
}

impl Params {
    /// Checks that the parameters describe a runnable arena.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("arena width", self.arena_width),
            ("arena height", self.arena_height),
            ("food inset", self.food_inset),
            ("reach buffer", self.reach_buffer),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimulationError::InvalidParams(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(SimulationError::InvalidParams(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if self.food_inset < 0.0
            || self.arena_width < 2.0 * self.food_inset
            || self.arena_height < 2.0 * self.food_inset
        {
            return Err(SimulationError::InvalidParams(format!(
                "food inset {} does not fit a {}x{} arena",
                self.food_inset, self.arena_width, self.arena_height
            )));
        }
        if self.reach_buffer < 0.0 {
            return Err(SimulationError::InvalidParams(
                "reach buffer must not be negative".to_string(),
            ));
        }
        if self.ticks_per_second == 0
            || self.threat_refresh_per_second == 0
            || self.threat_refresh_per_second > self.ticks_per_second
        {
            return Err(SimulationError::InvalidParams(format!(
                "threat refresh rate {} must be within 1..={}",
                self.threat_refresh_per_second, self.ticks_per_second
            )));
        }
        Ok(())
    }

    /// Number of ticks between two threat scans.
    pub fn threat_interval(&self) -> u64 {
        u64::from((self.ticks_per_second / self.threat_refresh_per_second).max(1))
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
