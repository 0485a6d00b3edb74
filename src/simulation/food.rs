//! Food items that creatures can consume.
//!
//! Food is passive: it is spawned at the start of a generation, removed when
//! eaten, and cleared when the generation ends.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;

/// Stable identifier of a food item within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(pub u64);

/// A food item placed in the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Identifier used by cached creature targets.
    pub id: FoodId,
    /// Position in 2D space.
    pub pos: Array1<f32>,
}

impl Food {
    /// Creates a food item at `(x, y)`.
    pub fn new(id: FoodId, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Array1::from_vec(vec![x, y]),
        }
    }

    /// Creates a food item at a random position inside the arena.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier for the new item
    /// * `width` - Arena width
    /// * `height` - Arena height
    /// * `inset` - Minimum distance from every arena edge
    /// * `rng` - Random number source
    pub fn new_random<R: Rng + ?Sized>(
        id: FoodId,
        width: f32,
        height: f32,
        inset: f32,
        rng: &mut R,
    ) -> Self {
        let x = rng.random_range(inset..=width - inset);
        let y = rng.random_range(inset..=height - inset);
        Self::new(id, x, y)
    }
}

impl Locatable for Food {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
