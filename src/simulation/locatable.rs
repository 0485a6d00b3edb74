//! Trait for entities that have a position in the arena.
//!
//! Both creatures and food implement it so the generation transition and the
//! presentation layer can address them through one interface.

use ndarray::Array1;

/// Trait for entities with a position in 2D space.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Moves the entity to `(x, y)`.
    fn set_pos(&mut self, x: f32, y: f32) {
        let pos = self.pos_mut();
        pos[0] = x;
        pos[1] = y;
    }
}
