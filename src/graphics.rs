//! Draws the arena. Reads positions and traits, never mutates the simulation.

use forage::simulation::creature::{Creature, EAT_SIZE, STARTING_ENERGY};
use forage::simulation::ecosystem::Ecosystem;
use forage::simulation::locatable::Locatable;
use forage::simulation::params::Params;
use macroquad::prelude::*;
use ndarray::Array1;

/// Radius of a size-1.0 creature in arena units.
const CREATURE_RADIUS: f32 = 8.0;
const FOOD_RADIUS: f32 = 4.0;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

fn scale(params: &Params) -> (f32, f32) {
    (
        screen_width() / params.arena_width,
        screen_height() / params.arena_height,
    )
}

impl ToScreen for Array1<f32> {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        let (sx, sy) = scale(params);
        vec2(self[0] * sx, self[1] * sy)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let (sx, sy) = scale(params);
        self * sx.min(sy)
    }
}

pub fn draw_food(ecosystem: &Ecosystem) {
    let params = ecosystem.params();
    let radius = FOOD_RADIUS.to_screen(params);
    for item in &ecosystem.food {
        let p = item.pos().to_screen(params);
        draw_circle(p.x, p.y, radius, Color::from_rgba(90, 200, 90, 255));
    }
}

fn creature_color(creature: &Creature) -> Color {
    if creature.is_out_of_energy() {
        Color::from_rgba(120, 120, 120, 255)
    } else if creature.threat.is_some() {
        Color::from_rgba(255, 120, 60, 255)
    } else if creature.is_full() {
        Color::from_rgba(80, 140, 255, 255)
    } else if creature.size() >= EAT_SIZE {
        Color::from_rgba(200, 60, 200, 255)
    } else {
        Color::from_rgba(60, 200, 220, 255)
    }
}

pub fn draw_creatures(ecosystem: &Ecosystem) {
    let params = ecosystem.params();
    for creature in &ecosystem.creatures {
        let p = creature.pos().to_screen(params);
        let radius = (CREATURE_RADIUS * creature.size()).to_screen(params);

        draw_circle(p.x, p.y, radius, creature_color(creature));

        // energy bar
        let bar_width = 20.0;
        let bar_height = 2.0;
        let bar_x = p.x - bar_width / 2.0;
        let bar_y = p.y - radius - bar_height - 2.0;
        let fraction = (creature.energy / STARTING_ENERGY).clamp(0.0, 1.0);
        draw_rectangle(bar_x, bar_y, bar_width, bar_height, Color::from_rgba(100, 100, 100, 200));
        draw_rectangle(
            bar_x,
            bar_y,
            bar_width * fraction,
            bar_height,
            Color::from_rgba(100, 255, 100, 255),
        );

        for ring in 1..=creature.food_eaten {
            draw_circle_lines(p.x, p.y, radius + 2.0 * ring as f32, 1.0, YELLOW);
        }
    }
}
