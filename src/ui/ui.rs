use egui_macroquad::egui;
use forage::simulation::params::Params;
use forage::simulation::runner::Simulation;

#[allow(clippy::struct_excessive_bools)]
pub struct UIState {
    pub stats_panel_width: f32,
    /// Food spawned per generation, edited by the slider.
    pub food_per_generation: usize,
    pub pause_requested: bool,
    pub save_requested: bool,
    pub load_requested: bool,
    pub reset_requested: bool,
    pub status_message: Option<String>,
    pub rendering_enabled: bool,
    /// Multiplier applied to the simulation clock.
    pub speed_multiplier: u32,
}

impl UIState {
    pub fn new(params: &Params) -> Self {
        Self {
            stats_panel_width: 300.0,
            food_per_generation: params.food_per_generation,
            pause_requested: false,
            save_requested: false,
            load_requested: false,
            reset_requested: false,
            status_message: None,
            rendering_enabled: true,
            speed_multiplier: 1,
        }
    }
}

pub fn draw_ui(state: &mut UIState, simulation: &Simulation) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, simulation);
        super::events::draw_events_panel(egui_ctx, simulation);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
