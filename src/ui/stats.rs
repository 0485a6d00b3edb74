use egui_macroquad::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use forage::simulation::params::MutationFlags;
use forage::simulation::runner::{RunStatus, Simulation};
use forage::simulation::stats::TraitHistory;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, simulation: &Simulation) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let toggle_text = match simulation.status() {
                    RunStatus::Paused => "▶ Resume",
                    _ => "⏸ Pause",
                };
                if ui.button(toggle_text).clicked() {
                    state.pause_requested = true;
                }
                if ui.button("💾 Save").clicked() {
                    state.save_requested = true;
                }
                if ui.button("📂 Load").clicked() {
                    state.load_requested = true;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            ui.horizontal(|ui| {
                let button_text = if state.rendering_enabled {
                    "🎨 Rendering: ON"
                } else {
                    "🎨 Rendering: OFF"
                };
                if ui.button(button_text).clicked() {
                    state.rendering_enabled = !state.rendering_enabled;
                }
            });

            if simulation.status() == RunStatus::Extinct {
                ui.colored_label(egui::Color32::from_rgb(255, 120, 120), "No creatures left");
            }
            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.label(format!("Generation: {}", simulation.generation()));
            ui.label(format!("Population: {}", simulation.population_size()));
            ui.label(format!("Food left: {}", simulation.ecosystem.food.len()));
            ui.label(format!("Ticks: {}", simulation.frames()));

            ui.separator();

            ui.add(
                egui::Slider::new(&mut state.food_per_generation, 0..=300)
                    .text("Food per generation"),
            );
            ui.add(egui::Slider::new(&mut state.speed_multiplier, 1..=50).text("Speed multiplier"));

            ui.separator();

            ui.label("Average creature attributes");
            draw_trait_plot(ui, &simulation.history, &simulation.ecosystem.params().mutation);

            ui.label("Population");
            draw_population_plot(ui, &simulation.history);
        });
}

fn draw_trait_plot(ui: &mut egui::Ui, history: &TraitHistory, mutation: &MutationFlags) {
    let series = [
        (mutation.speed, "Speed", &history.speed, egui::Color32::WHITE),
        (
            mutation.size,
            "Size",
            &history.size,
            egui::Color32::from_rgb(255, 90, 90),
        ),
        (
            mutation.sight,
            "Sight",
            &history.sight,
            egui::Color32::from_rgb(90, 220, 220),
        ),
    ];

    Plot::new("trait_plot")
        .height(180.0)
        .legend(Legend::default())
        .show_axes([true, true])
        .show(ui, |plot_ui| {
            for (enabled, name, data, color) in series {
                if !enabled {
                    continue;
                }
                let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(Line::new(points).color(color).name(name));
            }
        });
}

fn draw_population_plot(ui: &mut egui::Ui, history: &TraitHistory) {
    if history.population.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = history.population.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points)
        .color(egui::Color32::from_rgb(100, 150, 255))
        .name("Creatures");

    Plot::new("population_plot")
        .height(120.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| format!("gen {:.0}: {:.0}", value.x, value.y))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
