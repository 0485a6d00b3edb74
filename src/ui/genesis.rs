use egui_macroquad::egui;
use forage::simulation::params::{CostFunction, Params};
use macroquad::prelude::*;

fn cost_selector(ui: &mut egui::Ui, label: &str, value: &mut CostFunction) {
    egui::ComboBox::from_label(label)
        .selected_text(value.label())
        .show_ui(ui, |ui| {
            for f in CostFunction::ALL {
                ui.selectable_value(value, f, f.label());
            }
        });
}

pub fn draw_genesis_screen(params: &mut Params) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_simulation = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Population Simulation - Configuration");
                ui.add_space(10.0);

                ui.collapsing("Mutation", |ui| {
                    ui.checkbox(&mut params.mutation.speed, "Enable speed mutation");
                    ui.checkbox(&mut params.mutation.sight, "Enable sight mutation");
                    ui.checkbox(&mut params.mutation.size, "Enable size mutation");
                });

                ui.collapsing("Energy Cost", |ui| {
                    ui.label("cost per step = speed^a * size^b + sight^c");
                    cost_selector(ui, "Speed cost", &mut params.cost.speed);
                    cost_selector(ui, "Size cost", &mut params.cost.size);
                    cost_selector(ui, "Sight cost", &mut params.cost.sight);
                });

                ui.collapsing("Population", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.initial_creatures, 1..=100)
                            .text("Initial creatures"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.food_per_generation, 0..=300)
                            .text("Food per generation"),
                    );
                });

                ui.collapsing("World Parameters", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.arena_width, 200.0..=3000.0)
                            .text("World Width"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.arena_height, 200.0..=3000.0)
                            .text("World Height"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.ticks_per_second, 4..=120)
                            .text("Ticks per second"),
                    );
                });

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Start Simulation").clicked() {
                        start_simulation = true;
                    }
                    ui.label("Configure parameters above, then click to start");
                });
            });
        });
    });

    egui_macroquad::draw();

    start_simulation
}
