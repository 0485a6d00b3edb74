use clap::Parser;
use forage::simulation::ecosystem::Ecosystem;
use forage::simulation::params::Params;
use forage::simulation::runner::{RunStatus, Simulation};
use log::{error, info};
use macroquad::prelude::*;

mod graphics;
mod ui;

const LATEST_SAVE: &str = "forage_latest.json";

#[derive(Parser, Debug)]
#[command(name = "forage", about = "Generational foraging simulation")]
struct Args {
    /// JSON file with simulation parameters
    #[arg(long)]
    config: Option<String>,

    /// Seed for every random draw of the run
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn load_params(args: &Args) -> Params {
    match &args.config {
        Some(path) => Params::load_from_file(path).unwrap_or_else(|e| {
            error!("could not load {path}: {e}, using defaults");
            Params::default()
        }),
        None => Params::default(),
    }
}

fn save(simulation: &Simulation) -> Result<String, forage::simulation::error::SimulationError> {
    let stamped = format!(
        "forage_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    simulation.ecosystem.save_to_file(&stamped)?;
    simulation.ecosystem.save_to_file(LATEST_SAVE)?;
    Ok(stamped)
}

fn handle_requests(state: &mut ui::UIState, simulation: &mut Simulation, params: &Params, seed: u64) {
    if state.pause_requested {
        state.pause_requested = false;
        match simulation.status() {
            RunStatus::Paused => simulation.resume(),
            _ => simulation.pause(),
        }
    }

    if state.save_requested {
        state.save_requested = false;
        state.status_message = Some(match save(simulation) {
            Ok(path) => format!("Saved to {path}"),
            Err(e) => format!("Save failed: {e}"),
        });
    }

    if state.load_requested {
        state.load_requested = false;
        state.status_message = Some(match Ecosystem::load_from_file(LATEST_SAVE) {
            Ok(ecosystem) => {
                *simulation = Simulation::from_ecosystem(ecosystem, seed);
                format!("Loaded {LATEST_SAVE}")
            }
            Err(e) => format!("Load failed: {e}"),
        });
    }

    if state.reset_requested {
        state.reset_requested = false;
        match Simulation::new(params.clone(), seed) {
            Ok(fresh) => {
                *simulation = fresh;
                state.status_message = Some("Simulation reset".to_string());
            }
            Err(e) => state.status_message = Some(format!("Reset failed: {e}")),
        }
    }

    simulation.set_food_per_generation(state.food_per_generation);
}

/// Advances the tick clock by one frame and returns how many ticks are due.
///
/// The multiplier speeds up the clock; the remainder carries over to the next frame.
fn ticks_due(accumulator: &mut f32, frame_time: f32, multiplier: u32, ticks_per_second: u32) -> u32 {
    let interval = 1.0 / ticks_per_second as f32;
    *accumulator += frame_time * multiplier as f32;
    let due = (*accumulator / interval).floor();
    *accumulator -= due * interval;
    due as u32
}

#[macroquad::main("Forage")]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut params = load_params(&args);
    let mut simulation: Option<Simulation> = None;
    let mut ui_state = ui::UIState::new(&params);
    let mut tick_accumulator = 0.0;

    info!("starting forage with seed {}", args.seed);

    loop {
        let Some(sim) = simulation.as_mut() else {
            if ui::draw_genesis_screen(&mut params) {
                match Simulation::new(params.clone(), args.seed) {
                    Ok(sim) => {
                        ui_state = ui::UIState::new(&params);
                        simulation = Some(sim);
                    }
                    Err(e) => error!("cannot start simulation: {e}"),
                }
            }
            next_frame().await;
            continue;
        };

        handle_requests(&mut ui_state, sim, &params, args.seed);

        let due = ticks_due(
            &mut tick_accumulator,
            get_frame_time(),
            ui_state.speed_multiplier,
            sim.ecosystem.params().ticks_per_second,
        );
        for _ in 0..due {
            if sim.tick() != RunStatus::Running {
                tick_accumulator = 0.0;
                break;
            }
        }
        sim.drain_events();

        clear_background(Color::from_rgba(30, 30, 40, 255));
        if ui_state.rendering_enabled {
            graphics::draw_food(&sim.ecosystem);
            graphics::draw_creatures(&sim.ecosystem);
        }

        ui::draw_ui(&mut ui_state, sim);
        ui::process_egui();

        next_frame().await;
    }
}
