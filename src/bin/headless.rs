//! Runs the simulation without a window and prints per-generation trait means.

use anyhow::{Context, Result};
use clap::Parser;
use forage::simulation::ecosystem::Ecosystem;
use forage::simulation::events::SimulationEvent;
use forage::simulation::params::{CostFunction, Params};
use forage::simulation::runner::{RunStatus, Simulation};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "forage-headless", about = "Run the foraging simulation without a window")]
struct Args {
    /// JSON file with simulation parameters
    #[arg(long)]
    config: Option<String>,

    /// Resume from a saved ecosystem instead of starting fresh
    #[arg(long, conflicts_with_all = ["config", "speed_cost", "sight_cost", "size_cost"])]
    resume: Option<String>,

    /// Exponent of the speed cost curve (0-3)
    #[arg(long)]
    speed_cost: Option<u8>,

    /// Exponent of the sight cost curve (0-3)
    #[arg(long)]
    sight_cost: Option<u8>,

    /// Exponent of the size cost curve (0-3)
    #[arg(long)]
    size_cost: Option<u8>,

    /// Seed for every random draw of the run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many completed generations
    #[arg(long, default_value_t = 20)]
    generations: u32,

    /// Hard limit on ticks, in case a generation never settles
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,

    /// Override the food spawned per generation
    #[arg(long)]
    food: Option<usize>,

    /// Write the final ecosystem to this file
    #[arg(long)]
    snapshot: Option<String>,

    /// Print the trait history as JSON at the end
    #[arg(long)]
    json: bool,
}

fn format_mean(value: Option<f32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.3}"))
}

fn build_params(args: &Args) -> Result<Params> {
    let mut params = match &args.config {
        Some(path) => {
            Params::load_from_file(path).with_context(|| format!("loading parameters {path}"))?
        }
        None => Params::default(),
    };

    let overrides = [
        (args.speed_cost, &mut params.cost.speed),
        (args.sight_cost, &mut params.cost.sight),
        (args.size_cost, &mut params.cost.size),
    ];
    for (exponent, curve) in overrides {
        if let Some(exponent) = exponent {
            *curve = CostFunction::from_exponent(exponent)?;
        }
    }
    Ok(params)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut simulation = match &args.resume {
        Some(path) => {
            let ecosystem = Ecosystem::load_from_file(path)
                .with_context(|| format!("loading snapshot {path}"))?;
            Simulation::from_ecosystem(ecosystem, args.seed)
        }
        None => Simulation::new(build_params(&args)?, args.seed).context("creating simulation")?,
    };
    if let Some(food) = args.food {
        simulation.set_food_per_generation(food);
    }

    let target = simulation.generation() + args.generations;
    println!("{:>5} {:>6} {:>8} {:>8} {:>8}", "gen", "pop", "speed", "sight", "size");

    while simulation.generation() < target && simulation.frames() < args.max_ticks {
        let status = simulation.tick();

        for event in simulation.drain_events() {
            if let SimulationEvent::GenerationAdvanced { generation, population } = event {
                let means = simulation.ecosystem.trait_means();
                println!(
                    "{:>5} {:>6} {:>8} {:>8} {:>8}",
                    generation,
                    population,
                    format_mean(means.and_then(|m| m.speed)),
                    format_mean(means.and_then(|m| m.sight)),
                    format_mean(means.and_then(|m| m.size)),
                );
            }
        }

        if status == RunStatus::Extinct {
            println!("No creatures left after generation {}", simulation.generation());
            break;
        }
    }

    info!(
        "stopped at generation {} after {} ticks",
        simulation.generation(),
        simulation.frames()
    );

    if let Some(path) = &args.snapshot {
        simulation
            .ecosystem
            .save_to_file(path)
            .with_context(|| format!("writing snapshot {path}"))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&simulation.history)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_flags_select_curves() {
        let args = Args::try_parse_from(["forage-headless", "--speed-cost", "0", "--size-cost", "1"])
            .unwrap();
        let params = build_params(&args).unwrap();
        assert_eq!(params.cost.speed, CostFunction::Constant);
        assert_eq!(params.cost.size, CostFunction::Linear);
        assert_eq!(params.cost.sight, Params::default().cost.sight);
    }

    #[test]
    fn cost_exponent_above_three_is_rejected() {
        let args = Args::try_parse_from(["forage-headless", "--sight-cost", "4"]).unwrap();
        assert!(build_params(&args).is_err());
    }

    #[test]
    fn cost_flags_conflict_with_resume() {
        let parsed =
            Args::try_parse_from(["forage-headless", "--resume", "run.json", "--speed-cost", "1"]);
        assert!(parsed.is_err());
    }
}
