#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use forage::simulation::creature::{Creature, CreatureId, STARTING_ENERGY, Target};
use forage::simulation::ecosystem::Ecosystem;
use forage::simulation::engine::{TickEngine, TickOutcome};
use forage::simulation::events::{EventQueue, SimulationEvent};
use forage::simulation::evolution::{GenerationOutcome, advance_generation};
use forage::simulation::food::{Food, FoodId};
use forage::simulation::geometric_utils::distance;
use forage::simulation::params::Params;
use forage::simulation::traits::Traits;
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn empty_ecosystem() -> Ecosystem {
    Ecosystem::empty(Params::default()).unwrap()
}

fn add(eco: &mut Ecosystem, x: f32, y: f32, size: f32) -> CreatureId {
    let id = eco.next_creature_id();
    eco.add_creature(Creature::new(id, x, y, Traits::new(1.0, 1.0, size).unwrap()));
    id
}

fn on_perimeter(eco: &Ecosystem, pos: &Array1<f32>) -> bool {
    let (w, h) = (eco.params().arena_width, eco.params().arena_height);
    pos[0] == 0.0 || pos[0] == w || pos[1] == 0.0 || pos[1] == h
}

#[test]
fn test_new_ecosystem_layout() {
    let mut rng = StdRng::seed_from_u64(1);
    let eco = Ecosystem::new(Params::default(), &mut rng).unwrap();
    let params = eco.params();

    assert_eq!(eco.creatures.len(), params.initial_creatures);
    assert_eq!(eco.food.len(), params.food_per_generation);
    assert_eq!(eco.generation, 0);

    for c in &eco.creatures {
        assert!(on_perimeter(&eco, &c.pos));
        assert_eq!(c.energy, STARTING_ENERGY);
        assert_eq!(*c.traits(), Traits::default());
    }
    for f in &eco.food {
        assert!(f.pos[0] >= params.food_inset && f.pos[0] <= params.arena_width - params.food_inset);
        assert!(f.pos[1] >= params.food_inset && f.pos[1] <= params.arena_height - params.food_inset);
    }
}

#[test]
fn test_invalid_params_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let params = Params {
        arena_width: 10.0,
        ..Params::default()
    };
    assert!(Ecosystem::new(params, &mut rng).is_err());
}

#[test]
fn test_non_finite_params_fail_instead_of_panicking() {
    let mut rng = StdRng::seed_from_u64(1);
    let unbounded = Params {
        arena_width: f32::INFINITY,
        ..Params::default()
    };
    assert!(Ecosystem::new(unbounded, &mut rng).is_err());

    let no_inset = Params {
        food_inset: f32::NAN,
        ..Params::default()
    };
    assert!(Ecosystem::new(no_inset, &mut rng).is_err());
}

#[test]
fn test_generation_transition_culls_and_reproduces() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut eco = empty_ecosystem();
    let a = add(&mut eco, 100.0, 100.0, 1.0);
    let b = add(&mut eco, 200.0, 200.0, 1.0);
    let starved = add(&mut eco, 300.0, 300.0, 1.0);
    eco.creatures[0].food_eaten = 1;
    eco.creatures[1].food_eaten = 2;
    eco.add_food(Food::new(FoodId(50), 10.0, 10.0));
    let mut events = EventQueue::new();

    let outcome = advance_generation(&mut eco, 5, &mut rng, &mut events);

    assert_eq!(outcome, GenerationOutcome::Continue);
    assert_eq!(eco.generation, 1);
    assert_eq!(eco.creatures.len(), 3);
    assert_eq!(eco.food.len(), 5);
    assert!(eco.food_item(FoodId(50)).is_none());
    assert!(eco.creature(starved).is_none());

    assert_eq!(eco.creatures[0].id, a);
    assert_eq!(eco.creatures[1].id, b);
    for c in &eco.creatures {
        assert_eq!(c.food_eaten, 0);
        assert_eq!(c.energy, STARTING_ENERGY);
        assert!(on_perimeter(&eco, &c.pos), "{c} not on perimeter");
    }

    let child = &eco.creatures[2];
    assert!(child.id != a && child.id != b && child.id != starved);
    assert!(events.events().contains(&SimulationEvent::CreatureBorn {
        creature_id: child.id,
        parent_id: b,
    }));
    assert!(events.events().contains(&SimulationEvent::CreaturePerished {
        creature_id: starved,
    }));
}

#[test]
fn test_transition_to_empty_registry_is_extinction() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut eco = empty_ecosystem();
    add(&mut eco, 100.0, 100.0, 1.0);
    let mut events = EventQueue::new();

    let outcome = advance_generation(&mut eco, 3, &mut rng, &mut events);

    assert_eq!(outcome, GenerationOutcome::Extinct);
    assert!(eco.creatures.is_empty());
    assert!(events
        .events()
        .contains(&SimulationEvent::Extinction { generation: 1 }));
}

#[test]
fn test_idle_tick_ends_generation_once() {
    let mut eco = empty_ecosystem();
    add(&mut eco, 100.0, 100.0, 1.0);
    eco.creatures[0].energy = 0.0;
    let mut engine = TickEngine::new(eco.params());
    let mut events = EventQueue::new();

    assert_eq!(engine.tick(&mut eco, &mut events), TickOutcome::GenerationEnded);
    assert!(!engine.is_running());
    assert_eq!(engine.tick(&mut eco, &mut events), TickOutcome::Stopped);

    let ended = events
        .events()
        .iter()
        .filter(|e| matches!(e, SimulationEvent::GenerationEnded { .. }))
        .count();
    assert_eq!(ended, 1);
}

#[test]
fn test_full_creatures_do_not_move() {
    let mut eco = empty_ecosystem();
    add(&mut eco, 100.0, 100.0, 1.0);
    eco.creatures[0].food_eaten = 2;
    eco.add_food(Food::new(FoodId(50), 110.0, 100.0));
    let mut engine = TickEngine::new(eco.params());
    let mut events = EventQueue::new();

    assert_eq!(engine.tick(&mut eco, &mut events), TickOutcome::GenerationEnded);
    assert_eq!(eco.food.len(), 1);
}

#[test]
fn test_predation_keeps_iteration_in_step() {
    let mut eco = empty_ecosystem();
    let prey = add(&mut eco, 105.0, 100.0, 1.0);
    let hunter = add(&mut eco, 100.0, 100.0, 1.5);
    let bystander = add(&mut eco, 700.0, 500.0, 1.0);
    let start = eco.creatures[2].pos.clone();
    let mut engine = TickEngine::new(eco.params());
    let mut events = EventQueue::new();

    assert_eq!(engine.tick(&mut eco, &mut events), TickOutcome::Advanced);

    assert!(eco.creature(prey).is_none());
    assert_eq!(eco.creature(hunter).unwrap().food_eaten, 1);
    assert!(events.events().contains(&SimulationEvent::CreatureEaten {
        predator_id: hunter,
        prey_id: prey,
    }));

    // the creature after the eaten one still moves exactly one step
    let moved = distance(&eco.creature(bystander).unwrap().pos, &start);
    assert!((moved - 2.0).abs() < 1e-4, "moved {moved}");
}

#[test]
fn test_stale_cached_target_is_replaced() {
    let mut eco = empty_ecosystem();
    add(&mut eco, 100.0, 100.0, 1.0);
    eco.creatures[0].closest_food = Some(Target::Food(FoodId(999)));
    eco.add_food(Food::new(FoodId(50), 150.0, 100.0));
    let mut engine = TickEngine::new(eco.params());
    let mut events = EventQueue::new();

    assert_eq!(engine.tick(&mut eco, &mut events), TickOutcome::Advanced);

    assert_eq!(eco.creatures[0].closest_food, Some(Target::Food(FoodId(50))));
    assert!((eco.creatures[0].pos[0] - 102.0).abs() < 1e-4);
}

#[test]
fn test_flees_from_active_threat() {
    let mut eco = empty_ecosystem();
    let prey = add(&mut eco, 300.0, 300.0, 1.0);
    let hunter = add(&mut eco, 340.0, 300.0, 2.0);
    eco.creatures[0].threat = Some(hunter);
    let mut engine = TickEngine::new(eco.params());
    let mut events = EventQueue::new();

    engine.tick(&mut eco, &mut events);

    let fled = eco.creature(prey).unwrap();
    assert!((fled.pos[0] - 298.0).abs() < 1e-4);
    assert!((fled.pos[1] - 300.0).abs() < 1e-4);
    assert!(events.events().contains(&SimulationEvent::Fled {
        creature_id: prey,
        threat_id: hunter,
    }));
}

#[test]
fn test_ignores_inactive_or_missing_threat() {
    let mut eco = empty_ecosystem();
    add(&mut eco, 300.0, 300.0, 1.0);
    let hunter = add(&mut eco, 340.0, 300.0, 2.0);
    eco.creatures[1].food_eaten = 2;
    eco.creatures[0].threat = Some(hunter);
    eco.add_food(Food::new(FoodId(50), 250.0, 300.0));
    let mut engine = TickEngine::new(eco.params());
    let mut events = EventQueue::new();

    engine.tick(&mut eco, &mut events);

    // walks toward the food instead of running
    assert!((eco.creatures[0].pos[0] - 298.0).abs() < 1e-4);
    assert_eq!(eco.creatures[0].closest_food, Some(Target::Food(FoodId(50))));
    assert!(!events
        .events()
        .iter()
        .any(|e| matches!(e, SimulationEvent::Fled { .. })));

    eco.creatures[0].threat = Some(CreatureId(999));
    engine.tick(&mut eco, &mut events);
    assert_eq!(eco.creatures[0].threat, None);
}

#[test]
fn test_threat_is_noticed_on_refresh_tick() {
    let mut eco = empty_ecosystem();
    add(&mut eco, 300.0, 300.0, 1.0);
    let hunter = add(&mut eco, 400.0, 300.0, 2.0);
    let mut engine = TickEngine::new(eco.params());
    let interval = eco.params().threat_interval();
    let mut events = EventQueue::new();

    for _ in 1..interval {
        engine.tick(&mut eco, &mut events);
        assert_eq!(eco.creatures[0].threat, None);
    }
    engine.tick(&mut eco, &mut events);
    assert_eq!(eco.creatures[0].threat, Some(hunter));
}

#[test]
fn test_save_and_load_round_trip() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut eco = Ecosystem::new(Params::default(), &mut rng).unwrap();
    eco.generation = 7;
    eco.creatures[0].food_eaten = 1;
    let path = std::env::temp_dir().join("forage_round_trip.json");
    let path = path.to_str().unwrap();

    eco.save_to_file(path).unwrap();
    let loaded = Ecosystem::load_from_file(path).unwrap();
    std::fs::remove_file(path).ok();

    assert_eq!(loaded.generation, 7);
    assert_eq!(loaded.creatures.len(), eco.creatures.len());
    assert_eq!(loaded.food.len(), eco.food.len());
    assert_eq!(loaded.creatures[0].food_eaten, 1);
    assert_eq!(loaded.creatures[0].pos, eco.creatures[0].pos);
    assert_eq!(loaded.params().cost, eco.params().cost);
}

#[test]
fn test_load_rejects_traits_below_floor() {
    let mut rng = StdRng::seed_from_u64(4);
    let eco = Ecosystem::new(Params::default(), &mut rng).unwrap();
    let mut json = serde_json::to_value(&eco).unwrap();
    json["creatures"][0]["traits"]["size"] = serde_json::json!(0.1);
    let path = std::env::temp_dir().join("forage_below_floor.json");
    let path = path.to_str().unwrap();

    std::fs::write(path, json.to_string()).unwrap();
    let result = Ecosystem::load_from_file(path);
    std::fs::remove_file(path).ok();

    assert!(result.is_err());
}
