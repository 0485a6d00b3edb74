#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use forage::simulation::creature::{Creature, CreatureId, STARTING_ENERGY, Target, can_eat};
use forage::simulation::food::{Food, FoodId};
use forage::simulation::params::{CostModel, MutationFlags, Params};
use forage::simulation::traits::{MIN_SIZE, MUTATION_RANGE, Traits};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn creature(id: u64, x: f32, y: f32, size: f32) -> Creature {
    Creature::new(CreatureId(id), x, y, Traits::new(1.0, 1.0, size).unwrap())
}

#[test]
fn test_energy_can_go_negative() {
    let mut c = creature(0, 0.0, 0.0, 1.0);
    c.energy = 1.0;

    // 1^2 * 1^3 + 1^1
    c.expend_energy(&CostModel::default());

    assert_eq!(c.energy, -1.0);
    assert!(c.is_out_of_energy());
    assert!(!c.is_active());
}

#[test]
fn test_full_after_two_meals() {
    let mut c = creature(0, 0.0, 0.0, 1.0);
    c.eat();
    assert!(!c.is_full());
    assert!(c.is_active());

    c.eat();
    assert!(c.is_full());
    assert!(!c.is_active());
}

#[test]
fn test_closest_food_wins() {
    let c = creature(0, 0.0, 0.0, 1.0);
    let food = vec![
        Food::new(FoodId(10), 10.0, 0.0),
        Food::new(FoodId(11), 3.0, 0.0),
        Food::new(FoodId(12), 7.0, 0.0),
    ];
    // ratio 1.0 / 0.9 is below the eating threshold
    let others = vec![c.clone(), creature(1, 2.0, 0.0, 0.9)];

    assert_eq!(
        c.find_closest_target(&food, &others),
        Some(Target::Food(FoodId(11)))
    );
}

#[test]
fn test_closer_prey_beats_food() {
    let hunter = creature(0, 0.0, 0.0, 1.5);
    let food = vec![Food::new(FoodId(10), 10.0, 0.0)];
    let others = vec![hunter.clone(), creature(1, 5.0, 0.0, 1.0)];

    assert_eq!(
        hunter.find_closest_target(&food, &others),
        Some(Target::Creature(CreatureId(1)))
    );
}

#[test]
fn test_equal_distance_keeps_first_candidate() {
    let c = creature(0, 0.0, 0.0, 2.0);
    let food = vec![
        Food::new(FoodId(10), 4.0, 0.0),
        Food::new(FoodId(11), 0.0, 4.0),
    ];
    let others = vec![creature(1, -4.0, 0.0, 1.0)];

    assert_eq!(
        c.find_closest_target(&food, &others),
        Some(Target::Food(FoodId(10)))
    );
}

#[test]
fn test_nothing_to_pursue() {
    let c = creature(0, 0.0, 0.0, 1.0);
    assert_eq!(c.find_closest_target(&[], &[c.clone()]), None);
}

#[test]
fn test_eat_rule_is_a_size_ratio() {
    let big = creature(0, 0.0, 0.0, 1.2);
    let small = creature(1, 0.0, 0.0, 1.0);
    assert!(can_eat(&big, &small));
    assert!(!can_eat(&small, &big));
    assert!(!can_eat(&small, &small));
}

#[test]
fn test_reset_state_restores_birth_values() {
    let mut c = creature(0, 0.0, 0.0, 1.0);
    c.energy = 12.0;
    c.eat();
    c.closest_food = Some(Target::Food(FoodId(3)));
    c.threat = Some(CreatureId(9));

    c.reset_state();

    assert_eq!(c.energy, STARTING_ENERGY);
    assert_eq!(c.food_eaten, 0);
    assert_eq!(c.closest_food, None);
    assert_eq!(c.threat, None);
}

#[test]
fn test_offspring_traits_stay_in_window() {
    let mut rng = StdRng::seed_from_u64(5);
    let params = Params::default();
    let parent = Creature::new(CreatureId(0), 0.0, 0.0, Traits::new(2.0, 1.5, MIN_SIZE).unwrap());

    for i in 1..200 {
        let child = parent.offspring(CreatureId(i), 0.0, 0.0, &params, &mut rng);
        assert!((child.speed() - 2.0).abs() <= MUTATION_RANGE);
        assert!((child.sight() - 1.5).abs() <= MUTATION_RANGE);
        assert!(child.size() >= MIN_SIZE);
        assert!(child.size() <= MIN_SIZE + MUTATION_RANGE);
        assert_eq!(child.energy, STARTING_ENERGY);
        assert_eq!(child.food_eaten, 0);
    }
}

#[test]
fn test_disabled_mutation_copies_parent() {
    let mut rng = StdRng::seed_from_u64(5);
    let params = Params {
        mutation: MutationFlags {
            speed: false,
            sight: true,
            size: false,
        },
        ..Params::default()
    };
    let parent = Creature::new(CreatureId(0), 0.0, 0.0, Traits::new(1.7, 1.0, 0.8).unwrap());

    let child = parent.offspring(CreatureId(1), 5.0, 5.0, &params, &mut rng);

    assert_eq!(child.speed(), 1.7);
    assert_eq!(child.size(), 0.8);
    assert_eq!(child.pos[0], 5.0);
}

#[test]
fn test_movement_is_clamped_to_arena() {
    let params = Params::default();
    let mut c = creature(0, params.arena_width, 10.0, 1.0);
    let beyond = ndarray::Array1::from_vec(vec![params.arena_width + 100.0, 10.0]);

    c.move_toward(&beyond, &params);

    assert_eq!(c.pos[0], params.arena_width);
    assert!(c.energy < STARTING_ENERGY);
}
