//! Geometric utility functions for distance calculations and movement.
//!
//! Every function accepts either a position or an optional position. A missing
//! argument yields a neutral result (zero distance, zero vector, `false`) so a
//! target removed between search and use never aborts a tick.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

fn to_point(v: &Array1<f32>) -> Point<f32> {
    Point::new(v[0], v[1])
}

/// Euclidean distance between two positions.
///
/// # Returns
///
/// The distance, or `0.0` if either position is absent.
pub fn distance<'a, 'b>(
    a: impl Into<Option<&'a Array1<f32>>>,
    b: impl Into<Option<&'b Array1<f32>>>,
) -> f32 {
    match (a.into(), b.into()) {
        (Some(a), Some(b)) => Euclidean.distance(to_point(a), to_point(b)),
        _ => 0.0,
    }
}

/// Displacement from `source` toward `destination` limited to `max_step`.
///
/// # Arguments
///
/// * `source` - Position moving
/// * `destination` - Position to move toward
/// * `max_step` - Largest displacement allowed in one step
///
/// # Returns
///
/// A vector of length `min(max_step, distance)` pointing at the destination, or
/// the zero vector when the two positions coincide or either is absent.
pub fn movement_delta<'a, 'b>(
    source: impl Into<Option<&'a Array1<f32>>>,
    destination: impl Into<Option<&'b Array1<f32>>>,
    max_step: f32,
) -> Array1<f32> {
    let (Some(source), Some(destination)) = (source.into(), destination.into()) else {
        return Array1::zeros(2);
    };

    let total = distance(source, destination);
    if total == 0.0 {
        return Array1::zeros(2);
    }

    let fraction = max_step.min(total) / total;
    (destination - source) * fraction
}

/// Negates both components of a vector. Used to flee.
pub fn reverse(v: &Array1<f32>) -> Array1<f32> {
    -v
}

/// Checks whether two positions lie within `epsilon` of each other.
///
/// Returns `false` if either position is absent.
pub fn close_enough<'a, 'b>(
    a: impl Into<Option<&'a Array1<f32>>>,
    b: impl Into<Option<&'b Array1<f32>>>,
    epsilon: f32,
) -> bool {
    match (a.into(), b.into()) {
        (Some(a), Some(b)) => distance(a, b) <= epsilon,
        _ => false,
    }
}

/// Clamps a position in place to the arena `[0, width] x [0, height]`.
pub fn clamp_to_arena(v: &mut Array1<f32>, width: f32, height: f32) {
    v[0] = v[0].clamp(0.0, width);
    v[1] = v[1].clamp(0.0, height);
}
