//! Steering and random placement in the field.

use colony_types::Point;
use rand::Rng;

/// Move `position` toward `target` by exactly `step` units along the unit
/// direction vector. Returns the distance travelled.
///
/// A step longer than the remaining distance carries the agent past its
/// target. A zero distance counts as arrived and never divides by zero; a
/// non-positive step leaves the agent in place.
pub fn step_toward(position: &mut Point, target: Point, step: f64) -> f64 {
    let distance = position.distance_to(target);
    if !distance.is_finite() || distance <= 0.0 || step.is_nan() || step <= 0.0 {
        return 0.0;
    }

    position.x += (target.x - position.x) / distance * step;
    position.y += (target.y - position.y) / distance * step;
    step
}

/// Draw uniformly between two bounds given in either order. A degenerate
/// interval yields its single value.
pub fn uniform(rng: &mut impl Rng, a: f64, b: f64) -> f64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if low < high {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// A uniformly random point over the whole `width` x `height` field.
pub fn random_point(rng: &mut impl Rng, width: f64, height: f64) -> Point {
    let x = uniform(rng, 0.0, width);
    let y = uniform(rng, 0.0, height);
    Point::new(x, y)
}

/// A uniformly random point at least `margin` from every edge of the field.
///
/// On a field narrower than twice the margin the inset bounds cross; the
/// point is then drawn between them.
pub fn random_inset_point(rng: &mut impl Rng, width: f64, height: f64, margin: f64) -> Point {
    let x = uniform(rng, margin, width - margin);
    let y = uniform(rng, margin, height - margin);
    Point::new(x, y)
}
