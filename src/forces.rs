//! Force generators that don't depend on a steering target:
//! friction, quadratic drag, and gravitational attraction/repulsion.

use crate::{
    mover::Mover,
    vector::{Vec2, VecExt},
};

/// Closest distance used when computing gravitational strength.
pub const MIN_ATTRACTION_DISTANCE: f32 = 5.0;
/// Farthest distance used when computing gravitational strength.
pub const MAX_ATTRACTION_DISTANCE: f32 = 25.0;

/// Anything that can act as a source of gravity.
pub trait Attractor {
    fn position(&self) -> Vec2;
    /// Mass-like scalar that scales the gravitational strength.
    fn inertial_mass(&self) -> f32;
}

/// A stationary mass, e.g. a target or an obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMass {
    pub position: Vec2,
    pub mass: f32,
}

impl PointMass {
    pub fn new(position: Vec2, mass: f32) -> Self {
        Self { position, mass }
    }
}

impl Attractor for PointMass {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn inertial_mass(&self) -> f32 {
        self.mass
    }
}

impl Attractor for Mover {
    fn position(&self) -> Vec2 {
        self.location
    }

    fn inertial_mass(&self) -> f32 {
        self.mass
    }
}

impl<A: Attractor + ?Sized> Attractor for &A {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn inertial_mass(&self) -> f32 {
        (**self).inertial_mass()
    }
}

/// Gravitational force on a body at `position` with `mass`, pulling it toward `other`.
///
/// The distance is clamped into `[5, 25]` before use, which bounds the
/// strength on both ends. Coincident positions give no force.
pub fn attraction_between(position: Vec2, mass: f32, other: &impl Attractor, g: f32) -> Vec2 {
    let to_other = other.position() - position;
    let distance = to_other
        .mag()
        .clamp(MIN_ATTRACTION_DISTANCE, MAX_ATTRACTION_DISTANCE);
    let strength = g * mass * other.inertial_mass() / (distance * distance);
    to_other.normalized_or_zero() * strength
}

impl Mover {
    /// Force of magnitude `coefficient` opposing the current velocity.
    ///
    /// The magnitude is constant and does not scale with speed or mass.
    pub fn friction_force(&self, coefficient: f32) -> Vec2 {
        -self.velocity.normalized_or_zero() * coefficient
    }

    /// Force opposing the current velocity with magnitude `coefficient * speed²`.
    pub fn drag_force(&self, coefficient: f32) -> Vec2 {
        let speed = self.velocity.mag();
        -self.velocity.normalized_or_zero() * (coefficient * speed * speed)
    }

    pub fn attraction_force(&self, other: &impl Attractor, g: f32) -> Vec2 {
        attraction_between(self.location, self.mass, other, g)
    }

    pub fn apply_friction(&mut self, coefficient: f32) {
        let f = self.friction_force(coefficient);
        self.apply_force(f);
    }

    /// Applies quadratic fluid drag.
    pub fn apply_resistance(&mut self, coefficient: f32) {
        let f = self.drag_force(coefficient);
        self.apply_force(f);
    }

    /// Pulls this mover toward `other`.
    pub fn attract(&mut self, other: &impl Attractor, g: f32) {
        let f = self.attraction_force(other, g);
        self.apply_force(f);
    }

    /// Pushes this mover away from `other` with the same magnitude `attract` would use.
    pub fn repel(&mut self, other: &impl Attractor, g: f32) {
        let f = self.attraction_force(other, g);
        self.apply_force(-f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_G;

    const EPS: f32 = 1e-5;

    fn moving(velocity: Vec2) -> Mover {
        Mover::new(Vec2::new(100.0, 100.0), 2.0)
            .unwrap()
            .with_velocity(velocity)
    }

    #[test]
    fn friction_is_constant_and_opposes_motion() {
        let slow = moving(Vec2::new(0.5, 0.0)).friction_force(0.1);
        let fast = moving(Vec2::new(3.0, 0.0)).friction_force(0.1);
        assert!((slow.x + 0.1).abs() < EPS);
        assert_eq!(slow, fast);
    }

    #[test]
    fn no_friction_or_drag_at_rest() {
        let m = moving(Vec2::zero());
        assert_eq!(m.friction_force(0.5), Vec2::zero());
        assert_eq!(m.drag_force(0.5), Vec2::zero());
    }

    #[test]
    fn drag_is_quadratic_in_speed() {
        let f = moving(Vec2::new(0.0, 3.0)).drag_force(0.01);
        assert!((f.y + 0.09).abs() < EPS);
        assert!(f.x.abs() < EPS);
    }

    #[test]
    fn apply_resistance_divides_by_mass() {
        let mut m = moving(Vec2::new(2.0, 0.0));
        m.apply_resistance(0.5);
        assert!((m.acceleration().x + 1.0).abs() < EPS);
    }

    #[test]
    fn attract_pulls_and_repel_pushes() {
        let sun = PointMass::new(Vec2::new(110.0, 100.0), 10.0);
        let mut a = moving(Vec2::zero());
        a.attract(&sun, DEFAULT_G);
        assert!(a.acceleration().x > 0.0);

        let mut r = moving(Vec2::zero());
        r.repel(&sun, DEFAULT_G);
        assert!((r.acceleration().x + a.acceleration().x).abs() < EPS);
    }

    #[test]
    fn coincident_attractor_exerts_nothing() {
        let m = moving(Vec2::zero());
        let here = PointMass::new(m.location(), 10.0);
        assert_eq!(m.attraction_force(&here, DEFAULT_G), Vec2::zero());
    }

    #[test]
    fn movers_attract_each_other() {
        let a = moving(Vec2::zero());
        let b = Mover::new(Vec2::new(100.0, 90.0), 3.0).unwrap();
        let on_a = a.attraction_force(&b, 1.0);
        let on_b = b.attraction_force(&a, 1.0);
        assert!((on_a + on_b).mag() < EPS);
        assert!(on_a.y < 0.0);
    }
}
