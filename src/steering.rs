//! Target-driven steering: seek, arrive and path following.
//!
//! Every behavior computes a desired velocity, subtracts the current
//! velocity, caps the result at `max_force` and feeds it to
//! [`Mover::apply_force`]. The `*_force` variants return the steer
//! without applying it.

use crate::{
    error::{non_negative, Result},
    mover::Mover,
    vector::{Vec2, VecExt},
};

/// Inside this distance `arrive` scales the desired speed down linearly.
pub const ARRIVE_RADIUS: f32 = 100.0;
/// How far ahead along the velocity `follow` predicts the mover's position.
pub const PREDICTION_DISTANCE: f32 = 50.0;
/// How far past the normal point along the path `follow` aims.
pub const PATH_LOOKAHEAD: f32 = 10.0;

/// A straight path with a tolerance band of `radius` around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    pub start: Vec2,
    pub end: Vec2,
    radius: f32,
}

impl PathSegment {
    pub fn new(start: Vec2, end: Vec2, radius: f32) -> Result<Self> {
        let radius = non_negative("radius", radius)?;
        Ok(Self { start, end, radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Unit direction from `start` to `end`, zero for a degenerate segment.
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalized_or_zero()
    }
}

/// Projects `p` onto the infinite line through `a` and `b`.
///
/// If `a == b` the result is `a`.
pub fn normal_point(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ap = p - a;
    let ab = (b - a).normalized_or_zero();
    a + ab * ap.dot(ab)
}

impl Mover {
    fn steer(&self, desired: Vec2) -> Vec2 {
        (desired - self.velocity).limit(self.max_force)
    }

    /// Steering toward `target` at full speed.
    pub fn seek_force(&self, target: Vec2) -> Vec2 {
        let desired = (target - self.location).with_mag(self.speed_limit);
        self.steer(desired)
    }

    /// Like [`seek_force`](Self::seek_force), but the desired speed ramps
    /// from zero at the target up to the speed limit at [`ARRIVE_RADIUS`].
    pub fn arrive_force(&self, target: Vec2) -> Vec2 {
        let desired = target - self.location;
        let d = desired.mag();
        let speed = if d < ARRIVE_RADIUS {
            d / ARRIVE_RADIUS * self.speed_limit
        } else {
            self.speed_limit
        };
        self.steer(desired.with_mag(speed))
    }

    /// Steering that brings the mover back onto `path`, or `None` while the
    /// predicted position is within the path radius.
    pub fn follow_force(&self, path: &PathSegment) -> Option<Vec2> {
        let predicted = self.location + self.velocity.normalized_or_zero() * PREDICTION_DISTANCE;
        let normal = normal_point(predicted, path.start, path.end);
        if predicted.distance(normal) <= path.radius {
            return None;
        }
        let target = normal + path.direction() * PATH_LOOKAHEAD;
        Some(self.seek_force(target))
    }

    pub fn seek(&mut self, target: Vec2) {
        let f = self.seek_force(target);
        self.apply_force(f);
    }

    pub fn arrive(&mut self, target: Vec2) {
        let f = self.arrive_force(target);
        self.apply_force(f);
    }

    /// Steers toward `path` if needed. Returns whether any force was applied.
    pub fn follow(&mut self, path: &PathSegment) -> bool {
        match self.follow_force(path) {
            Some(f) => {
                self.apply_force(f);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MoverConfig;

    const EPS: f32 = 1e-5;

    fn mover_at(location: Vec2, max_force: f32) -> Mover {
        let config = MoverConfig {
            mass: 1.0,
            speed_limit: 4.0,
            max_force,
        };
        Mover::with_config(location, &config).unwrap()
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(PathSegment::new(Vec2::zero(), Vec2::new(1.0, 0.0), -0.5).is_err());
        assert!(PathSegment::new(Vec2::zero(), Vec2::new(1.0, 0.0), 0.0).is_ok());
    }

    #[test]
    fn normal_point_projects_onto_line() {
        let n = normal_point(
            Vec2::new(3.0, 7.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(10.0, 2.0),
        );
        assert!((n - Vec2::new(3.0, 2.0)).mag() < EPS);

        // beyond the end of the segment still lands on the line
        let n = normal_point(
            Vec2::new(-5.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(10.0, 2.0),
        );
        assert!((n - Vec2::new(-5.0, 2.0)).mag() < EPS);
    }

    #[test]
    fn degenerate_segment_projects_to_start() {
        let a = Vec2::new(1.0, 1.0);
        assert_eq!(normal_point(Vec2::new(9.0, 4.0), a, a), a);
    }

    #[test]
    fn seek_steer_is_capped() {
        let m = mover_at(Vec2::zero(), 0.2);
        let f = m.seek_force(Vec2::new(0.0, 100.0));
        assert!((f.mag() - 0.2).abs() < EPS);
        assert!(f.x.abs() < EPS);
    }

    #[test]
    fn seek_on_target_only_brakes() {
        let m = mover_at(Vec2::new(5.0, 5.0), 10.0).with_velocity(Vec2::new(1.0, 0.0));
        let f = m.seek_force(Vec2::new(5.0, 5.0));
        assert_eq!(f, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn arrive_ramps_desired_speed() {
        let m = mover_at(Vec2::zero(), 10.0);
        let f = m.arrive_force(Vec2::new(25.0, 0.0));
        assert!((f.x - 1.0).abs() < EPS);
        let f = m.arrive_force(Vec2::new(250.0, 0.0));
        assert!((f.x - 4.0).abs() < EPS);
    }

    #[test]
    fn follow_coasts_inside_radius() {
        let path = PathSegment::new(Vec2::new(0.0, 100.0), Vec2::new(400.0, 100.0), 20.0).unwrap();
        let mut m = mover_at(Vec2::new(0.0, 110.0), 0.2).with_velocity(Vec2::new(2.0, 0.0));
        assert!(!m.follow(&path));
        assert_eq!(m.acceleration(), Vec2::zero());
    }

    #[test]
    fn follow_steers_outside_radius() {
        let path = PathSegment::new(Vec2::new(0.0, 100.0), Vec2::new(400.0, 100.0), 20.0).unwrap();
        let mut m = mover_at(Vec2::new(0.0, 150.0), 0.2).with_velocity(Vec2::new(2.0, 0.0));
        assert!(m.follow(&path));
        // target is (60, 100): steer has to point back toward the path
        assert!(m.acceleration().y < 0.0);
    }

    #[test]
    fn follow_at_rest_predicts_current_location() {
        let path = PathSegment::new(Vec2::zero(), Vec2::new(100.0, 0.0), 5.0).unwrap();
        let m = mover_at(Vec2::new(50.0, 30.0), 10.0);
        let f = m.follow_force(&path).unwrap();
        // seeks (60, 0) at full speed
        let expected = (Vec2::new(60.0, 0.0) - Vec2::new(50.0, 30.0)).with_mag(4.0);
        assert!((f - expected).mag() < EPS);
    }
}
