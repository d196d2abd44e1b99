use tracing::trace;

use crate::{
    config::MoverConfig,
    error::Result,
    vector::{Vec2, VecExt},
};

/// An autonomous point mass steered by accumulated forces.
///
/// State only changes through the `apply_*` family, the steering calls,
/// [`update`](Mover::update) and [`check_edges`](Mover::check_edges).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mover {
    pub(crate) location: Vec2,
    pub(crate) velocity: Vec2,
    /// Force accumulator for the current tick, already divided by mass.
    /// Reset to zero by every `update`.
    pub(crate) acceleration: Vec2,
    pub(crate) mass: f32,
    pub(crate) speed_limit: f32,
    pub(crate) max_force: f32,
}

impl Mover {
    /// Creates a resting mover at `location` with default limits.
    pub fn new(location: Vec2, mass: f32) -> Result<Self> {
        Self::with_config(
            location,
            &MoverConfig {
                mass,
                ..MoverConfig::default()
            },
        )
    }

    /// Creates a resting mover at `location` with the given mass and limits.
    pub fn with_config(location: Vec2, config: &MoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            location,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass: config.mass,
            speed_limit: config.speed_limit,
            max_force: config.max_force,
        })
    }

    /// Sets the spawn velocity. It is limited to the speed limit like any integrated velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity.limit(self.speed_limit);
        self
    }

    pub fn location(&self) -> Vec2 {
        self.location
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn speed_limit(&self) -> f32 {
        self.speed_limit
    }

    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    /// Direction of travel in radians, for display only.
    pub fn heading(&self) -> f32 {
        self.velocity.heading()
    }

    /// Accumulates `force / mass` into this tick's acceleration.
    ///
    /// Mass is validated at construction, so this cannot divide by zero.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Integrates one tick.
    ///
    /// The velocity is limited after the whole tick's forces are in and before
    /// the mover moves, so a single step never travels farther than the speed limit.
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(self.speed_limit);
        self.location += self.velocity;
        self.acceleration = Vec2::zero();
        trace!(x = self.location.x, y = self.location.y, "mover updated");
    }
}
