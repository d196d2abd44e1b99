//! Tunables for movers and the swarm driver.
//!
//! Defaults are resolved here, once, so an explicit `0.0` coming from a
//! caller or a config file is never silently replaced.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{non_negative, positive_mass, Result};

pub const DEFAULT_MASS: f32 = 40.0;
pub const DEFAULT_SPEED_LIMIT: f32 = 4.0;
pub const DEFAULT_MAX_FORCE: f32 = 0.2;
pub const DEFAULT_FRICTION: f32 = 0.01;
pub const DEFAULT_DRAG: f32 = 0.01;
/// Gravitational constant used when none is configured.
pub const DEFAULT_G: f32 = 0.4;

/// Per-mover physical limits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MoverConfig {
    pub mass: f32,
    /// Upper bound on `|velocity|` after every update.
    pub speed_limit: f32,
    /// Upper bound on the magnitude of a single steering force.
    pub max_force: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            speed_limit: DEFAULT_SPEED_LIMIT,
            max_force: DEFAULT_MAX_FORCE,
        }
    }
}

impl MoverConfig {
    pub fn validate(&self) -> Result<()> {
        positive_mass(self.mass)?;
        non_negative("speed_limit", self.speed_limit)?;
        non_negative("max_force", self.max_force)?;
        Ok(())
    }
}

/// Coefficients for the field forces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ForceCoefficients {
    /// Constant friction magnitude, independent of speed.
    pub friction: f32,
    /// Quadratic drag coefficient.
    pub drag: f32,
    /// Gravitational constant for attraction and repulsion.
    pub gravity: f32,
}

impl Default for ForceCoefficients {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            drag: DEFAULT_DRAG,
            gravity: DEFAULT_G,
        }
    }
}

/// Everything a [`Swarm`](crate::Swarm) needs to run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SwarmConfig {
    pub width: f32,
    pub height: f32,
    /// Limits given to every mover the swarm spawns.
    pub mover: MoverConfig,
    pub forces: ForceCoefficients,
    /// Run per-mover passes on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 360.0,
            mover: MoverConfig::default(),
            forces: ForceCoefficients::default(),
            parallel: false,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("width", self.width)?;
        non_negative("height", self.height)?;
        self.mover.validate()
    }
}
