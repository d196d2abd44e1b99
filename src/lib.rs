pub mod boundary;
pub mod c_api;
pub mod config;
pub mod error;
pub mod forces;
pub mod mover;
pub mod steering;
pub mod swarm;
pub mod utils;
pub mod vector;

pub use boundary::Bounds;
pub use config::{ForceCoefficients, MoverConfig, SwarmConfig, DEFAULT_G};
pub use error::{Error, Result};
pub use forces::{Attractor, PointMass};
pub use mover::Mover;
pub use steering::{normal_point, PathSegment};
pub use swarm::Swarm;
pub use vector::{Vec2, VecExt};
