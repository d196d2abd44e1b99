use crate::{boundary::Bounds, config::MoverConfig, error::Result, mover::Mover};
use ultraviolet::Vec2;

/// Generates `n` movers at the left edge of `bounds`, around mid-height.
/// - Each mover sits one mass (body radius) in from the wall.
/// - Heights are jittered over the middle quarter of the region.
/// - Spawn velocities point in a random direction at up to the speed limit.
///
/// The same `seed` always yields the same population.
pub fn spawn_column(
    n: usize,
    bounds: Bounds,
    config: &MoverConfig,
    seed: u64,
) -> Result<Vec<Mover>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let spread = bounds.height * 0.25;
    let mid = bounds.height * 0.5;

    let mut movers = Vec::with_capacity(n);
    while movers.len() < n {
        let y = mid + (rng.f32() - 0.5) * spread;
        let location = Vec2::new(config.mass, y);

        // Random heading
        let a = rng.f32() * std::f32::consts::TAU;
        let (sin, cos) = a.sin_cos();
        let speed = rng.f32() * config.speed_limit;

        let mover = Mover::with_config(location, config)?.with_velocity(Vec2::new(cos, sin) * speed);
        movers.push(mover);
    }

    Ok(movers)
}
