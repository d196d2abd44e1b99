use crate::{
    boundary::Bounds,
    config::SwarmConfig,
    error::Result,
    forces::{attraction_between, Attractor, PointMass},
    mover::Mover,
    steering::PathSegment,
    utils,
    vector::Vec2,
};

use rayon::prelude::*;
use tracing::{debug, trace_span};

/// Owns a population of movers and drives their ticks.
///
/// A tick is: apply forces (any of the `*_all` calls, in any order), then
/// [`step`](Swarm::step), which integrates every mover and reflects it off
/// the bounds.
#[derive(Clone, Debug)]
pub struct Swarm {
    /// Number of completed steps.
    pub frame: usize,
    pub movers: Vec<Mover>,
    pub bounds: Bounds,
    pub config: SwarmConfig,
}

impl Swarm {
    /// Starts an empty swarm.
    pub fn new(config: SwarmConfig) -> Result<Self> {
        Self::with_movers(Vec::new(), config)
    }

    /// Starts a swarm with the given movers. Their own limits are kept;
    /// `config.mover` only applies to movers spawned later.
    pub fn with_movers(movers: Vec<Mover>, config: SwarmConfig) -> Result<Self> {
        config.validate()?;
        let bounds = Bounds::new(config.width, config.height)?;
        debug!(
            movers = movers.len(),
            width = bounds.width,
            height = bounds.height,
            parallel = config.parallel,
            "swarm created"
        );
        Ok(Self {
            frame: 0,
            movers,
            bounds,
            config,
        })
    }

    /// Adds a mover built from `config.mover` and returns its index.
    pub fn spawn(&mut self, location: Vec2) -> Result<usize> {
        let mover = Mover::with_config(location, &self.config.mover)?;
        self.movers.push(mover);
        Ok(self.movers.len() - 1)
    }

    /// Replaces the population with `n` fresh movers on the left edge.
    pub fn reset(&mut self, n: usize, seed: u64) -> Result<()> {
        self.movers = utils::spawn_column(n, self.bounds, &self.config.mover, seed)?;
        self.frame = 0;
        debug!(movers = n, seed, "swarm reset");
        Ok(())
    }

    /// Sets whether to use rayon for the per-mover passes.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// Runs `f` on every mover. Each mover is visited exactly once, so the
    /// result is the same whether or not the pass runs in parallel.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(&mut Mover) + Sync + Send,
    {
        if self.config.parallel {
            self.movers.par_iter_mut().for_each(f);
        } else {
            self.movers.iter_mut().for_each(f);
        }
    }

    pub fn seek_all(&mut self, target: Vec2) {
        self.apply(|m| m.seek(target));
    }

    pub fn arrive_all(&mut self, target: Vec2) {
        self.apply(|m| m.arrive(target));
    }

    pub fn follow_all(&mut self, path: &PathSegment) {
        self.apply(|m| {
            m.follow(path);
        });
    }

    pub fn apply_friction_all(&mut self) {
        let c = self.config.forces.friction;
        self.apply(|m| m.apply_friction(c));
    }

    pub fn apply_resistance_all(&mut self) {
        let c = self.config.forces.drag;
        self.apply(|m| m.apply_resistance(c));
    }

    pub fn attract_to<A: Attractor + Sync>(&mut self, attractor: &A) {
        let g = self.config.forces.gravity;
        self.apply(|m| m.attract(attractor, g));
    }

    pub fn repel_from<A: Attractor + Sync>(&mut self, attractor: &A) {
        let g = self.config.forces.gravity;
        self.apply(|m| m.repel(attractor, g));
    }

    /// Mutual attraction between every pair of movers.
    ///
    /// Positions and masses are snapshotted first, so every pairwise force
    /// reads pre-tick state regardless of the order movers are visited in.
    pub fn attract_all(&mut self) {
        let _span = trace_span!("attract_all", movers = self.movers.len()).entered();
        let g = self.config.forces.gravity;
        let sources: Vec<PointMass> = self
            .movers
            .iter()
            .map(|m| PointMass::new(m.location(), m.mass()))
            .collect();

        let pull = |(i, mover): (usize, &mut Mover)| {
            let total = sources
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(Vec2::zero(), |acc, (_, source)| {
                    acc + attraction_between(mover.location(), mover.mass(), source, g)
                });
            mover.apply_force(total);
        };

        if self.config.parallel {
            self.movers.par_iter_mut().enumerate().for_each(pull);
        } else {
            self.movers.iter_mut().enumerate().for_each(pull);
        }
    }

    /// Integrates every mover and then keeps it inside the bounds.
    pub fn step(&mut self) {
        let _span = trace_span!("step", frame = self.frame).entered();
        let bounds = self.bounds;
        self.apply(|m| {
            m.update();
            m.check_edges(bounds);
        });
        self.frame += 1;
    }
}
