use crate::{
    error::{non_negative, Result},
    mover::Mover,
};

/// Rectangular region `[0, width] x [0, height]` supplied by the host.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        Ok(Self {
            width: non_negative("width", width)?,
            height: non_negative("height", height)?,
        })
    }
}

/// Clamps one axis to `[margin, extent - margin]` and flips the velocity on contact.
#[inline]
fn reflect_axis(position: &mut f32, velocity: &mut f32, extent: f32, margin: f32) {
    if *position > extent - margin {
        *position = extent - margin;
        *velocity = -*velocity;
    } else if *position < margin {
        *position = margin;
        *velocity = -*velocity;
    }
}

impl Mover {
    /// Keeps the mover inside `bounds`, reflecting velocity at the walls.
    ///
    /// Mass doubles as the body radius here, so heavier movers stay
    /// farther from the edges.
    pub fn check_edges(&mut self, bounds: Bounds) {
        reflect_axis(
            &mut self.location.x,
            &mut self.velocity.x,
            bounds.width,
            self.mass,
        );
        reflect_axis(
            &mut self.location.y,
            &mut self.velocity.y,
            bounds.height,
            self.mass,
        );
    }
}
