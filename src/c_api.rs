#![allow(non_snake_case)]

use crate::{
    config::SwarmConfig,
    mover::Mover,
    steering::PathSegment,
    swarm::Swarm,
};
use tracing::warn;
use ultraviolet::Vec2;

/// Returns null if the dimensions are rejected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Create(width: f32, height: f32) -> *mut Swarm {
    let config = SwarmConfig {
        width,
        height,
        ..SwarmConfig::default()
    };
    match Swarm::new(config) {
        Ok(swarm) => Box::into_raw(Box::new(swarm)),
        Err(err) => {
            warn!(%err, "Swarm_Create rejected bounds");
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Destroy(handle: *mut Swarm) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Step(handle: *mut Swarm) {
    match unsafe { handle.as_mut() } {
        Some(swarm) => swarm.step(),
        None => warn!("Swarm_Step called with a null handle"),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Reset(handle: *mut Swarm, n: usize, seed: u64) {
    if let Some(swarm) = unsafe { handle.as_mut() } {
        if let Err(err) = swarm.reset(n, seed) {
            warn!(%err, "Swarm_Reset failed");
        }
    }
}

/// Returns the new mover's index, or -1 if the mass is rejected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_AddMover(handle: *mut Swarm, x: f32, y: f32, mass: f32) -> i64 {
    let Some(swarm) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    match Mover::new(Vec2::new(x, y), mass) {
        Ok(mover) => {
            swarm.movers.push(mover);
            (swarm.movers.len() - 1) as i64
        }
        Err(err) => {
            warn!(%err, "Swarm_AddMover rejected mover");
            -1
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_GetMoverCount(handle: *const Swarm) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |swarm| swarm.movers.len())
}

/// Pointer to `Swarm_GetMoverCount` contiguous movers, valid until the next mutating call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_GetMovers(handle: *const Swarm) -> *const Mover {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |swarm| swarm.movers.as_ptr())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Seek(handle: *mut Swarm, x: f32, y: f32) {
    if let Some(swarm) = unsafe { handle.as_mut() } {
        swarm.seek_all(Vec2::new(x, y));
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Arrive(handle: *mut Swarm, x: f32, y: f32) {
    if let Some(swarm) = unsafe { handle.as_mut() } {
        swarm.arrive_all(Vec2::new(x, y));
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Swarm_Follow(
    handle: *mut Swarm,
    ax: f32,
    ay: f32,
    bx: f32,
    by: f32,
    radius: f32,
) {
    let Some(swarm) = (unsafe { handle.as_mut() }) else {
        return;
    };
    match PathSegment::new(Vec2::new(ax, ay), Vec2::new(bx, by), radius) {
        Ok(path) => swarm.follow_all(&path),
        Err(err) => warn!(%err, "Swarm_Follow rejected path"),
    }
}
