//! One-tick kinematics for a single trace.
//!
//! `step_trace` only reads the trace it mutates plus the shared per-tick
//! inputs, so stepping the pool in any order gives the same result.

use crate::constants::*;
use crate::params::FieldParams;
use crate::state::{PointerState, SurfaceSize};
use crate::trace::Trace;
use glam::Vec2;

/// Push `velocity` away from the pointer when `position` is within `radius`.
///
/// Returns the applied velocity delta. Zero distance gets no push.
#[inline]
pub fn apply_repulsion(
    position: Vec2,
    velocity: &mut Vec2,
    pointer: &PointerState,
    radius: f32,
    strength: f32,
) -> Vec2 {
    let Some(away) = pointer.offset_to(position) else {
        return Vec2::ZERO;
    };
    let distance = away.length();
    if distance <= 0.0 || distance >= radius {
        return Vec2::ZERO;
    }
    let push = ((radius - distance) / radius) * strength;
    let delta = away / distance * push;
    *velocity += delta;
    delta
}

#[inline]
pub fn apply_drift(velocity: &mut Vec2, heading: f32, phase: f32) {
    let steer = heading + phase;
    *velocity += Vec2::new(steer.cos(), steer.sin()) * DRIFT_FORCE;
}

#[inline]
pub fn apply_damping(velocity: &mut Vec2) {
    *velocity *= DAMPING;
}

/// Small per-trace oscillation keyed by the global tick and the trace index.
#[inline]
pub fn jitter(tick: u64, index: usize) -> Vec2 {
    let t = tick as f32;
    let i = index as f32;
    Vec2::new(
        (t * JITTER_RATE_X + i).cos(),
        (t * JITTER_RATE_Y + i).sin(),
    ) * JITTER_AMPLITUDE
}

/// Toroidal wrap with a margin so traces fully leave before reappearing.
#[inline]
pub fn wrap_position(position: &mut Vec2, size: SurfaceSize, margin: f32) {
    position.x = wrap_axis(position.x, size.width, margin);
    position.y = wrap_axis(position.y, size.height, margin);
}

#[inline]
fn wrap_axis(mut v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        v = extent + margin;
    }
    if v > extent + margin {
        v = -margin;
    }
    v
}

/// Advance `trace` (pool slot `index`) by one tick.
pub fn step_trace(
    trace: &mut Trace,
    index: usize,
    tick: u64,
    pointer: &PointerState,
    size: SurfaceSize,
    params: &FieldParams,
) {
    apply_repulsion(
        trace.position,
        &mut trace.velocity,
        pointer,
        params.repel_radius,
        params.repel_strength,
    );
    trace.heading += trace.heading_drift;
    apply_drift(&mut trace.velocity, trace.heading, trace.phase);
    apply_damping(&mut trace.velocity);
    trace.position += trace.velocity + jitter(tick, index);
    wrap_position(&mut trace.position, size, params.wrap_margin);
}
