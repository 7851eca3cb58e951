//! Trace records and pool initialization.

use crate::color::TraceColor;
use crate::constants::*;
use crate::state::SurfaceSize;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Which coordinate the elbow of the drawn polyline shares with its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BendOrder {
    /// Horizontal leg first: elbow at `(end.x, start.y)`.
    XFirst,
    /// Vertical leg first: elbow at `(start.x, end.y)`.
    YFirst,
}

/// One drifting circuit-trace segment.
///
/// `position`, `velocity` and `heading` are advanced every tick; every other
/// field is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub position: Vec2,
    pub velocity: Vec2,
    pub heading: f32,
    pub heading_drift: f32,
    pub phase: f32,
    /// Characteristic speed scale. Not read by the step or the renderer.
    pub base_speed: f32,
    pub orbit_radius: f32,
    pub segment_length: f32,
    pub stroke_width: f32,
    pub color: TraceColor,
    pub bend: BendOrder,
}

impl Trace {
    /// Random trace for pool slot `index` placed somewhere on `size`.
    pub fn random<R: Rng + ?Sized>(index: usize, size: SurfaceSize, rng: &mut R) -> Self {
        // `gen::<f32>() * extent` stays valid for a zero-area surface
        let position = Vec2::new(
            rng.gen::<f32>() * size.width,
            rng.gen::<f32>() * size.height,
        );
        let velocity = Vec2::new(
            rng.gen_range(-INIT_VELOCITY_SPAN..INIT_VELOCITY_SPAN),
            rng.gen_range(-INIT_VELOCITY_SPAN..INIT_VELOCITY_SPAN),
        );
        Self {
            position,
            velocity,
            heading: rng.gen_range(0.0..TAU),
            heading_drift: rng.gen_range(-INIT_HEADING_DRIFT_SPAN..INIT_HEADING_DRIFT_SPAN),
            base_speed: rng.gen_range(BASE_SPEED_MIN..BASE_SPEED_MAX),
            phase: rng.gen_range(0.0..TAU),
            orbit_radius: rng.gen_range(ORBIT_RADIUS_MIN..ORBIT_RADIUS_MAX),
            segment_length: rng.gen_range(SEGMENT_LENGTH_MIN..SEGMENT_LENGTH_MAX),
            stroke_width: if rng.gen_bool(THICK_PROBABILITY) {
                STROKE_THICK
            } else {
                STROKE_THIN
            },
            color: color_for_index(index),
            bend: if rng.gen_bool(0.5) {
                BendOrder::XFirst
            } else {
                BendOrder::YFirst
            },
        }
    }
}

#[inline]
pub fn color_for_index(index: usize) -> TraceColor {
    if index % AMBER_EVERY == 0 {
        TraceColor::Amber
    } else {
        TraceColor::Teal
    }
}

/// Build a pool of `count` random traces spread over `size`.
pub fn initialize<R: Rng + ?Sized>(count: usize, size: SurfaceSize, rng: &mut R) -> Vec<Trace> {
    (0..count)
        .map(|i| Trace::random(i, size, &mut *rng))
        .collect()
}
