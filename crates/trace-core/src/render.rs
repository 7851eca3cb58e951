//! Frame painting against an abstract 2D drawing surface.
//!
//! Nothing here mutates simulation state.

use crate::color::{Rgba, FADE_OVERLAY, GRID_LINE};
use crate::constants::*;
use crate::params::FieldParams;
use crate::state::{PointerState, SurfaceSize};
use crate::trace::{BendOrder, Trace};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Axis-aligned square of side `side` centered on `center`.
    #[inline]
    pub fn centered(center: Vec2, side: f32) -> Self {
        Self {
            origin: center - Vec2::splat(side * 0.5),
            size: Vec2::splat(side),
        }
    }
}

/// Soft shadow drawn under a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub glow: Option<Glow>,
}

/// The two drawing primitives the renderer needs. Coordinates are logical
/// pixels; the implementation owns any device-pixel scaling.
pub trait Canvas2d {
    /// Fill without glow.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);
}

/// Screen-space shape of one trace for a given tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceGeometry {
    pub start: Vec2,
    pub corner: Vec2,
    pub end: Vec2,
}

impl TraceGeometry {
    pub fn of(trace: &Trace, tick: u64) -> Self {
        let t = tick as f32;
        let wobble = Vec2::new(
            (t * WOBBLE_RATE_X + trace.phase).sin(),
            (t * WOBBLE_RATE_Y + trace.phase).cos(),
        ) * trace.orbit_radius;
        let start = trace.position + wobble;
        let end = start + Vec2::new(trace.heading.cos(), trace.heading.sin()) * trace.segment_length;
        let corner = match trace.bend {
            BendOrder::XFirst => Vec2::new(end.x, start.y),
            BendOrder::YFirst => Vec2::new(start.x, end.y),
        };
        Self { start, corner, end }
    }

    #[inline]
    pub fn points(&self) -> [Vec2; 3] {
        [self.start, self.corner, self.end]
    }
}

/// Traces fade back when the pointer is close.
#[inline]
pub fn trace_alpha(trace: &Trace, pointer: &PointerState, dim_radius: f32) -> f32 {
    if pointer.distance_to(trace.position) < dim_radius {
        ALPHA_NEAR
    } else {
        ALPHA_FAR
    }
}

pub fn draw_fade<S: Canvas2d + ?Sized>(surface: &mut S, size: SurfaceSize) {
    surface.fill_rect(Rect::new(0.0, 0.0, size.width, size.height), FADE_OVERLAY);
}

pub fn draw_grid<S: Canvas2d + ?Sized>(surface: &mut S, size: SurfaceSize, step: f32) {
    let stroke = Stroke {
        color: GRID_LINE,
        width: GRID_LINE_WIDTH,
        glow: None,
    };
    let mut x = 0.0;
    while x <= size.width {
        surface.stroke_polyline(&[Vec2::new(x, 0.0), Vec2::new(x, size.height)], stroke);
        x += step;
    }
    let mut y = 0.0;
    while y <= size.height {
        surface.stroke_polyline(&[Vec2::new(0.0, y), Vec2::new(size.width, y)], stroke);
        y += step;
    }
}

pub fn draw_trace<S: Canvas2d + ?Sized>(surface: &mut S, trace: &Trace, tick: u64, alpha: f32) {
    let geometry = TraceGeometry::of(trace, tick);
    let base = trace.color.rgba();
    let color = base.with_alpha(alpha);
    surface.stroke_polyline(
        &geometry.points(),
        Stroke {
            color,
            width: trace.stroke_width,
            glow: Some(Glow {
                color: base,
                blur: GLOW_BLUR,
            }),
        },
    );
    surface.fill_rect(Rect::centered(geometry.end, MARKER_SIZE), color);
}

/// Paint one frame: fade overlay, grid, then every trace when `enabled`.
pub fn render_frame<S: Canvas2d + ?Sized>(
    surface: &mut S,
    traces: &[Trace],
    tick: u64,
    pointer: &PointerState,
    size: SurfaceSize,
    enabled: bool,
    params: &FieldParams,
) {
    draw_fade(surface, size);
    draw_grid(surface, size, params.grid_step);
    if !enabled {
        return;
    }
    for trace in traces {
        let alpha = trace_alpha(trace, pointer, params.dim_radius);
        draw_trace(surface, trace, tick, alpha);
    }
}
