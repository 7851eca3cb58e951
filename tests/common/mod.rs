// Shared test helpers: a `Canvas2d` that records every draw call.

#![allow(dead_code)]
use glam::Vec2;
use trace_core::{Canvas2d, Rect, Rgba, Stroke};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill { rect: Rect, color: Rgba },
    Polyline { points: Vec<Vec2>, stroke: Stroke },
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Rgba)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Fill { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&Vec<Vec2>, &Stroke)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Polyline { points, stroke } => Some((points, stroke)),
            _ => None,
        })
    }

    /// Strokes with a glow are trace bodies; grid lines never glow.
    pub fn trace_strokes(&self) -> usize {
        self.polylines().filter(|(_, s)| s.glow.is_some()).count()
    }
}

impl Canvas2d for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::Fill { rect, color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn approx_vec(a: Vec2, b: Vec2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}
