//! Per-tick inputs supplied by the host: pointer position, surface size and
//! the enabled flag.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! overwrites them from its event listeners and hands a snapshot to the
//! field once per frame.

use glam::Vec2;

/// Last known pointer position in logical surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    /// Pointer left the surface or was never seen. Infinitely far from
    /// every trace.
    #[default]
    Away,
    At(Vec2),
}

impl PointerState {
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Self::At(Vec2::new(x, y))
    }

    /// Vector from the pointer to `point`, or `None` when the pointer is away.
    #[inline]
    pub fn offset_to(&self, point: Vec2) -> Option<Vec2> {
        match self {
            Self::Away => None,
            Self::At(p) => Some(point - *p),
        }
    }

    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.offset_to(point)
            .map(|d| d.length())
            .unwrap_or(f32::INFINITY)
    }
}

/// Drawing surface size in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Backing store size for a display with the given pixel density.
    #[inline]
    pub fn backing_pixels(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        (
            (self.width as f64 * dpr).floor() as u32,
            (self.height as f64 * dpr).floor() as u32,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Snapshot of host state read once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub pointer: PointerState,
    pub size: SurfaceSize,
    pub enabled: bool,
}

impl Default for FrameInputs {
    fn default() -> Self {
        Self {
            pointer: PointerState::Away,
            size: SurfaceSize::default(),
            enabled: true,
        }
    }
}
