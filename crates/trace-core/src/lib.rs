//! Drifting circuit-trace background: a fixed pool of traces advanced one
//! tick per display refresh and painted through the [`Canvas2d`] trait.

pub mod color;
pub mod constants;
pub mod field;
pub mod params;
pub mod render;
pub mod sim;
pub mod state;
pub mod trace;

pub use color::*;
pub use field::TraceField;
pub use params::*;
pub use render::{Canvas2d, Glow, Rect, Stroke, TraceGeometry};
pub use state::*;
pub use trace::{initialize, BendOrder, Trace};
