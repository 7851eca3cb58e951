use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("grid step must be a positive finite number, got {0}")]
    GridStep(f32),
    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeDistance { name: &'static str, value: f32 },
    #[error("repel strength must be finite, got {0}")]
    RepelStrength(f32),
}

/// Runtime-adjustable knobs for a [`TraceField`](crate::TraceField).
///
/// Everything else lives in [`constants`](crate::constants).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub trace_count: usize,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub dim_radius: f32,
    pub wrap_margin: f32,
    pub grid_step: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            trace_count: TRACE_COUNT,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            dim_radius: DIM_RADIUS,
            wrap_margin: WRAP_MARGIN,
            grid_step: GRID_STEP,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.grid_step.is_finite() || self.grid_step <= 0.0 {
            return Err(ParamsError::GridStep(self.grid_step));
        }
        for (name, value) in [
            ("repel radius", self.repel_radius),
            ("dim radius", self.dim_radius),
            ("wrap margin", self.wrap_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::NegativeDistance { name, value });
            }
        }
        if !self.repel_strength.is_finite() {
            return Err(ParamsError::RepelStrength(self.repel_strength));
        }
        Ok(())
    }
}
