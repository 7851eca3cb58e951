use crate::params::{FieldParams, ParamsError};
use crate::render::{render_frame, Canvas2d};
use crate::sim::step_trace;
use crate::state::{FrameInputs, PointerState, SurfaceSize};
use crate::trace::{initialize, Trace};
use rand::Rng;

/// Fixed-size trace pool plus the global tick counter.
pub struct TraceField {
    traces: Vec<Trace>,
    tick: u64,
    params: FieldParams,
}

impl TraceField {
    pub fn new<R: Rng + ?Sized>(
        params: FieldParams,
        size: SurfaceSize,
        rng: &mut R,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        let traces = initialize(params.trace_count, size, rng);
        log::debug!(
            "[field] pool={} surface={}x{}",
            traces.len(),
            size.width,
            size.height
        );
        Ok(Self {
            traces,
            tick: 0,
            params,
        })
    }

    /// Field over an explicit pool. `params.trace_count` is ignored.
    pub fn from_traces(params: FieldParams, traces: Vec<Trace>) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            traces,
            tick: 0,
            params,
        })
    }

    #[inline]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Advance the tick counter and step every trace once.
    pub fn step(&mut self, pointer: &PointerState, size: SurfaceSize) {
        self.tick = self.tick.wrapping_add(1);
        let tick = self.tick;
        for (i, trace) in self.traces.iter_mut().enumerate() {
            step_trace(trace, i, tick, pointer, size, &self.params);
        }
    }

    pub fn render<S: Canvas2d + ?Sized>(
        &self,
        surface: &mut S,
        pointer: &PointerState,
        size: SurfaceSize,
        enabled: bool,
    ) {
        render_frame(
            surface,
            &self.traces,
            self.tick,
            pointer,
            size,
            enabled,
            &self.params,
        );
    }

    /// One full tick: step the whole pool, then paint it. The simulation
    /// keeps running while traces are hidden.
    pub fn frame<S: Canvas2d + ?Sized>(&mut self, surface: &mut S, inputs: &FrameInputs) {
        self.step(&inputs.pointer, inputs.size);
        self.render(surface, &inputs.pointer, inputs.size, inputs.enabled);
    }
}
