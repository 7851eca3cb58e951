use crate::canvas::CanvasSurface;
use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::events::SharedViewport;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trace_core::{FrameInputs, TraceField};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: TraceField,
    pub surface: CanvasSurface,
    pub viewport: SharedViewport,
    pub enabled: Rc<Cell<bool>>,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Read the latest host state every tick; toggles apply on the next frame
        let inputs = {
            let vp = self.viewport.borrow();
            FrameInputs {
                pointer: vp.pointer,
                size: vp.size,
                enabled: self.enabled.get(),
            }
        };
        self.field.frame(&mut self.surface, &inputs);
        self.stats.record(self.field.tick());
    }
}

/// Rolling frame-rate summary written to the debug log.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, tick: u64) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= STATS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] tick={} fps={:.1}",
                tick,
                self.frames as f32 / elapsed
            );
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop with explicit cancellation.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(mut frame_ctx: FrameContext) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let running = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.frame();
            if running_tick.get() {
                request_frame(&tick_clone, &pending_tick);
            }
        }) as Box<dyn FnMut()>));

        let first = match tick.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => return Err(anyhow::anyhow!("tick closure missing")),
        };
        match first {
            Ok(id) => pending.set(Some(id)),
            Err(e) => {
                tick.borrow_mut().take();
                return Err(anyhow::anyhow!("requestAnimationFrame failed: {:?}", e));
            }
        }
        Ok(Self {
            running,
            pending,
            tick,
        })
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the tick closure. Idempotent.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference cycle through `tick`
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
