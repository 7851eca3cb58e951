#![cfg(target_arch = "wasm32")]
//! Browser front-end for the circuit-trace background.
//!
//! The host view creates a [`TraceBackground`], calls `start` on mount and
//! `stop` on unmount, and forwards its toggle control through `set_enabled`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use trace_core::{FieldParams, TraceField};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;

use events::{EventListener, Viewport};
use frame::{FrameContext, FrameLoop, FrameStats};

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trace-field-web loaded");
    Ok(())
}

struct Running {
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
}

impl Running {
    fn shutdown(mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
    }
}

/// Animated trace background bound to one canvas for one mount/unmount cycle.
#[wasm_bindgen]
pub struct TraceBackground {
    enabled: Rc<Cell<bool>>,
    params: FieldParams,
    running: Option<Running>,
}

#[wasm_bindgen]
impl TraceBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(enabled: bool) -> TraceBackground {
        TraceBackground {
            enabled: Rc::new(Cell::new(enabled)),
            params: FieldParams::default(),
            running: None,
        }
    }

    /// Pool size for the next `start`. Ignored while running.
    #[wasm_bindgen(js_name = setTraceCount)]
    pub fn set_trace_count(&mut self, count: usize) {
        if self.running.is_some() {
            log::warn!("[background] trace count change ignored while running");
            return;
        }
        self.params.trace_count = count;
    }

    /// Begin animating on `canvas`. Returns `false` and leaves nothing
    /// registered when the canvas has no 2D context.
    pub fn start(&mut self, canvas: web::HtmlCanvasElement) -> bool {
        if self.running.is_some() {
            log::warn!("[background] start ignored: already running");
            return true;
        }
        match self.try_start(canvas) {
            Ok(running) => {
                self.running = Some(running);
                true
            }
            Err(e) => {
                log::warn!("[background] not started: {:#}", e);
                false
            }
        }
    }

    /// `start` on the canvas with the given element id.
    #[wasm_bindgen(js_name = startOn)]
    pub fn start_on(&mut self, element_id: &str) -> bool {
        match dom::canvas_by_id(element_id) {
            Ok(canvas) => self.start(canvas),
            Err(e) => {
                log::warn!("[background] not started: {:#}", e);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = startOnDefault)]
    pub fn start_on_default(&mut self) -> bool {
        self.start_on(constants::DEFAULT_CANVAS_ID)
    }

    /// Cancel the pending frame and detach every listener. Safe to call at
    /// any time, including when `start` failed.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.shutdown();
            log::info!("[background] stopped");
        }
    }

    #[wasm_bindgen(js_name = setEnabled)]
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .map(|r| r.frame_loop.is_running())
            .unwrap_or(false)
    }
}

impl TraceBackground {
    fn try_start(&self, canvas: web::HtmlCanvasElement) -> anyhow::Result<Running> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        // Acquire the context before touching listeners so a failure leaves no trace
        let ctx = dom::context_2d(&canvas)?;
        let size = dom::sync_canvas_to_viewport(&canvas, &ctx);
        let field = TraceField::new(self.params.clone(), size, &mut rand::thread_rng())?;
        let viewport = Rc::new(RefCell::new(Viewport {
            size,
            ..Viewport::default()
        }));

        let mut listeners = vec![events::wire_resize(&window, &canvas, &ctx, &viewport)?];
        listeners.extend(events::wire_pointer_handlers(&window, &viewport)?);

        let frame_loop = FrameLoop::start(FrameContext {
            field,
            surface: canvas::CanvasSurface::new(ctx),
            viewport,
            enabled: self.enabled.clone(),
            stats: FrameStats::default(),
        })?;
        log::info!(
            "[background] started traces={} surface={}x{}",
            self.params.trace_count,
            size.width,
            size.height
        );
        Ok(Running {
            frame_loop,
            listeners,
        })
    }
}

impl Drop for TraceBackground {
    fn drop(&mut self) {
        self.stop();
    }
}
