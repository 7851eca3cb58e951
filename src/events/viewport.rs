use super::EventListener;
use crate::constants::EVENT_RESIZE;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use trace_core::{PointerState, SurfaceSize};
use web_sys as web;

/// Latest host readings, overwritten by listeners and read once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Viewport {
    pub pointer: PointerState,
    pub size: SurfaceSize,
}

pub type SharedViewport = Rc<RefCell<Viewport>>;

pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &SharedViewport,
) -> anyhow::Result<EventListener> {
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let viewport = viewport.clone();
    EventListener::new(window, EVENT_RESIZE, move |_ev| {
        let size = dom::sync_canvas_to_viewport(&canvas, &ctx);
        viewport.borrow_mut().size = size;
    })
}
