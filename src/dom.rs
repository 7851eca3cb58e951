use crate::constants::sanitize_device_pixel_ratio;
use trace_core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    sanitize_device_pixel_ratio(window.device_pixel_ratio())
}

/// Logical viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> SurfaceSize {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    SurfaceSize::new(read(window.inner_width()), read(window.inner_height()))
}

/// Match the canvas to the viewport: CSS size in logical pixels, backing
/// store scaled by the pixel ratio, transform reset so drawing stays logical.
pub fn sync_canvas_to_viewport(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> SurfaceSize {
    let Some(window) = web::window() else {
        return SurfaceSize::default();
    };
    let size = viewport_size(&window);
    let dpr = device_pixel_ratio(&window);
    let (w_px, h_px) = size.backing_pixels(dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", size.width));
    _ = style.set_property("height", &format!("{}px", size.height));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    log::debug!(
        "[viewport] {}x{} @{}x -> backing {}x{}",
        size.width,
        size.height,
        dpr,
        w_px,
        h_px
    );
    size
}
