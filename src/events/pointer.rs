use super::{EventListener, SharedViewport};
use crate::constants::{EVENT_POINTER_MOVE, EVENT_POINTER_OUT};
use trace_core::PointerState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window. The background canvas is fixed
/// at the viewport origin, so client coordinates are surface coordinates.
pub fn wire_pointer_handlers(
    window: &web::Window,
    viewport: &SharedViewport,
) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_pointermove(window, viewport)?,
        wire_pointerout(window, viewport)?,
    ])
}

fn wire_pointermove(
    window: &web::Window,
    viewport: &SharedViewport,
) -> anyhow::Result<EventListener> {
    let viewport = viewport.clone();
    EventListener::new(window, EVENT_POINTER_MOVE, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            viewport.borrow_mut().pointer =
                PointerState::at(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

fn wire_pointerout(
    window: &web::Window,
    viewport: &SharedViewport,
) -> anyhow::Result<EventListener> {
    let viewport = viewport.clone();
    EventListener::new(window, EVENT_POINTER_OUT, move |ev| {
        // No related target means the pointer left the document entirely
        let left_document = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| m.related_target().is_none())
            .unwrap_or(false);
        if left_document {
            viewport.borrow_mut().pointer = PointerState::Away;
        }
    })
}
