use crate::dom::{self, Listener};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ViewerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub container: web::HtmlElement,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
}

/// Install the drag, wheel and resize handlers. Dropping the returned
/// listeners unregisters them.
pub fn wire_viewer_handlers(w: &ViewerWiring) -> Vec<Listener> {
    let mut listeners = vec![
        wire_pointerdown(w),
        wire_pointermove(w),
        wire_pointerup(w, "pointerup"),
        wire_pointerup(w, "pointercancel"),
        wire_wheel(w),
    ];
    listeners.extend(wire_resize(w));
    listeners
}

fn wire_pointerdown(w: &ViewerWiring) -> Listener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w.frame_ctx
            .borrow_mut()
            .state
            .press(ev.client_x() as f32, ev.client_y() as f32);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &ViewerWiring) -> Listener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w.frame_ctx
            .borrow_mut()
            .state
            .drag_to(ev.client_x() as f32, ev.client_y() as f32);
    })
}

fn wire_pointerup(w: &ViewerWiring, kind: &'static str) -> Listener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, kind, move |ev| {
        w.frame_ctx.borrow_mut().state.release();
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            if w.canvas.has_pointer_capture(ev.pointer_id()) {
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
            }
        }
    })
}

fn wire_wheel(w: &ViewerWiring) -> Listener {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new_active(&target, "wheel", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        ev.prevent_default();
        w.frame_ctx.borrow_mut().state.wheel(ev.delta_y() as f32);
    })
}

fn wire_resize(w: &ViewerWiring) -> Option<Listener> {
    let window: web::EventTarget = web::window()?.into();
    let w = w.clone();
    Some(Listener::new(&window, "resize", move |_| {
        let (px_w, px_h) = dom::sync_canvas_backing_size(&w.canvas, &w.container);
        let css_w = w.container.client_width() as f32;
        let css_h = w.container.client_height() as f32;
        w.frame_ctx.borrow_mut().resize(css_w, css_h, px_w, px_h);
    }))
}
