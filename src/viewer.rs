use crate::camera::Camera;
use crate::constants::VIEWER_CONTAINER_ID;
use crate::dom::{self, Listener};
use crate::events::{self, ViewerWiring};
use crate::frame::{self, FrameContext, LoopHandle};
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A running viewer: its render loop plus every listener it installed.
pub struct ViewerHandle {
    frame_loop: LoopHandle,
    listeners: Vec<Listener>,
}

impl ViewerHandle {
    pub fn stop(mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        log::info!("[viewer] stopped");
    }
}

thread_local! {
    static VIEWER: RefCell<Option<ViewerHandle>> = const { RefCell::new(None) };
}

fn webgpu_available() -> bool {
    web::window()
        .map(|w| w.navigator())
        .and_then(|nav| js_sys::Reflect::get(&nav, &JsValue::from_str("gpu")).ok())
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

/// Build the scene inside `#viewer-container` and start rendering.
///
/// Returns `Ok(None)` when there is no container or no WebGPU; the page
/// then simply has no viewer.
pub async fn init(document: &web::Document) -> anyhow::Result<Option<ViewerHandle>> {
    let Some(container_el) = document.get_element_by_id(VIEWER_CONTAINER_ID) else {
        return Ok(None);
    };
    if !webgpu_available() {
        log::info!("[viewer] WebGPU not available; viewer disabled");
        return Ok(None);
    }
    let container: web::HtmlElement = container_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", "display:block;width:100%;height:100%;touch-action:none");
    container.set_inner_html("");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas, &container);

    let gpu = GpuState::new(&canvas).await?;
    let camera = Camera::new(
        container.client_width() as f32,
        container.client_height() as f32,
    );
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(camera, gpu)));

    let listeners = events::wire_viewer_handlers(&ViewerWiring {
        canvas,
        container,
        frame_ctx: frame_ctx.clone(),
    });
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Some(ViewerHandle {
        frame_loop,
        listeners,
    }))
}

/// Initialise the viewer once per page; later calls are no-ops.
pub async fn start(document: web::Document) {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    match init(&document).await {
        Ok(Some(handle)) => {
            log::info!("[viewer] running");
            VIEWER.with(|v| *v.borrow_mut() = Some(handle));
        }
        Ok(None) => {}
        Err(e) => log::warn!("[viewer] disabled: {:?}", e),
    }
}

/// Stop the render loop and detach the viewer's listeners.
/// Returns `false` if no viewer was running.
#[wasm_bindgen(js_name = stopViewer)]
pub fn stop_viewer() -> bool {
    match VIEWER.with(|v| v.borrow_mut().take()) {
        Some(handle) => {
            handle.stop();
            true
        }
        None => false,
    }
}
