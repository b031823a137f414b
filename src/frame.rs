use crate::camera::Camera;
use crate::input::ViewerState;
use crate::render::GpuState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FPS_LOG_INTERVAL_SEC: f32 = 10.0;

pub struct FrameContext {
    pub state: ViewerState,
    pub camera: Camera,
    pub gpu: GpuState,

    pub window_start: Instant,
    pub window_frames: u32,
}

impl FrameContext {
    pub fn new(camera: Camera, gpu: GpuState) -> Self {
        Self {
            state: ViewerState::default(),
            camera,
            gpu,
            window_start: Instant::now(),
            window_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        self.state.idle_step();

        match self.gpu.render(&self.camera, &self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[viewer] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("[viewer] render error: {:?}", e),
        }

        self.window_frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!("[viewer] {:.1} fps", self.window_frames as f32 / elapsed);
            self.window_start = Instant::now();
            self.window_frames = 0;
        }
    }

    pub fn resize(&mut self, css_width: f32, css_height: f32, px_width: u32, px_height: u32) {
        self.camera.set_viewport(css_width, css_height);
        self.gpu.resize(px_width, px_height);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stop handle for the animation-frame loop started by [`start_loop`].
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl LoopHandle {
    /// Cancel the pending frame and release the loop closure. Idempotent.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure -> slot reference cycle
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        raf_tick.set(schedule(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(schedule(&tick));

    LoopHandle {
        running,
        raf_id,
        tick,
    }
}

fn schedule(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
