use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `requestAnimationFrame` callback chain.
///
/// The callback is built once and re-requested by the owner after every frame
/// it wants to draw; nothing reschedules on its own. `cancel` drops any
/// pending request so a torn-down owner never runs again.
pub struct FrameLoop {
    tick: Closure<dyn FnMut()>,
    pending: Option<i32>,
    last_instant: Option<Instant>,
}

impl FrameLoop {
    pub fn new(on_frame: impl FnMut() + 'static) -> Self {
        Self {
            tick: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut()>),
            pending: None,
            last_instant: None,
        }
    }

    pub fn request(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if let Some(w) = web::window() {
            match w.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
                Ok(id) => self.pending = Some(id),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.last_instant = None;
    }

    /// Mark the pending request as delivered and return seconds since the
    /// previous frame (zero on the first one).
    pub fn begin_frame(&mut self) -> f32 {
        self.pending = None;
        let now = Instant::now();
        let dt = self
            .last_instant
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_instant = Some(now);
        dt
    }
}
