use crate::core::{
    Command, Commands, Message, PatternConfig, PatternRenderer, SectionPreset, TextureImage,
    TextureOutcome,
};
use crate::dom;
use crate::events::pointer::{self, MessageSink, PatternListeners};
use crate::frame::FrameLoop;
use crate::render::{GpuShared, GpuState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct SlotInner {
    renderer: PatternRenderer,
    canvas: web::HtmlCanvasElement,
    gpu_shared: Rc<GpuShared>,
    pending_texture: Option<TextureImage>,
    gpu: Option<GpuState>,
    listeners: Option<PatternListeners>,
    frame: FrameLoop,
}

/// One mounted pattern canvas: the renderer state machine plus the browser
/// and GPU resources its commands drive.
#[derive(Clone)]
pub struct PatternSlot {
    inner: Rc<RefCell<SlotInner>>,
}

impl PatternSlot {
    /// Look up the configured canvas and start loading its texture. Returns
    /// `None` (after logging) when the canvas is not on the page.
    pub fn mount(
        document: &web::Document,
        gpu_shared: Rc<GpuShared>,
        config: PatternConfig,
    ) -> Option<Self> {
        let canvas = match dom::canvas_by_id(document, &config.canvas_id) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[slot] {}", e);
                return None;
            }
        };
        let url = config.variant.texture_url();
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<SlotInner>>| {
            let weak = weak.clone();
            RefCell::new(SlotInner {
                renderer: PatternRenderer::new(config),
                canvas,
                gpu_shared,
                pending_texture: None,
                gpu: None,
                listeners: None,
                frame: FrameLoop::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        PatternSlot { inner }.on_frame();
                    }
                }),
            })
        });
        let slot = PatternSlot { inner };

        let (css_width, css_height) = dom::canvas_css_size(&slot.inner.borrow().canvas);
        slot.send(Message::Resized {
            css_width,
            css_height,
            device_pixel_ratio: dom::device_pixel_ratio(),
        });

        let weak = Rc::downgrade(&slot.inner);
        wasm_bindgen_futures::spawn_local(async move {
            let started = instant::Instant::now();
            let (image, outcome) = match load_texture(url).await {
                Ok(image) => (image, TextureOutcome::Loaded),
                Err(e) => {
                    log::error!("[slot] texture {} unavailable: {}", url, e);
                    (TextureImage::blank(), TextureOutcome::Blank)
                }
            };
            let Some(inner) = weak.upgrade() else {
                return;
            };
            log::info!(
                "[slot] {} {}x{} in {:.0} ms",
                url,
                image.width,
                image.height,
                started.elapsed().as_secs_f64() * 1000.0
            );
            inner.borrow_mut().pending_texture = Some(image);
            PatternSlot { inner }.send(Message::TextureResolved(outcome));
        });

        Some(slot)
    }

    pub fn canvas_id(&self) -> String {
        self.inner.borrow().renderer.canvas_id().to_string()
    }

    pub fn send(&self, msg: Message) {
        let sink = self.sink();
        let mut inner = self.inner.borrow_mut();
        let commands: Commands = inner.renderer.update(msg);
        for cmd in commands {
            inner.execute(cmd, &sink);
        }
    }

    fn sink(&self) -> MessageSink {
        let weak = Rc::downgrade(&self.inner);
        Rc::new(move |msg| {
            if let Some(inner) = weak.upgrade() {
                PatternSlot { inner }.send(msg);
            }
        })
    }

    fn on_frame(&self) {
        let dt = self.inner.borrow_mut().frame.begin_frame();
        self.send(Message::Tick { dt });
    }

    pub fn apply_preset(&self, preset: &SectionPreset) {
        for msg in preset.messages() {
            self.send(msg);
        }
    }

    pub fn teardown(&self) {
        self.send(Message::Teardown);
    }
}

impl SlotInner {
    fn execute(&mut self, cmd: Command, sink: &MessageSink) {
        match cmd {
            Command::BuildPipeline(outcome) => {
                let image = self
                    .pending_texture
                    .take()
                    .unwrap_or_else(TextureImage::blank);
                let size = dom::canvas_surface_size(&self.canvas)
                    .clamp_to(self.gpu_shared.max_texture_dimension());
                dom::set_canvas_backing_size(&self.canvas, size);
                match GpuState::new(self.gpu_shared.clone(), &self.canvas, image, size) {
                    Ok(gpu) => self.gpu = Some(gpu),
                    Err(e) => log::error!(
                        "[slot] #{} pipeline ({:?}) failed: {:?}",
                        self.renderer.canvas_id(),
                        outcome,
                        e
                    ),
                }
            }
            Command::AttachListeners(set) => {
                if let Some(old) = self.listeners.take() {
                    old.detach();
                }
                self.listeners = Some(pointer::attach(set, &self.canvas, sink.clone()));
            }
            Command::DetachListeners(_) => {
                if let Some(listeners) = self.listeners.take() {
                    listeners.detach();
                }
            }
            Command::ResizeSurface(size) => {
                let size = size.clamp_to(self.gpu_shared.max_texture_dimension());
                dom::set_canvas_backing_size(&self.canvas, size);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size);
                }
            }
            Command::Draw(uniforms) => {
                let Some(gpu) = self.gpu.as_mut() else {
                    return;
                };
                match gpu.render(&uniforms) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        gpu.reconfigure();
                    }
                    Err(e) => log::error!(
                        "[slot] #{} render error: {:?}",
                        self.renderer.canvas_id(),
                        e
                    ),
                }
            }
            Command::RequestFrame => self.frame.request(),
            Command::CancelFrame => self.frame.cancel(),
            Command::ReleaseGpu => {
                self.pending_texture = None;
                if let Some(gpu) = self.gpu.take() {
                    gpu.dispose();
                }
            }
        }
    }
}

async fn load_texture(url: &str) -> Result<TextureImage, crate::core::PatternError> {
    let bytes = dom::fetch_bytes(url).await?;
    TextureImage::decode(&bytes)
}
