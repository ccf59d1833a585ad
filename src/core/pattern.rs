//! Pattern renderer state machine.
//!
//! The renderer never touches the DOM or the GPU itself. Every input arrives
//! as a [`Message`]; [`PatternRenderer::update`] mutates state and returns the
//! [`Command`]s the web layer must carry out (build the pipeline, draw a
//! frame, detach listeners, ...). Lifecycle: `Loading` until the texture
//! resolves, `Running` while frames are drawn, `Disposed` after teardown.

use super::constants::*;
use super::shading::wrap_unit;
use super::tween::{Easing, Tweened};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternVariant {
    #[default]
    RedRoses,
    PinkRoses,
}

impl PatternVariant {
    /// Map the numeric selector used in slot configuration. Unknown values
    /// fall back to the first variant.
    pub fn from_selector(selector: u32) -> Self {
        match selector {
            2 => PatternVariant::PinkRoses,
            _ => PatternVariant::RedRoses,
        }
    }

    pub fn texture_url(self) -> &'static str {
        match self {
            PatternVariant::RedRoses => RED_ROSES_URL,
            PatternVariant::PinkRoses => PINK_ROSES_URL,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatternConfig {
    pub canvas_id: String,
    pub variant: PatternVariant,
    pub hue_shift: f32,
    pub brightness: f32,
    pub saturation: f32,
    pub interact_with_mouse: bool,
    pub interact_with_scroll: bool,
    pub accent_color: Vec3,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            canvas_id: String::new(),
            variant: PatternVariant::RedRoses,
            hue_shift: 0.0,
            brightness: 1.0,
            saturation: 1.0,
            interact_with_mouse: true,
            interact_with_scroll: true,
            accent_color: Vec3::new(1.0, 0.2, 0.3),
        }
    }
}

impl PatternConfig {
    pub fn listeners(&self) -> ListenerSet {
        ListenerSet {
            resize: true,
            pointer: self.interact_with_mouse,
            scroll: self.interact_with_scroll,
        }
    }
}

/// Which window listeners a renderer owns. Resize is unconditional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerSet {
    pub resize: bool,
    pub pointer: bool,
    pub scroll: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Loading,
    Running,
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureOutcome {
    Loaded,
    Blank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Backing-store size for a canvas of the given CSS size. Pixel density is
    /// capped so high-DPI screens don't pay for more than 2x.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: ((css_width.max(0.0) * ratio).round() as u32).max(1),
            height: ((css_height.max(0.0) * ratio).round() as u32).max(1),
        }
    }

    /// Cap each side at the device's 2D texture limit. The canvas is stretched
    /// by CSS, so an oversized surface just renders at a lower density.
    pub fn clamp_to(self, max_dimension: u32) -> Self {
        let max = max_dimension.max(1);
        Self {
            width: self.width.clamp(1, max),
            height: self.height.clamp(1, max),
        }
    }
}

/// Per-frame shader inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub opacity: f32,
    pub hue_shift: f32,
    pub brightness: f32,
    pub saturation: f32,
    pub scroll_speed: f32,
    pub accent_color: Vec3,
    pub offset: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Message {
    TextureResolved(TextureOutcome),
    Tick { dt: f32 },
    PointerMoved { position: Vec2 },
    Scrolled { offset: f64 },
    Resized {
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
    },
    AnimateHueShift { target: f32, duration: f32 },
    AnimateBrightness { target: f32, duration: f32 },
    AnimateSaturation { target: f32, duration: f32 },
    ChangeAccentColor { color: Vec3 },
    SimulateScroll { speed: f32, duration: f32 },
    Teardown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    BuildPipeline(TextureOutcome),
    AttachListeners(ListenerSet),
    DetachListeners(ListenerSet),
    ResizeSurface(SurfaceSize),
    Draw(FrameUniforms),
    RequestFrame,
    CancelFrame,
    ReleaseGpu,
}

pub type Commands = SmallVec<[Command; 4]>;

/// Map client coordinates to [-1, 1] on both axes, y pointing up.
pub fn normalize_pointer(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client.x / viewport.x) * 2.0 - 1.0,
        -(client.y / viewport.y) * 2.0 + 1.0,
    )
}

pub struct PatternRenderer {
    config: PatternConfig,
    lifecycle: Lifecycle,
    texture: Option<TextureOutcome>,
    surface: Option<SurfaceSize>,

    hue_shift: Tweened<f32>,
    brightness: Tweened<f32>,
    saturation: Tweened<f32>,
    accent_color: Tweened<Vec3>,
    scroll_speed: Tweened<f32>,
    opacity: Tweened<f32>,
    offset: Tweened<Vec2>,

    time: f32,
    pointer: Vec2,
    last_scroll: Option<f64>,
}

impl PatternRenderer {
    pub fn new(config: PatternConfig) -> Self {
        Self {
            lifecycle: Lifecycle::Loading,
            texture: None,
            surface: None,
            hue_shift: Tweened::new(config.hue_shift),
            brightness: Tweened::new(config.brightness.max(0.0)),
            saturation: Tweened::new(config.saturation.max(0.0)),
            accent_color: Tweened::new(clamp_color(config.accent_color)),
            scroll_speed: Tweened::new(0.0),
            opacity: Tweened::new(0.0),
            offset: Tweened::new(Vec2::ZERO),
            time: 0.0,
            pointer: Vec2::ZERO,
            last_scroll: None,
            config,
        }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    pub fn canvas_id(&self) -> &str {
        &self.config.canvas_id
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn texture(&self) -> Option<TextureOutcome> {
        self.texture
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Effective hue shift; wraps into [0, 1).
    pub fn hue_shift(&self) -> f32 {
        wrap_unit(self.hue_shift.value())
    }

    pub fn brightness(&self) -> f32 {
        self.brightness.value()
    }

    pub fn saturation(&self) -> f32 {
        self.saturation.value()
    }

    pub fn accent_color(&self) -> Vec3 {
        self.accent_color.value()
    }

    /// Live scroll-reactivity magnitude, without the base level.
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed.value().clamp(0.0, 1.0)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value().clamp(0.0, 1.0)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.value()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            time: self.time,
            opacity: self.opacity(),
            hue_shift: self.hue_shift(),
            brightness: self.brightness(),
            saturation: self.saturation(),
            scroll_speed: self.scroll_speed() + BASE_SCROLL_SPEED,
            accent_color: self.accent_color(),
            offset: self.offset(),
        }
    }

    pub fn animate_hue_shift(&mut self, target: f32, duration: Option<f32>) {
        if self.lifecycle == Lifecycle::Disposed || !target.is_finite() {
            return;
        }
        let duration = duration.unwrap_or(DEFAULT_TRANSITION_SEC);
        self.hue_shift.animate_to(target, duration, Easing::Power2Out);
    }

    pub fn animate_brightness(&mut self, target: f32, duration: Option<f32>) {
        if self.lifecycle == Lifecycle::Disposed || !target.is_finite() {
            return;
        }
        let duration = duration.unwrap_or(DEFAULT_TRANSITION_SEC);
        self.brightness
            .animate_to(target.max(0.0), duration, Easing::Power2Out);
    }

    pub fn animate_saturation(&mut self, target: f32, duration: Option<f32>) {
        if self.lifecycle == Lifecycle::Disposed || !target.is_finite() {
            return;
        }
        let duration = duration.unwrap_or(DEFAULT_TRANSITION_SEC);
        self.saturation
            .animate_to(target.max(0.0), duration, Easing::Power2Out);
    }

    pub fn change_accent_color(&mut self, color: Vec3) {
        if self.lifecycle == Lifecycle::Disposed || !color.is_finite() {
            return;
        }
        self.accent_color
            .animate_to(clamp_color(color), ACCENT_TRANSITION_SEC, Easing::Power2Out);
    }

    /// Rise to `speed`, then decay back to zero over the same duration, as if
    /// the user had scrolled.
    pub fn simulate_scroll(&mut self, speed: f32, duration: Option<f32>) {
        if self.lifecycle == Lifecycle::Disposed || !speed.is_finite() {
            return;
        }
        let duration = duration.unwrap_or(SIMULATED_SCROLL_DEFAULT_SEC);
        self.scroll_speed.animate_to_then(
            speed.clamp(0.0, 1.0),
            duration,
            0.0,
            duration,
            Easing::Power2Out,
        );
    }

    pub fn update(&mut self, msg: Message) -> Commands {
        let mut out = Commands::new();
        match msg {
            Message::TextureResolved(outcome) => self.on_texture_resolved(outcome, &mut out),
            Message::Tick { dt } => self.on_tick(dt, &mut out),
            Message::PointerMoved { position } => {
                if self.config.interact_with_mouse && position.is_finite() {
                    self.pointer = position.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
                }
            }
            Message::Scrolled { offset } => self.on_scroll(offset),
            Message::Resized {
                css_width,
                css_height,
                device_pixel_ratio,
            } => {
                let size = SurfaceSize::from_css(css_width, css_height, device_pixel_ratio)
                    .clamp_to(DEFAULT_MAX_TEXTURE_DIMENSION);
                self.surface = Some(size);
                if self.is_running() {
                    out.push(Command::ResizeSurface(size));
                }
            }
            Message::AnimateHueShift { target, duration } => {
                self.animate_hue_shift(target, Some(duration))
            }
            Message::AnimateBrightness { target, duration } => {
                self.animate_brightness(target, Some(duration))
            }
            Message::AnimateSaturation { target, duration } => {
                self.animate_saturation(target, Some(duration))
            }
            Message::ChangeAccentColor { color } => self.change_accent_color(color),
            Message::SimulateScroll { speed, duration } => {
                self.simulate_scroll(speed, Some(duration))
            }
            Message::Teardown => self.on_teardown(&mut out),
        }
        out
    }

    fn on_texture_resolved(&mut self, outcome: TextureOutcome, out: &mut Commands) {
        if self.lifecycle != Lifecycle::Loading {
            log::debug!(
                "[pattern] #{} ignoring texture resolution in {:?}",
                self.config.canvas_id,
                self.lifecycle
            );
            return;
        }
        self.texture = Some(outcome);
        self.lifecycle = Lifecycle::Running;
        self.opacity.set(0.0);
        self.opacity
            .animate_to(1.0, ENTRANCE_FADE_SEC, Easing::Power2Out);

        out.push(Command::BuildPipeline(outcome));
        out.push(Command::AttachListeners(self.config.listeners()));
        if let Some(size) = self.surface {
            out.push(Command::ResizeSurface(size));
        }
        out.push(Command::RequestFrame);
        log::info!(
            "[pattern] #{} running ({:?} texture)",
            self.config.canvas_id,
            outcome
        );
    }

    fn on_tick(&mut self, dt: f32, out: &mut Commands) {
        if !self.is_running() {
            return;
        }
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        self.hue_shift.advance(dt);
        self.brightness.advance(dt);
        self.saturation.advance(dt);
        self.accent_color.advance(dt);
        self.scroll_speed.advance(dt);
        self.opacity.advance(dt);
        self.offset.advance(dt);

        self.time += TIME_STEP_PER_FRAME;
        if self.config.interact_with_mouse {
            self.offset.animate_to(
                self.pointer * PARALLAX_SCALE,
                PARALLAX_EASE_SEC,
                Easing::Power2Out,
            );
        }

        out.push(Command::Draw(self.uniforms()));
        out.push(Command::RequestFrame);
    }

    fn on_scroll(&mut self, offset: f64) {
        if !self.is_running() || !self.config.interact_with_scroll || !offset.is_finite() {
            return;
        }
        let Some(last) = self.last_scroll.replace(offset) else {
            return;
        };
        let magnitude = ((offset - last).abs() / SCROLL_DELTA_DIVISOR).min(1.0) as f32;
        self.scroll_speed.set(magnitude);
        self.scroll_speed
            .animate_to(0.0, SCROLL_DECAY_SEC, Easing::Power2Out);
    }

    fn on_teardown(&mut self, out: &mut Commands) {
        match self.lifecycle {
            Lifecycle::Running => {
                out.push(Command::DetachListeners(self.config.listeners()));
                out.push(Command::CancelFrame);
                out.push(Command::ReleaseGpu);
            }
            Lifecycle::Loading => out.push(Command::CancelFrame),
            Lifecycle::Disposed => return,
        }
        self.lifecycle = Lifecycle::Disposed;
        log::info!("[pattern] #{} disposed", self.config.canvas_id);
    }
}

fn clamp_color(c: Vec3) -> Vec3 {
    c.clamp(Vec3::ZERO, Vec3::ONE)
}
