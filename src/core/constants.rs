// Pattern renderer tuning constants. Durations are in seconds of wall-clock
// tween time; the shader clock advances by a fixed step per rendered frame.

// Shader clock
pub const TIME_STEP_PER_FRAME: f32 = 0.01;

// Scroll reactivity
pub const BASE_SCROLL_SPEED: f32 = 0.2; // always added on top of the live magnitude
pub const SCROLL_DELTA_DIVISOR: f64 = 50.0; // pixels of scroll that saturate the magnitude
pub const SCROLL_DECAY_SEC: f32 = 0.5;
pub const SIMULATED_SCROLL_DEFAULT_SEC: f32 = 0.5;

// Transitions
pub const DEFAULT_TRANSITION_SEC: f32 = 1.0;
pub const ACCENT_TRANSITION_SEC: f32 = 1.0;
pub const ENTRANCE_FADE_SEC: f32 = 1.5;

// Pointer parallax
pub const PARALLAX_SCALE: f32 = 0.05;
pub const PARALLAX_EASE_SEC: f32 = 1.0;

// Surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
// wgpu's default max_texture_dimension_2d
pub const DEFAULT_MAX_TEXTURE_DIMENSION: u32 = 8192;
pub const MSAA_SAMPLES: u32 = 4;

// Frame deltas above this are clamped (backgrounded tab, debugger pause)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Plane mesh
pub const PLANE_SIZE: f32 = 1.0;
pub const GRID_SEGMENTS: u32 = 32;

// Orthographic camera framing the unit plane
pub const ORTHO_HALF_EXTENT: f32 = 0.5;
pub const ORTHO_NEAR: f32 = 0.1;
pub const ORTHO_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 1.0;

// Vertex displacement
pub const RIPPLE_FREQUENCY: f32 = 5.0;
pub const RIPPLE_TIME_RATE: f32 = 0.5;
pub const RIPPLE_AMPLITUDE: f32 = 0.015;

// Fragment colour mixing
pub const UV_DRIFT_FREQUENCY: f32 = 10.0;
pub const UV_DRIFT_AMPLITUDE: f32 = 0.01;
pub const UV_DRIFT_TIME_RATE: f32 = 0.5;
pub const ACCENT_MIX_WEIGHT: f32 = 0.3;
pub const GLOW_WEIGHT: f32 = 0.2;
pub const GLOW_TIME_RATE: f32 = 0.5;
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

// Remote pattern images, one per variant
pub const RED_ROSES_URL: &str = "https://i.imgur.com/w19qtCh.png";
pub const PINK_ROSES_URL: &str = "https://i.imgur.com/he2HjBd.png";

// Page controller
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const SECTION_MARKER_FRACTION: f64 = 1.0 / 3.0;
pub const PRESET_TRANSITION_SEC: f32 = 1.5;
pub const PROJECT_FADE_SEC: f32 = 0.5;
pub const PROJECT_HIDDEN_SCALE: f32 = 0.95;
pub const FILTER_ALL: &str = "all";

// Reveal animations
pub const HERO_TIMELINE_DELAY_SEC: f32 = 0.5;
// A scroll reveal plays once its trigger's top passes 80% of the viewport
pub const REVEAL_START_FRACTION: f64 = 0.8;
pub const FORM_SUCCESS_RISE_PX: f32 = 20.0;
pub const FORM_SUCCESS_FADE_SEC: f32 = 0.8;
