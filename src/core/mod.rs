pub mod camera;
pub mod constants;
pub mod error;
pub mod mesh;
pub mod page;
pub mod pattern;
pub mod reveal;
pub mod shading;
pub mod texture;
pub mod tween;

pub use camera::OrthoCamera;
pub use error::PatternError;
pub use mesh::{build_plane, PlaneMesh, PlaneVertex};
pub use page::*;
pub use pattern::*;
pub use reveal::*;
pub use texture::TextureImage;
pub use tween::{Easing, Lerp, Tweened};

// Shaders bundled as string constants
pub static PATTERN_WGSL: &str = include_str!("../../shaders/pattern.wgsl");
