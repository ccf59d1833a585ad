//! CPU reference of the pattern shader math in `shaders/pattern.wgsl`.
//!
//! Kept line-for-line equivalent with the WGSL so the colour pipeline can be
//! checked on the host without a GPU.

use super::constants::*;
use super::pattern::FrameUniforms;
use glam::{Vec2, Vec3, Vec4};

#[inline]
fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

pub fn rgb_to_hsv(c: Vec3) -> Vec3 {
    let k = Vec4::new(0.0, -1.0 / 3.0, 2.0 / 3.0, -1.0);
    let p = Vec4::new(c.z, c.y, k.w, k.z).lerp(Vec4::new(c.y, c.z, k.x, k.y), step(c.z, c.y));
    let q = Vec4::new(p.x, p.y, p.w, c.x).lerp(Vec4::new(c.x, p.y, p.z, p.x), step(p.x, c.x));
    let d = q.x - q.w.min(q.y);
    let e = 1.0e-10;
    Vec3::new(
        (q.z + (q.w - q.y) / (6.0 * d + e)).abs(),
        d / (q.x + e),
        q.x,
    )
}

pub fn hsv_to_rgb(c: Vec3) -> Vec3 {
    let k = Vec4::new(1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0);
    let p = Vec3::new(
        (fract(c.x + k.x) * 6.0 - k.w).abs(),
        (fract(c.x + k.y) * 6.0 - k.w).abs(),
        (fract(c.x + k.z) * 6.0 - k.w).abs(),
    );
    let kx = Vec3::splat(k.x);
    c.z * kx.lerp((p - kx).clamp(Vec3::ZERO, Vec3::ONE), c.y)
}

/// `rem_euclid(1.0)` rounds tiny negatives up to exactly 1.0; fold that
/// back so the result is always in [0, 1).
#[inline]
pub fn wrap_unit(x: f32) -> f32 {
    let w = x.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

#[inline]
pub fn luminance(c: Vec3) -> f32 {
    c.dot(Vec3::from_array(LUMA_WEIGHTS))
}

/// Z offset of a plane vertex at `position`.
pub fn vertex_displacement(position: Vec2, time: f32, scroll_speed: f32) -> f32 {
    let phase = time * RIPPLE_TIME_RATE;
    (position.x * RIPPLE_FREQUENCY + phase).sin()
        * (position.y * RIPPLE_FREQUENCY + phase).sin()
        * RIPPLE_AMPLITUDE
        * scroll_speed
}

/// Slow organic UV drift applied before sampling. `v` is perturbed using the
/// already-drifted `u`, same as the shader.
///
/// The drift field is defined with `v` pointing up; texture coordinates here
/// point down, so the field is evaluated on `1 - v` and its `v` term negated.
pub fn drift_uv(uv: Vec2, time: f32, scroll_speed: f32) -> Vec2 {
    let phase = time * UV_DRIFT_TIME_RATE;
    let up = 1.0 - uv.y;
    let u = uv.x + (up * UV_DRIFT_FREQUENCY + phase).sin() * UV_DRIFT_AMPLITUDE * scroll_speed;
    let v = uv.y - (u * UV_DRIFT_FREQUENCY + phase).cos() * UV_DRIFT_AMPLITUDE * scroll_speed;
    Vec2::new(u, v)
}

/// Final fragment colour for a texture `sample` (straight alpha).
pub fn shade(sample: Vec4, u: &FrameUniforms) -> Vec4 {
    let rgb = sample.truncate();
    let s = u.scroll_speed;

    let mut hsv = rgb_to_hsv(rgb);
    hsv.x = wrap_unit(hsv.x + u.hue_shift);
    hsv.y *= u.saturation;
    hsv.z *= u.brightness;
    let shifted = hsv_to_rgb(hsv);

    let lum = luminance(rgb);
    let mut color = shifted.lerp(u.accent_color, lum * ACCENT_MIX_WEIGHT * s);

    let glow = (u.time * GLOW_TIME_RATE).sin() * 0.5 + 0.5;
    color += u.accent_color * lum * glow * GLOW_WEIGHT * s;

    color.extend(sample.w * u.opacity)
}
