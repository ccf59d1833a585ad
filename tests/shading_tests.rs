// Host-side checks of the shader colour math via its CPU reference.

use clearseas_web::core::shading::{
    drift_uv, hsv_to_rgb, luminance, rgb_to_hsv, shade, vertex_displacement, wrap_unit,
};
use clearseas_web::core::FrameUniforms;
use glam::{Vec2, Vec3, Vec4};

fn close3(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

fn neutral() -> FrameUniforms {
    FrameUniforms {
        time: 0.0,
        opacity: 1.0,
        hue_shift: 0.0,
        brightness: 1.0,
        saturation: 1.0,
        scroll_speed: 0.0,
        accent_color: Vec3::new(1.0, 0.2, 0.3),
        offset: Vec2::ZERO,
    }
}

#[test]
fn primary_colours_have_expected_hsv() {
    let red = rgb_to_hsv(Vec3::new(1.0, 0.0, 0.0));
    assert!(close3(red, Vec3::new(0.0, 1.0, 1.0), 1e-5));
    let green = rgb_to_hsv(Vec3::new(0.0, 1.0, 0.0));
    assert!((green.x - 1.0 / 3.0).abs() < 1e-5);
    let grey = rgb_to_hsv(Vec3::splat(0.5));
    assert!(grey.y.abs() < 1e-5);
    assert!((grey.z - 0.5).abs() < 1e-5);
}

#[test]
fn hsv_conversion_is_stable_for_typical_colours() {
    for c in [
        Vec3::new(0.8, 0.1, 0.2),
        Vec3::new(0.2, 0.6, 1.0),
        Vec3::new(0.9, 0.9, 0.1),
    ] {
        assert!(close3(hsv_to_rgb(rgb_to_hsv(c)), c, 1e-4));
    }
}

#[test]
fn neutral_grading_preserves_sample() {
    let sample = Vec4::new(0.7, 0.3, 0.2, 0.9);
    let out = shade(sample, &neutral());
    assert!(close3(out.truncate(), sample.truncate(), 1e-4));
    assert!((out.w - 0.9).abs() < 1e-6);
}

#[test]
fn alpha_is_texture_alpha_times_opacity() {
    let u = FrameUniforms {
        opacity: 0.4,
        scroll_speed: 1.2,
        ..neutral()
    };
    let out = shade(Vec4::new(0.5, 0.5, 0.5, 0.5), &u);
    assert!((out.w - 0.2).abs() < 1e-6);
}

#[test]
fn hue_shift_of_one_third_turns_red_green() {
    let u = FrameUniforms {
        hue_shift: 1.0 / 3.0,
        ..neutral()
    };
    let out = shade(Vec4::new(1.0, 0.0, 0.0, 1.0), &u);
    assert!(close3(out.truncate(), Vec3::new(0.0, 1.0, 0.0), 1e-4));
}

#[test]
fn hue_shift_wraps_past_one() {
    let sample = Vec4::new(0.8, 0.1, 0.2, 1.0);
    let a = shade(
        sample,
        &FrameUniforms {
            hue_shift: 0.25,
            ..neutral()
        },
    );
    let b = shade(
        sample,
        &FrameUniforms {
            hue_shift: 1.25,
            ..neutral()
        },
    );
    assert!(close3(a.truncate(), b.truncate(), 1e-4));
}

#[test]
fn zero_saturation_yields_grey() {
    let u = FrameUniforms {
        saturation: 0.0,
        ..neutral()
    };
    let out = shade(Vec4::new(0.9, 0.2, 0.4, 1.0), &u).truncate();
    assert!((out.x - out.y).abs() < 1e-5 && (out.y - out.z).abs() < 1e-5);
}

#[test]
fn scroll_energy_pulls_towards_accent() {
    let sample = Vec4::new(0.5, 0.5, 0.5, 1.0);
    let accent = Vec3::new(0.0, 1.0, 0.0);
    let calm = shade(
        sample,
        &FrameUniforms {
            accent_color: accent,
            ..neutral()
        },
    );
    let excited = shade(
        sample,
        &FrameUniforms {
            accent_color: accent,
            scroll_speed: 1.2,
            ..neutral()
        },
    );
    assert!(excited.y > calm.y);
    assert!(excited.x < calm.x);
}

#[test]
fn luminance_weights_sum_to_one() {
    assert!((luminance(Vec3::ONE) - 1.0).abs() < 1e-6);
    assert_eq!(luminance(Vec3::ZERO), 0.0);
}

#[test]
fn displacement_scales_with_scroll_and_stays_small() {
    let p = Vec2::new(0.3, -0.1);
    assert_eq!(vertex_displacement(p, 2.0, 0.0), 0.0);
    for i in 0..50 {
        let t = i as f32 * 0.37;
        assert!(vertex_displacement(p, t, 1.2).abs() <= 0.015 * 1.2 + 1e-6);
    }
}

#[test]
fn uv_drift_vanishes_without_scroll() {
    let uv = Vec2::new(0.25, 0.75);
    assert_eq!(drift_uv(uv, 3.0, 0.0), uv);
    let drifted = drift_uv(uv, 3.0, 1.0);
    assert!((drifted - uv).abs().max_element() <= 0.01 + 1e-6);
}

#[test]
fn uv_drift_follows_the_upward_v_field() {
    // Same field written with v pointing up, then mapped back to texture space
    let up_field = |u: f32, v: f32, t: f32, s: f32| {
        let phase = t * 0.5;
        let u2 = u + (v * 10.0 + phase).sin() * 0.01 * s;
        let v2 = v + (u2 * 10.0 + phase).cos() * 0.01 * s;
        (u2, v2)
    };
    for (uv, t, s) in [
        (Vec2::new(0.1, 0.2), 0.0, 1.0),
        (Vec2::new(0.5, 0.9), 3.7, 0.6),
        (Vec2::new(0.8, 0.05), 12.3, 1.4),
    ] {
        let (u, v_up) = up_field(uv.x, 1.0 - uv.y, t, s);
        let expected = Vec2::new(u, 1.0 - v_up);
        let got = drift_uv(uv, t, s);
        assert!((got - expected).abs().max_element() < 1e-5, "{uv} -> {got} vs {expected}");
    }
}

#[test]
fn wrap_unit_never_returns_one() {
    assert_eq!(wrap_unit(-1e-9), 0.0);
    assert_eq!(wrap_unit(1.0), 0.0);
    assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-6);
    for x in [-1e-9_f32, -1e-7, -3.0, 2.9999999, 7.5] {
        let w = wrap_unit(x);
        assert!((0.0..1.0).contains(&w), "{x} wrapped to {w}");
    }
}
