// Host-side tests for constants and their relationships.
// The web selector module is wasm-only, so both files are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(TIME_STEP_PER_FRAME > 0.0);
    assert!(SCROLL_DECAY_SEC > 0.0);
    assert!(SIMULATED_SCROLL_DEFAULT_SEC > 0.0);
    assert!(DEFAULT_TRANSITION_SEC > 0.0);
    assert!(ACCENT_TRANSITION_SEC > 0.0);
    assert!(ENTRANCE_FADE_SEC > 0.0);
    assert!(PARALLAX_EASE_SEC > 0.0);
    assert!(PRESET_TRANSITION_SEC > 0.0);
    assert!(PROJECT_FADE_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_allows_normal_frames() {
    // 30 fps must pass through unclamped
    assert!(MAX_FRAME_DT_SEC > 1.0 / 30.0);
    assert!(MAX_FRAME_DT_SEC < ENTRANCE_FADE_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_uniform_stays_bounded() {
    assert!(BASE_SCROLL_SPEED > 0.0 && BASE_SCROLL_SPEED < 1.0);
    assert!(SCROLL_DELTA_DIVISOR > 0.0);
}

#[test]
fn luma_weights_sum_to_one() {
    let sum: f32 = LUMA_WEIGHTS.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn displacement_is_small_relative_to_plane() {
    assert!(RIPPLE_AMPLITUDE * (1.0 + BASE_SCROLL_SPEED) < PLANE_SIZE * 0.05);
    assert!(UV_DRIFT_AMPLITUDE < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_plane_exactly() {
    assert_eq!(ORTHO_HALF_EXTENT * 2.0, PLANE_SIZE);
    assert!(ORTHO_NEAR < CAMERA_Z && CAMERA_Z < ORTHO_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mesh_fits_u16_indices() {
    assert!((GRID_SEGMENTS + 1) * (GRID_SEGMENTS + 1) <= u16::MAX as u32);
}

#[test]
fn texture_urls_are_https() {
    assert!(RED_ROSES_URL.starts_with("https://"));
    assert!(PINK_ROSES_URL.starts_with("https://"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn project_fade_scale_shrinks() {
    assert!(PROJECT_HIDDEN_SCALE > 0.0 && PROJECT_HIDDEN_SCALE < 1.0);
}

#[test]
fn selectors_are_class_or_attribute_queries() {
    for sel in [NAVIGATION, MENU_TOGGLE, NAV_ITEMS, NAV_LINKS, SECTIONS, FILTER_BUTTONS, PROJECTS] {
        assert!(sel.starts_with('.'), "{sel} is not a class selector");
    }
    assert!(FILTER_BUTTONS.contains(FILTER_ATTR));
    assert!(PROJECTS.contains(CATEGORY_ATTR));
    assert!(HIDING_ATTR.starts_with("data-"));
}

#[test]
fn form_success_message_is_present() {
    assert!(FORM_SUCCESS_HTML.contains("Thank you for your message!"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_timing_is_sane() {
    assert!(REVEAL_START_FRACTION > 0.0 && REVEAL_START_FRACTION < 1.0);
    assert!(HERO_TIMELINE_DELAY_SEC > 0.0);
    assert!(FORM_SUCCESS_FADE_SEC > 0.0 && FORM_SUCCESS_RISE_PX > 0.0);
    assert!(DEFAULT_MAX_TEXTURE_DIMENSION >= 2048);
}

#[test]
fn reveal_targets_are_class_selectors() {
    for sel in [
        HERO_TITLE_LINES,
        HERO_SUBTITLE,
        HERO_DESCRIPTION,
        HERO_CTA_BUTTONS,
        HERO_SCROLL_INDICATOR,
        SECTION_HEADERS,
        TIMELINE_ITEMS,
        TIMELINE,
        EXPERTISE_AREAS,
        EXPERTISE_GRID,
        PROJECT_ITEMS,
        PROJECTS_GRID,
        CONTACT_FORM_BLOCK,
        FORM_SUCCESS,
    ] {
        assert!(sel.starts_with('.'), "{sel} is not a class selector");
    }
    assert!(FORM_SUCCESS_HTML.contains(&FORM_SUCCESS[1..]));
    assert!(PROJECTS.starts_with(PROJECT_ITEMS));
}
