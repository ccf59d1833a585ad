// Host-side tests for the plane mesh, camera and texture decoding.

use clearseas_web::core::constants::{GRID_SEGMENTS, PLANE_SIZE};
use clearseas_web::core::{build_plane, OrthoCamera, PatternError, TextureImage};
use glam::Vec4;
use std::io::Cursor;

#[test]
fn default_plane_has_expected_topology() {
    let mesh = build_plane(PLANE_SIZE, GRID_SEGMENTS);
    assert_eq!(mesh.vertices.len(), 33 * 33);
    assert_eq!(mesh.indices.len(), 32 * 32 * 6);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn plane_corners_and_uvs() {
    let mesh = build_plane(1.0, 4);
    let first = mesh.vertices[0];
    let last = mesh.vertices[mesh.vertices.len() - 1];
    assert_eq!(first.position, [-0.5, 0.5, 0.0]);
    assert_eq!(first.uv, [0.0, 0.0]);
    assert_eq!(last.position, [0.5, -0.5, 0.0]);
    assert_eq!(last.uv, [1.0, 1.0]);
}

#[test]
fn triangles_share_winding() {
    let mesh = build_plane(1.0, 3);
    for tri in mesh.indices.chunks(3) {
        let p = |i: u16| {
            let v = mesh.vertices[i as usize].position;
            glam::Vec2::new(v[0], v[1])
        };
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        let cross = (b - a).perp_dot(c - a);
        // Counter-clockwise when viewed from +Z
        assert!(cross > 0.0, "triangle {:?} is clockwise", tri);
    }
}

#[test]
fn zero_segments_degrades_to_single_quad() {
    let mesh = build_plane(2.0, 0);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
}

#[test]
fn ortho_camera_frames_unit_plane() {
    let vp = OrthoCamera::default().view_projection();
    let corner = vp * Vec4::new(0.5, 0.5, 0.0, 1.0);
    assert!((corner.x - 1.0).abs() < 1e-5);
    assert!((corner.y - 1.0).abs() < 1e-5);
    assert!((0.0..=1.0).contains(&corner.z));
    let centre = vp * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(centre.x.abs() < 1e-6 && centre.y.abs() < 1e-6);
}

#[test]
fn ripple_displacement_stays_inside_clip_depth() {
    let vp = OrthoCamera::default().view_projection();
    for z in [-0.02_f32, 0.02] {
        let p = vp * Vec4::new(0.0, 0.0, z, 1.0);
        assert!((0.0..=1.0).contains(&p.z));
    }
}

#[test]
fn blank_texture_is_one_transparent_pixel() {
    let t = TextureImage::blank();
    assert_eq!((t.width, t.height), (1, 1));
    assert_eq!(t.rgba, vec![0, 0, 0, 0]);
    assert!(t.is_blank());
}

#[test]
fn decodes_png_into_rgba() {
    let mut img = image::RgbaImage::new(3, 2);
    img.put_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");

    let t = TextureImage::decode(&bytes).expect("decode png");
    assert_eq!((t.width, t.height), (3, 2));
    assert_eq!(t.bytes_per_row(), 12);
    assert_eq!(t.rgba.len(), 24);
    assert_eq!(&t.rgba[20..24], &[10, 20, 30, 255]);
    assert!(!t.is_blank());
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = TextureImage::decode(b"definitely not an image").unwrap_err();
    assert!(matches!(err, PatternError::TextureDecode(_)));
}

#[test]
fn oversized_texture_is_downscaled_keeping_aspect() {
    let t = TextureImage {
        width: 64,
        height: 16,
        rgba: vec![200; 64 * 16 * 4],
    };
    let fitted = t.fit_within(32);
    assert_eq!((fitted.width, fitted.height), (32, 8));
    assert_eq!(fitted.rgba.len(), 32 * 8 * 4);
    assert!(fitted.rgba.iter().all(|b| *b == 200));
}

#[test]
fn texture_within_limit_is_untouched() {
    let t = TextureImage {
        width: 3,
        height: 2,
        rgba: (0..24).collect(),
    };
    assert_eq!(t.clone().fit_within(8192), t);
}

#[test]
fn mismatched_pixel_buffer_falls_back_to_blank() {
    let t = TextureImage {
        width: 100,
        height: 100,
        rgba: vec![1; 12],
    };
    assert_eq!(t.fit_within(10), TextureImage::blank());
}

#[test]
fn gpu_errors_describe_the_setup_step() {
    let err = PatternError::Gpu("no WebGPU adapter".into());
    assert_eq!(err.to_string(), "gpu setup failed: no WebGPU adapter");
}
