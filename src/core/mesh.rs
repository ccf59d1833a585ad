use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct PlaneMesh {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u16>,
}

/// Build a `size` x `size` plane centred on the origin in the XY plane,
/// subdivided into `segments` x `segments` quads. Rows run top to bottom and
/// UV (0, 0) is the top-left corner, matching wgpu texture addressing.
///
/// The vertex shader displaces every vertex along Z, so the grid has to be
/// fine enough for the ripple to read as a smooth surface.
pub fn build_plane(size: f32, segments: u32) -> PlaneMesh {
    let segments = segments.max(1);
    let stride = segments + 1;
    let half = size * 0.5;
    let step = size / segments as f32;

    let mut vertices = Vec::with_capacity((stride * stride) as usize);
    for iy in 0..stride {
        let y = half - iy as f32 * step;
        for ix in 0..stride {
            let x = ix as f32 * step - half;
            vertices.push(PlaneVertex {
                position: [x, y, 0.0],
                uv: [ix as f32 / segments as f32, iy as f32 / segments as f32],
            });
        }
    }

    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    for iy in 0..segments {
        for ix in 0..segments {
            let a = (ix + stride * iy) as u16;
            let b = (ix + stride * (iy + 1)) as u16;
            let c = (ix + 1 + stride * (iy + 1)) as u16;
            let d = (ix + 1 + stride * iy) as u16;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    PlaneMesh { vertices, indices }
}
