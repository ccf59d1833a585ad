use super::helpers;
use crate::core::constants::MSAA_SAMPLES;
use wgpu;

/// Multisampled colour target resolved into the swapchain each frame.
pub(crate) struct MsaaTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (tex, view) = helpers::create_color_texture(
            device,
            "msaa_color",
            width,
            height,
            format,
            MSAA_SAMPLES,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self { tex, view }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) {
        self.tex.destroy();
        *self = Self::new(device, width, height, format);
    }

    pub(crate) fn destroy(&self) {
        self.tex.destroy();
    }
}
