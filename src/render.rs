use crate::core::constants::{GRID_SEGMENTS, PLANE_SIZE};
use crate::core::{
    build_plane, FrameUniforms, OrthoCamera, PatternError, SurfaceSize, TextureImage,
};
use glam::Mat4;
use std::rc::Rc;
use web_sys as web;

mod helpers;
mod pattern;
mod targets;
mod texture;

use pattern::{create_pattern_resources, PatternResources, PatternUniforms};
use targets::MsaaTarget;

/// Instance, adapter and device shared by every pattern canvas on the page.
pub struct GpuShared {
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    sampler: wgpu::Sampler,
}

impl GpuShared {
    pub async fn acquire() -> anyhow::Result<Rc<Self>> {
        let instance = wgpu::Instance::default();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| PatternError::Gpu("no WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: Some("pattern_device"),
                },
                None,
            )
            .await
            .map_err(|e| PatternError::Gpu(format!("request_device: {:?}", e)))?;
        let sampler = helpers::create_repeat_sampler(&device);
        Ok(Rc::new(Self {
            instance,
            adapter,
            device,
            queue,
            sampler,
        }))
    }

    /// Largest width or height a surface or texture may have on this device.
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }
}

/// GPU resources for one pattern canvas.
pub struct GpuState {
    shared: Rc<GpuShared>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pattern: PatternResources,
    texture: wgpu::Texture,
    msaa: MsaaTarget,
    view_proj: Mat4,
}

impl GpuState {
    pub fn new(
        shared: Rc<GpuShared>,
        canvas: &web::HtmlCanvasElement,
        image: TextureImage,
        size: SurfaceSize,
    ) -> anyhow::Result<Self> {
        let max_dimension = shared.max_texture_dimension();
        let size = size.clamp_to(max_dimension);
        let image = image.fit_within(max_dimension);
        let surface = shared
            .instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let caps = surface.get_capabilities(&shared.adapter);
        // Grading happens on stored (sRGB-encoded) values, so keep the swapchain non-sRGB
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("canvas surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&shared.device, &config);

        let (texture, texture_view) =
            texture::upload_texture(&shared.device, &shared.queue, &image);
        let mesh = build_plane(PLANE_SIZE, GRID_SEGMENTS);
        let pattern = create_pattern_resources(
            &shared.device,
            format,
            &mesh,
            &texture_view,
            &shared.sampler,
        );
        let msaa = MsaaTarget::new(&shared.device, size.width, size.height, format);

        Ok(Self {
            surface,
            config,
            pattern,
            texture,
            msaa,
            view_proj: OrthoCamera::default().view_projection(),
            shared,
        })
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let size = size.clamp_to(self.shared.max_texture_dimension());
        if size.width == self.config.width && size.height == self.config.height {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.shared.device, &self.config);
        self.msaa.recreate(
            &self.shared.device,
            size.width,
            size.height,
            self.config.format,
        );
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.shared.device, &self.config);
    }

    pub fn render(&mut self, frame_uniforms: &FrameUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let u = PatternUniforms::pack(self.view_proj, frame_uniforms);
        self.shared
            .queue
            .write_buffer(&self.pattern.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let mut encoder = self
            .shared
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("pattern_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pattern_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa.view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pattern.pipeline);
            rpass.set_bind_group(0, &self.pattern.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.pattern.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.pattern.index_buffer.slice(..),
                wgpu::IndexFormat::Uint16,
            );
            rpass.draw_indexed(0..self.pattern.index_count, 0, 0..1);
        }
        self.shared.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release buffers and textures now instead of waiting for GC.
    pub fn dispose(self) {
        self.pattern.destroy();
        self.texture.destroy();
        self.msaa.destroy();
    }
}
