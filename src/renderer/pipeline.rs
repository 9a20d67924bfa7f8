//! wgpu surface and quad pipeline
//!
//! One pipeline, one vertex buffer. The buffer is reused across frames and
//! only reallocated when a frame needs more room than it has.

use super::vertex::{Vertex, colors};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Quads in the first allocation (ground, sky, player, a dozen obstacles)
const INITIAL_QUADS: usize = 32;

/// GPU side of the renderer
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    /// Vertex capacity of `vertices`
    capacity: usize,
    /// Scratch for clip-space vertices, kept between frames
    staging: Vec<Vertex>,
    /// Surface size in pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("dino-dash"),
                required_features: wgpu::Features::empty(),
                // WebGL2 fallback must keep working
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: srgb_format(&caps),
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: Vec::new(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = quad_pipeline(&device, config.format);
        let capacity = INITIAL_QUADS * 6;
        let vertices = vertex_buffer(&device, capacity);

        let size = (config.width, config.height);
        log::debug!("Surface {}x{} as {:?}", size.0, size.1, config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertices,
            capacity,
            staging: Vec::with_capacity(capacity),
            size,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame of world-space vertices
    pub fn render(&mut self, world: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        self.staging.clear();
        self.staging.extend(world.iter().map(|v| {
            let (x, y) = world_to_ndc(v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        }));

        if self.staging.len() > self.capacity {
            self.capacity = self.staging.len().next_power_of_two();
            self.vertices = vertex_buffer(&self.device, self.capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.capacity);
        }
        if !self.staging.is_empty() {
            self.queue
                .write_buffer(&self.vertices, 0, bytemuck::cast_slice(&self.staging));
        }

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("frame") });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.vertices.slice(..));
            pass.draw(0..self.staging.len() as u32, 0..1);
        }

        self.queue.submit([encoder.finish()]);
        frame.present();
        Ok(())
    }
}

/// First sRGB format the surface offers, else whatever it prefers
fn srgb_format(caps: &wgpu::SurfaceCapabilities) -> wgpu::TextureFormat {
    caps.formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .unwrap_or(caps.formats[0])
}

fn vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("quads"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn quad_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("quads"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("quads"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("quads"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                // Every quad is opaque
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
    wgpu::Color { r, g, b, a }
}

/// Convert world coordinates (y down, origin top-left) to normalized device
/// coordinates. The world is stretched over the whole surface; the canvas
/// keeps the world's aspect ratio.
pub fn world_to_ndc(x: f32, y: f32) -> (f32, f32) {
    (x / WORLD_WIDTH * 2.0 - 1.0, 1.0 - y / WORLD_HEIGHT * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_corners_map_to_clip_corners() {
        assert_eq!(world_to_ndc(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(world_to_ndc(WORLD_WIDTH, WORLD_HEIGHT), (1.0, -1.0));
        assert_eq!(world_to_ndc(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0), (0.0, 0.0));
    }

    #[test]
    fn test_ground_line_is_below_center() {
        let (_, y) = world_to_ndc(0.0, crate::consts::GROUND_LINE);
        assert!(y < 0.0 && y > -1.0);
    }

    #[test]
    fn test_clear_color_matches_palette() {
        let c = clear_color();
        assert_eq!(c.r, f64::from(colors::BACKGROUND[0]));
        assert_eq!(c.a, f64::from(colors::BACKGROUND[3]));
    }
}
