pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use wgpu::*;

use crate::batch::QuadBatch;
use crate::camera::Camera;
use crate::mesh::{create_quad, Mesh};
use resources::GameBuffers;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: GameBuffers,
    pub quad: Mesh,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let (width, height) = ctx.size;
        let camera = Camera::pixel_space(width as f32, height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = create_quad(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            quad,
        })
    }

    pub fn draw(&mut self, batch: &QuadBatch) -> Result<(), String> {
        draw::draw_frame(self, batch)
    }
}
