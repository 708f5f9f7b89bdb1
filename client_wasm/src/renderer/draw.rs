use wgpu::*;

use super::Renderer;
use crate::batch::QuadBatch;

pub fn draw_frame(renderer: &mut Renderer, batch: &QuadBatch) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and skip this frame
            log::warn!("Surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    upload_instances(renderer, batch);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !batch.is_empty() {
            pass.set_pipeline(&renderer.main_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
            pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
            pass.draw_indexed(0..renderer.quad.index_count, 0, 0..batch.len() as u32);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn upload_instances(renderer: &mut Renderer, batch: &QuadBatch) {
    if batch.is_empty() {
        return;
    }
    renderer.buffers.reserve(&renderer.device, batch.len());
    renderer.queue.write_buffer(
        &renderer.buffers.instances,
        0,
        bytemuck::cast_slice(batch.instances()),
    );
}
