use crate::renderer::renderer::{GeometryBuffer, Renderer, opengl_to_wgpu};
use egui_wgpu::ScreenDescriptor;
use nalgebra_glm as glm;

/// Per-frame inputs for the scene pass.
pub struct SceneFrame {
    /// GL-convention projection times view.
    pub view_projection: glm::Mat4,
    pub show_grid: bool,
    pub show_axes: bool,
}

impl Renderer {
    pub fn render(
        &mut self,
        frame: &SceneFrame,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
        screen_descriptor: ScreenDescriptor,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = opengl_to_wgpu() * frame.view_projection;
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(view_proj.as_slice()),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.clear_color[0] as f64,
                            g: self.clear_color[1] as f64,
                            b: self.clear_color[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            // Grid first so the axes draw over it
            if frame.show_grid {
                render_pass.set_pipeline(&self.line_pipeline);
                draw_geometry(&mut render_pass, &self.grid_lines);
                render_pass.set_pipeline(&self.point_pipeline);
                draw_geometry(&mut render_pass, &self.grid_points);
            }

            if frame.show_axes {
                render_pass.set_pipeline(&self.line_pipeline);
                draw_geometry(&mut render_pass, &self.axis_lines);
            }
        }

        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let egui_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut egui_rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui render pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut egui_rpass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        Ok(())
    }
}

fn draw_geometry(render_pass: &mut wgpu::RenderPass<'_>, geometry: &GeometryBuffer) {
    if geometry.count == 0 {
        return;
    }
    render_pass.set_vertex_buffer(0, geometry.buffer.slice(..));
    render_pass.draw(0..geometry.count, 0..1);
}
