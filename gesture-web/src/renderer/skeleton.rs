//! Skeleton rendering - draws hand bones and joints over the video

use super::shapes::{Vertex, create_circle_vertices, create_line_vertices};
use crate::gesture::{HandPose, HAND_SKELETON};

/// Colors for different visualization elements
mod colors {
    /// Bones (#00ff00)
    pub const BONE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Joints (#ff0000)
    pub const JOINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Transparent so the <video> underneath shows through
    pub const BACKGROUND: wgpu::Color = wgpu::Color::TRANSPARENT;
}

/// Bone line width in pixels
const BONE_WIDTH_PX: f32 = 2.0;
/// Joint dot radius in pixels
const JOINT_RADIUS_PX: f32 = 5.0;
const JOINT_SEGMENTS: u32 = 12;

/// Convert normalized landmark (0-1) to clip space (-1 to 1), flip Y
fn to_clip_space(x: f32, y: f32) -> (f32, f32) {
    (x * 2.0 - 1.0, -(y * 2.0 - 1.0))
}

/// Pixel length to clip-space length per axis
fn px_to_clip(px: f32, width: u32, height: u32) -> (f32, f32) {
    (px * 2.0 / width.max(1) as f32, px * 2.0 / height.max(1) as f32)
}

/// Bones then joints for one hand, so dots sit on top of lines
pub(crate) fn build_hand_vertices(pose: &HandPose, width: u32, height: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let landmarks = pose.landmarks();

    let half_width = px_to_clip(BONE_WIDTH_PX / 2.0, width, height);
    for (start_idx, end_idx) in HAND_SKELETON.iter() {
        let start = landmarks[*start_idx];
        let end = landmarks[*end_idx];
        vertices.extend(create_line_vertices(
            to_clip_space(start.x, start.y),
            to_clip_space(end.x, end.y),
            half_width,
            colors::BONE,
        ));
    }

    let radius = px_to_clip(JOINT_RADIUS_PX, width, height);
    for lm in landmarks.iter() {
        vertices.extend(create_circle_vertices(
            to_clip_space(lm.x, lm.y),
            radius,
            colors::JOINT,
            JOINT_SEGMENTS,
        ));
    }

    vertices
}

/// Render one frame: every tracked hand, or just a clear
#[cfg(target_arch = "wasm32")]
pub fn render_frame() {
    use super::shapes::MAX_VERTICES;
    use super::state::GPU_STATE;
    use crate::bridge;

    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let mut vertices: Vec<Vertex> = Vec::new();
        if bridge::landmarks_visible() {
            if let Some(hands) = bridge::get_hand_poses() {
                for pose in hands.iter() {
                    vertices.extend(build_hand_vertices(pose, state.config.width, state.config.height));
                }
            }
        }
        if vertices.len() > MAX_VERTICES {
            log::warn!("Overlay truncated: {} vertices (max {})", vertices.len(), MAX_VERTICES);
            vertices.truncate(MAX_VERTICES - MAX_VERTICES % 3);
        }

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Overlay Encoder") }
        );

        if !vertices.is_empty() {
            state.queue.write_buffer(
                &state.vertex_buffer,
                0,
                bytemuck::cast_slice(&vertices),
            );
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Hand Skeleton Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
