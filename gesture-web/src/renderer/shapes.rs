//! Shape primitives - vertices for joint dots and bone lines
//!
//! All coordinates are clip space. Radii and widths come in per axis so
//! dots stay round on a non-square canvas.

/// Vertex buffer capacity
pub const MAX_VERTICES: usize = 4096;

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Filled ellipse as a triangle list; `radius` is (rx, ry)
pub fn create_circle_vertices(
    center: (f32, f32),
    radius: (f32, f32),
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let point = |angle: f32| Vertex {
        position: [center.0 + radius.0 * angle.cos(), center.1 + radius.1 * angle.sin()],
        color,
    };

    for i in 0..segments {
        let angle1 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let angle2 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        vertices.push(Vertex { position: [center.0, center.1], color });
        vertices.push(point(angle1));
        vertices.push(point(angle2));
    }

    vertices
}

/// Line segment as a quad (two triangles); `half_width` is per axis
pub fn create_line_vertices(
    from: (f32, f32),
    to: (f32, f32),
    half_width: (f32, f32),
    color: [f32; 4],
) -> Vec<Vertex> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.0001 { return vec![]; }

    // Perpendicular offset
    let px = -dy / len * half_width.0;
    let py = dx / len * half_width.1;

    let v = |x: f32, y: f32| Vertex { position: [x, y], color };
    vec![
        v(from.0 - px, from.1 - py),
        v(from.0 + px, from.1 + py),
        v(to.0 + px, to.1 + py),

        v(from.0 - px, from.1 - py),
        v(to.0 + px, to.1 + py),
        v(to.0 - px, to.1 - py),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let verts = create_circle_vertices((0.0, 0.0), (0.1, 0.1), [1.0, 0.0, 0.0, 1.0], 12);
        assert_eq!(verts.len(), 36);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(create_line_vertices((0.2, 0.2), (0.2, 0.2), (0.01, 0.01), [0.0, 1.0, 0.0, 1.0]).is_empty());
        assert_eq!(create_line_vertices((0.0, 0.0), (0.5, 0.0), (0.01, 0.01), [0.0, 1.0, 0.0, 1.0]).len(), 6);
    }
}
