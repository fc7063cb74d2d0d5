//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (canvas pixels, y down) and colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes per vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU or canvas upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Hex colour to linear-ish RGBA floats
const fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const SKY: [f32; 4] = rgb(0x70c5ce);
    pub const CLOUD: [f32; 4] = rgb(0xffffff);
    pub const GROUND: [f32; 4] = rgb(0xded895);
    pub const GRASS: [f32; 4] = rgb(0x73bf2e);
    pub const PIPE: [f32; 4] = rgb(0x74bf2e);
    pub const PIPE_CAP: [f32; 4] = rgb(0x598c22);
    pub const PIPE_HIGHLIGHT: [f32; 4] = rgb(0x8fd133);
    pub const AVATAR: [f32; 4] = rgb(0xffd700);
    pub const EYE: [f32; 4] = rgb(0x000000);
    pub const BEAK: [f32; 4] = rgb(0xff6600);
    pub const WING: [f32; 4] = rgb(0xffa500);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let verts = [Vertex::new(1.0, 2.0, colors::SKY); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(colors::EYE, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors::CLOUD, [1.0, 1.0, 1.0, 1.0]);
    }
}
