//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.07, 1.0];
    pub const BACKGROUND_STAR: [f32; 4] = [0.8, 0.85, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.3, 0.85, 1.0, 1.0];
    pub const PLAYER_TRIM: [f32; 4] = [0.9, 0.95, 1.0, 1.0];
    pub const METEOR_CRATER: [f32; 4] = [0.45, 0.22, 0.1, 1.0];
    pub const BOMB_FUSE: [f32; 4] = [1.0, 0.75, 0.3, 1.0];
}

/// Same color with alpha scaled by `alpha`
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}
