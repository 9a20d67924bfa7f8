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
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.96, 0.96, 0.94, 1.0];
    pub const GROUND: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // #8B4513
    pub const PLAYER: [f32; 4] = [0.33, 0.33, 0.33, 1.0];
    pub const PLAYER_DEAD: [f32; 4] = [0.75, 0.2, 0.2, 1.0];
    pub const FLYER_WINGS_UP: [f32; 4] = [0.35, 0.35, 0.55, 1.0];
    pub const FLYER_WINGS_DOWN: [f32; 4] = [0.25, 0.25, 0.45, 1.0];
    /// One shade per ground obstacle sprite
    pub const CACTUS: [[f32; 4]; 8] = [
        [0.13, 0.55, 0.13, 1.0],
        [0.18, 0.60, 0.20, 1.0],
        [0.10, 0.48, 0.16, 1.0],
        [0.22, 0.62, 0.12, 1.0],
        [0.15, 0.50, 0.25, 1.0],
        [0.20, 0.45, 0.10, 1.0],
        [0.12, 0.58, 0.30, 1.0],
        [0.25, 0.55, 0.18, 1.0],
    ];
    pub const BACKGROUND: [f32; 4] = SKY;
}
