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
}

/// Reinterpret a vertex list as bytes for upload to a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for scenery (entities carry their own)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.07, 0.0, 0.16, 1.0];
    pub const GRID: [f32; 4] = [1.0, 0.0, 1.0, 0.2];
    pub const ROAD: [f32; 4] = [0.1, 0.1, 0.18, 1.0];
    pub const ROAD_EDGE: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const LANE_DASH: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const CAR_DETAIL: [f32; 4] = [0.07, 0.0, 0.16, 1.0];
    pub const BOOST_FLAME: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const SHIELD: [f32; 4] = [0.0, 1.0, 0.0, 0.35];
    pub const PAUSE_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const PACKET_CORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
