//! Cuboid mesh construction
//!
//! Every object in the scene is a cuboid: one shared corner table,
//! scaled and transformed on the CPU, colored either uniformly or from
//! a per-vertex table.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// 3D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Unit cube corners, two triangles per face
const CUBE: [[f32; 3]; 36] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
];

/// Per-vertex rainbow shared by the ground slab and the bot
pub const RAINBOW: [[f32; 3]; 36] = [
    [0.583, 0.771, 0.014],
    [0.609, 0.115, 0.436],
    [0.327, 0.483, 0.844],
    [0.822, 0.569, 0.201],
    [0.435, 0.602, 0.223],
    [0.310, 0.747, 0.185],
    [0.597, 0.770, 0.761],
    [0.559, 0.436, 0.730],
    [0.359, 0.583, 0.152],
    [0.483, 0.596, 0.789],
    [0.559, 0.861, 0.639],
    [0.195, 0.548, 0.859],
    [0.014, 0.184, 0.576],
    [0.771, 0.328, 0.970],
    [0.406, 0.615, 0.116],
    [0.676, 0.977, 0.133],
    [0.971, 0.572, 0.833],
    [0.140, 0.616, 0.489],
    [0.997, 0.513, 0.064],
    [0.945, 0.719, 0.592],
    [0.543, 0.021, 0.978],
    [0.279, 0.317, 0.505],
    [0.167, 0.620, 0.077],
    [0.347, 0.857, 0.137],
    [0.055, 0.953, 0.042],
    [0.714, 0.505, 0.345],
    [0.783, 0.290, 0.734],
    [0.722, 0.645, 0.174],
    [0.302, 0.455, 0.848],
    [0.225, 0.587, 0.040],
    [0.517, 0.713, 0.338],
    [0.053, 0.959, 0.120],
    [0.393, 0.621, 0.362],
    [0.673, 0.211, 0.457],
    [0.820, 0.883, 0.371],
    [0.982, 0.099, 0.879],
];

/// How a cuboid is colored
#[derive(Debug, Clone, Copy)]
pub enum Coloring {
    Uniform([f32; 3]),
    PerVertex(&'static [[f32; 3]; 36]),
}

/// Append one cuboid with per-axis half-extents `half`, placed by
/// `transform`
pub fn push_cuboid(out: &mut Vec<Vertex>, transform: Mat4, half: Vec3, coloring: Coloring) {
    for (i, corner) in CUBE.iter().enumerate() {
        let local = Vec3::from(*corner) * half;
        let world = transform.transform_point3(local);
        let color = match coloring {
            Coloring::Uniform(c) => c,
            Coloring::PerVertex(table) => table[i],
        };
        out.push(Vertex {
            position: world.to_array(),
            color,
        });
    }
}

/// Colors for scene elements
pub mod colors {
    pub const OBSTACLE: [f32; 3] = [0.0, 0.0, 0.0];
    pub const CANON: [f32; 3] = [0.25, 0.25, 0.3];
    pub const FLASH: [f32; 3] = [1.0, 0.9, 0.3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_emits_full_triangle_list() {
        let mut out = Vec::new();
        push_cuboid(
            &mut out,
            Mat4::IDENTITY,
            Vec3::splat(1.0),
            Coloring::Uniform([1.0, 0.0, 0.0]),
        );
        assert_eq!(out.len(), 36);
        assert_eq!(out.len() % 3, 0);
    }

    #[test]
    fn test_half_extents_bound_positions() {
        let mut out = Vec::new();
        push_cuboid(
            &mut out,
            Mat4::IDENTITY,
            Vec3::new(0.05, 0.05, 0.05),
            Coloring::Uniform([0.0; 3]),
        );
        for v in &out {
            for c in v.position {
                assert!((c.abs() - 0.05).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_translation_moves_center() {
        let mut out = Vec::new();
        let center = Vec3::new(0.5, 1.0, -0.5);
        push_cuboid(
            &mut out,
            Mat4::from_translation(center),
            Vec3::splat(0.05),
            Coloring::Uniform([0.0; 3]),
        );
        // The corner table is symmetric, so positions average to the center
        let mut sum = Vec3::ZERO;
        for v in &out {
            sum += Vec3::from(v.position);
        }
        let mean = sum / out.len() as f32;
        assert!((mean - center).length() < 1e-5);
    }

    #[test]
    fn test_per_vertex_coloring_uses_table() {
        let mut out = Vec::new();
        push_cuboid(
            &mut out,
            Mat4::IDENTITY,
            Vec3::ONE,
            Coloring::PerVertex(&RAINBOW),
        );
        for (v, expected) in out.iter().zip(RAINBOW.iter()) {
            assert_eq!(v.color, *expected);
        }
    }
}
