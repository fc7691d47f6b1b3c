//! WebGPU rendering module
//!
//! Flat-shaded cuboids only. The scene is rebuilt as a vertex list every
//! frame and drawn in a single pass with depth testing.

pub mod mesh;
pub mod pipeline;
pub mod scene;

pub use mesh::Vertex;
pub use pipeline::{RenderState, view_projection};
pub use scene::build_scene;
