//! WebGPU rendering module
//!
//! `shapes` turns the game state into canvas-space triangles; `pipeline`
//! uploads and draws them.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_scene;
pub use vertex::Vertex;
