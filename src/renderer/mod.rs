//! WebGPU rendering module
//!
//! Every entity is an axis-aligned quad; `shapes` builds the vertex list
//! from the game state and `pipeline` draws it.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_frame;
pub use vertex::Vertex;
