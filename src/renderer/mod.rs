//! Rendering module
//!
//! `scene` builds a frame from the game state; `pipeline` pushes it through WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Frame, Hud, build_frame};
pub use vertex::Vertex;
