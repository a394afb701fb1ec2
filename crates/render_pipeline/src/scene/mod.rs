//! Scene-side data the pipeline consumes
//!
//! Cameras, renderables, and lights are owned by the host engine's scene and
//! are read-only to the pipeline. The pipeline receives cameras directly and
//! receives renderables and lights through the backend's culling query, one
//! batch per camera per frame.

pub mod camera;
pub mod layers;
pub mod light;
pub mod renderable;

pub use camera::Camera;
pub use layers::LayerMask;
pub use light::{LightKind, VisibleLight};
pub use renderable::{render_queue, MaterialId, MeshId, Renderable};
