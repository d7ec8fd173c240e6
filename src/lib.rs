//! Programmable stages and host-side data contract for a textured, colored
//! mesh rendering pass targeting Vulkan-style clip space.
//!
//! The crate owns the GLSL stage pairs (compiled at build time), the vertex
//! and uniform types that satisfy their binding layout, CPU mesh assembly,
//! and a software evaluation of both stages used to test the pass semantics.
//! Pipelines, descriptor sets, render passes, and presentation belong to the
//! hosting application.

pub mod camera;
pub mod color;
pub mod mesh;
pub mod shaders;
pub mod sprite;
pub mod stages;
pub mod transform;
pub mod vertex;

// Re-export commonly used items
pub use camera::Camera;
pub use color::Color;
pub use mesh::{Mesh, MeshBuffers, UploadError};
pub use sprite::SpriteRegion;
pub use stages::{
  AddressMode, Filter, Sampler, Texture, TextureError, VertexOutput, shade_fragment,
  transform_vertex,
};
pub use transform::Transforms;
pub use vertex::Vertex;
