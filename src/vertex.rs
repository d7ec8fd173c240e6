use vulkano::buffer::BufferContents;

/// One mesh vertex: position, tint color, and texture coordinate,
/// interleaved in a single buffer (stride 36, attribute locations 0..2).
///
/// Field names match the shader input names; vulkano resolves vertex
/// attributes by name when building a pipeline.
#[derive(Clone, Copy, Debug, PartialEq, BufferContents, vulkano::pipeline::graphics::vertex_input::Vertex)]
#[repr(C)]
pub struct Vertex {
  #[format(R32G32B32_SFLOAT)]
  pub position: [f32; 3],
  #[format(R32G32B32A32_SFLOAT)]
  pub color: [f32; 4],
  #[format(R32G32_SFLOAT)]
  pub uv: [f32; 2],
}

impl Vertex {
  pub const fn new(position: [f32; 3], color: [f32; 4], uv: [f32; 2]) -> Self {
    Self { position, color, uv }
  }
}
