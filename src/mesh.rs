//! CPU-side mesh assembly and device upload.
//!
//! Geometry is accumulated as interleaved vertices plus a `u32` index list,
//! then uploaded as a pair of device buffers. Descriptor bindings and draw
//! calls stay with the caller.

use std::sync::Arc;

use glam::Vec2;
use vulkano::{
  Validated,
  buffer::{AllocateBufferError, Buffer, BufferCreateInfo, BufferUsage, Subbuffer},
  memory::allocator::{AllocationCreateInfo, MemoryTypeFilter, StandardMemoryAllocator},
};

use crate::{color::Color, sprite::SpriteRegion, vertex::Vertex};

/// Index pattern for one quad, relative to its first vertex.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

#[derive(Debug, Default)]
pub struct Mesh {
  pub vertices: Vec<Vertex>,
  pub indices: Vec<u32>,
}

impl Mesh {
  pub fn new() -> Mesh {
    Mesh::default()
  }

  /// Drops the accumulated geometry but keeps the allocations, so a mesh can
  /// be rebuilt every frame without churning the heap.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Appends a solid-color quad from four explicit corners. The full 0..1
  /// UV range is assigned so the same geometry also works textured.
  pub fn push_quad(&mut self, bl: Vec2, br: Vec2, tl: Vec2, tr: Vec2, color: Color) {
    let base = self.vertices.len() as u32;
    let color = color.to_array();

    self.vertices.extend_from_slice(&[
      Vertex::new([tl.x, tl.y, 0.0], color, [0.0, 0.0]),
      Vertex::new([tr.x, tr.y, 0.0], color, [1.0, 0.0]),
      Vertex::new([br.x, br.y, 0.0], color, [1.0, 1.0]),
      Vertex::new([bl.x, bl.y, 0.0], color, [0.0, 1.0]),
    ]);
    self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
  }

  /// Appends one axis-aligned sprite quad. `origin` is the pivot in sheet
  /// pixels, subtracted from the render position after scaling; UVs come
  /// from the region's position within the sheet.
  #[allow(clippy::too_many_arguments)]
  pub fn push_sprite(
    &mut self,
    x: f32,
    y: f32,
    origin: Vec2,
    scale: Vec2,
    color: Color,
    region: SpriteRegion,
    sheet_width: u32,
    sheet_height: u32,
  ) {
    let base = self.vertices.len() as u32;
    let color = color.to_array();

    let ([u0, v0], [u1, v1]) = region.uv_rect(sheet_width, sheet_height);

    let x = x - origin.x * scale.x;
    let y = y - origin.y * scale.y;
    let w = region.w as f32 * scale.x;
    let h = region.h as f32 * scale.y;

    self.vertices.extend_from_slice(&[
      Vertex::new([x, y, 0.0], color, [u0, v0]),
      Vertex::new([x + w, y, 0.0], color, [u1, v0]),
      Vertex::new([x + w, y + h, 0.0], color, [u1, v1]),
      Vertex::new([x, y + h, 0.0], color, [u0, v1]),
    ]);
    self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
  }

  /// Uploads the mesh into device vertex and index buffers.
  pub fn upload(
    &self,
    memory_allocator: Arc<StandardMemoryAllocator>,
  ) -> Result<MeshBuffers, UploadError> {
    if self.vertices.is_empty() || self.indices.is_empty() {
      return Err(UploadError::EmptyMesh);
    }

    log::debug!(
      "uploading mesh: {} vertices, {} indices",
      self.vertices.len(),
      self.indices.len()
    );

    let vertices = Buffer::from_iter(
      memory_allocator.clone(),
      BufferCreateInfo {
        usage: BufferUsage::VERTEX_BUFFER,
        ..Default::default()
      },
      AllocationCreateInfo {
        memory_type_filter: MemoryTypeFilter::PREFER_DEVICE
          | MemoryTypeFilter::HOST_SEQUENTIAL_WRITE,
        ..Default::default()
      },
      self.vertices.iter().copied(),
    )?;

    let indices = Buffer::from_iter(
      memory_allocator,
      BufferCreateInfo {
        usage: BufferUsage::INDEX_BUFFER,
        ..Default::default()
      },
      AllocationCreateInfo {
        memory_type_filter: MemoryTypeFilter::PREFER_DEVICE
          | MemoryTypeFilter::HOST_SEQUENTIAL_WRITE,
        ..Default::default()
      },
      self.indices.iter().copied(),
    )?;

    Ok(MeshBuffers { vertices, indices })
  }
}

/// Device-resident mesh geometry, ready to bind as vertex and index buffers.
pub struct MeshBuffers {
  pub vertices: Subbuffer<[Vertex]>,
  pub indices: Subbuffer<[u32]>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
  #[error("cannot upload an empty mesh")]
  EmptyMesh,
  #[error("failed to allocate device buffer")]
  Allocation(#[from] Validated<AllocateBufferError>),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quad_emits_four_vertices_and_two_triangles() {
    let mut mesh = Mesh::new();
    mesh.push_quad(
      Vec2::new(0.0, 10.0),
      Vec2::new(10.0, 10.0),
      Vec2::new(0.0, 0.0),
      Vec2::new(10.0, 0.0),
      Color::RED,
    );

    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);

    // Top-left, top-right, bottom-right, bottom-left.
    assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[1].position, [10.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[2].position, [10.0, 10.0, 0.0]);
    assert_eq!(mesh.vertices[3].position, [0.0, 10.0, 0.0]);

    assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    assert_eq!(mesh.vertices[2].uv, [1.0, 1.0]);
    assert!(mesh.vertices.iter().all(|v| v.color == Color::RED.to_array()));
  }

  #[test]
  fn indices_are_offset_for_each_additional_quad() {
    let mut mesh = Mesh::new();
    let corners = (
      Vec2::new(0.0, 1.0),
      Vec2::new(1.0, 1.0),
      Vec2::new(0.0, 0.0),
      Vec2::new(1.0, 0.0),
    );
    mesh.push_quad(corners.0, corners.1, corners.2, corners.3, Color::WHITE);
    mesh.push_quad(corners.0, corners.1, corners.2, corners.3, Color::WHITE);

    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(&mesh.indices[6..], &[4, 5, 6, 6, 7, 4]);
  }

  #[test]
  fn sprite_quad_honors_origin_scale_and_region() {
    let mut mesh = Mesh::new();
    mesh.push_sprite(
      10.0,
      10.0,
      Vec2::new(1.0, 1.0),
      Vec2::new(2.0, 2.0),
      Color::WHITE,
      SpriteRegion::new(2, 2, 4, 4),
      8,
      8,
    );

    // Position is offset by the scaled origin; extent is the scaled region.
    assert_eq!(mesh.vertices[0].position, [8.0, 8.0, 0.0]);
    assert_eq!(mesh.vertices[2].position, [16.0, 16.0, 0.0]);

    assert_eq!(mesh.vertices[0].uv, [0.25, 0.25]);
    assert_eq!(mesh.vertices[1].uv, [0.75, 0.25]);
    assert_eq!(mesh.vertices[2].uv, [0.75, 0.75]);
    assert_eq!(mesh.vertices[3].uv, [0.25, 0.75]);
  }

  #[test]
  fn clear_empties_without_reallocating() {
    let mut mesh = Mesh::new();
    mesh.push_quad(
      Vec2::ZERO,
      Vec2::X,
      Vec2::Y,
      Vec2::ONE,
      Color::default(),
    );
    let vertex_capacity = mesh.vertices.capacity();

    mesh.clear();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertices.capacity(), vertex_capacity);
  }
}
