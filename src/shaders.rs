//! GLSL shader compilation and loading.
//!
//! Each render mode gets its own vertex/fragment pair, compiled from GLSL
//! source files at build time with the vulkano_shaders macro. Both vertex
//! stages read the same `Transforms` uniform block (set 0, binding 0) and
//! apply the same clip-space depth correction, so a host can switch between
//! the pairs without touching its uniform upload path.

/// Stages for textured, tinted geometry.
///
/// The fragment stage samples a `texture2D` (set 0, binding 1) through a
/// separately bound `sampler` (set 0, binding 2) and multiplies the sample
/// componentwise with the interpolated vertex color.
pub mod textured {
  /// Vertex stage: transforms positions into clip space and passes color
  /// and texture coordinates through for interpolation.
  pub mod vs {
    vulkano_shaders::shader! {
      ty: "vertex",
      path: "src/shaders/textured_vert.glsl",
    }
  }

  /// Fragment stage: texture sample tinted by the interpolated color.
  pub mod fs {
    vulkano_shaders::shader! {
      ty: "fragment",
      path: "src/shaders/textured_frag.glsl",
    }
  }
}

/// Stages for solid-color geometry. No texture bindings; the fragment
/// output is the interpolated vertex color.
pub mod untextured {
  pub mod vs {
    vulkano_shaders::shader! {
      ty: "vertex",
      path: "src/shaders/untextured_vert.glsl",
    }
  }

  pub mod fs {
    vulkano_shaders::shader! {
      ty: "fragment",
      path: "src/shaders/untextured_frag.glsl",
    }
  }
}
