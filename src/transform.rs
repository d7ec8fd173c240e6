//! The per-draw transform block shared by both vertex stages.

use glam::Mat4;

use crate::shaders::{textured, untextured};

/// View, model, and projection matrices, uploaded as one uniform block
/// (set 0, binding 0). Field order is part of the binding contract.
///
/// The vertex stages compute `projection * view * model * position` and then
/// fold the depth range from [-1, 1] into [0, 1], so the projection helpers
/// here deliberately produce GL-convention matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transforms {
  pub view: Mat4,
  pub model: Mat4,
  pub projection: Mat4,
}

impl Transforms {
  pub const IDENTITY: Transforms = Transforms {
    view: Mat4::IDENTITY,
    model: Mat4::IDENTITY,
    projection: Mat4::IDENTITY,
  };

  /// The combined matrix the vertex stage applies to positions.
  pub fn mvp(&self) -> Mat4 {
    self.projection * self.view * self.model
  }

  /// Orthographic projection for 2D drawing in pixel coordinates, with the
  /// origin in the bottom-left corner and a -1..100 depth range.
  pub fn screen_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, width, 0.0, height, -1.0, 100.0)
  }
}

impl Default for Transforms {
  fn default() -> Self {
    Transforms::IDENTITY
  }
}

impl From<&Transforms> for textured::vs::Transforms {
  fn from(transforms: &Transforms) -> Self {
    Self {
      view: transforms.view.to_cols_array_2d(),
      model: transforms.model.to_cols_array_2d(),
      projection: transforms.projection.to_cols_array_2d(),
    }
  }
}

impl From<&Transforms> for untextured::vs::Transforms {
  fn from(transforms: &Transforms) -> Self {
    Self {
      view: transforms.view.to_cols_array_2d(),
      model: transforms.model.to_cols_array_2d(),
      projection: transforms.projection.to_cols_array_2d(),
    }
  }
}

#[cfg(test)]
mod tests {
  use glam::{Vec3, Vec4};

  use super::*;

  #[test]
  fn mvp_multiplies_in_projection_view_model_order() {
    let transforms = Transforms {
      view: Mat4::look_at_rh(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y),
      model: Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
      projection: Mat4::perspective_rh_gl(1.0, 1.5, 0.1, 50.0),
    };

    let expected = transforms.projection * transforms.view * transforms.model;
    assert_eq!(transforms.mvp(), expected);
  }

  #[test]
  fn identity_block_leaves_positions_untouched() {
    let p = Vec4::new(0.3, -0.7, 0.2, 1.0);
    assert_eq!(Transforms::IDENTITY.mvp() * p, p);
    assert_eq!(Transforms::default(), Transforms::IDENTITY);
  }

  #[test]
  fn screen_projection_maps_pixel_origin_to_lower_left() {
    let projection = Transforms::screen_projection(800.0, 600.0);
    let origin = projection * Vec4::new(0.0, 0.0, 0.0, 1.0);

    assert!((origin.x - -1.0).abs() < 1e-6);
    assert!((origin.y - -1.0).abs() < 1e-6);
    // GL ortho with near -1, far 100 puts z = 0 at -99/101.
    assert!((origin.z - (-99.0 / 101.0)).abs() < 1e-6);
    assert_eq!(origin.w, 1.0);

    let far_corner = projection * Vec4::new(800.0, 600.0, 0.0, 1.0);
    assert!((far_corner.x - 1.0).abs() < 1e-6);
    assert!((far_corner.y - 1.0).abs() < 1e-6);
  }

  #[test]
  fn uniform_block_conversion_preserves_field_order() {
    let transforms = Transforms {
      view: Mat4::from_scale(Vec3::splat(2.0)),
      model: Mat4::from_translation(Vec3::X),
      projection: Mat4::perspective_rh_gl(0.8, 1.0, 0.1, 10.0),
    };

    let block = textured::vs::Transforms::from(&transforms);
    assert_eq!(block.view, transforms.view.to_cols_array_2d());
    assert_eq!(block.model, transforms.model.to_cols_array_2d());
    assert_eq!(block.projection, transforms.projection.to_cols_array_2d());
  }
}
