use glam::{Mat4, Vec3};

use crate::transform::Transforms;

/// First-person camera producing the view and projection matrices the
/// transform block consumes.
pub struct Camera {
  pub position: Vec3,
  /// Horizontal rotation angle in radians.
  pub yaw: f32,
  /// Vertical rotation angle in radians, expected within (-PI/2, PI/2).
  pub pitch: f32,
  /// Vertical field of view in degrees.
  pub fov: f32,
}

impl Camera {
  pub fn new() -> Self {
    Self {
      position: Vec3::new(0.0, 0.0, 2.0),
      yaw: -std::f32::consts::FRAC_PI_2,
      pitch: 0.0,
      fov: 45.0,
    }
  }

  /// Direction the camera is facing, derived from yaw and pitch.
  pub fn front(&self) -> Vec3 {
    let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
    let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
    Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
  }

  pub fn view_matrix(&self) -> Mat4 {
    Mat4::look_at_rh(self.position, self.position + self.front(), Vec3::Y)
  }

  /// Perspective projection in the [-1, 1] depth convention; the vertex
  /// stage's remap turns it into the [0, 1] range the pipeline tests against.
  pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, 0.1, 100.0)
  }

  /// Assembles a full transform block for the given model matrix.
  pub fn transforms(&self, aspect_ratio: f32, model: Mat4) -> Transforms {
    Transforms {
      view: self.view_matrix(),
      model,
      projection: self.projection_matrix(aspect_ratio),
    }
  }
}

impl Default for Camera {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_camera_looks_down_negative_z() {
    let front = Camera::new().front();
    assert!(front.x.abs() < 1e-6);
    assert!(front.y.abs() < 1e-6);
    assert!((front.z - -1.0).abs() < 1e-6);
  }

  #[test]
  fn transforms_assemble_view_and_projection() {
    let camera = Camera::new();
    let model = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
    let transforms = camera.transforms(16.0 / 9.0, model);

    assert_eq!(transforms.view, camera.view_matrix());
    assert_eq!(transforms.model, model);
    assert_eq!(transforms.projection, camera.projection_matrix(16.0 / 9.0));
  }
}
