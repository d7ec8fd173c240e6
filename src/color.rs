/// RGBA color with components stored as f32 in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
  r: f32,
  g: f32,
  b: f32,
  a: f32,
}

impl Color {
  pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
  pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
  pub const GRAY: Color = Color::new(0.4, 0.4, 0.4, 1.0);
  pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
  pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
  pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
  pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

  pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
  }

  pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color {
      r: r as f32 / 255.0,
      g: g as f32 / 255.0,
      b: b as f32 / 255.0,
      a: a as f32 / 255.0,
    }
  }

  pub const fn to_array(self) -> [f32; 4] {
    [self.r, self.g, self.b, self.a]
  }
}

impl Default for Color {
  fn default() -> Self {
    Color::WHITE
  }
}

impl From<Color> for [f32; 4] {
  fn from(color: Color) -> Self {
    color.to_array()
  }
}
