//! Software evaluation of the two pass stages.
//!
//! Mirrors the GLSL in [`crate::shaders`] operation for operation, so the
//! pass contract can be exercised without a device. Each function is a pure
//! transform of its inputs; invocations are independent, exactly as their
//! GPU counterparts.
//!
//! Varying interpolation across a primitive is the rasterizer's job and is
//! not modelled here; the fragment stage takes already-interpolated values.

use glam::Vec4;

use crate::{transform::Transforms, vertex::Vertex};

/// Result of running one vertex through the vertex stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexOutput {
  /// Clip-space position with z already folded into the [0, 1] depth
  /// convention.
  pub clip_position: Vec4,
  pub color: [f32; 4],
  pub uv: [f32; 2],
}

/// Vertex stage: `clip = projection * view * model * (position, 1)` with the
/// depth range correction `z = (z + w) / 2`; color and uv pass through
/// untouched.
///
/// There is no validation. A degenerate transform block produces whatever
/// numbers fall out, as it would on the GPU.
pub fn transform_vertex(vertex: &Vertex, transforms: &Transforms) -> VertexOutput {
  let [x, y, z] = vertex.position;
  let clip = transforms.mvp() * Vec4::new(x, y, z, 1.0);

  VertexOutput {
    clip_position: Vec4::new(clip.x, clip.y, (clip.z + clip.w) / 2.0, clip.w),
    color: vertex.color,
    uv: vertex.uv,
  }
}

/// Fragment stage: componentwise multiply of the interpolated color with the
/// texture sample (standard tinting).
pub fn shade_fragment(color: [f32; 4], uv: [f32; 2], texture: &Texture, sampler: &Sampler) -> [f32; 4] {
  let sample = texture.sample(sampler, uv);
  [
    color[0] * sample[0],
    color[1] * sample[1],
    color[2] * sample[2],
    color[3] * sample[3],
  ]
}

/// Texel filtering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Filter {
  #[default]
  Nearest,
  Linear,
}

/// How texture coordinates outside [0, 1] resolve to texels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AddressMode {
  #[default]
  Repeat,
  MirroredRepeat,
  ClampToEdge,
}

/// Filtering and addressing state, bound separately from the image it
/// samples and combined with one at sample time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Sampler {
  pub filter: Filter,
  pub address_mode: AddressMode,
}

impl Sampler {
  pub const fn new(filter: Filter, address_mode: AddressMode) -> Sampler {
    Sampler { filter, address_mode }
  }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TextureError {
  #[error("texture dimensions must be non-zero, got {width}x{height}")]
  ZeroExtent { width: u32, height: u32 },
  #[error("pixel buffer length {actual}, expected {expected} for {width}x{height}")]
  SizeMismatch {
    width: u32,
    height: u32,
    expected: usize,
    actual: usize,
  },
}

/// An RGBA image with texels stored as f32 in [0, 1].
///
/// Values are treated as linear; whether the bytes fed in were sRGB-encoded
/// is the caller's image-format decision, the same way the hardware sampler
/// leaves it to the bound image view.
#[derive(Clone, Debug)]
pub struct Texture {
  width: u32,
  height: u32,
  texels: Vec<[f32; 4]>,
}

impl Texture {
  /// Builds a texture from tightly packed 8-bit RGBA rows, top to bottom.
  pub fn from_rgba8(width: u32, height: u32, pixels: &[u8]) -> Result<Texture, TextureError> {
    if width == 0 || height == 0 {
      return Err(TextureError::ZeroExtent { width, height });
    }

    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
      return Err(TextureError::SizeMismatch {
        width,
        height,
        expected,
        actual: pixels.len(),
      });
    }

    let texels = pixels
      .chunks_exact(4)
      .map(|texel| {
        [
          texel[0] as f32 / 255.0,
          texel[1] as f32 / 255.0,
          texel[2] as f32 / 255.0,
          texel[3] as f32 / 255.0,
        ]
      })
      .collect();

    Ok(Texture { width, height, texels })
  }

  /// Builds a texture from row-major f32 texels.
  pub fn from_texels(
    width: u32,
    height: u32,
    texels: Vec<[f32; 4]>,
  ) -> Result<Texture, TextureError> {
    if width == 0 || height == 0 {
      return Err(TextureError::ZeroExtent { width, height });
    }

    let expected = width as usize * height as usize;
    if texels.len() != expected {
      return Err(TextureError::SizeMismatch {
        width,
        height,
        expected,
        actual: texels.len(),
      });
    }

    Ok(Texture { width, height, texels })
  }

  /// A 1x1 texture of a single texel. With `[1.0; 4]` it makes the fragment
  /// stage the identity on the interpolated color.
  pub fn solid(texel: [f32; 4]) -> Texture {
    Texture {
      width: 1,
      height: 1,
      texels: vec![texel],
    }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  /// Texel at integer coordinates. Panics when out of range.
  pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
    assert!(x < self.width && y < self.height);
    self.texels[(y * self.width + x) as usize]
  }

  /// Samples the texture at normalized coordinates with the given sampler
  /// state. Out-of-range coordinates resolve per the address mode, never by
  /// this function rejecting them.
  pub fn sample(&self, sampler: &Sampler, uv: [f32; 2]) -> [f32; 4] {
    match sampler.filter {
      Filter::Nearest => {
        let x = (uv[0] * self.width as f32).floor() as i64;
        let y = (uv[1] * self.height as f32).floor() as i64;
        self.texel_wrapped(x, y, sampler.address_mode)
      }
      Filter::Linear => {
        // Half-texel offset puts sample points at texel centers.
        let u = uv[0] * self.width as f32 - 0.5;
        let v = uv[1] * self.height as f32 - 0.5;
        let (x0, y0) = (u.floor(), v.floor());
        let (fx, fy) = (u - x0, v - y0);
        let (x0, y0) = (x0 as i64, y0 as i64);
        let mode = sampler.address_mode;

        let top = lerp_texel(
          self.texel_wrapped(x0, y0, mode),
          self.texel_wrapped(x0 + 1, y0, mode),
          fx,
        );
        let bottom = lerp_texel(
          self.texel_wrapped(x0, y0 + 1, mode),
          self.texel_wrapped(x0 + 1, y0 + 1, mode),
          fx,
        );
        lerp_texel(top, bottom, fy)
      }
    }
  }

  fn texel_wrapped(&self, x: i64, y: i64, mode: AddressMode) -> [f32; 4] {
    let x = resolve_coordinate(x, self.width, mode);
    let y = resolve_coordinate(y, self.height, mode);
    self.texels[(y * self.width + x) as usize]
  }
}

impl TryFrom<&image::RgbaImage> for Texture {
  type Error = TextureError;

  fn try_from(image: &image::RgbaImage) -> Result<Texture, TextureError> {
    Texture::from_rgba8(image.width(), image.height(), image.as_raw())
  }
}

fn resolve_coordinate(coordinate: i64, size: u32, mode: AddressMode) -> u32 {
  let n = i64::from(size);
  let resolved = match mode {
    AddressMode::Repeat => coordinate.rem_euclid(n),
    AddressMode::MirroredRepeat => {
      let period = 2 * n;
      let m = coordinate.rem_euclid(period);
      if m < n { m } else { period - 1 - m }
    }
    AddressMode::ClampToEdge => coordinate.clamp(0, n - 1),
  };
  resolved as u32
}

fn lerp_texel(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
  [
    a[0] + (b[0] - a[0]) * t,
    a[1] + (b[1] - a[1]) * t,
    a[2] + (b[2] - a[2]) * t,
    a[3] + (b[3] - a[3]) * t,
  ]
}
