// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame and scratch texture types.
//!
//! [`Frame`] wraps the source image for one tick. [`Texture`] is a float
//! scratch buffer in CHW layout, acquired from a [`TexturePool`] and released
//! back within the same tick. The pool recycles allocations by dimension so a
//! steady-state pipeline stops allocating after the first tick.

#![allow(clippy::cast_sign_loss)]

use image::{DynamicImage, RgbImage};
use ndarray::Array3;

use crate::geometry::Dims;

/// The source image for one pipeline tick.
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Wrap an RGB image as a frame.
    #[must_use]
    pub const fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Convert any image into a frame.
    #[must_use]
    pub fn from_image(image: &DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }

    /// Pixel dimensions of the frame.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn dims(&self) -> Dims {
        Dims::new(self.image.width() as i32, self.image.height() as i32)
    }

    /// The underlying RGB image.
    #[must_use]
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// A float scratch buffer in CHW layout (3, height, width).
#[derive(Debug, Clone)]
pub struct Texture {
    dims: Dims,
    /// Pixel data, channels first.
    pub data: Array3<f32>,
}

impl Texture {
    /// Allocate a zeroed texture.
    #[must_use]
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            data: Array3::zeros((3, dims.y as usize, dims.x as usize)),
        }
    }

    /// Pixel dimensions of the texture.
    #[must_use]
    pub const fn dims(&self) -> Dims {
        self.dims
    }
}

/// Recycling pool for scratch textures.
///
/// Buffers follow stack discipline: each one is acquired, used, and released
/// within a single tick. Released buffers are kept for reuse instead of freed.
#[derive(Debug, Default)]
pub struct TexturePool {
    free: Vec<Texture>,
}

impl TexturePool {
    /// Create an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { free: Vec::new() }
    }

    /// Acquire a texture with the given dimensions.
    ///
    /// Reuses a previously released buffer of the same dimensions when one is
    /// available; allocates otherwise. The contents are not cleared.
    pub fn acquire(&mut self, dims: Dims) -> Texture {
        if let Some(pos) = self.free.iter().position(|t| t.dims() == dims) {
            self.free.swap_remove(pos)
        } else {
            Texture::new(dims)
        }
    }

    /// Release a texture back to the pool.
    pub fn release(&mut self, texture: Texture) {
        self.free.push(texture);
    }

    /// Number of idle buffers held by the pool.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dims() {
        let frame = Frame::new(RgbImage::new(640, 480));
        assert_eq!(frame.dims(), Dims::new(640, 480));
    }

    #[test]
    fn test_texture_layout() {
        let tex = Texture::new(Dims::new(4, 3));
        assert_eq!(tex.data.shape(), &[3, 3, 4]);
        assert_eq!(tex.dims(), Dims::new(4, 3));
    }

    #[test]
    fn test_pool_recycles_matching_dims() {
        let mut pool = TexturePool::new();
        let dims = Dims::new(8, 8);

        let mut tex = pool.acquire(dims);
        tex.data[[0, 0, 0]] = 0.5;
        pool.release(tex);
        assert_eq!(pool.idle(), 1);

        // Same dims come back from the pool (contents left as-is)
        let tex = pool.acquire(dims);
        assert_eq!(pool.idle(), 0);
        assert!((tex.data[[0, 0, 0]] - 0.5).abs() < f32::EPSILON);

        // Different dims allocate fresh
        let other = pool.acquire(Dims::new(4, 4));
        assert_eq!(other.dims(), Dims::new(4, 4));
    }
}
