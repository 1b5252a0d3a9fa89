// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame geometry for the pose pipeline.
//!
//! This module defines the integer pixel extents used throughout the pipeline,
//! the centered crop computation, the fractional crop rectangle consumed by the
//! shader-style crop path, and the pure mapping from model-input coordinates to
//! display coordinates.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use std::fmt;
use std::ops::{Add, Div, Sub};

/// Integer pixel extents of an image, input tensor, or display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dims {
    /// Width in pixels.
    pub x: i32,
    /// Height in pixels.
    pub y: i32,
}

impl Dims {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The smaller of the two extents.
    #[must_use]
    pub const fn min_side(&self) -> i32 {
        if self.x < self.y { self.x } else { self.y }
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn area(&self) -> usize {
        (self.x as usize) * (self.y as usize)
    }
}

impl Add for Dims {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Dims {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<i32> for Dims {
    type Output = Self;

    // Per-axis integer division; Rust `i32` division truncates toward zero.
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Compute the centered crop offset for an input region inside a source image.
///
/// Truncates toward zero on each axis, so odd leftovers lose their half pixel
/// rather than rounding to the nearest integer.
///
/// # Arguments
///
/// * `source` - Source image dimensions.
/// * `input` - Model input dimensions.
///
/// # Returns
///
/// * Top-left offset of the centered crop, in source pixels.
#[must_use]
pub fn crop_offset(source: Dims, input: Dims) -> Dims {
    (source - input) / 2
}

/// A crop rectangle expressed as fractions of the source dimensions.
///
/// This is the form consumed by the shader-style crop path: `x`/`y` are
/// `offset / source` and `width`/`height` are `input / source`, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    /// Horizontal offset as a fraction of the source width.
    pub x: f32,
    /// Vertical offset as a fraction of the source height.
    pub y: f32,
    /// Crop width as a fraction of the source width.
    pub width: f32,
    /// Crop height as a fraction of the source height.
    pub height: f32,
}

impl CropRect {
    /// Build a fractional crop rectangle from pixel-space crop parameters.
    ///
    /// # Arguments
    ///
    /// * `offset` - Top-left crop offset in source pixels.
    /// * `input` - Crop (model input) dimensions in pixels.
    /// * `source` - Source image dimensions in pixels.
    #[must_use]
    pub fn from_pixels(offset: Dims, input: Dims, source: Dims) -> Self {
        Self {
            x: offset.x as f32 / source.x as f32,
            y: offset.y as f32 / source.y as f32,
            width: input.x as f32 / source.x as f32,
            height: input.y as f32 / source.y as f32,
        }
    }

    /// Recover the pixel-space top-left offset for a given source size.
    #[must_use]
    pub fn pixel_offset(&self, source: Dims) -> Dims {
        Dims::new(
            (self.x * source.x as f32).round() as i32,
            (self.y * source.y as f32).round() as i32,
        )
    }

    /// Recover the pixel-space crop dimensions for a given source size.
    #[must_use]
    pub fn pixel_dims(&self, source: Dims) -> Dims {
        Dims::new(
            (self.width * source.x as f32).round() as i32,
            (self.height * source.y as f32).round() as i32,
        )
    }
}

/// Scale of the display surface the poses are drawn onto.
///
/// Mirrors the transform of an on-screen quad: the width/height scale carries
/// the display extents and a depth scale of exactly -1 marks a horizontally
/// mirrored screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    /// (width, height, depth) scale of the display surface.
    pub scale: [f32; 3],
}

impl ScreenTransform {
    /// Create a screen transform from a display scale.
    #[must_use]
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            scale: [width, height, depth],
        }
    }

    /// Whether the screen is horizontally mirrored (depth scale is exactly -1).
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.scale[2] == -1.0
    }

    /// Display extents (width, height) read from the transform scale.
    #[must_use]
    pub const fn dims(&self) -> (f32, f32) {
        (self.scale[0], self.scale[1])
    }
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Map a coordinate from model-input pixel space to display space.
///
/// Applies the crop offset, scales by the screen/input dimension ratio, and
/// reflects the horizontal axis about the screen midline when the display is
/// mirrored. Pure and deterministic; the visualizer's pixel alignment depends
/// on this mapping.
///
/// # Arguments
///
/// * `coord` - Coordinate in (possibly cropped) model-input pixel space.
/// * `input` - Model input dimensions.
/// * `screen` - Display dimensions (width, height).
/// * `offset` - Crop offset applied when the input was cut from the source.
/// * `mirrored` - Whether the display surface is horizontally mirrored.
///
/// # Returns
///
/// * The coordinate in display space.
#[must_use]
pub fn scale_to_screen(
    coord: (f32, f32),
    input: Dims,
    screen: (f32, f32),
    offset: Dims,
    mirrored: bool,
) -> (f32, f32) {
    let mut x = (coord.0 + offset.x as f32) / input.x as f32 * screen.0;
    let y = (coord.1 + offset.y as f32) / input.y as f32 * screen.1;

    if mirrored {
        x = screen.0 - x;
    }

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_offset_even() {
        let offset = crop_offset(Dims::new(640, 480), Dims::new(256, 256));
        assert_eq!(offset, Dims::new(192, 112));
    }

    #[test]
    fn test_crop_offset_truncates_toward_zero() {
        // Odd leftover: (5 - 2) / 2 = 1, not 2
        let offset = crop_offset(Dims::new(5, 7), Dims::new(2, 2));
        assert_eq!(offset, Dims::new(1, 2));

        // Input larger than source: (-3) / 2 = -1, not -2
        let offset = crop_offset(Dims::new(4, 4), Dims::new(7, 4));
        assert_eq!(offset, Dims::new(-1, 0));
    }

    #[test]
    fn test_crop_rect_matches_pixel_offset() {
        // The fractional rect must agree with the integer crop geometry
        // for arbitrary source/input combinations.
        let cases = [
            (Dims::new(640, 480), Dims::new(257, 257)),
            (Dims::new(1280, 720), Dims::new(481, 353)),
            (Dims::new(1921, 1081), Dims::new(513, 513)),
            (Dims::new(100, 100), Dims::new(99, 1)),
        ];

        for (source, input) in cases {
            let offset = crop_offset(source, input);
            let rect = CropRect::from_pixels(offset, input, source);

            let eps = 1e-6;
            assert!((rect.x - offset.x as f32 / source.x as f32).abs() < eps);
            assert!((rect.y - offset.y as f32 / source.y as f32).abs() < eps);
            assert!((rect.width - input.x as f32 / source.x as f32).abs() < eps);
            assert!((rect.height - input.y as f32 / source.y as f32).abs() < eps);

            assert_eq!(rect.pixel_offset(source), offset);
            assert_eq!(rect.pixel_dims(source), input);
        }
    }

    #[test]
    fn test_scale_to_screen_identity() {
        let input = Dims::new(256, 256);
        let screen = (256.0, 256.0);
        let offset = Dims::new(0, 0);

        let mapped = scale_to_screen((31.5, 200.25), input, screen, offset, false);
        assert!((mapped.0 - 31.5).abs() < f32::EPSILON);
        assert!((mapped.1 - 200.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scale_to_screen_mirror_flips_x_only() {
        let input = Dims::new(256, 192);
        let screen = (1280.0, 720.0);
        let offset = Dims::new(32, 12);
        let coord = (100.0, 50.0);

        let plain = scale_to_screen(coord, input, screen, offset, false);
        let mirrored = scale_to_screen(coord, input, screen, offset, true);

        // x reflected about the screen midline, y untouched
        assert!((mirrored.0 - (screen.0 - plain.0)).abs() < 1e-4);
        assert!((mirrored.1 - plain.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scale_to_screen_applies_offset_and_ratio() {
        let input = Dims::new(100, 100);
        let screen = (200.0, 200.0);
        let offset = Dims::new(10, 20);

        let mapped = scale_to_screen((0.0, 0.0), input, screen, offset, false);
        assert!((mapped.0 - 20.0).abs() < 1e-4);
        assert!((mapped.1 - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_transform_mirror() {
        assert!(ScreenTransform::new(1280.0, 720.0, -1.0).is_mirrored());
        assert!(!ScreenTransform::new(1280.0, 720.0, 1.0).is_mirrored());
        // Only exactly -1 counts
        assert!(!ScreenTransform::new(1280.0, 720.0, -0.999).is_mirrored());

        let t = ScreenTransform::new(1920.0, 1080.0, -1.0);
        assert_eq!(t.dims(), (1920.0, 1080.0));
    }

    #[test]
    fn test_dims_min_side() {
        assert_eq!(Dims::new(640, 480).min_side(), 480);
        assert_eq!(Dims::new(256, 720).min_side(), 256);
    }
}
