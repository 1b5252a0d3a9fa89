// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Image processing for the pose pipeline.
//!
//! [`ImageProcessor`] is the contract the pipeline drives each tick: compute
//! the model input dimensions, blit the frame into a source-resolution scratch
//! texture, then crop and normalize into the input texture through one of two
//! interchangeable paths. The compute path takes a pixel offset; the shader
//! path takes a fractional [`CropRect`]. Both must be numerically equivalent
//! up to floating-point tolerance.
//!
//! [`CpuImageProcessor`] is the bundled reference implementation.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::error::{PipelineError, Result};
use crate::geometry::{CropRect, Dims};
use crate::texture::{Frame, Texture};

/// Reciprocal of 255 for normalization.
const INV_255: f32 = 1.0 / 255.0;

/// Smallest accepted target dimension.
const MIN_TARGET_DIM: i32 = 64;

/// Contract for the image processing collaborator.
pub trait ImageProcessor {
    /// Compute the model input dimensions for a source image and target size.
    fn input_dims(&self, source: Dims, target_dim: i32) -> Dims;

    /// Whether the compute-kernel crop path is available at runtime.
    fn supports_compute(&self) -> bool;

    /// Copy a frame into a source-resolution scratch texture.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination dimensions do not match the frame.
    fn blit(&mut self, frame: &Frame, dst: &mut Texture) -> Result<()>;

    /// Crop and normalize via the compute-kernel path (pixel offset).
    ///
    /// # Errors
    ///
    /// Returns an error if the crop cannot be performed.
    fn crop_compute(&mut self, src: &Texture, dst: &mut Texture, offset: Dims) -> Result<()>;

    /// Crop and normalize via the shader path (fractional offset and size).
    ///
    /// # Errors
    ///
    /// Returns an error if the crop cannot be performed.
    fn crop_shader(&mut self, src: &Texture, dst: &mut Texture, rect: &CropRect) -> Result<()>;
}

/// CPU reference implementation of [`ImageProcessor`].
///
/// Crops are clamped to the source bounds (sampler-style clamp-to-edge) and
/// pixel values are normalized to [0, 1]. The compute and shader paths share
/// one kernel, so their outputs are bit-identical.
#[derive(Debug, Clone)]
pub struct CpuImageProcessor {
    compute_supported: bool,
}

impl CpuImageProcessor {
    /// Create a new CPU image processor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            compute_supported: true,
        }
    }

    /// Override the reported compute-kernel support.
    #[must_use]
    pub const fn with_compute_support(mut self, supported: bool) -> Self {
        self.compute_supported = supported;
        self
    }

    /// Shared crop+normalize kernel.
    fn crop_normalize(src: &Texture, dst: &mut Texture, offset: Dims) -> Result<()> {
        let src_dims = src.dims();
        let dst_dims = dst.dims();
        if src_dims.x <= 0 || src_dims.y <= 0 {
            return Err(PipelineError::ProcessorError(format!(
                "cannot crop from empty source texture {src_dims}"
            )));
        }

        for c in 0..3 {
            for y in 0..dst_dims.y {
                let sy = (y + offset.y).clamp(0, src_dims.y - 1) as usize;
                for x in 0..dst_dims.x {
                    let sx = (x + offset.x).clamp(0, src_dims.x - 1) as usize;
                    dst.data[[c, y as usize, x as usize]] = src.data[[c, sy, sx]] * INV_255;
                }
            }
        }

        Ok(())
    }
}

impl Default for CpuImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for CpuImageProcessor {
    /// Scale the source extents so the smaller side matches the target size.
    ///
    /// The target is floored at 64 pixels. Aspect ratio is preserved, so the
    /// returned dims describe a centered window the model sees at full
    /// source resolution.
    fn input_dims(&self, source: Dims, target_dim: i32) -> Dims {
        let target = target_dim.max(MIN_TARGET_DIM);
        let scale = target as f32 / source.min_side() as f32;
        Dims::new(
            (source.x as f32 * scale).round() as i32,
            (source.y as f32 * scale).round() as i32,
        )
    }

    fn supports_compute(&self) -> bool {
        self.compute_supported
    }

    fn blit(&mut self, frame: &Frame, dst: &mut Texture) -> Result<()> {
        let dims = frame.dims();
        if dst.dims() != dims {
            return Err(PipelineError::ProcessorError(format!(
                "blit target is {} but frame is {dims}",
                dst.dims()
            )));
        }

        for (x, y, pixel) in frame.image().enumerate_pixels() {
            for c in 0..3 {
                dst.data[[c, y as usize, x as usize]] = f32::from(pixel[c]);
            }
        }

        Ok(())
    }

    fn crop_compute(&mut self, src: &Texture, dst: &mut Texture, offset: Dims) -> Result<()> {
        Self::crop_normalize(src, dst, offset)
    }

    fn crop_shader(&mut self, src: &Texture, dst: &mut Texture, rect: &CropRect) -> Result<()> {
        let offset = rect.pixel_offset(src.dims());
        Self::crop_normalize(src, dst, offset)
    }
}
