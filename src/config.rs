// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pipeline and UI configuration.
//!
//! This module defines the [`PipelineConfig`] struct, which controls the
//! per-tick pipeline (input sizing, crop path selection, decoding parameters,
//! display filtering), and the [`UiConfig`] struct for the text overlay layer.

use crate::runner::Decoding;
use crate::visualizer::Color;

/// Configuration for the pose pipeline.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use posenet_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::new()
///     .with_target_dim(256)
///     .with_score_threshold(0.5)
///     .with_max_poses(10);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Target size for the smaller input dimension, in pixels.
    pub target_dim: i32,
    /// Use the compute-kernel crop path when the runtime supports it.
    /// The shader path is the fallback either way.
    pub use_compute: bool,
    /// Minimum part score for decoded poses (0.0 to 1.0).
    pub score_threshold: f32,
    /// Non-maximum-suppression radius in pixels.
    pub nms_radius: f32,
    /// Maximum number of poses to decode per frame.
    pub max_poses: usize,
    /// Single- or multi-pose decoding.
    pub decoding: Decoding,
    /// Display confidence cutoff handed to the visualizer.
    /// Expected in [0, 1] but not validated; out-of-range values simply bias
    /// the visualizer's filtering.
    pub min_confidence: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_dim: 256,
            use_compute: true,
            score_threshold: 0.25,
            nms_radius: 50.0,
            max_poses: 20,
            decoding: Decoding::MultiPose,
            min_confidence: 0.5,
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with default values.
    ///
    /// # Returns
    ///
    /// * A new `PipelineConfig` instance with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target size for the smaller input dimension.
    #[must_use]
    pub const fn with_target_dim(mut self, target_dim: i32) -> Self {
        self.target_dim = target_dim;
        self
    }

    /// Enable or disable the compute-kernel crop path.
    #[must_use]
    pub const fn with_compute(mut self, use_compute: bool) -> Self {
        self.use_compute = use_compute;
        self
    }

    /// Set the minimum part score for decoded poses.
    #[must_use]
    pub const fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Set the non-maximum-suppression radius.
    #[must_use]
    pub const fn with_nms_radius(mut self, radius: f32) -> Self {
        self.nms_radius = radius;
        self
    }

    /// Set the maximum number of poses to decode per frame.
    #[must_use]
    pub const fn with_max_poses(mut self, max: usize) -> Self {
        self.max_poses = max;
        self
    }

    /// Set the decoding mode.
    #[must_use]
    pub const fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Set the display confidence cutoff.
    #[must_use]
    pub const fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

/// Configuration for the UI text surfaces.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Show the pose count display.
    pub show_pose_count: bool,
    /// Show the FPS display.
    pub show_fps: bool,
    /// Minimum interval between FPS refreshes, in seconds.
    pub fps_refresh_rate: f32,
    /// Text color for both displays.
    pub text_color: Color,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_pose_count: true,
            show_fps: true,
            fps_refresh_rate: 0.1,
            text_color: Color::WHITE,
        }
    }
}

impl UiConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the pose count display.
    #[must_use]
    pub const fn with_pose_count(mut self, show: bool) -> Self {
        self.show_pose_count = show;
        self
    }

    /// Show or hide the FPS display.
    #[must_use]
    pub const fn with_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Set the minimum interval between FPS refreshes, in seconds.
    #[must_use]
    pub const fn with_fps_refresh_rate(mut self, rate: f32) -> Self {
        self.fps_refresh_rate = rate;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}
