// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame pipeline orchestration.
//!
//! [`PosePipeline`] drives one inference-and-display cycle per host frame:
//! size the crop, prepare the input texture, run the model, rescale the
//! decoded keypoints to display space, and push the results to the UI and
//! visualizer. Collaborators are injected; a tick with a missing collaborator
//! logs an error and is skipped entirely, then retried naturally on the next
//! tick.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::geometry::{CropRect, Dims, ScreenTransform, crop_offset, scale_to_screen};
use crate::pose::HumanPose2D;
use crate::processing::ImageProcessor;
use crate::runner::{DecodeParams, Decoding, ModelRunner};
use crate::texture::{Frame, TexturePool};
use crate::ui::UiController;
use crate::visualizer::PoseVisualizer;

/// Orchestrator for the per-frame pose estimation pipeline.
pub struct PosePipeline {
    config: PipelineConfig,
    processor: Option<Box<dyn ImageProcessor>>,
    runner: Option<Box<dyn ModelRunner>>,
    visualizer: Option<Box<dyn PoseVisualizer>>,
    pool: TexturePool,
    screen: ScreenTransform,
    // Crop offset and mirror flag for the current tick; written before the
    // mapping step, read only within the same tick.
    offset: Dims,
    mirrored: bool,
    poses: Vec<HumanPose2D>,
}

impl PosePipeline {
    /// Create a pipeline with no collaborators wired.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            processor: None,
            runner: None,
            visualizer: None,
            pool: TexturePool::new(),
            screen: ScreenTransform::default(),
            offset: Dims::default(),
            mirrored: false,
            poses: Vec::new(),
        }
    }

    /// Inject the image processor collaborator.
    pub fn set_processor(&mut self, processor: Box<dyn ImageProcessor>) {
        self.processor = Some(processor);
    }

    /// Inject the model runner collaborator.
    pub fn set_runner(&mut self, runner: Box<dyn ModelRunner>) {
        self.runner = Some(runner);
    }

    /// Inject the visualizer collaborator.
    pub fn set_visualizer(&mut self, visualizer: Box<dyn PoseVisualizer>) {
        self.visualizer = Some(visualizer);
    }

    /// Set the display surface transform read during the mapping step.
    pub fn set_screen_transform(&mut self, screen: ScreenTransform) {
        self.screen = screen;
    }

    /// Set the display confidence cutoff handed to the visualizer.
    ///
    /// Expected in [0, 1] but accepted unvalidated; out-of-range values
    /// simply bias the visualizer's filtering.
    pub fn set_min_confidence(&mut self, min_confidence: f32) {
        self.config.min_confidence = min_confidence;
    }

    /// Select single- or multi-pose decoding for the next tick.
    pub fn set_multi_pose(&mut self, multi: bool) {
        self.config.decoding = Decoding::from_multi(multi);
    }

    /// The poses decoded and rescaled in the most recent tick.
    #[must_use]
    pub fn poses(&self) -> &[HumanPose2D] {
        &self.poses
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one inference-and-display cycle for the given frame.
    ///
    /// If any collaborator is unset, an error is logged and the whole tick is
    /// skipped: no scratch buffers, no UI or visualizer update. Errors from
    /// the collaborators themselves are propagated untranslated.
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails mid-tick.
    pub fn tick(&mut self, frame: &Frame, ui: &mut UiController) -> Result<()> {
        let (Some(processor), Some(runner), Some(visualizer)) = (
            self.processor.as_mut(),
            self.runner.as_mut(),
            self.visualizer.as_mut(),
        ) else {
            crate::error!("Pose pipeline collaborators are not set; skipping frame");
            return Ok(());
        };

        // Input sizing: processor proposes, runner constrains to a valid crop
        let source_dims = frame.dims();
        let input_dims = runner.crop_dims(processor.input_dims(source_dims, self.config.target_dim));

        let mut input = self.pool.acquire(input_dims);
        self.offset = crop_offset(source_dims, input_dims);

        // Blit at source resolution, then crop+normalize into the input buffer
        let mut source = self.pool.acquire(source_dims);
        processor.blit(frame, &mut source)?;

        if self.config.use_compute && processor.supports_compute() {
            processor.crop_compute(&source, &mut input, self.offset)?;
        } else {
            let rect = CropRect::from_pixels(self.offset, input_dims, source_dims);
            processor.crop_shader(&source, &mut input, &rect)?;
        }
        self.pool.release(source);

        runner.execute(&input)?;
        self.pool.release(input);

        let params = DecodeParams {
            score_threshold: self.config.score_threshold,
            nms_radius: self.config.nms_radius,
            max_poses: self.config.max_poses,
            decoding: self.config.decoding,
        };
        self.poses = runner.decode(&params)?;

        // Rescale every body part from input space to display space, in place
        self.mirrored = self.screen.is_mirrored();
        let screen_dims = self.screen.dims();
        for pose in &mut self.poses {
            for part in &mut pose.parts {
                let (x, y) = scale_to_screen(
                    (part.x, part.y),
                    input_dims,
                    screen_dims,
                    self.offset,
                    self.mirrored,
                );
                part.x = x;
                part.y = y;
            }
        }

        ui.update_pose_count(self.poses.len());
        visualizer.draw(&self.poses, self.config.min_confidence)?;

        Ok(())
    }
}
