// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Model runner contract.
//!
//! The network itself lives behind [`ModelRunner`]: the pipeline hands it a
//! cropped, normalized texture and asks it to decode its latest output into
//! poses. Decoding parameters travel in [`DecodeParams`]. This crate ships no
//! real network; [`ScriptedRunner`] is a deterministic stand-in for tests and
//! the demo CLI.

use crate::error::{PipelineError, Result};
use crate::geometry::Dims;
use crate::pose::HumanPose2D;
use crate::texture::Texture;

/// Pose decoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// Decode the single highest-scoring pose.
    SinglePose,
    /// Decode up to `max_poses` poses with non-maximum suppression.
    #[default]
    MultiPose,
}

impl Decoding {
    /// Build a decoding mode from the multi-pose flag.
    #[must_use]
    pub const fn from_multi(multi: bool) -> Self {
        if multi {
            Self::MultiPose
        } else {
            Self::SinglePose
        }
    }

    /// Whether this mode decodes more than one pose.
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        matches!(self, Self::MultiPose)
    }
}

/// Post-processing parameters for pose decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeParams {
    /// Minimum part score for a pose to be kept.
    pub score_threshold: f32,
    /// Minimum pixel distance between detections during suppression.
    pub nms_radius: f32,
    /// Maximum number of poses to return.
    pub max_poses: usize,
    /// Single- or multi-pose decoding.
    pub decoding: Decoding,
}

impl Default for DecodeParams {
    fn default() -> Self {
        Self {
            score_threshold: 0.25,
            nms_radius: 50.0,
            max_poses: 20,
            decoding: Decoding::MultiPose,
        }
    }
}

/// Contract for the pose estimation model collaborator.
pub trait ModelRunner {
    /// Constrain proposed input dimensions to a crop size the model accepts.
    fn crop_dims(&self, dims: Dims) -> Dims;

    /// Run the model on a prepared input texture.
    ///
    /// # Errors
    ///
    /// Returns an error if model execution fails.
    fn execute(&mut self, input: &Texture) -> Result<()>;

    /// Decode the latest output into a list of poses.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no output to decode.
    fn decode(&mut self, params: &DecodeParams) -> Result<Vec<HumanPose2D>>;
}

/// Deterministic [`ModelRunner`] stand-in.
///
/// Plays back a scripted sequence of pose lists, one list per `execute` call,
/// cycling when the script runs out. Crop dimensions are constrained the way
/// stride-based pose networks require: each axis becomes the largest value
/// `n * stride + 1` that does not exceed it. The NMS radius is accepted but
/// not applied; suppression belongs to a real decoder.
#[derive(Debug, Clone)]
pub struct ScriptedRunner {
    script: Vec<Vec<HumanPose2D>>,
    cursor: usize,
    stride: i32,
    pending: Option<Vec<HumanPose2D>>,
    last_input: Option<Dims>,
}

impl ScriptedRunner {
    /// Create a runner that plays back the given pose lists in order.
    #[must_use]
    pub const fn new(script: Vec<Vec<HumanPose2D>>) -> Self {
        Self {
            script,
            cursor: 0,
            stride: 16,
            pending: None,
            last_input: None,
        }
    }

    /// Set the output stride used to constrain crop dimensions.
    #[must_use]
    pub const fn with_stride(mut self, stride: i32) -> Self {
        self.stride = stride;
        self
    }

    /// Dimensions of the most recently executed input, if any.
    #[must_use]
    pub const fn last_input(&self) -> Option<Dims> {
        self.last_input
    }
}

impl ModelRunner for ScriptedRunner {
    fn crop_dims(&self, dims: Dims) -> Dims {
        let snap = |d: i32| ((d - 1) / self.stride) * self.stride + 1;
        Dims::new(snap(dims.x.max(1)), snap(dims.y.max(1)))
    }

    fn execute(&mut self, input: &Texture) -> Result<()> {
        self.last_input = Some(input.dims());

        if self.script.is_empty() {
            self.pending = Some(Vec::new());
            return Ok(());
        }

        let poses = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        self.pending = Some(poses);
        Ok(())
    }

    fn decode(&mut self, params: &DecodeParams) -> Result<Vec<HumanPose2D>> {
        let Some(poses) = self.pending.take() else {
            return Err(PipelineError::RunnerError(
                "decode called with no model output".to_string(),
            ));
        };

        let mut kept: Vec<HumanPose2D> = poses
            .into_iter()
            .filter(|p| p.mean_confidence() >= params.score_threshold)
            .collect();

        let limit = if params.decoding.is_multi() {
            params.max_poses
        } else {
            1
        };
        kept.truncate(limit);

        Ok(kept)
    }
}
