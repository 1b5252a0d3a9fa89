// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # PoseNet Pipeline Library
//!
//! Per-frame pose estimation pipeline orchestration written in Rust: crop and
//! normalize a source frame, run an injected pose model, rescale the decoded
//! keypoints to display space, and push the results to a visualizer and a
//! minimal text UI.
//!
//! The heavy lifting — the network, GPU kernels, and the rendering surface —
//! stays behind three injected collaborator traits ([`ImageProcessor`],
//! [`ModelRunner`], [`PoseVisualizer`]). This crate owns the per-tick
//! sequencing, the crop geometry, the coordinate mapping, and the UI state.
//!
//! ## Quick Start
//!
//! ```no_run
//! use posenet_pipeline::{
//!     CollectingVisualizer, CpuImageProcessor, Frame, PipelineConfig, PosePipeline,
//!     ScriptedRunner, UiConfig, UiController,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut pipeline = PosePipeline::new(PipelineConfig::new().with_target_dim(256));
//!     pipeline.set_processor(Box::new(CpuImageProcessor::new()));
//!     pipeline.set_runner(Box::new(ScriptedRunner::new(Vec::new())));
//!     pipeline.set_visualizer(Box::new(CollectingVisualizer::new()));
//!
//!     let mut ui = UiController::new(UiConfig::default());
//!     let frame = Frame::from_image(&image::open("frame.jpg")?);
//!
//!     // One call per rendered frame; the host owns the loop and the clock
//!     pipeline.tick(&frame, &mut ui)?;
//!     println!("{}", ui.pose_count_display().text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pipeline`] | Core [`PosePipeline`] driving the per-tick sequence |
//! | [`config`] | [`PipelineConfig`] and [`UiConfig`] builders |
//! | [`geometry`] | Crop geometry and the input-to-display coordinate mapper |
//! | [`pose`] | Pose data model ([`HumanPose2D`], [`BodyPart`]) |
//! | [`texture`] | Frames, scratch textures, and the recycling pool |
//! | [`processing`] | [`ImageProcessor`] contract and CPU reference implementation |
//! | [`runner`] | [`ModelRunner`] contract and scripted stand-in |
//! | [`visualizer`] | [`PoseVisualizer`] contract, palettes, overlay and viewer |
//! | [`ui`] | Pose-count and FPS text surfaces |
//! | [`error`] | Error types ([`PipelineError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Skeleton overlay drawing and window display (default) |

// Modules
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod pose;
pub mod processing;
pub mod runner;
pub mod texture;
pub mod ui;
pub mod visualizer;

// Re-export main types for convenience
pub use config::{PipelineConfig, UiConfig};
pub use error::{PipelineError, Result};
pub use geometry::{CropRect, Dims, ScreenTransform, crop_offset, scale_to_screen};
pub use pipeline::PosePipeline;
pub use pose::{BodyPart, HumanPose2D, KEYPOINT_NAMES, NUM_KEYPOINTS};
pub use processing::{CpuImageProcessor, ImageProcessor};
pub use runner::{DecodeParams, Decoding, ModelRunner, ScriptedRunner};
pub use texture::{Frame, Texture, TexturePool};
pub use ui::{TextDisplay, UiController};
pub use visualizer::{CollectingVisualizer, PoseVisualizer};

#[cfg(feature = "visualize")]
pub use visualizer::{OverlayVisualizer, Viewer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
