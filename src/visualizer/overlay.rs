// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton overlay drawing.
//!
//! Draws keypoint markers and limb segments onto an RGB image, colored from
//! the pose palette, and presents the result through a [`Viewer`] window.

#![allow(clippy::cast_possible_truncation)]

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::error::{PipelineError, Result};
use crate::pose::HumanPose2D;
use crate::visualizer::color::Color;
use crate::visualizer::skeleton::{KPT_COLOR_INDICES, LIMB_COLOR_INDICES, SKELETON};
use crate::visualizer::{PoseVisualizer, Viewer};

/// Keypoint marker radius in pixels.
const KEYPOINT_RADIUS: i32 = 4;

/// Draw skeleton overlays for the given poses onto an image.
///
/// Body parts below the confidence cutoff are skipped; a limb is drawn only
/// when both of its endpoints pass the cutoff. Coordinates are expected in the
/// image's pixel space.
pub fn draw_poses(image: &mut RgbImage, poses: &[HumanPose2D], min_confidence: f32) {
    for pose in poses {
        for (limb, [a, b]) in SKELETON.iter().enumerate() {
            let (Some(start), Some(end)) = (pose.parts.get(*a), pose.parts.get(*b)) else {
                continue;
            };
            if start.confidence < min_confidence || end.confidence < min_confidence {
                continue;
            }

            let Color(r, g, b) = Color::from_pose_index(LIMB_COLOR_INDICES[limb]);
            draw_line_segment_mut(
                image,
                (start.x, start.y),
                (end.x, end.y),
                Rgb([r, g, b]),
            );
        }

        for part in &pose.parts {
            if part.confidence < min_confidence {
                continue;
            }

            let index = KPT_COLOR_INDICES.get(part.id).copied().unwrap_or(0);
            let Color(r, g, b) = Color::from_pose_index(index);
            draw_filled_circle_mut(
                image,
                (part.x as i32, part.y as i32),
                KEYPOINT_RADIUS,
                Rgb([r, g, b]),
            );
        }
    }
}

/// A [`PoseVisualizer`] that draws skeleton overlays into a window.
///
/// The host sets the background frame each tick; `draw` composites the
/// overlays on top and pushes the result to the window.
pub struct OverlayVisualizer {
    viewer: Viewer,
    background: Option<RgbImage>,
}

impl OverlayVisualizer {
    /// Create an overlay visualizer with its own window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            viewer: Viewer::new(title, width, height)?,
            background: None,
        })
    }

    /// Set the background frame for the next draw call.
    pub fn set_background(&mut self, image: RgbImage) {
        self.background = Some(image);
    }

    /// Whether the window is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }
}

impl PoseVisualizer for OverlayVisualizer {
    fn draw(&mut self, poses: &[HumanPose2D], min_confidence: f32) -> Result<()> {
        let Some(mut image) = self.background.take() else {
            return Err(PipelineError::VisualizerError(
                "no background frame set".to_string(),
            ));
        };

        draw_poses(&mut image, poses, min_confidence);
        self.viewer.update(&image)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::BodyPart;

    fn two_part_pose(confidence: f32) -> HumanPose2D {
        // nose and left eye; connected in the skeleton table
        HumanPose2D::new(vec![
            BodyPart::new(0, 10.0, 10.0, confidence),
            BodyPart::new(1, 20.0, 10.0, confidence),
        ])
    }

    #[test]
    fn test_draw_poses_marks_pixels() {
        let mut image = RgbImage::new(64, 64);
        draw_poses(&mut image, &[two_part_pose(0.9)], 0.5);

        let touched = image.pixels().filter(|p| p.0 != [0, 0, 0]).count();
        assert!(touched > 0);
    }

    #[test]
    fn test_draw_poses_respects_cutoff() {
        let mut image = RgbImage::new(64, 64);
        draw_poses(&mut image, &[two_part_pose(0.2)], 0.5);

        let touched = image.pixels().filter(|p| p.0 != [0, 0, 0]).count();
        assert_eq!(touched, 0);
    }
}
