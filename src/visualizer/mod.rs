// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization for decoded poses.
//!
//! The pipeline only knows the [`PoseVisualizer`] contract; concrete drawing
//! lives behind it. [`CollectingVisualizer`] records draw calls for tests and
//! headless runs. With the `visualize` feature enabled, [`OverlayVisualizer`]
//! draws skeleton overlays into a window.

use crate::error::Result;
use crate::pose::HumanPose2D;

/// Color definitions and palettes.
pub mod color;

/// Skeleton connection tables.
pub mod skeleton;

#[cfg(feature = "visualize")]
pub mod overlay;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::Color;

#[cfg(feature = "visualize")]
pub use overlay::OverlayVisualizer;

#[cfg(feature = "visualize")]
pub use viewer::Viewer;

/// Contract for the pose drawing collaborator.
pub trait PoseVisualizer {
    /// Draw the given poses, skipping body parts below the confidence cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn draw(&mut self, poses: &[HumanPose2D], min_confidence: f32) -> Result<()>;
}

/// A [`PoseVisualizer`] that records what it was asked to draw.
#[derive(Debug, Default)]
pub struct CollectingVisualizer {
    /// Poses and confidence cutoff from the most recent draw call.
    pub last: Option<(Vec<HumanPose2D>, f32)>,
    /// Total number of draw calls.
    pub draws: usize,
}

impl CollectingVisualizer {
    /// Create a new collecting visualizer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            draws: 0,
        }
    }
}

impl PoseVisualizer for CollectingVisualizer {
    fn draw(&mut self, poses: &[HumanPose2D], min_confidence: f32) -> Result<()> {
        self.last = Some((poses.to_vec(), min_confidence));
        self.draws += 1;
        Ok(())
    }
}

// Forwarding impl so a caller can keep a handle on an injected visualizer.
impl<T: PoseVisualizer> PoseVisualizer for std::rc::Rc<std::cell::RefCell<T>> {
    fn draw(&mut self, poses: &[HumanPose2D], min_confidence: f32) -> Result<()> {
        self.borrow_mut().draw(poses, min_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::BodyPart;

    #[test]
    fn test_collecting_visualizer_records_draws() {
        let mut vis = CollectingVisualizer::new();
        let poses = vec![HumanPose2D::new(vec![BodyPart::new(0, 1.0, 2.0, 0.9)])];

        vis.draw(&poses, 0.5).unwrap();
        vis.draw(&poses, 0.7).unwrap();

        assert_eq!(vis.draws, 2);
        let (recorded, cutoff) = vis.last.as_ref().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!((*cutoff - 0.7).abs() < f32::EPSILON);
    }
}
