// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose data model.
//!
//! A [`HumanPose2D`] is one detected person: an ordered collection of
//! [`BodyPart`] entries, one per keypoint. Poses are created fresh each frame
//! by the model runner, rescaled in place by the pipeline, and handed to the
//! visualizer in the same frame; nothing is kept across frames.

/// Number of keypoints per pose.
pub const NUM_KEYPOINTS: usize = 17;

/// Keypoint names, indexed by body part id.
pub const KEYPOINT_NAMES: [&str; NUM_KEYPOINTS] = [
    "nose",
    "left eye",
    "right eye",
    "left ear",
    "right ear",
    "left shoulder",
    "right shoulder",
    "left elbow",
    "right elbow",
    "left wrist",
    "right wrist",
    "left hip",
    "right hip",
    "left knee",
    "right knee",
    "left ankle",
    "right ankle",
];

/// A single labeled joint: body part id, 2D position, and confidence score.
///
/// Coordinates start in model-input pixel space as produced by the runner and
/// are rescaled to display space by the pipeline before drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    /// Body part id (index into [`KEYPOINT_NAMES`]).
    pub id: usize,
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
    /// Confidence score (0.0 to 1.0).
    pub confidence: f32,
}

impl BodyPart {
    /// Create a new body part.
    #[must_use]
    pub const fn new(id: usize, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            id,
            x,
            y,
            confidence,
        }
    }

    /// The keypoint name for this body part, or "unknown" for an out-of-range id.
    #[must_use]
    pub fn name(&self) -> &'static str {
        KEYPOINT_NAMES.get(self.id).copied().unwrap_or("unknown")
    }
}

/// One detected person: an ordered collection of body parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HumanPose2D {
    /// Body parts ordered by keypoint id.
    pub parts: Vec<BodyPart>,
}

impl HumanPose2D {
    /// Create a pose from its body parts.
    #[must_use]
    pub const fn new(parts: Vec<BodyPart>) -> Self {
        Self { parts }
    }

    /// Number of body parts in this pose.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check whether the pose has no body parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Mean confidence over all body parts (0.0 for an empty pose).
    #[must_use]
    pub fn mean_confidence(&self) -> f32 {
        if self.parts.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.parts.iter().map(|p| p.confidence).sum();
        sum / self.parts.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypoint_names_count() {
        assert_eq!(KEYPOINT_NAMES.len(), NUM_KEYPOINTS);
    }

    #[test]
    fn test_body_part_name() {
        assert_eq!(BodyPart::new(0, 0.0, 0.0, 1.0).name(), "nose");
        assert_eq!(BodyPart::new(16, 0.0, 0.0, 1.0).name(), "right ankle");
        assert_eq!(BodyPart::new(17, 0.0, 0.0, 1.0).name(), "unknown");
    }

    #[test]
    fn test_pose_mean_confidence() {
        let pose = HumanPose2D::new(vec![
            BodyPart::new(0, 1.0, 2.0, 0.8),
            BodyPart::new(1, 3.0, 4.0, 0.4),
        ]);
        assert_eq!(pose.len(), 2);
        assert!(!pose.is_empty());
        assert!((pose.mean_confidence() - 0.6).abs() < 1e-6);

        assert!((HumanPose2D::default().mean_confidence() - 0.0).abs() < f32::EPSILON);
    }
}
