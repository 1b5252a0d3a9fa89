// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::pose::NUM_KEYPOINTS;

/// Skeleton structure as pairs of body part ids.
/// Defines which keypoints connect to form the pose skeleton.
pub const SKELETON: [[usize; 2]; 19] = [
    // face
    [1, 2],  // left eye to right eye
    [0, 1],  // nose to left eye
    [0, 2],  // nose to right eye
    [1, 3],  // left eye to left ear
    [2, 4],  // right eye to right ear
    [3, 5],  // left ear to left shoulder
    [4, 6],  // right ear to right shoulder
    // arms
    [5, 6],  // left shoulder to right shoulder
    [5, 7],  // left shoulder to left elbow
    [6, 8],  // right shoulder to right elbow
    [7, 9],  // left elbow to left wrist
    [8, 10], // right elbow to right wrist
    // torso
    [5, 11], // left shoulder to left hip
    [6, 12], // right shoulder to right hip
    [11, 12], // left hip to right hip
    // legs
    [11, 13], // left hip to left knee
    [13, 15], // left knee to left ankle
    [12, 14], // right hip to right knee
    [14, 16], // right knee to right ankle
];

/// Limb color indices mapping to the pose palette.
/// face=green, arms=blue, legs=orange
pub const LIMB_COLOR_INDICES: [usize; 19] = [
    16, 16, 16, 16, 16, 16, 16, 9, 9, 9, 9, 9, 7, 7, 7, 0, 0, 0, 0,
];

/// Keypoint color indices mapping to the pose palette.
/// face=green, arms=blue, legs=orange
pub const KPT_COLOR_INDICES: [usize; NUM_KEYPOINTS] =
    [16, 16, 16, 16, 16, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_indices_in_range() {
        for [a, b] in SKELETON {
            assert!(a < NUM_KEYPOINTS);
            assert!(b < NUM_KEYPOINTS);
        }
        assert_eq!(LIMB_COLOR_INDICES.len(), SKELETON.len());
    }
}
