//! MediaPipe Pose landmark schema.
//!
//! The estimator emits 33 points per body. Only the 15 listed in
//! [`LandmarkId`] feed the skeleton; the rest (eyes, ears, mouth, fingers,
//! heels) are accepted and ignored.

use crate::error::{PoseError, Result};
use crate::math::Point3;
use static_assertions::assert_eq_size;

/// A single normalized landmark. Extra fields such as `visibility` are ignored
/// when deserializing.
pub type Landmark = Point3;

/// Number of landmarks in one MediaPipe Pose result.
pub const LANDMARK_COUNT: usize = 33;

// Flat `[x0, y0, z0, x1, ...]` buffers are reinterpreted in place.
assert_eq_size!(Landmark, [f32; 3]);

/// Landmarks consumed by the skeleton mapping, valued by their position in
/// the 33-point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LandmarkId {
    Nose = 0,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkId {
    pub const COUNT: usize = 15;

    pub const ALL: [LandmarkId; Self::COUNT] = [
        LandmarkId::Nose,
        LandmarkId::LeftShoulder,
        LandmarkId::RightShoulder,
        LandmarkId::LeftElbow,
        LandmarkId::RightElbow,
        LandmarkId::LeftWrist,
        LandmarkId::RightWrist,
        LandmarkId::LeftHip,
        LandmarkId::RightHip,
        LandmarkId::LeftKnee,
        LandmarkId::RightKnee,
        LandmarkId::LeftAnkle,
        LandmarkId::RightAnkle,
        LandmarkId::LeftFootIndex,
        LandmarkId::RightFootIndex,
    ];

    /// Position in the landmark sequence
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upstream constant name, e.g. `LEFT_FOOT_INDEX`
    pub const fn name(self) -> &'static str {
        match self {
            LandmarkId::Nose => "NOSE",
            LandmarkId::LeftShoulder => "LEFT_SHOULDER",
            LandmarkId::RightShoulder => "RIGHT_SHOULDER",
            LandmarkId::LeftElbow => "LEFT_ELBOW",
            LandmarkId::RightElbow => "RIGHT_ELBOW",
            LandmarkId::LeftWrist => "LEFT_WRIST",
            LandmarkId::RightWrist => "RIGHT_WRIST",
            LandmarkId::LeftHip => "LEFT_HIP",
            LandmarkId::RightHip => "RIGHT_HIP",
            LandmarkId::LeftKnee => "LEFT_KNEE",
            LandmarkId::RightKnee => "RIGHT_KNEE",
            LandmarkId::LeftAnkle => "LEFT_ANKLE",
            LandmarkId::RightAnkle => "RIGHT_ANKLE",
            LandmarkId::LeftFootIndex => "LEFT_FOOT_INDEX",
            LandmarkId::RightFootIndex => "RIGHT_FOOT_INDEX",
        }
    }
}

/// Fail unless `landmarks` holds a full pose result.
pub fn ensure_landmark_count(landmarks: &[Landmark]) -> Result<()> {
    if landmarks.len() < LANDMARK_COUNT {
        return Err(PoseError::InsufficientLandmarks {
            required: LANDMARK_COUNT,
            provided: landmarks.len(),
        });
    }
    Ok(())
}

/// View a flat coordinate buffer as landmarks without copying.
///
/// Only the triple structure is checked here; the count is checked by the
/// mapping itself.
pub fn landmarks_from_flat(coords: &[f32]) -> Result<&[Landmark]> {
    bytemuck::try_cast_slice(coords).map_err(|_| PoseError::MisalignedBuffer { len: coords.len() })
}
