//! MediaPipe Pose landmarks → humanoid rig joints and bone directions.
//!
//! Pure functions: every call builds fresh output from its own input, so the
//! mapping can run from any number of call sites without coordination.

use crate::bone::{BoneDirections, BoneId, JointId, JointPositions};
use crate::error::Result;
use crate::landmark::{ensure_landmark_count, landmarks_from_flat, Landmark, LandmarkId};
use crate::math::{lerp, midpoint, normalize, sub};
use glam::Vec3;
use serde::Serialize;

/// Interpolation ratios for the joints that have no landmark of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingParams {
    /// Spine sits this far from hips toward chest.
    pub spine_ratio: f32,
    /// Neck sits this far from chest toward nose.
    pub neck_ratio: f32,
}

impl MappingParams {
    pub const DEFAULT_SPINE_RATIO: f32 = 0.33;
    pub const DEFAULT_NECK_RATIO: f32 = 0.3;
}

impl Default for MappingParams {
    fn default() -> Self {
        Self {
            spine_ratio: Self::DEFAULT_SPINE_RATIO,
            neck_ratio: Self::DEFAULT_NECK_RATIO,
        }
    }
}

/// Joint positions together with the bone directions derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkeletonMapping {
    pub positions: JointPositions,
    pub directions: BoneDirections,
}

/// Derive all rig joint positions from a pose result (default ratios).
pub fn joint_positions(landmarks: &[Landmark]) -> Result<JointPositions> {
    joint_positions_with(landmarks, &MappingParams::default())
}

/// Derive all rig joint positions from a pose result.
///
/// Fails only when fewer than 33 landmarks are supplied. Coordinates are not
/// range- or NaN-checked.
pub fn joint_positions_with(
    landmarks: &[Landmark],
    params: &MappingParams,
) -> Result<JointPositions> {
    ensure_landmark_count(landmarks)?;

    let at = |id: LandmarkId| Vec3::from(landmarks[id.index()]);

    let nose = at(LandmarkId::Nose);
    let left_shoulder = at(LandmarkId::LeftShoulder);
    let right_shoulder = at(LandmarkId::RightShoulder);
    let left_hip = at(LandmarkId::LeftHip);
    let right_hip = at(LandmarkId::RightHip);

    let hips = midpoint(left_hip, right_hip);
    let chest = midpoint(left_shoulder, right_shoulder);
    let spine = lerp(hips, chest, params.spine_ratio);
    let neck = lerp(chest, nose, params.neck_ratio);

    let positions = JointPositions::new()
        .with(JointId::Hips, hips)
        .with(JointId::Spine, spine)
        .with(JointId::Chest, chest)
        .with(JointId::Neck, neck)
        .with(JointId::Head, nose)
        // Shoulder and upper arm share the shoulder landmark
        .with(JointId::LeftShoulder, left_shoulder)
        .with(JointId::LeftUpperArm, left_shoulder)
        .with(JointId::LeftLowerArm, at(LandmarkId::LeftElbow))
        .with(JointId::LeftHand, at(LandmarkId::LeftWrist))
        .with(JointId::RightShoulder, right_shoulder)
        .with(JointId::RightUpperArm, right_shoulder)
        .with(JointId::RightLowerArm, at(LandmarkId::RightElbow))
        .with(JointId::RightHand, at(LandmarkId::RightWrist))
        .with(JointId::LeftUpperLeg, left_hip)
        .with(JointId::LeftLowerLeg, at(LandmarkId::LeftKnee))
        .with(JointId::LeftFoot, at(LandmarkId::LeftAnkle))
        .with(JointId::LeftToe, at(LandmarkId::LeftFootIndex))
        .with(JointId::RightUpperLeg, right_hip)
        .with(JointId::RightLowerLeg, at(LandmarkId::RightKnee))
        .with(JointId::RightFoot, at(LandmarkId::RightAnkle))
        .with(JointId::RightToe, at(LandmarkId::RightFootIndex));

    Ok(positions)
}

/// Direction of every bone whose two endpoints are present.
///
/// Bones with a missing endpoint are left out rather than reported.
pub fn bone_directions(positions: &JointPositions) -> BoneDirections {
    BoneId::ALL
        .into_iter()
        .filter_map(|bone| {
            let def = bone.def();
            let from = positions.get(def.from)?;
            let to = positions.get(def.to)?;
            Some((bone, normalize(sub(to, from))))
        })
        .collect()
}

/// Map a pose result onto the rig (default ratios).
pub fn map_landmarks(landmarks: &[Landmark]) -> Result<SkeletonMapping> {
    map_landmarks_with(landmarks, &MappingParams::default())
}

pub fn map_landmarks_with(
    landmarks: &[Landmark],
    params: &MappingParams,
) -> Result<SkeletonMapping> {
    let positions = joint_positions_with(landmarks, params)?;
    let directions = bone_directions(&positions);
    log::debug!(
        "Mapped {} landmarks to {} joints, {} bones",
        landmarks.len(),
        positions.len(),
        directions.len()
    );
    Ok(SkeletonMapping {
        positions,
        directions,
    })
}

/// Map a flat `[x0, y0, z0, x1, ...]` buffer, as handed over from a typed array.
pub fn map_flat_landmarks(coords: &[f32]) -> Result<SkeletonMapping> {
    map_landmarks(landmarks_from_flat(coords)?)
}
