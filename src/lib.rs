//! HeroMaker pose core
//!
//! Maps MediaPipe Pose landmarks onto a humanoid rig's joints and bone
//! directions, and stores hand-made poses as per-bone Euler-angle presets.
//! Builds natively and as a wasm module for the browser viewer.

pub mod bone;
pub mod error;
pub mod landmark;
pub mod math;
pub mod preset;
mod preset_rules;
pub mod retarget;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod bindings;
        pub use bindings::init;
    } else {
        pub mod store;
        pub use store::{PresetStore, DEFAULT_PRESET_DIR};
    }
}

pub use bone::{BoneDef, BoneDirections, BoneId, JointId, JointPositions, BONE_TABLE};
pub use error::{PoseError, Result};
pub use glam::Vec3;
pub use landmark::{landmarks_from_flat, Landmark, LandmarkId, LANDMARK_COUNT};
pub use math::{Point3, NORMALIZE_EPSILON};
pub use preset::{EulerAngles, PosePreset};
pub use preset_rules::{MAX_ABS_DEGREES, MAX_PRESET_NAME_LEN};
pub use retarget::{
    bone_directions, joint_positions, joint_positions_with, map_flat_landmarks, map_landmarks,
    map_landmarks_with, MappingParams, SkeletonMapping,
};

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;
    wasm_bindgen_test_configure!(run_in_browser);
}
