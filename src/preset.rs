use crate::error::{PoseError, Result};
use crate::preset_rules::{check_angles, AngleFields};
use glam::Quat;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Euler angles in degrees, as shown on the viewer's rotation sliders.
///
/// Only the `{x, y, z}` object form is accepted; missing axes default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl<'de> Deserialize<'de> for EulerAngles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let AngleFields { x, y, z } = AngleFields::deserialize_object(deserializer)?;
        Ok(Self { x, y, z })
    }
}

impl EulerAngles {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert to quaternion (XYZ order)
    pub fn to_quat(&self) -> Quat {
        let [x, y, z] = self.to_radians();
        Quat::from_euler(glam::EulerRot::XYZ, x, y, z)
    }

    /// Convert from quaternion (XYZ order)
    pub fn from_quat(q: Quat) -> Self {
        let (x, y, z) = q.to_euler(glam::EulerRot::XYZ);
        Self {
            x: x.to_degrees(),
            y: y.to_degrees(),
            z: z.to_degrees(),
        }
    }

    /// Per-axis radians, for engines that take raw Euler rotations
    pub fn to_radians(&self) -> [f32; 3] {
        [self.x.to_radians(), self.y.to_radians(), self.z.to_radians()]
    }
}

/// Named per-bone rotations for a rigged model.
///
/// Keys are the model's own bone names, which need not match `JointId`. The
/// JSON form is a flat object of bone name → `{x, y, z}` degrees.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PosePreset {
    bones: BTreeMap<String, EulerAngles>,
}

impl PosePreset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new preset with `bone` set to `angles` (Functional Set)
    pub fn set(mut self, bone: impl Into<String>, angles: EulerAngles) -> Self {
        self.bones.insert(bone.into(), angles);
        self
    }

    pub fn get(&self, bone: &str) -> Option<EulerAngles> {
        self.bones.get(bone).copied()
    }

    /// Rotation for `bone`, or `None` if the preset leaves it untouched
    pub fn rotation(&self, bone: &str) -> Option<Quat> {
        self.get(bone).map(|angles| angles.to_quat())
    }

    pub fn remove(&mut self, bone: &str) -> Option<EulerAngles> {
        self.bones.remove(bone)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bones in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, EulerAngles)> + '_ {
        self.bones.iter().map(|(name, angles)| (name.as_str(), *angles))
    }

    /// Check every entry against the preset rules
    pub fn validate(&self) -> Result<()> {
        for (bone, angles) in self.iter() {
            check_angles(bone, angles.x, angles.y, angles.z).map_err(PoseError::InvalidPreset)?;
        }
        Ok(())
    }

    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let preset: PosePreset = serde_json::from_str(json)?;
        preset.validate()?;
        Ok(preset)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, EulerAngles)> for PosePreset {
    fn from_iter<I: IntoIterator<Item = (String, EulerAngles)>>(iter: I) -> Self {
        Self {
            bones: iter.into_iter().collect(),
        }
    }
}
