use super::id::{BoneId, JointId};
use crate::math::Point3;
use glam::Vec3;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// World positions of rig joints.
///
/// Stored as a fixed array indexed by `JointId`, so lookups never hash. A set
/// produced by the mapper always has every joint; hand-built sets may be
/// partial.
///
/// Serializes as a `{ "Hips": {"x":..,"y":..,"z":..}, ... }` object in joint
/// order. Unknown names are skipped when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointPositions {
    positions: [Option<Vec3>; JointId::COUNT],
}

impl JointPositions {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `joint` placed at `position` (Functional Set)
    pub fn with(self, joint: JointId, position: Vec3) -> Self {
        let mut new_set = self;
        new_set.positions[joint.index()] = Some(position);
        new_set
    }

    #[inline]
    pub fn get(&self, joint: JointId) -> Option<Vec3> {
        self.positions[joint.index()]
    }

    #[inline]
    pub fn contains(&self, joint: JointId) -> bool {
        self.positions[joint.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Option::is_none)
    }

    /// Present joints in `JointId` order
    pub fn iter(&self) -> impl Iterator<Item = (JointId, Vec3)> + '_ {
        JointId::ALL
            .into_iter()
            .filter_map(|joint| self.get(joint).map(|p| (joint, p)))
    }
}

impl FromIterator<(JointId, Vec3)> for JointPositions {
    fn from_iter<I: IntoIterator<Item = (JointId, Vec3)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (joint, p)| set.with(joint, p))
    }
}

impl Serialize for JointPositions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.iter()
                .map(|(joint, p)| (joint.name(), Point3::from(p))),
        )
    }
}

impl<'de> Deserialize<'de> for JointPositions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Point3>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(name, p)| match JointId::from_name(&name) {
                Some(joint) => Some((joint, Vec3::from(p))),
                None => {
                    log::debug!("Ignoring unknown joint name: {}", name);
                    None
                }
            })
            .collect())
    }
}

/// Bone directions keyed by `BoneId`.
///
/// Entries are normally unit vectors. A bone whose endpoints coincide holds
/// the zero vector, and a bone with a missing endpoint is absent altogether,
/// so callers must not assume all 16 entries exist.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoneDirections {
    directions: [Option<Vec3>; BoneId::COUNT],
}

impl BoneDirections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `bone` pointing along `direction` (Functional Set)
    pub fn with(self, bone: BoneId, direction: Vec3) -> Self {
        let mut new_set = self;
        new_set.directions[bone.index()] = Some(direction);
        new_set
    }

    #[inline]
    pub fn get(&self, bone: BoneId) -> Option<Vec3> {
        self.directions[bone.index()]
    }

    #[inline]
    pub fn contains(&self, bone: BoneId) -> bool {
        self.directions[bone.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.directions.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.iter().all(Option::is_none)
    }

    /// Present bones in `BoneId` order
    pub fn iter(&self) -> impl Iterator<Item = (BoneId, Vec3)> + '_ {
        BoneId::ALL
            .into_iter()
            .filter_map(|bone| self.get(bone).map(|d| (bone, d)))
    }
}

impl FromIterator<(BoneId, Vec3)> for BoneDirections {
    fn from_iter<I: IntoIterator<Item = (BoneId, Vec3)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (bone, d)| set.with(bone, d))
    }
}

impl Serialize for BoneDirections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(bone, d)| (bone.name(), Point3::from(d))))
    }
}
