use static_assertions::const_assert;

/// Anatomical reference point on the target humanoid rig.
/// Names follow the rig's own bone naming, so they can be matched against a
/// loaded model's bone names directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum JointId {
    // Torso
    Hips = 0,
    Spine = 1,
    Chest = 2,
    Neck = 3,
    Head = 4,

    // Left arm
    LeftShoulder = 5,
    LeftUpperArm = 6,
    LeftLowerArm = 7,
    LeftHand = 8,

    // Right arm
    RightShoulder = 9,
    RightUpperArm = 10,
    RightLowerArm = 11,
    RightHand = 12,

    // Left leg
    LeftUpperLeg = 13,
    LeftLowerLeg = 14,
    LeftFoot = 15,
    LeftToe = 16,

    // Right leg
    RightUpperLeg = 17,
    RightLowerLeg = 18,
    RightFoot = 19,
    RightToe = 20,
}

impl JointId {
    pub const COUNT: usize = 21;

    pub const ALL: [JointId; Self::COUNT] = [
        JointId::Hips,
        JointId::Spine,
        JointId::Chest,
        JointId::Neck,
        JointId::Head,
        JointId::LeftShoulder,
        JointId::LeftUpperArm,
        JointId::LeftLowerArm,
        JointId::LeftHand,
        JointId::RightShoulder,
        JointId::RightUpperArm,
        JointId::RightLowerArm,
        JointId::RightHand,
        JointId::LeftUpperLeg,
        JointId::LeftLowerLeg,
        JointId::LeftFoot,
        JointId::LeftToe,
        JointId::RightUpperLeg,
        JointId::RightLowerLeg,
        JointId::RightFoot,
        JointId::RightToe,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            JointId::Hips => "Hips",
            JointId::Spine => "Spine",
            JointId::Chest => "Chest",
            JointId::Neck => "Neck",
            JointId::Head => "Head",
            JointId::LeftShoulder => "LeftShoulder",
            JointId::LeftUpperArm => "LeftUpperArm",
            JointId::LeftLowerArm => "LeftLowerArm",
            JointId::LeftHand => "LeftHand",
            JointId::RightShoulder => "RightShoulder",
            JointId::RightUpperArm => "RightUpperArm",
            JointId::RightLowerArm => "RightLowerArm",
            JointId::RightHand => "RightHand",
            JointId::LeftUpperLeg => "LeftUpperLeg",
            JointId::LeftLowerLeg => "LeftLowerLeg",
            JointId::LeftFoot => "LeftFoot",
            JointId::LeftToe => "LeftToe",
            JointId::RightUpperLeg => "RightUpperLeg",
            JointId::RightLowerLeg => "RightLowerLeg",
            JointId::RightFoot => "RightFoot",
            JointId::RightToe => "RightToe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|joint| joint.name() == name)
    }
}

/// Segment of the rig that gets a direction.
///
/// A bone is named after its *origin* joint: `Hips` is the Hips→Spine
/// segment, `Spine` is Spine→Chest, and so on. See [`BONE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BoneId {
    Hips = 0,
    Spine = 1,
    Chest = 2,
    Neck = 3,

    LeftShoulder = 4,
    LeftUpperArm = 5,
    LeftLowerArm = 6,

    RightShoulder = 7,
    RightUpperArm = 8,
    RightLowerArm = 9,

    LeftUpperLeg = 10,
    LeftLowerLeg = 11,
    LeftFoot = 12,

    RightUpperLeg = 13,
    RightLowerLeg = 14,
    RightFoot = 15,
}

impl BoneId {
    pub const COUNT: usize = 16;

    pub const ALL: [BoneId; Self::COUNT] = [
        BoneId::Hips,
        BoneId::Spine,
        BoneId::Chest,
        BoneId::Neck,
        BoneId::LeftShoulder,
        BoneId::LeftUpperArm,
        BoneId::LeftLowerArm,
        BoneId::RightShoulder,
        BoneId::RightUpperArm,
        BoneId::RightLowerArm,
        BoneId::LeftUpperLeg,
        BoneId::LeftLowerLeg,
        BoneId::LeftFoot,
        BoneId::RightUpperLeg,
        BoneId::RightLowerLeg,
        BoneId::RightFoot,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Joint sharing this bone's name
    pub const fn joint(self) -> JointId {
        match self {
            BoneId::Hips => JointId::Hips,
            BoneId::Spine => JointId::Spine,
            BoneId::Chest => JointId::Chest,
            BoneId::Neck => JointId::Neck,
            BoneId::LeftShoulder => JointId::LeftShoulder,
            BoneId::LeftUpperArm => JointId::LeftUpperArm,
            BoneId::LeftLowerArm => JointId::LeftLowerArm,
            BoneId::RightShoulder => JointId::RightShoulder,
            BoneId::RightUpperArm => JointId::RightUpperArm,
            BoneId::RightLowerArm => JointId::RightLowerArm,
            BoneId::LeftUpperLeg => JointId::LeftUpperLeg,
            BoneId::LeftLowerLeg => JointId::LeftLowerLeg,
            BoneId::LeftFoot => JointId::LeftFoot,
            BoneId::RightUpperLeg => JointId::RightUpperLeg,
            BoneId::RightLowerLeg => JointId::RightLowerLeg,
            BoneId::RightFoot => JointId::RightFoot,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.joint().name()
    }

    #[inline]
    pub const fn def(self) -> BoneDef {
        BONE_TABLE[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bone| bone.name() == name)
    }
}

/// Endpoints of a bone segment; direction runs `from` → `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoneDef {
    pub from: JointId,
    pub to: JointId,
}

/// Bone segments, indexed by `BoneId`.
///
/// Shoulders reach to the elbow rather than the upper arm: on the target rig
/// the shoulder and upper arm joints coincide, so Shoulder→UpperArm would be
/// a zero-length segment.
pub const BONE_TABLE: [BoneDef; BoneId::COUNT] = [
    // Spine chain
    BoneDef { from: JointId::Hips, to: JointId::Spine },
    BoneDef { from: JointId::Spine, to: JointId::Chest },
    BoneDef { from: JointId::Chest, to: JointId::Neck },
    BoneDef { from: JointId::Neck, to: JointId::Head },
    // Left arm
    BoneDef { from: JointId::LeftShoulder, to: JointId::LeftLowerArm },
    BoneDef { from: JointId::LeftUpperArm, to: JointId::LeftLowerArm },
    BoneDef { from: JointId::LeftLowerArm, to: JointId::LeftHand },
    // Right arm
    BoneDef { from: JointId::RightShoulder, to: JointId::RightLowerArm },
    BoneDef { from: JointId::RightUpperArm, to: JointId::RightLowerArm },
    BoneDef { from: JointId::RightLowerArm, to: JointId::RightHand },
    // Left leg
    BoneDef { from: JointId::LeftUpperLeg, to: JointId::LeftLowerLeg },
    BoneDef { from: JointId::LeftLowerLeg, to: JointId::LeftFoot },
    BoneDef { from: JointId::LeftFoot, to: JointId::LeftToe },
    // Right leg
    BoneDef { from: JointId::RightUpperLeg, to: JointId::RightLowerLeg },
    BoneDef { from: JointId::RightLowerLeg, to: JointId::RightFoot },
    BoneDef { from: JointId::RightFoot, to: JointId::RightToe },
];

const fn bones_start_at_their_own_joint() -> bool {
    let mut i = 0;
    while i < BoneId::COUNT {
        if BONE_TABLE[i].from as u8 != BoneId::ALL[i].joint() as u8 {
            return false;
        }
        if BoneId::ALL[i] as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

const_assert!(bones_start_at_their_own_joint());
const_assert!(JointId::RightToe as usize + 1 == JointId::COUNT);
