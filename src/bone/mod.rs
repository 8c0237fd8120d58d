pub mod id;
pub mod pose;

pub use id::*;
pub use pose::*;

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec3;
    use wasm_bindgen_test::*;

    #[test]
    #[wasm_bindgen_test]
    fn test_joint_names_round_trip() {
        for joint in JointId::ALL {
            assert_eq!(JointId::from_name(joint.name()), Some(joint));
        }
        assert_eq!(JointId::from_name("LeftForearm"), None);
        assert_eq!(JointId::ALL.len(), JointId::COUNT);
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_bone_names_are_joint_names() {
        for bone in BoneId::ALL {
            assert_eq!(BoneId::from_name(bone.name()), Some(bone));
            assert_eq!(JointId::from_name(bone.name()), Some(bone.joint()));
        }
        // Head, hands and toes end chains and have no bone of their own
        for leaf in ["Head", "LeftHand", "RightHand", "LeftToe", "RightToe"] {
            assert_eq!(BoneId::from_name(leaf), None);
        }
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_bone_table_pairs() {
        assert_eq!(
            BoneId::Hips.def(),
            BoneDef {
                from: JointId::Hips,
                to: JointId::Spine
            }
        );
        assert_eq!(BoneId::Neck.def().to, JointId::Head);
        assert_eq!(BoneId::LeftShoulder.def().to, JointId::LeftLowerArm);
        assert_eq!(BoneId::RightUpperArm.def().to, JointId::RightLowerArm);
        assert_eq!(BoneId::LeftFoot.def().to, JointId::LeftToe);

        for bone in BoneId::ALL {
            let def = bone.def();
            assert_eq!(def.from, bone.joint());
            assert_ne!(def.from, def.to, "{:?} has identical endpoints", bone);
        }
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_joint_positions_functional_set() {
        let empty = JointPositions::new();
        assert!(empty.is_empty());

        let set = empty
            .with(JointId::Spine, Vec3::Y)
            .with(JointId::Hips, Vec3::ZERO);

        assert!(empty.is_empty(), "with() must not touch the original");
        assert_eq!(set.len(), 2);
        assert!(set.contains(JointId::Hips));
        assert!(!set.contains(JointId::Chest));

        // Iteration follows joint order, not insertion order
        let order: Vec<JointId> = set.iter().map(|(j, _)| j).collect();
        assert_eq!(order, vec![JointId::Hips, JointId::Spine]);
    }

    #[test]
    fn test_joint_positions_json() {
        let set: JointPositions = [(JointId::Head, Vec3::new(0.0, 1.7, 0.0))]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"Head":{"x":0.0,"y":1.7,"z":0.0}}"#);

        let parsed: JointPositions = serde_json::from_str(
            r#"{"Hips":{"x":0,"y":1,"z":0},"Tail":{"x":9,"y":9,"z":9}}"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(JointId::Hips), Some(Vec3::Y));
    }

    #[test]
    fn test_bone_directions_json_uses_bone_names() {
        let dirs = BoneDirections::new()
            .with(BoneId::Spine, Vec3::Y)
            .with(BoneId::Hips, Vec3::Y);

        let json = serde_json::to_string(&dirs).unwrap();
        assert_eq!(
            json,
            r#"{"Hips":{"x":0.0,"y":1.0,"z":0.0},"Spine":{"x":0.0,"y":1.0,"z":0.0}}"#
        );
    }
}
