//! JavaScript-facing exports. Thin wrappers: convert, call the pure Rust
//! function, convert back.

use crate::bone::{BoneId, JointId, JointPositions};
use crate::landmark::{Landmark, LandmarkId};
use crate::preset::PosePreset;
use crate::retarget;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Serialize maps as plain objects, not `Map`, so the viewer can index them
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {}", e)))
}

fn js_error(e: crate::PoseError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn landmarks_from_js(landmarks: JsValue) -> Result<Vec<Landmark>, JsValue> {
    serde_wasm_bindgen::from_value(landmarks)
        .map_err(|e| JsValue::from_str(&format!("Failed to read landmarks: {}", e)))
}

/// Install the panic hook and console logger. Call once at startup.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heromaker-pose ready");
}

/// Map an array of `{x, y, z}` landmarks to `{ positions, directions }`
#[wasm_bindgen(js_name = map_landmarks)]
pub fn map_landmarks_js(landmarks: JsValue) -> Result<JsValue, JsValue> {
    let landmarks = landmarks_from_js(landmarks)?;
    let mapping = retarget::map_landmarks(&landmarks).map_err(js_error)?;
    to_js(&mapping)
}

/// Same as `map_landmarks`, from a `Float32Array` of packed `x, y, z` triples
#[wasm_bindgen(js_name = map_landmarks_flat)]
pub fn map_landmarks_flat_js(coords: &[f32]) -> Result<JsValue, JsValue> {
    let mapping = retarget::map_flat_landmarks(coords).map_err(js_error)?;
    to_js(&mapping)
}

#[wasm_bindgen(js_name = joint_positions)]
pub fn joint_positions_js(landmarks: JsValue) -> Result<JsValue, JsValue> {
    let landmarks = landmarks_from_js(landmarks)?;
    let positions = retarget::joint_positions(&landmarks).map_err(js_error)?;
    to_js(&positions)
}

/// Directions for a (possibly partial) `{ JointName: {x, y, z} }` object
#[wasm_bindgen(js_name = bone_directions)]
pub fn bone_directions_js(positions: JsValue) -> Result<JsValue, JsValue> {
    let positions: JointPositions = serde_wasm_bindgen::from_value(positions)
        .map_err(|e| JsValue::from_str(&format!("Failed to read joint positions: {}", e)))?;
    to_js(&retarget::bone_directions(&positions))
}

/// `{ NOSE: 0, LEFT_SHOULDER: 11, ... }`
#[wasm_bindgen]
pub fn landmark_index_table() -> Result<JsValue, JsValue> {
    let table: BTreeMap<&str, usize> = LandmarkId::ALL
        .into_iter()
        .map(|id| (id.name(), id.index()))
        .collect();
    to_js(&table)
}

#[wasm_bindgen]
pub fn joint_names() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = JointId::ALL.into_iter().map(JointId::name).collect();
    to_js(&names)
}

#[derive(Serialize)]
struct BonePairJson {
    bone: &'static str,
    from: &'static str,
    to: &'static str,
}

/// `[{ bone, from, to }, ...]` in table order
#[wasm_bindgen]
pub fn bone_names() -> Result<JsValue, JsValue> {
    let pairs: Vec<BonePairJson> = BoneId::ALL
        .into_iter()
        .map(|bone| BonePairJson {
            bone: bone.name(),
            from: bone.def().from.name(),
            to: bone.def().to.name(),
        })
        .collect();
    to_js(&pairs)
}

/// Validate a preset JSON document and return it in canonical form
/// (sorted bones, pretty-printed). Used before POSTing a preset.
#[wasm_bindgen]
pub fn normalize_preset_json(json: &str) -> Result<String, JsValue> {
    let preset = PosePreset::from_json(json).map_err(js_error)?;
    preset.to_json_string().map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::LANDMARK_COUNT;
    use serde_json::Value;
    use wasm_bindgen_test::*;

    /// Landmark as the pose tracker hands it over, with its extra score
    #[derive(Serialize)]
    struct TrackedLandmark {
        x: f32,
        y: f32,
        z: f32,
        visibility: f32,
    }

    fn from_js(value: JsValue) -> Value {
        serde_wasm_bindgen::from_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_flat_mapping_reports_short_input() {
        let coords = [0.0f32; 30];
        let err = map_landmarks_flat_js(&coords).unwrap_err();
        let msg = err.as_string().unwrap();
        assert!(msg.contains("at least 33"), "{}", msg);
    }

    #[wasm_bindgen_test]
    fn test_flat_mapping_succeeds() {
        let coords = vec![0.0f32; LANDMARK_COUNT * 3];
        assert!(map_landmarks_flat_js(&coords).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_normalize_preset_json() {
        let out = normalize_preset_json(r#"{"Spine":{"x":5},"Hips":{"y":1}}"#).unwrap();
        assert!(out.find("Hips").unwrap() < out.find("Spine").unwrap());
        assert!(normalize_preset_json(r#"{"Spine":{"x":1000}}"#).is_err());
    }

    #[wasm_bindgen_test]
    fn test_mapping_reads_tracker_objects() {
        let mut landmarks: Vec<TrackedLandmark> = (0..LANDMARK_COUNT)
            .map(|i| TrackedLandmark {
                x: i as f32 * 0.01,
                y: 1.0,
                z: 0.0,
                visibility: 0.9,
            })
            .collect();
        landmarks[LandmarkId::Nose.index()] = TrackedLandmark {
            x: 0.25,
            y: 1.5,
            z: -0.5,
            visibility: 0.2,
        };

        let out = from_js(map_landmarks_js(to_js(&landmarks).unwrap()).unwrap());
        let positions = out["positions"].as_object().unwrap();
        assert_eq!(positions.len(), JointId::COUNT);
        assert_eq!(out["positions"]["Head"]["x"], 0.25);
        assert_eq!(out["positions"]["Head"]["y"], 1.5);
        assert_eq!(out["positions"]["Head"]["z"], -0.5);
        assert!(out["directions"].is_object());
    }

    #[wasm_bindgen_test]
    fn test_directions_from_partial_positions() {
        let partial = serde_json::json!({
            "Hips": { "x": 0.0, "y": 1.0, "z": 0.0 },
            "Spine": { "x": 0.0, "y": 3.0, "z": 0.0 },
            "Tail": { "x": 9.0, "y": 9.0, "z": 9.0 },
        });

        let out = from_js(bone_directions_js(to_js(&partial).unwrap()).unwrap());
        let directions = out.as_object().unwrap();
        assert_eq!(directions.keys().collect::<Vec<_>>(), ["Hips"]);
        assert_eq!(out["Hips"]["y"], 1.0);
        assert_eq!(out["Hips"]["x"], 0.0);
    }
}
