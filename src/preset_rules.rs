//! Pose preset validation rules shared by build.rs and runtime code.
//!
//! This module is included by both the build script (to check the bundled
//! presets under `presets/`) and the preset store, so a file that passes the
//! build is guaranteed to load at runtime.

// Some items are only used by build.rs
#![allow(dead_code)]

use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Longest accepted preset name, in characters.
pub const MAX_PRESET_NAME_LEN: usize = 64;

/// Largest accepted magnitude for a single Euler angle, in degrees.
pub const MAX_ABS_DEGREES: f32 = 360.0;

/// File extension of stored presets.
pub const PRESET_EXTENSION: &str = "json";

/// Check a preset name before it is used as a file stem.
///
/// The name is expected to be trimmed already.
pub fn check_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    if name.chars().count() > MAX_PRESET_NAME_LEN {
        return Err(format!("name is longer than {} characters", MAX_PRESET_NAME_LEN));
    }
    if name.starts_with('.') {
        return Err("name starts with '.'".to_string());
    }
    if let Some(c) = name
        .chars()
        .find(|c| matches!(c, '/' | '\\') || c.is_control())
    {
        return Err(format!("name contains {:?}", c));
    }
    Ok(())
}

/// Check one bone's Euler angles.
pub fn check_angles(bone: &str, x: f32, y: f32, z: f32) -> Result<(), String> {
    if bone.trim().is_empty() {
        return Err("empty bone name".to_string());
    }
    for (axis, value) in [("x", x), ("y", y), ("z", z)] {
        if !value.is_finite() {
            return Err(format!("{}.{} is not finite", bone, axis));
        }
        if value.abs() > MAX_ABS_DEGREES {
            return Err(format!(
                "{}.{} = {:.1}° exceeds ±{}°",
                bone, axis, value, MAX_ABS_DEGREES
            ));
        }
    }
    Ok(())
}

/// One bone's `{x, y, z}` degrees as written in a preset. Missing axes are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct AngleFields {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl AngleFields {
    /// Read an angle object. Arrays and scalars are rejected, even though a
    /// derived struct would accept `[x, y, z]`.
    pub fn deserialize_object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectOnly;

        impl<'de> Visitor<'de> for ObjectOnly {
            type Value = AngleFields;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of x, y, z angles in degrees")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<AngleFields, A::Error> {
                AngleFields::deserialize(MapAccessDeserializer::new(map))
            }
        }

        deserializer.deserialize_map(ObjectOnly)
    }
}
