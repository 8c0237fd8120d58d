//! Build script for bundled pose preset validation
//!
//! Runs at compile time and checks every preset under `presets/` against the
//! same rules the preset store enforces at runtime.

// Include the shared preset rules
#[path = "src/preset_rules.rs"]
mod preset_rules;

use preset_rules::{check_angles, check_preset_name, AngleFields, PRESET_EXTENSION};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Euler angles from JSON, object form only (same reader as the runtime)
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Angles(#[serde(deserialize_with = "AngleFields::deserialize_object")] AngleFields);

/// Validate a preset file, returning the number of bones it sets
fn validate_preset_file(path: &Path) -> Result<usize, String> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("{}: file name is not UTF-8", path.display()))?;
    check_preset_name(name).map_err(|e| format!("{}: {}", path.display(), e))?;

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let preset: BTreeMap<String, Angles> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    let errors: Vec<String> = preset
        .iter()
        .filter_map(|(bone, Angles(a))| check_angles(bone, a.x, a.y, a.z).err())
        .map(|e| format!("  {}", e))
        .collect();

    if errors.is_empty() {
        Ok(preset.len())
    } else {
        Err(format!(
            "Preset '{}' has invalid angles:\n{}",
            name,
            errors.join("\n")
        ))
    }
}

fn main() {
    let preset_dir = Path::new("presets");

    // Rerun if shared rules change
    println!("cargo:rerun-if-changed=src/preset_rules.rs");

    if !preset_dir.exists() {
        println!("cargo:warning=Preset directory not found, skipping validation");
        return;
    }

    let mut has_errors = false;

    if let Ok(entries) = fs::read_dir(preset_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == PRESET_EXTENSION) {
                println!("cargo:rerun-if-changed={}", path.display());

                match validate_preset_file(&path) {
                    Ok(bones) => {
                        println!("cargo:warning=✓ {} validated ({} bones)", path.display(), bones)
                    }
                    Err(e) => {
                        println!("cargo:warning=VALIDATION ERROR: {}", e);
                        has_errors = true;
                    }
                }
            }
        }
    }

    if has_errors {
        panic!("Preset validation failed! Fix the bundled preset files.");
    }

    println!("cargo:rerun-if-changed={}", preset_dir.display());
}
