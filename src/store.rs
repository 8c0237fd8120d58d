//! File-backed pose preset storage.
//!
//! One pretty-printed JSON file per preset, named `<preset>.json`, inside a
//! single directory. This is the storage behind the viewer's
//! list/get/save/delete preset calls.

use crate::error::{PoseError, Result};
use crate::preset::PosePreset;
use crate::preset_rules::{check_preset_name, PRESET_EXTENSION};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory used when the host does not pick one.
pub const DEFAULT_PRESET_DIR: &str = "poses";

/// Pose presets stored as JSON files in one directory
#[derive(Debug, Clone)]
pub struct PresetStore {
    root: PathBuf,
}

impl PresetStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all stored presets, sorted.
    ///
    /// Only files whose stem is a valid, already-trimmed preset name are
    /// listed, so every listed name can be passed back to `load`.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != PRESET_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.trim() != stem || check_preset_name(stem).is_err() {
                log::debug!("Ignoring file with unusable preset name: {}", path.display());
                continue;
            }
            names.push(stem.to_string());
        }
        names.sort();
        Ok(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|path| path.is_file())
    }

    pub fn load(&self, name: &str) -> Result<PosePreset> {
        let path = self.path_for(name)?;
        let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PoseError::PresetNotFound(name.trim().to_string()),
            _ => PoseError::Io(e),
        })?;
        PosePreset::from_json(&contents)
    }

    /// Write `preset` under `name`, replacing any existing preset of that name
    pub fn save(&self, name: &str, preset: &PosePreset) -> Result<()> {
        let path = self.path_for(name)?;
        preset.validate()?;
        fs::write(&path, preset.to_json_string()?)?;
        log::info!("Saved pose preset '{}' ({} bones)", name.trim(), preset.len());
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PoseError::PresetNotFound(name.trim().to_string()),
            _ => PoseError::Io(e),
        })?;
        log::info!("Deleted pose preset '{}'", name.trim());
        Ok(())
    }

    /// Load every stored preset.
    ///
    /// A preset that fails to read or parse is skipped with a warning so one
    /// bad file does not hide the rest.
    pub fn load_all(&self) -> Result<BTreeMap<String, PosePreset>> {
        let mut presets = BTreeMap::new();
        for name in self.list()? {
            match self.load(&name) {
                Ok(preset) => {
                    presets.insert(name, preset);
                }
                Err(e) => log::warn!("Skipping pose preset '{}': {}", name, e),
            }
        }
        Ok(presets)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        check_preset_name(name).map_err(|reason| {
            log::debug!("Rejected preset name {:?}: {}", name, reason);
            PoseError::InvalidPresetName(name.to_string())
        })?;
        Ok(self.root.join(format!("{}.{}", name, PRESET_EXTENSION)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::EulerAngles;
    use tempfile::TempDir;

    /// Fresh store in a temp directory, removed when the guard drops
    fn temp_store() -> (TempDir, PresetStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = PresetStore::open(dir.path()).expect("Failed to open store");
        (dir, store)
    }

    fn wave() -> PosePreset {
        PosePreset::new()
            .set("RightUpperArm", EulerAngles::new(0.0, 0.0, 120.0))
            .set("RightLowerArm", EulerAngles::new(0.0, 30.0, 0.0))
    }

    #[test]
    fn test_store_lifecycle() {
        let (_dir, store) = temp_store();
        assert!(store.list().unwrap().is_empty());

        store.save("wave", &wave()).unwrap();
        store.save("a-pose", &PosePreset::new()).unwrap();

        assert_eq!(store.list().unwrap(), vec!["a-pose", "wave"]);
        assert!(store.contains("wave"));
        assert_eq!(store.load("wave").unwrap(), wave());

        store.delete("wave").unwrap();
        assert!(!store.contains("wave"));
        assert_eq!(store.list().unwrap(), vec!["a-pose"]);
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, store) = temp_store();
        store.save("pose", &wave()).unwrap();

        let replacement = PosePreset::new().set("Head", EulerAngles::new(0.0, 45.0, 0.0));
        store.save("pose", &replacement).unwrap();

        assert_eq!(store.load("pose").unwrap(), replacement);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_names_are_trimmed() {
        let (_dir, store) = temp_store();
        store.save("  idle  ", &wave()).unwrap();

        assert_eq!(store.list().unwrap(), vec!["idle"]);
        assert!(store.load("idle").is_ok());
    }

    #[test]
    fn test_missing_preset() {
        let (_dir, store) = temp_store();

        assert!(matches!(
            store.load("nope"),
            Err(PoseError::PresetNotFound(name)) if name == "nope"
        ));
        assert!(matches!(
            store.delete("nope"),
            Err(PoseError::PresetNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_unsafe_names() {
        let (_dir, store) = temp_store();
        for name in ["", "   ", "../escape", "a/b", "a\\b", ".hidden", "nul\0byte"] {
            assert!(
                matches!(
                    store.save(name, &wave()),
                    Err(PoseError::InvalidPresetName(_))
                ),
                "name {:?} should be rejected",
                name
            );
        }
        let long = "x".repeat(65);
        assert!(matches!(
            store.load(&long),
            Err(PoseError::InvalidPresetName(_))
        ));

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_invalid_preset() {
        let (_dir, store) = temp_store();
        let bad = PosePreset::new().set("Neck", EulerAngles::new(f32::INFINITY, 0.0, 0.0));

        assert!(matches!(
            store.save("bad", &bad),
            Err(PoseError::InvalidPreset(_))
        ));
        assert!(!store.contains("bad"));
    }

    #[test]
    fn test_bundled_presets_load() {
        let store = PresetStore::open(concat!(env!("CARGO_MANIFEST_DIR"), "/presets")).unwrap();
        let all = store.load_all().unwrap();

        assert_eq!(
            all.keys().map(String::as_str).collect::<Vec<_>>(),
            ["a_pose", "t_pose", "wave"]
        );
        let a_pose = &all["a_pose"];
        assert_eq!(a_pose.get("LeftUpperArm"), Some(EulerAngles::new(0.0, 0.0, -45.0)));
    }

    #[test]
    fn test_load_all_skips_broken_files() {
        let (_dir, store) = temp_store();
        store.save("wave", &wave()).unwrap();
        fs::write(store.root().join("broken.json"), "{ not json").unwrap();
        fs::write(store.root().join("notes.txt"), "ignored").unwrap();

        assert_eq!(store.list().unwrap(), vec!["broken", "wave"]);

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get("wave"), Some(&wave()));
    }

    #[test]
    fn test_list_skips_unloadable_names() {
        let (_dir, store) = temp_store();
        store.save("wave", &wave()).unwrap();
        fs::write(store.root().join(" idle.json"), "{}").unwrap();
        fs::write(store.root().join("idle .json"), "{}").unwrap();
        fs::write(store.root().join(".x.json"), "{}").unwrap();
        fs::write(store.root().join(format!("{}.json", "n".repeat(65))), "{}").unwrap();

        let names = store.list().unwrap();
        assert_eq!(names, vec!["wave"]);
        for name in &names {
            assert!(store.load(name).is_ok(), "listed name {:?} should load", name);
        }
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
