//! Scene and asset manifest files on disk (pretty-printed JSON).

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;

use invaders_core::constants::SCENE_FILE_VERSION;
use invaders_core::error::SceneError;
use invaders_core::records::SceneFile;

use crate::assets::AssetManifest;

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SceneError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| SceneError::io(dir, e))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| SceneError::json(path, e))?;
    fs::write(path, json).map_err(|e| SceneError::io(path, e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SceneError> {
    let json = fs::read_to_string(path).map_err(|e| SceneError::io(path, e))?;
    serde_json::from_str(&json).map_err(|e| SceneError::json(path, e))
}

pub fn save_scene(path: &Path, scene: &SceneFile) -> Result<(), SceneError> {
    write_json(path, scene)?;
    info!(
        "saved scene with {} entities to {}",
        scene.entities.len(),
        path.display()
    );
    Ok(())
}

/// Read a scene file, rejecting versions this build does not understand.
pub fn load_scene(path: &Path) -> Result<SceneFile, SceneError> {
    let scene: SceneFile = read_json(path)?;
    if scene.version != SCENE_FILE_VERSION {
        return Err(SceneError::UnsupportedVersion {
            found: scene.version,
            expected: SCENE_FILE_VERSION,
        });
    }
    info!(
        "loaded scene with {} entities from {}",
        scene.entities.len(),
        path.display()
    );
    Ok(scene)
}

pub fn save_manifest(path: &Path, manifest: &AssetManifest) -> Result<(), SceneError> {
    write_json(path, manifest)?;
    info!("saved asset manifest to {}", path.display());
    Ok(())
}

pub fn load_manifest(path: &Path) -> Result<AssetManifest, SceneError> {
    read_json(path)
}
