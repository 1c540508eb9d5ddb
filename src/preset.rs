//! One named preset on disk: the five control-state fields, pretty-printed
//! JSON with camelCase keys, written atomically. Load failures are reported,
//! never fatal.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::palette::{find_charset, find_palette};
use crate::state::{ControlState, ZOOM_MIN};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Preset {
    pub(crate) speed: f64,
    pub(crate) zoom_x: f64,
    pub(crate) zoom_y: f64,
    pub(crate) palette: String,
    pub(crate) charset: String,
}

impl Preset {
    pub(crate) fn snapshot(state: &ControlState) -> Self {
        Self {
            speed: state.speed,
            zoom_x: state.zoom_x,
            zoom_y: state.zoom_y,
            palette: state.palette().name.to_string(),
            charset: state.charset().name.to_string(),
        }
    }

    /// Applies the preset to `state`. Numeric fields are clamped to their
    /// usual floors; a palette or charset name that no longer exists keeps
    /// the current selection and comes back as a warning.
    pub(crate) fn apply(&self, state: &mut ControlState) -> Option<String> {
        state.speed = self.speed.max(0.0);
        state.zoom_x = self.zoom_x.max(ZOOM_MIN);
        state.zoom_y = self.zoom_y.max(ZOOM_MIN);

        let mut unknown = Vec::new();
        match find_palette(&self.palette) {
            Some(i) => state.palette = i,
            None => unknown.push(format!("palette \"{}\"", self.palette)),
        }
        match find_charset(&self.charset) {
            Some(i) => state.charset = i,
            None => unknown.push(format!("charset \"{}\"", self.charset)),
        }

        if unknown.is_empty() {
            None
        } else {
            Some(format!("unknown {}, kept current", unknown.join(" and ")))
        }
    }
}

pub(crate) fn preset_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "noisefield", "Noisefield")
        .context("could not resolve project directories")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok();
    Ok(dir.join("preset.json"))
}

pub(crate) fn save(path: &Path, preset: &Preset) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(preset)?;
    fs::write(&tmp, data)?;
    atomic_rename(&tmp, path)?;
    Ok(())
}

pub(crate) fn load(path: &Path) -> Result<Preset> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let preset = serde_json::from_str(&s).context("preset file is malformed")?;
    Ok(preset)
}

fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    // Best-effort atomic replace on the same filesystem.
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)?;
    Ok(())
}
