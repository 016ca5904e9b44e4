//! Settings store: user settings file and resource-directory loading.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::settings::SharedSettings;

/// Failure modes of the resource-directory settings store.
#[derive(Debug, Error)]
pub enum SettingsStoreError {
    /// The directory exists but holds no settings file.
    #[error("no settings file found in {}", dir.display())]
    NotFound { dir: PathBuf },
    /// More than one candidate settings file; the store cannot pick one.
    #[error("expected exactly one settings file in {}, found {}", dir.display(), found.len())]
    Ambiguous { dir: PathBuf, found: Vec<PathBuf> },
    #[error("failed to read settings store")]
    Io(#[from] std::io::Error),
    /// The settings file exists but is not valid TOML for [`SharedSettings`].
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("playfab")?;
    Ok(xdg_dirs.place_config_file("settings.toml")?)
}

/// Load the user settings file, creating a default one if none exists.
pub fn load_or_init() -> Result<SharedSettings> {
    let path = config_path()?;
    if !path.exists() {
        let default_settings = SharedSettings::default();
        let toml = toml::to_string_pretty(&default_settings)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default settings at {}", path.display());
        return Ok(default_settings);
    }

    let data = fs::read_to_string(&path)?;
    let settings: SharedSettings = toml::from_str(&data)?;
    Ok(settings)
}

/// Load shared settings from a resources directory shipped with the game.
///
/// The directory must contain exactly one `*.toml` settings file; zero or
/// multiple candidates is a configuration error the SDK refuses to guess
/// its way around.
pub fn load_from_resources(dir: &Path) -> Result<SharedSettings, SettingsStoreError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            found.push(path);
        }
    }
    found.sort();

    match found.len() {
        0 => Err(SettingsStoreError::NotFound {
            dir: dir.to_path_buf(),
        }),
        1 => {
            let path = found.remove(0);
            let data = fs::read_to_string(&path)?;
            toml::from_str(&data).map_err(|source| SettingsStoreError::Parse { path, source })
        }
        _ => Err(SettingsStoreError::Ambiguous {
            dir: dir.to_path_buf(),
            found,
        }),
    }
}
