//! Local settings with named profiles.
//!
//! Everything the CLI remembers between runs lives in one JSON file under
//! the user config directory (`~/.config/snaptrade/settings.json` on
//! Linux): per-profile API credentials, the registered SnapTrade user, the
//! last selected account, and an optional base URL override. The core
//! library never touches this module; settings are loaded once at startup
//! and passed down explicitly.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapTradeError};
use crate::types::accounts::UserAuth;

const CONFIG_DIR_NAME: &str = "snaptrade";
const SETTINGS_FILE_NAME: &str = "settings.json";
const DEFAULT_PROFILE: &str = "default";

/// One named profile: credentials and local preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

impl ProfileData {
    /// The stored user credentials, when both halves are present.
    pub fn user_auth(&self) -> Option<UserAuth> {
        Some(UserAuth {
            user_id: self.user_id.clone()?,
            user_secret: self.user_secret.clone()?,
        })
    }
}

/// The settings file: an active profile name plus the profile map.
///
/// `BTreeMap` keeps the on-disk ordering stable across rewrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_profile: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, ProfileData>,
}

/// Settings plus the path they were loaded from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from the default location, or start empty when the
    /// file does not exist yet.
    pub fn load() -> Result<Self> {
        let path = default_settings_path()?;
        Self::load_from(path)
    }

    /// Load settings from an explicit path. Missing file means empty
    /// settings; a corrupt file is an error rather than a silent reset.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let settings = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                SnapTradeError::Settings(format!("cannot parse {}: {e}", path.display()))
            })?
        } else {
            Settings::default()
        };
        Ok(Self { path, settings })
    }

    /// Where this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist the current settings, creating the config dir if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Name of the active profile.
    pub fn active_profile_name(&self) -> &str {
        self.settings.active_profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// All profile names, with the default always present.
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.settings.profiles.keys().cloned().collect();
        if !names.iter().any(|n| n == DEFAULT_PROFILE) {
            names.insert(0, DEFAULT_PROFILE.to_owned());
        }
        names
    }

    /// The active profile's data (empty if never written).
    pub fn profile(&self) -> ProfileData {
        self.settings
            .profiles
            .get(self.active_profile_name())
            .cloned()
            .unwrap_or_default()
    }

    /// Merge updates into the active profile and save.
    pub fn update_profile(&mut self, update: impl FnOnce(&mut ProfileData)) -> Result<()> {
        let name = self.active_profile_name().to_owned();
        let entry = self.settings.profiles.entry(name).or_default();
        update(entry);
        self.save()
    }

    /// Switch the active profile, creating it if necessary.
    pub fn set_active_profile(&mut self, name: &str) -> Result<()> {
        self.settings.profiles.entry(name.to_owned()).or_default();
        self.settings.active_profile = Some(name.to_owned());
        self.save()
    }

    /// Delete a profile. When the active one goes, fall back to whatever
    /// remains (or the default).
    pub fn delete_profile(&mut self, name: &str) -> Result<()> {
        self.settings.profiles.remove(name);
        if self.active_profile_name() == name {
            let fallback = self
                .settings
                .profiles
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROFILE.to_owned());
            self.settings.active_profile = Some(fallback);
        }
        self.save()
    }
}

/// `$XDG_CONFIG_HOME/snaptrade/settings.json` (or the platform equivalent).
fn default_settings_path() -> Result<PathBuf> {
    let config_root = dirs::config_dir()
        .ok_or_else(|| SnapTradeError::Settings("cannot locate a config directory".into()))?;
    Ok(config_root.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}
