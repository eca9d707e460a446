use serde::{
    Deserialize,
    Serialize,
};

use crate::core::fetcher::DEFAULT_BASE_URL;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    /// Origin of the rendered site; translations are fetched relative to it.
    pub base_url: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), dark_mode: true }
    }
}
