//! Reward settings
//!
//! Persisted in LocalStorage on web; native builds use defaults or JSON.

use serde::{Deserialize, Serialize};

use crate::error::RewardError;

/// Reward preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardSettings {
    /// Let score-driven rolls draw from the daily packs as well as authored ones
    pub include_daily_packs: bool,
    /// Fixed roller seed for reproducible rewards (None = random per session)
    pub seed: Option<u64>,
    /// Show hidden tiers in rarity legends
    pub reveal_hidden_tiers: bool,
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            include_daily_packs: false,
            seed: None,
            reveal_hidden_tiers: false,
        }
    }
}

impl RewardSettings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "arcade_rewards_settings";

    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, RewardError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RewardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded reward settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored reward settings: {}", err),
                }
            }
        }

        log::info!("Using default reward settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Reward settings saved");
                }
                Err(err) => log::warn!("Could not save reward settings: {}", err),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_design() {
        let settings = RewardSettings::default();
        assert!(!settings.include_daily_packs);
        assert_eq!(settings.seed, None);
        assert!(!settings.reveal_hidden_tiers);
        assert_eq!(RewardSettings::load(), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = RewardSettings::from_json(r#"{"seed": 42}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.include_daily_packs);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = RewardSettings {
            include_daily_packs: true,
            seed: Some(9),
            reveal_hidden_tiers: true,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(RewardSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_error() {
        let err = RewardSettings::from_json("{not json").unwrap_err();
        assert!(matches!(err, RewardError::Settings(_)));
    }
}
