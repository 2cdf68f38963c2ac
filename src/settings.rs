//! Game settings and preferences
//!
//! Read from a JSON file natively and from LocalStorage in the browser;
//! edited by hand, never written by the game.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Effects ===
    /// Camera shake on crash/landing
    pub screen_shake: bool,
    /// Colored flash on crash/landing
    pub screen_flash: bool,
    /// Wind streaks while under canopy
    pub wind_streaks: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, flashes or streaks)
    pub reduced_motion: bool,

    // === Storage ===
    /// High-score file used by the native build
    pub high_score_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            screen_flash: true,
            wind_streaks: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            reduced_motion: false,

            high_score_path: "high_scores.json".to_string(),
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective screen flash (respects reduced_motion)
    pub fn effective_screen_flash(&self) -> bool {
        self.screen_flash && !self.reduced_motion
    }

    /// Effective wind streaks (respects reduced_motion)
    pub fn effective_wind_streaks(&self) -> bool {
        self.wind_streaks && !self.reduced_motion
    }

    /// Volume applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Settings file / LocalStorage key
    const STORAGE_KEY: &'static str = "parachute_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from `parachute_settings.json` in the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(&Self::native_path())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn native_path() -> std::path::PathBuf {
        std::path::PathBuf::from(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Load from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
