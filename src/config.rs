use bevy::prelude::*;
use serde::Deserialize;

use crate::die::DiceRng;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        // Loaded at build time (not in a startup system) because DiceRng is
        // seeded from it and observers may fire as soon as Startup runs.
        // LogPlugin is built before us, so the load messages still show up.
        let config = storage::load().unwrap_or_default();
        app.insert_resource(DiceRng::from_config(&config))
            .insert_resource(config);
    }
}

/// Tunables for the tray, read from `dice_tray.ron` if one exists.
///
/// Every field has #[serde(default)], so a file only needs the values it
/// wants to change. An example file:
///
/// ```ron
/// (
///     double_click_secs: 0.3,
///     rng_seed: Some(42),
/// )
/// ```
///
/// Nothing is ever written back; dice don't survive a restart.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
pub struct TrayConfig {
    /// Two presses on the same die closer together than this dismiss it.
    #[serde(default = "default_double_click_secs")]
    pub double_click_secs: f64,
    /// Width and height of each die face.
    #[serde(default = "default_die_size_px")]
    pub die_size_px: f32,
    /// Fixed seed for the dice RNG. None = seed from the OS.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_double_click_secs() -> f64 {
    0.4
}

fn default_die_size_px() -> f32 {
    64.0
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            double_click_secs: default_double_click_secs(),
            die_size_px: default_die_size_px(),
            rng_seed: None,
        }
    }
}

/// Parses a config file's contents. Kept separate from the file access so
/// it can be tested without touching disk.
pub fn parse_config(contents: &str) -> Result<TrayConfig, ron::error::SpannedError> {
    ron::from_str::<TrayConfig>(contents)
}

// =============================================================================
// Storage backend: Native (macOS, Linux, Windows)
//
// Looks for dice_tray.ron next to where the app was started, then in the
// per-user config directory (found with `dirs`).
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod storage {
    use super::{parse_config, TrayConfig};
    use bevy::prelude::*;
    use std::path::PathBuf;

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("dice_tray.ron")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("dice-tray").join("config.ron"));
        }
        paths
    }

    pub fn load() -> Option<TrayConfig> {
        let Some(path) = candidate_paths().into_iter().find(|p| p.exists()) else {
            info!("No dice_tray.ron found. Using default config.");
            return None;
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}: {:?}", path, config);
                    Some(config)
                }
                Err(e) => {
                    error!("Failed to parse {:?}: {}. Using defaults.", path, e);
                    None
                }
            },
            Err(e) => {
                error!("Failed to read {:?}: {}. Using defaults.", path, e);
                None
            }
        }
    }
}

// =============================================================================
// Storage backend: WASM (browser)
//
// No filesystem in the browser, and the tray doesn't persist anything, so
// the web build always runs on defaults.
// =============================================================================

#[cfg(target_arch = "wasm32")]
mod storage {
    use super::TrayConfig;

    pub fn load() -> Option<TrayConfig> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("()").unwrap(), TrayConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("(rng_seed: Some(7))").unwrap();
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.double_click_secs, 0.4);
        assert_eq!(config.die_size_px, 64.0);
    }

    #[test]
    fn full_file() {
        let config =
            parse_config("(double_click_secs: 0.25, die_size_px: 48.0, rng_seed: None)").unwrap();
        assert_eq!(config.double_click_secs, 0.25);
        assert_eq!(config.die_size_px, 48.0);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_config("not ron at all {").is_err());
    }
}
