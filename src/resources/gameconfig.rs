//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults when the file is
//! missing or malformed.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! target_fps = 60
//!
//! [chat]
//! endpoint = http://localhost:3000/api/chat
//! offline = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:3000/api/chat";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and chat settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second; the nominal tick rate of the whole demo.
    pub target_fps: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Chat service URL the chat thread posts to.
    pub chat_endpoint: String,
    /// Skip the network and always answer from the canned table.
    pub chat_offline: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fullscreen: DEFAULT_FULLSCREEN,
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            chat_offline: false,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration reading from a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed; callers treat that as
    /// "use defaults", never as fatal.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [chat] section
        if let Some(endpoint) = config.get("chat", "endpoint") {
            self.chat_endpoint = endpoint;
        }
        if let Some(offline) = config.getbool("chat", "offline").ok().flatten() {
            self.chat_offline = offline;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fullscreen={}, chat={} (offline={})",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fullscreen,
            self.chat_endpoint,
            self.chat_offline
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.target_fps, 60);
        assert!(!config.fullscreen);
        assert!(!config.chat_offline);
        assert_eq!(config.chat_endpoint, DEFAULT_CHAT_ENDPOINT);
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive the failed load.
        assert_eq!(config.window_width, 1280);
    }
}
