//! # UI Configuration
//!
//! Tunables of the view layer: breakpoints, zoom domain, timer periods,
//! default theme and the favorites pseudo-category name.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     POS_UI_DEFAULT_THEME=dark                                          │
//! │     POS_UI_ORDER_PANEL_BREAKPOINT=768                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pos-terminal/ui.toml (Linux)                             │
//! │     ~/Library/Application Support/com.pos-terminal.terminal/ui.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     768 / 992 breakpoints, zoom 12..=20 from 16, 10 s clock, 800 ms    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # ui.toml
//! [layout]
//! order_panel_breakpoint_px = 768
//! collapse_breakpoint_px = 992
//!
//! [zoom]
//! min_px = 12
//! max_px = 20
//! default_px = 16
//!
//! [timers]
//! clock_tick_secs = 10
//! cart_animation_ms = 800
//!
//! [theme]
//! default = "light"
//!
//! [categories]
//! favorites = "favorites"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use pos_view_core::{
    Breakpoints, Theme, ZoomBounds, CART_ANIMATION_MS, CLOCK_TICK_SECS,
    COLLAPSE_BREAKPOINT_PX, DEFAULT_ZOOM_PX, FAVORITES_CATEGORY, MAX_ZOOM_PX, MIN_ZOOM_PX,
    ORDER_PANEL_BREAKPOINT_PX,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Sections
// =============================================================================

/// Responsive breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_order_panel_breakpoint")]
    pub order_panel_breakpoint_px: u32,

    #[serde(default = "default_collapse_breakpoint")]
    pub collapse_breakpoint_px: u32,
}

fn default_order_panel_breakpoint() -> u32 {
    ORDER_PANEL_BREAKPOINT_PX
}

fn default_collapse_breakpoint() -> u32 {
    COLLAPSE_BREAKPOINT_PX
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            order_panel_breakpoint_px: default_order_panel_breakpoint(),
            collapse_breakpoint_px: default_collapse_breakpoint(),
        }
    }
}

/// Zoom domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomSettings {
    #[serde(default = "default_min_zoom")]
    pub min_px: u32,

    #[serde(default = "default_max_zoom")]
    pub max_px: u32,

    #[serde(default = "default_zoom")]
    pub default_px: u32,
}

fn default_min_zoom() -> u32 {
    MIN_ZOOM_PX
}
fn default_max_zoom() -> u32 {
    MAX_ZOOM_PX
}
fn default_zoom() -> u32 {
    DEFAULT_ZOOM_PX
}

impl Default for ZoomSettings {
    fn default() -> Self {
        ZoomSettings {
            min_px: default_min_zoom(),
            max_px: default_max_zoom(),
            default_px: default_zoom(),
        }
    }
}

/// Timer periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Period of the coarse "now" clock (seconds).
    #[serde(default = "default_clock_tick")]
    pub clock_tick_secs: u64,

    /// Length of the cart-updated badge animation (milliseconds).
    #[serde(default = "default_cart_animation")]
    pub cart_animation_ms: u64,
}

fn default_clock_tick() -> u64 {
    CLOCK_TICK_SECS
}
fn default_cart_animation() -> u64 {
    CART_ANIMATION_MS
}

impl Default for TimerSettings {
    fn default() -> Self {
        TimerSettings {
            clock_tick_secs: default_clock_tick(),
            cart_animation_ms: default_cart_animation(),
        }
    }
}

/// Theme fallback used while the store has no theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub default: Theme,
}

/// Category naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Name of the favorites pseudo-category.
    #[serde(default = "default_favorites")]
    pub favorites: String,
}

fn default_favorites() -> String {
    FAVORITES_CATEGORY.to_string()
}

impl Default for CategorySettings {
    fn default() -> Self {
        CategorySettings {
            favorites: default_favorites(),
        }
    }
}

// =============================================================================
// Main UI Configuration
// =============================================================================

/// Complete view-layer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub zoom: ZoomSettings,

    #[serde(default)]
    pub timers: TimerSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub categories: CategorySettings,
}

impl UiConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (ui.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading UI config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "UI config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load UI config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "UI config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let zoom = &self.zoom;
        if zoom.min_px == 0 || zoom.min_px > zoom.max_px {
            return Err(ConfigError::Invalid(format!(
                "zoom range [{}, {}] is empty or starts at 0",
                zoom.min_px, zoom.max_px
            )));
        }

        if !(zoom.min_px..=zoom.max_px).contains(&zoom.default_px) {
            return Err(ConfigError::Invalid(format!(
                "default zoom {} lies outside [{}, {}]",
                zoom.default_px, zoom.min_px, zoom.max_px
            )));
        }

        if self.timers.clock_tick_secs == 0 {
            return Err(ConfigError::Invalid(
                "clock_tick_secs must be greater than 0".into(),
            ));
        }

        if self.timers.cart_animation_ms == 0 {
            return Err(ConfigError::Invalid(
                "cart_animation_ms must be greater than 0".into(),
            ));
        }

        if self.categories.favorites.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "favorites category name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(theme) = std::env::var("POS_UI_DEFAULT_THEME") {
            match theme.parse() {
                Ok(parsed) => {
                    debug!(theme = %theme, "Overriding default theme from environment");
                    self.theme.default = parsed;
                }
                Err(e) => warn!(%e, "Ignoring POS_UI_DEFAULT_THEME"),
            }
        }

        if let Some(px) = env_number("POS_UI_ORDER_PANEL_BREAKPOINT") {
            self.layout.order_panel_breakpoint_px = px;
        }

        if let Some(px) = env_number("POS_UI_COLLAPSE_BREAKPOINT") {
            self.layout.collapse_breakpoint_px = px;
        }

        if let Some(secs) = env_number("POS_UI_CLOCK_TICK_SECS") {
            self.timers.clock_tick_secs = secs;
        }

        if let Some(ms) = env_number("POS_UI_CART_ANIMATION_MS") {
            self.timers.cart_animation_ms = ms;
        }

        if let Ok(name) = std::env::var("POS_UI_FAVORITES_CATEGORY") {
            self.categories.favorites = name;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pos-terminal", "terminal")
            .map(|dirs| dirs.config_dir().join("ui.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            order_panel_px: self.layout.order_panel_breakpoint_px,
            collapse_px: self.layout.collapse_breakpoint_px,
        }
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        ZoomBounds {
            min_px: self.zoom.min_px,
            max_px: self.zoom.max_px,
            default_px: self.zoom.default_px,
        }
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_secs(self.timers.clock_tick_secs)
    }

    pub fn cart_animation(&self) -> Duration {
        Duration::from_millis(self.timers.cart_animation_ms)
    }

    pub fn favorites(&self) -> &str {
        &self.categories.favorites
    }

    pub fn default_theme(&self) -> Theme {
        self.theme.default
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => {
            debug!(key, value = %raw, "Overriding UI config from environment");
            Some(value)
        }
        Err(_) => {
            warn!(key, value = %raw, "Ignoring non-numeric environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.breakpoints(), Breakpoints::default());
        assert_eq!(config.zoom_bounds(), ZoomBounds::default());
        assert_eq!(config.clock_tick(), Duration::from_secs(10));
        assert_eq!(config.cart_animation(), Duration::from_millis(800));
        assert_eq!(config.favorites(), "favorites");
        assert_eq!(config.default_theme(), Theme::Light);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = UiConfig::default();
        config.zoom.default_px = 24;
        assert!(config.validate().is_err());

        config.zoom.default_px = 16;
        config.zoom.min_px = 22;
        assert!(config.validate().is_err());

        config.zoom.min_px = 12;
        config.timers.clock_tick_secs = 0;
        assert!(config.validate().is_err());

        config.timers.clock_tick_secs = 10;
        config.categories.favorites = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: UiConfig = toml::from_str(
            r#"
            [theme]
            default = "high-contrast"

            [timers]
            cart_animation_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme(), Theme::HighContrast);
        assert_eq!(config.cart_animation(), Duration::from_millis(500));
        assert_eq!(config.clock_tick(), Duration::from_secs(10));
        assert_eq!(config.layout, LayoutSettings::default());
    }

    #[test]
    fn test_toml_serialization() {
        let config = UiConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[layout]"));
        assert!(toml_str.contains("[zoom]"));
        assert!(toml_str.contains("default = \"light\""));
    }

    #[test]
    fn test_load_from_explicit_missing_path() {
        let path = std::env::temp_dir().join("pos-view-state-missing-ui.toml");
        let config = UiConfig::load(Some(path)).unwrap();
        assert_eq!(config.zoom, ZoomSettings::default());
    }
}
