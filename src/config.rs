//! Application configuration.
//!
//! The defaults live in `assets/config.json`, which is compiled into the
//! binary; there is no config file on disk to read or write.

use floem::{kurbo::Size, window::WindowConfig};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    orientation::OrientationSource,
    size_class::Breakpoints,
};

pub const DEFAULT_CONFIG: &str = include_str!("../assets/config.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("Adaptive Layouts"),
            width: 420.0,
            height: 760.0,
        }
    }
}

impl WindowSettings {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub breakpoints: Breakpoints,
    pub orientation: OrientationSource,
    pub window: WindowSettings,
}

impl AppConfig {
    /// The configuration shipped with the application.
    pub fn bundled() -> Result<Self> {
        Self::from_json(DEFAULT_CONFIG)
    }

    /// Parses and validates a JSON document. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.breakpoints.validate()?;
        let WindowSettings { width, height, .. } = self.window;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::WindowSize { width, height }.into());
        }
        Ok(())
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::default()
            .size(self.window.size())
            .title(self.window.title.clone())
    }
}
