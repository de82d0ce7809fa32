use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Brand colors, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_brand_red")]
    pub brand_red: String,
    #[serde(default = "default_brand_blue")]
    pub brand_blue: String,
}

/// Contact form behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Delay before the acknowledgment panel gives way to a fresh form (default: 5000).
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

/// Terminal loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval of the event loop in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log file path. Falls back to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_brand_red() -> String {
    "#ec1313".to_string()
}

fn default_brand_blue() -> String {
    "#1e3a8a".to_string()
}

fn default_reset_delay_ms() -> u64 {
    5000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            brand_red: default_brand_red(),
            brand_blue: default_brand_blue(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl FormConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
