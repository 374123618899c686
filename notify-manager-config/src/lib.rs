use std::{fmt, fs, path::Path};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "NOTIFY_MANAGER_CONFIG";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Viewports at most this wide (logical pixels) are treated as mobile.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
    /// The maximum number of notifications visible at once in mobile mode.
    #[serde(default = "default_max_mobile_visible")]
    pub max_mobile_visible: u32,
    /// Auto-dismiss timer in milliseconds.
    #[serde(default = "default_timer_ms")]
    pub timer_ms: u32,
    #[serde(default = "default_true")]
    pub allow_dismiss: bool,
    #[serde(default = "default_true")]
    pub newest_on_top: bool,
    #[serde(default = "default_enter_animation")]
    pub enter_animation: String,
    #[serde(default = "default_exit_animation")]
    pub exit_animation: String,
    /// Popup template; the built-in bootstrap-style template when unset.
    #[serde(default)]
    pub template: Option<String>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            max_mobile_visible: default_max_mobile_visible(),
            timer_ms: default_timer_ms(),
            allow_dismiss: default_true(),
            newest_on_top: default_true(),
            enter_animation: default_enter_animation(),
            exit_animation: default_exit_animation(),
            template: None,
        }
    }
}

impl NotificationsConfig {
    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `NOTIFY_MANAGER_CONFIG` if set.
    ///
    /// Returns `Ok(None)` when the variable is not set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)).map(Some),
            None => Ok(None),
        }
    }

    /// Mobile cap clamped to at least one, so a new notification always fits.
    pub fn effective_max_mobile_visible(&self) -> usize {
        self.max_mobile_visible.max(1) as usize
    }
}

/// Config loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file could not be read
    Io(String),
    /// Config file is not valid JSON for this schema
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value helpers for serde
const fn default_true() -> bool {
    true
}

const fn default_mobile_breakpoint() -> u32 {
    768
}

const fn default_max_mobile_visible() -> u32 {
    2
}

const fn default_timer_ms() -> u32 {
    3000
}

fn default_enter_animation() -> String {
    "animated bounceInDown".to_string()
}

fn default_exit_animation() -> String {
    "animated bounceOutUp".to_string()
}
