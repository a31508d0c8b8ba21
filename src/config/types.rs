use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub appearance: AppearanceConfig,
}

/// Where the summarization service lives and how long we wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the service (e.g. "http://localhost:5000").
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Connection establishment timeout in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

/// Appearance settings, independent of the workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Persisted theme choice. `None` means follow the terminal's ambient
    /// background.
    pub dark_mode: Option<bool>,
}

impl Config {
    /// The theme to start with: the persisted preference when present,
    /// ambient detection otherwise.
    pub fn effective_dark_mode(&self) -> bool {
        self.appearance.dark_mode.unwrap_or_else(ambient_prefers_dark)
    }
}

/// Best-effort ambient detection via the `COLORFGBG` convention
/// ("fg;bg", background colors 0-6 and 8 are dark). Unknown ⇒ dark, the
/// common terminal default.
fn ambient_prefers_dark() -> bool {
    let Ok(value) = std::env::var("COLORFGBG") else {
        return true;
    };
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg < 7 || bg == 8)
        .unwrap_or(true)
}
