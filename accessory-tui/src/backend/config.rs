//! API configuration
//!
//! Resolution order: `ACCESSORY_API_URL` environment variable, then the
//! JSON config file under the platform config directory, then a localhost
//! default.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const ENV_BASE_URL: &str = "ACCESSORY_API_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Remote service configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "baseUrl")]
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load the configuration. Missing or unreadable sources fall through
    /// to the next one; this never fails.
    pub fn load() -> Self {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                return Self {
                    base_url: url.trim().to_string(),
                };
            }
        }

        // A missing config file is the common case.
        if let Some(path) = config_file_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match serde_json::from_str::<ConfigFile>(&contents) {
                    Ok(file) => {
                        return Self {
                            base_url: file.base_url,
                        }
                    }
                    Err(e) => log::warn!("ignoring malformed config {}: {e}", path.display()),
                }
            }
        }

        Self::default()
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("accessory-manager").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn config_file_parses_base_url() {
        let file: ConfigFile =
            serde_json::from_str(r#"{"baseUrl":"https://api.example.in"}"#).unwrap();
        assert_eq!(file.base_url, "https://api.example.in");
    }
}
