use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_sheet_name() -> String {
    "Catalog".to_string()
}

/// Gateway settings written by the settings screen and read by the
/// catalog source and the submission gateway. Absence of the config
/// file, or an empty endpoint URL, is the canonical "unconfigured"
/// signal that gates submission and remote catalog loading.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GatewayConfig {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub endpoint_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            endpoint_url: String::new(),
            api_key: String::new(),
            sheet_name: default_sheet_name(),
        }
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "issuedesk", "issue-desk") {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: GatewayConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(GatewayConfig::default())
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "issuedesk", "issue-desk") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let config_path = config_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// Re-read the persisted record, replacing any in-memory edits
    pub fn reload(&mut self) -> Result<(), anyhow::Error> {
        *self = Self::load()?;
        Ok(())
    }

    /// Submission is possible: an endpoint URL is present
    pub fn is_configured(&self) -> bool {
        !self.endpoint_url.trim().is_empty()
    }

    /// Remote catalog reads are possible
    pub fn can_read(&self) -> bool {
        !self.spreadsheet_id.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = GatewayConfig::default();
        assert!(!config.is_configured());
        assert!(!config.can_read());
        assert_eq!(config.sheet_name, "Catalog");
    }

    #[test]
    fn endpoint_url_alone_enables_submission() {
        let config = GatewayConfig {
            endpoint_url: "https://script.example.com/exec".to_string(),
            ..GatewayConfig::default()
        };
        assert!(config.is_configured());
        assert!(!config.can_read());
    }

    #[test]
    fn whitespace_endpoint_is_still_unconfigured() {
        let config = GatewayConfig {
            endpoint_url: "   ".to_string(),
            ..GatewayConfig::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: GatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GatewayConfig::default());
    }
}
