use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "handoff.config.json";

/// Handoff configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Component name used for export file names when none is given
    #[serde(default = "default_component_name")]
    pub component_name: String,

    /// Whether TypeScript output is available (prefer TSX over JSX)
    #[serde(default)]
    pub typescript: bool,

    /// Directory exported bundles are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_component_name() -> String {
    "Component".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults when no
    /// config file exists
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            component_name: default_component_name(),
            typescript: false,
            out_dir: default_out_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.component_name, "Component");
        assert_eq!(config.out_dir, "dist");
        assert!(!config.typescript);
    }

    #[test]
    fn test_camel_case_field_names() {
        let config: Config =
            serde_json::from_str(r#"{"componentName": "Card", "outDir": "build"}"#).unwrap();
        assert_eq!(config.component_name, "Card");
        assert_eq!(config.out_dir, "build");
    }
}
